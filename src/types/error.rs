use thiserror::Error;

#[derive(Debug, Error)]
pub enum MazeError {
    #[error(
        "invalid maze dimensions: width={width}, height={height}. Both dimensions must be positive"
    )]
    Dimension { width: i32, height: i32 },
    #[error(
        "invalid cell indices: row={row}, col={col}. Valid rows: 0-{}, cols: 0-{}",
        last_index(.height),
        last_index(.width)
    )]
    CellIndexOutOfBounds {
        row: i32,
        col: i32,
        width: u32,
        height: u32,
    },
    #[error("cell sequence exhausted")]
    ExhaustedSequence,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

fn last_index(len: &u32) -> i64 {
    i64::from(*len) - 1
}
