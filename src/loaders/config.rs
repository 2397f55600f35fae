//! YAML maze descriptions.
//!
//! ```yaml
//! width: 10
//! height: 8
//! default_value: open   # or blocked, true, false; defaults to open
//! storage: sparse       # dense1d, dense2d or sparse; defaults to dense1d
//! ```

use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::grid::{Dense1dMaze, Dense2dMaze, Maze, SparseMaze};
use crate::types::{BLOCKED, DEFAULT_VALUE, MazeError, OPEN};

/// Which backend stores the cells.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    #[default]
    Dense1d,
    Dense2d,
    Sparse,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
pub struct MazeConfig {
    pub width: i32,
    pub height: i32,
    #[serde(
        default = "default_cell_value",
        deserialize_with = "deserialize_cell_value"
    )]
    pub default_value: bool,
    #[serde(default)]
    pub storage: StorageKind,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CellValue {
    Bool(bool),
    Named(NamedCell),
}

#[derive(Debug, Copy, Clone, Deserialize)]
#[serde(rename_all = "lowercase")]
enum NamedCell {
    Open,
    Blocked,
}

impl CellValue {
    fn is_open(&self) -> bool {
        match self {
            Self::Bool(value) => *value,
            Self::Named(NamedCell::Open) => OPEN,
            Self::Named(NamedCell::Blocked) => BLOCKED,
        }
    }
}

fn default_cell_value() -> bool {
    DEFAULT_VALUE
}

fn deserialize_cell_value<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    CellValue::deserialize(deserializer).map(|value| value.is_open())
}

impl MazeConfig {
    pub fn new(width: i32, height: i32, default_value: bool, storage: StorageKind) -> Self {
        Self {
            width,
            height,
            default_value,
            storage,
        }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, MazeError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Construct an empty maze with the configured backend.
    pub fn build(&self) -> Result<Box<dyn Maze>, MazeError> {
        build_maze(self)
    }
}

pub fn load_maze_config(yaml_path: impl AsRef<Path>) -> Result<MazeConfig, MazeError> {
    let yaml_path = yaml_path.as_ref();
    let yaml_str = std::fs::read_to_string(yaml_path)?;
    let config = MazeConfig::from_yaml_str(&yaml_str)?;
    debug!("loaded maze config from {}: {config:?}", yaml_path.display());
    Ok(config)
}

pub fn build_maze(config: &MazeConfig) -> Result<Box<dyn Maze>, MazeError> {
    let MazeConfig {
        width,
        height,
        default_value,
        storage,
    } = *config;

    let maze: Box<dyn Maze> = match storage {
        StorageKind::Dense1d => Box::new(Dense1dMaze::new(width, height, default_value)?),
        StorageKind::Dense2d => Box::new(Dense2dMaze::new(width, height, default_value)?),
        StorageKind::Sparse => Box::new(SparseMaze::new(width, height, default_value)?),
    };
    Ok(maze)
}

pub fn load_maze(yaml_path: impl AsRef<Path>) -> Result<Box<dyn Maze>, MazeError> {
    build_maze(&load_maze_config(yaml_path)?)
}
