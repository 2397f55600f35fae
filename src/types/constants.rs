pub const OPEN: bool = true;
pub const BLOCKED: bool = false;

/// Default cell value used by the `open` constructors and by configs that omit one.
pub const DEFAULT_VALUE: bool = OPEN;
