use thiserror::Error;

/// A positional argument outside the tree's valid index domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// `len` characters starting at `pos` do not fit in a tree of `size` characters.
    #[error("position {pos} (length {len}) out of range for tree of size {size}")]
    OutOfRange { pos: usize, len: usize, size: usize },
}

/// A `Result` whose error is an out-of-range position.
pub type Result<T> = std::result::Result<T, Error>;
