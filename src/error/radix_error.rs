use thiserror::Error;

/// A radix name that does not match any supported base.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown radix {name:?}; expected bin, oct or hex.")]
pub struct UnknownRadixError {
    /// The name as it was given.
    pub name: String,
}
