use thiserror::Error;

pub type Result<T> = std::result::Result<T, LigandFieldError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LigandFieldError {
    #[error("Unsupported d-electron count {0}: expected a value between 2 and 8")]
    InvalidConfiguration(u8),

    #[error("Parameter {name} must be finite and non-negative, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("Eigenvalue decomposition of the {block} block ({size}x{size}) failed to converge")]
    NumericalFailure { block: &'static str, size: usize },

    #[error("Term {label} is not part of this configuration")]
    UnknownTerm { label: String },

    #[error("The range of `{name}` is based on three values (start, stop, steps), got {len}")]
    InvalidRange { name: String, len: usize },

    #[error("Invalid sweep: {0}")]
    InvalidSweep(String),
}
