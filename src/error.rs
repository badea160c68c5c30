use thiserror::Error;

/// Everything that can abort a generation run.
///
/// Nothing is written to disk once one of these is returned; the output file
/// is only touched after the whole header has been assembled.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("struct `{name}` opened at line {line} is never closed")]
    UnterminatedStruct { name: String, line: usize },

    #[error("tagged struct `{name}` at line {line} has no `chain` field")]
    MissingChainField { name: String, line: usize },

    #[error("invalid line pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("failed to render bindings")]
    Render(#[from] std::fmt::Error),
}

pub type Result<T, E = GenerateError> = std::result::Result<T, E>;
