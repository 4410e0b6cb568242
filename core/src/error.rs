//! Error types for parser construction and parsing.
//!
//! [`SchemaError`] is a construction-time failure: the descriptor table is
//! malformed, which is a programming mistake. [`SyntaxError`] is a run-time
//! failure caused by user input.

use thiserror::Error;

/// Descriptor table errors, reported by [`crate::validate_schema`] and
/// [`crate::ArgParser::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Command name is empty or whitespace-only.
    #[error("schema command cannot be empty")]
    EmptyCommandName,
    /// A field has an empty or whitespace-only name.
    #[error("field name cannot be empty")]
    EmptyFieldName,
    /// Short flag is not a single dash followed by one character (e.g., `"v"` or `"-vv"`).
    #[error("invalid short flag format: {0}")]
    InvalidShortFlag(String),
    /// Long flag does not start with `--` or is too short.
    #[error("invalid long flag format: {0}")]
    InvalidLongFlag(String),
    /// A flag has neither short nor long form.
    #[error("flag for field {0} must define short or long form")]
    MissingFlagName(String),
    /// Two fields claim the same alias.
    #[error("duplicate flag in scope: {0}")]
    DuplicateFlag(String),
    /// A field claims an alias owned by an active built-in flag.
    #[error("flag {0} collides with a built-in flag")]
    BuiltinCollision(String),
    /// Two fields share a destination name.
    #[error("duplicate field: {0}")]
    DuplicateField(String),
    /// A positional field is declared after a variadic one.
    #[error("positional field {0} follows a variadic positional")]
    PositionalAfterVariadic(String),
    /// A required positional field is declared after an optional one.
    #[error("required positional field {0} follows an optional positional")]
    RequiredAfterOptional(String),
}

/// Classification of a [`SyntaxError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// A flag (or surplus positional) that no field or built-in declares.
    UnknownFlag,
    /// A required positional or flag value was not provided.
    MissingArgument,
    /// A value could not be converted to the field's type.
    InvalidValue,
    /// Anything else the parser rejected.
    Other,
}

/// Malformed user input.
///
/// The message is human-readable and excludes the parser's own usage text,
/// so the caller controls what is printed around it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SyntaxError {
    kind: SyntaxErrorKind,
    message: String,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> SyntaxErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<clap::Error> for SyntaxError {
    fn from(err: clap::Error) -> Self {
        use clap::error::ErrorKind;

        let kind = match err.kind() {
            ErrorKind::UnknownArgument => SyntaxErrorKind::UnknownFlag,
            ErrorKind::MissingRequiredArgument => SyntaxErrorKind::MissingArgument,
            ErrorKind::InvalidValue | ErrorKind::ValueValidation | ErrorKind::InvalidUtf8 => {
                SyntaxErrorKind::InvalidValue
            }
            _ => SyntaxErrorKind::Other,
        };
        Self::new(kind, first_paragraph(&err.render().to_string()))
    }
}

/// Keeps the leading paragraph of a rendered `clap` error, without the
/// `error: ` prefix. Later paragraphs hold tips and usage.
fn first_paragraph(rendered: &str) -> String {
    let paragraph = rendered
        .lines()
        .take_while(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    paragraph
        .strip_prefix("error: ")
        .unwrap_or(&paragraph)
        .trim_end()
        .to_string()
}
