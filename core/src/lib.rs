//! Schema-driven argument parsing for the tssh front end.
//!
//! This crate wraps `clap` behind an explicit descriptor table:
//!
//! - [`CommandSchema`]: program name, description, named and positional
//!   fields.
//! - [`FlagSchema`]: a named field with short/long aliases and help text.
//! - [`ArgSchema`]: a positional field, optionally variadic.
//! - [`ParserConfig`]: the built-in help and version flags, including the
//!   hook to rebind the version flag's aliases.
//! - [`ArgParser`]: validates the table ([`SchemaError`]), parses tokens into
//!   a [`Bind`] target ([`SyntaxError`]) and renders help/usage text.
//!
//! # Example
//!
//! ```
//! use tssh_args::*;
//!
//! let schema = CommandSchema::new("tssh")
//!     .with_flag(FlagSchema::boolean("debug", Some("-v"), Some("--debug")))
//!     .with_arg(ArgSchema::optional("destination", ValueType::String));
//!
//! // `-v` is the default built-in version flag, so the table is rejected...
//! assert!(ArgParser::new(ParserConfig::default(), schema.clone()).is_err());
//!
//! // ...until the version flag is rebound.
//! let config = ParserConfig::default().with_version_flag("show_version", Some("-V"), Some("--version"));
//! let parser = ArgParser::new(config, schema).unwrap();
//! assert!(parser.render_help().contains("-V, --version"));
//! ```

mod config;
mod error;
mod parser;
mod types;
mod validate;

pub use config::{
    DEFAULT_VERSION_LONG, DEFAULT_VERSION_SHORT, HELP_DESCRIPTION, HELP_FIELD, ParserConfig,
    VERSION_DESCRIPTION, VERSION_FIELD,
};
pub use error::{SchemaError, SyntaxError, SyntaxErrorKind};
pub use parser::{ArgParser, ParseStatus};
pub use types::*;
pub use validate::validate_schema;
