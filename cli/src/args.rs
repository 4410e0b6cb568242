//! The `tssh` configuration record and its descriptor table.

use tracing::warn;
use tssh_args::{ArgSchema, Bind, CommandSchema, FieldValue, FlagSchema, ParserConfig, ValueType};

pub const PROGRAM: &str = "tssh";
pub const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = "Simple ssh client with trzsz ( trz / tsz ) support.";

/// Field bound by the rebound built-in version flag.
pub const SHOW_VERSION_FIELD: &str = "show_version";

/// Version line printed for `--version`, e.g. `trzsz ssh 0.1.19`.
pub fn version_string() -> String {
    format!("trzsz ssh {PACKAGE_VERSION}")
}

/// Parser configuration for [`SshArgs`].
///
/// `-v` belongs to `--debug`, so the built-in version flag moves to `-V`.
pub fn parser_config() -> ParserConfig {
    ParserConfig::default().with_version_flag(SHOW_VERSION_FIELD, Some("-V"), Some("--version"))
}

/// Parsed command line handed to the session layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SshArgs {
    pub show_version: bool,
    /// Alias in `~/.ssh/config`, or `[user@]hostname[:port]`
    pub destination: String,
    pub command: String,
    pub arguments: Vec<String>,
    pub debug: bool,
}

impl Bind for SshArgs {
    fn schema() -> CommandSchema {
        CommandSchema::new(PROGRAM)
            .with_description(DESCRIPTION)
            .with_arg(
                ArgSchema::optional("destination", ValueType::String)
                    .with_description("alias in ~/.ssh/config, or [user@]hostname[:port]"),
            )
            .with_arg(
                ArgSchema::optional("command", ValueType::String)
                    .with_description("command to execute instead of a login shell"),
            )
            .with_arg(
                ArgSchema::optional("arguments", ValueType::String)
                    .allow_multiple()
                    .with_description("command arguments separated by spaces"),
            )
            .with_flag(
                FlagSchema::boolean("debug", Some("-v"), Some("--debug"))
                    .with_description("verbose mode for debugging, same as ssh's -vvv"),
            )
    }

    fn bind(&mut self, field: &str, value: FieldValue) {
        match (field, value) {
            (SHOW_VERSION_FIELD, FieldValue::Flag(v)) => self.show_version = v,
            ("destination", FieldValue::Text(v)) => self.destination = v,
            ("command", FieldValue::Text(v)) => self.command = v,
            ("arguments", FieldValue::List(v)) => self.arguments = v,
            ("debug", FieldValue::Flag(v)) => self.debug = v,
            (field, value) => warn!(field, ?value, "Ignoring value for unknown field"),
        }
    }
}
