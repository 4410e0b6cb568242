//! Parser configuration: the built-in flags the adapter always provides.
//!
//! Every parser owns a help flag (`-h, --help`) and, unless disabled, a
//! version flag. The version flag's default binding is `-v, --version`;
//! programs that want `-v` for something else rebind it with
//! [`ParserConfig::with_version_flag`] instead of patching rendered help.

use crate::FlagSchema;

/// Field name reported for the built-in help flag.
pub const HELP_FIELD: &str = "help";
/// Default field name bound by the built-in version flag.
pub const VERSION_FIELD: &str = "version";

pub const DEFAULT_VERSION_SHORT: &str = "-v";
pub const DEFAULT_VERSION_LONG: &str = "--version";
pub const VERSION_DESCRIPTION: &str = "show program's version number and exit";
pub const HELP_DESCRIPTION: &str = "display this help and exit";

/// Built-in flag configuration for [`crate::ArgParser`].
///
/// # Examples
///
/// ```
/// use tssh_args::ParserConfig;
///
/// let config = ParserConfig::default();
/// let version = config.version_flag().unwrap();
/// assert_eq!(version.short.as_deref(), Some("-v"));
/// assert_eq!(version.long.as_deref(), Some("--version"));
///
/// let rebound = ParserConfig::default().with_version_flag("show_version", Some("-V"), Some("--version"));
/// let version = rebound.version_flag().unwrap();
/// assert_eq!(version.short.as_deref(), Some("-V"));
/// assert_eq!(version.field, "show_version");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    version_flag: Option<FlagSchema>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            version_flag: Some(
                FlagSchema::boolean(
                    VERSION_FIELD,
                    Some(DEFAULT_VERSION_SHORT),
                    Some(DEFAULT_VERSION_LONG),
                )
                .with_description(VERSION_DESCRIPTION),
            ),
        }
    }
}

impl ParserConfig {
    /// Rebinds the built-in version flag to new aliases and a destination field.
    pub fn with_version_flag(mut self, field: &str, short: Option<&str>, long: Option<&str>) -> Self {
        self.version_flag =
            Some(FlagSchema::boolean(field, short, long).with_description(VERSION_DESCRIPTION));
        self
    }

    /// Drops the built-in version flag entirely.
    pub fn without_version_flag(mut self) -> Self {
        self.version_flag = None;
        self
    }

    pub fn version_flag(&self) -> Option<&FlagSchema> {
        self.version_flag.as_ref()
    }

    pub fn help_flag(&self) -> FlagSchema {
        FlagSchema::boolean(HELP_FIELD, Some("-h"), Some("--help")).with_description(HELP_DESCRIPTION)
    }

    /// All active built-ins, in the order they are rendered: version, then help.
    pub fn builtin_flags(&self) -> Vec<FlagSchema> {
        self.version_flag
            .iter()
            .cloned()
            .chain(std::iter::once(self.help_flag()))
            .collect()
    }
}
