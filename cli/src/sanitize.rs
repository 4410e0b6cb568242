//! Removal of the default version-flag advertisement from rendered text.
//!
//! `tssh` rebinds the parser's built-in version flag away from `-v` at
//! construction, so normally neither pattern is present and both functions
//! return their input. They still run on every rendered text so help never
//! advertises `-v` as the version flag, even if the parser configuration
//! regresses.

/// Usage-line fragment for the default built-in version flag.
pub const VERSION_USAGE_FRAGMENT: &str = " [-v]";

/// Help line for the default built-in version flag, as the parser renders it
/// when `--version` is the widest option.
///
/// The padding is fixed, so with a wider option in the same section the line
/// no longer matches and stays in the help text. Rebinding the version flag is
/// the reliable way to hide it.
pub const VERSION_HELP_LINE: &str = "  -v, --version  show program's version number and exit\n";

/// Strips the version usage fragment and help line, first occurrence of each.
pub fn sanitize_help(text: &str) -> String {
    text.replacen(VERSION_USAGE_FRAGMENT, "", 1)
        .replacen(VERSION_HELP_LINE, "", 1)
}

/// Strips the version usage fragment, first occurrence only.
pub fn sanitize_usage(text: &str) -> String {
    text.replacen(VERSION_USAGE_FRAGMENT, "", 1)
}

#[cfg(test)]
mod tests {
    use tssh_args::{ArgParser, ArgSchema, CommandSchema, FlagSchema, ParserConfig, ValueType};

    use super::*;

    /// A parser still using the default `-v, --version` built-in.
    fn default_parser() -> ArgParser {
        let schema = CommandSchema::new("tssh")
            .with_flag(
                FlagSchema::boolean("quiet", Some("-q"), Some("--quiet"))
                    .with_description("suppress output"),
            )
            .with_arg(ArgSchema::optional("destination", ValueType::String));
        ArgParser::new(ParserConfig::default(), schema).unwrap()
    }

    #[test]
    fn test_patterns_match_default_rendering() {
        let parser = default_parser();
        let help = parser.render_help();
        let usage = parser.render_usage();

        assert!(help.contains(VERSION_USAGE_FRAGMENT), "{help}");
        assert!(help.contains(VERSION_HELP_LINE), "{help}");
        assert!(usage.contains(VERSION_USAGE_FRAGMENT), "{usage}");
    }

    #[test]
    fn test_sanitize_removes_default_advertisement() {
        let parser = default_parser();

        let help = sanitize_help(&parser.render_help());
        assert!(!help.contains(VERSION_USAGE_FRAGMENT));
        assert!(!help.contains("--version"));
        assert!(help.contains("  -q, --quiet"));
        assert!(help.contains("  -h, --help"));

        let usage = sanitize_usage(&parser.render_usage());
        assert_eq!(usage.trim_end(), "Usage: tssh [--quiet] [DESTINATION]");
    }

    #[test]
    fn test_help_line_needs_version_to_be_widest_option() {
        let schema = CommandSchema::new("tssh")
            .with_flag(
                FlagSchema::boolean("forward_agent", Some("-A"), Some("--forward-agent"))
                    .with_description("enable forwarding of the authentication agent"),
            )
            .with_arg(ArgSchema::optional("destination", ValueType::String));
        let parser = ArgParser::new(ParserConfig::default(), schema).unwrap();
        let help = parser.render_help();
        assert!(!help.contains(VERSION_HELP_LINE), "{help}");

        let sanitized = sanitize_help(&help);
        assert!(!sanitized.contains(VERSION_USAGE_FRAGMENT));
        assert!(sanitized.contains("show program's version number and exit"));
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let parser = default_parser();
        let help = parser.render_help();
        let usage = parser.render_usage();

        let once = sanitize_help(&help);
        assert_eq!(sanitize_help(&once), once);
        let once = sanitize_usage(&usage);
        assert_eq!(sanitize_usage(&once), once);
    }

    #[test]
    fn test_sanitize_without_patterns_is_noop() {
        let text = "Usage: tssh [--debug] [-V] [DESTINATION]\n\nOptions:\n  -V, --version  show program's version number and exit\n";
        assert_eq!(sanitize_help(text), text);
        assert_eq!(sanitize_usage(text), text);
        assert_eq!(sanitize_help(""), "");
    }

    #[test]
    fn test_sanitize_touches_first_occurrence_only() {
        assert_eq!(sanitize_usage("a [-v] b [-v]"), "a b [-v]");
    }
}
