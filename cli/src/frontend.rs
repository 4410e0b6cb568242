//! Classification, delegation and merge, end to end.
//!
//! [`Frontend::run`] turns raw process arguments into an [`Outcome`] without
//! touching the process: printing and exiting are left to the caller through
//! [`Outcome::emit`] and [`Frontend::exit_status`].

use std::io::{self, Write};

use tracing::debug;
use tssh_args::{ArgParser, ParseStatus, SchemaError, SyntaxError};

use crate::args::{SshArgs, parser_config, version_string};
use crate::prescan::{Scan, classify};
use crate::sanitize::{sanitize_help, sanitize_usage};

/// Exit status used for syntax errors unless configured otherwise.
pub const DEFAULT_SYNTAX_ERROR_STATUS: u8 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Printed for `--version`, `-version` and `-V`.
    pub version: String,
    /// Exit status after reporting a syntax error. `0` restores the lenient
    /// behavior where usage errors still exit successfully.
    pub syntax_error_status: u8,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            version: version_string(),
            syntax_error_status: DEFAULT_SYNTAX_ERROR_STATUS,
        }
    }
}

/// Terminal state of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Sanitized help text, for standard error.
    Help(String),
    /// Version line, for standard error.
    Version(String),
    /// Sanitized usage followed by the error, for standard output.
    SyntaxError { usage: String, error: SyntaxError },
    /// Arguments ready for the session layer.
    Parsed(SshArgs),
}

impl Outcome {
    /// Writes the outcome's text to the matching stream. `Parsed` writes nothing.
    pub fn emit(&self, stdout: &mut impl Write, stderr: &mut impl Write) -> io::Result<()> {
        match self {
            Outcome::Help(help) => write_block(stderr, help),
            Outcome::Version(version) => writeln!(stderr, "{version}"),
            Outcome::SyntaxError { usage, error } => {
                write_block(stdout, usage)?;
                writeln!(stdout, "error: {error}")
            }
            Outcome::Parsed(_) => Ok(()),
        }
    }
}

fn write_block(w: &mut impl Write, text: &str) -> io::Result<()> {
    if text.ends_with('\n') {
        write!(w, "{text}")
    } else {
        writeln!(w, "{text}")
    }
}

/// Sets `debug` if either the intercepted `-v` or the parser's own `--debug`
/// asked for it.
pub fn merge(args: &mut SshArgs, debug_requested: bool) {
    args.debug = args.debug || debug_requested;
}

/// The parser for [`SshArgs`] plus the reserved-token handling around it.
#[derive(Debug, Clone)]
pub struct Frontend {
    parser: ArgParser,
    config: FrontendConfig,
}

impl Frontend {
    pub fn new(config: FrontendConfig) -> Result<Self, SchemaError> {
        let parser = ArgParser::for_target::<SshArgs>(parser_config())?;
        Ok(Self { parser, config })
    }

    pub fn help_text(&self) -> String {
        sanitize_help(&self.parser.render_help())
    }

    pub fn usage_text(&self) -> String {
        sanitize_usage(&self.parser.render_usage())
    }

    /// Classifies and resolves raw arguments (without the program name).
    pub fn run<I, S>(&self, raw_args: I) -> Outcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.resolve(classify(raw_args))
    }

    /// Resolves an already classified argument list.
    pub fn resolve(&self, scan: Scan) -> Outcome {
        let (pass_through, debug_requested) = match scan {
            Scan::Help => return Outcome::Help(self.help_text()),
            Scan::Version => return Outcome::Version(self.config.version.clone()),
            Scan::Continue {
                pass_through,
                debug_requested,
            } => (pass_through, debug_requested),
        };
        debug!(tokens = ?pass_through, debug_requested, "Delegating arguments");

        let mut args = SshArgs::default();
        match self.parser.parse(&pass_through, &mut args) {
            Ok(ParseStatus::HelpRequested) => Outcome::Help(self.help_text()),
            Ok(ParseStatus::Complete) if args.show_version => {
                Outcome::Version(self.config.version.clone())
            }
            Ok(ParseStatus::Complete) => {
                merge(&mut args, debug_requested);
                Outcome::Parsed(args)
            }
            Err(error) => Outcome::SyntaxError {
                usage: self.usage_text(),
                error,
            },
        }
    }

    pub fn exit_status(&self, outcome: &Outcome) -> u8 {
        match outcome {
            Outcome::SyntaxError { .. } => self.config.syntax_error_status,
            Outcome::Help(_) | Outcome::Version(_) | Outcome::Parsed(_) => 0,
        }
    }
}
