//! Reserved-token interception ahead of the generic parser.
//!
//! The generic parser would read `-help` and `-version` as clusters of short
//! flags, and `-v` is claimed here for debugging regardless of where it
//! appears, so these tokens are classified before anything is delegated.

/// Outcome of scanning the raw argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scan {
    /// No immediate action; forward `pass_through` to the parser.
    Continue {
        pass_through: Vec<String>,
        debug_requested: bool,
    },
    /// A help token was seen; later tokens were not examined.
    Help,
    /// A version token was seen; later tokens were not examined.
    Version,
}

impl Scan {
    pub fn debug_requested(&self) -> bool {
        matches!(
            self,
            Scan::Continue {
                debug_requested: true,
                ..
            }
        )
    }
}

/// Classifies raw arguments (without the program name) in a single pass.
///
/// Tokens following an immediate-action token are ignored.
///
/// # Examples
///
/// ```
/// use tssh::prescan::{Scan, classify};
///
/// let scan = classify(["alice@example.com", "-v", "ls"]);
/// assert_eq!(
///     scan,
///     Scan::Continue {
///         pass_through: vec!["alice@example.com".to_string(), "ls".to_string()],
///         debug_requested: true,
///     }
/// );
/// assert_eq!(classify(["-h", "anything", "after"]), Scan::Help);
/// ```
pub fn classify<I, S>(raw_args: I) -> Scan
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut pass_through = Vec::new();
    let mut debug_requested = false;

    for arg in raw_args {
        match arg.as_ref() {
            "-h" | "-help" | "--help" => return Scan::Help,
            "-version" | "--version" => return Scan::Version,
            "-v" => debug_requested = true,
            other => pass_through.push(other.to_string()),
        }
    }

    Scan::Continue {
        pass_through,
        debug_requested,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn continued(pass_through: &[&str], debug_requested: bool) -> Scan {
        Scan::Continue {
            pass_through: pass_through.iter().map(|s| s.to_string()).collect(),
            debug_requested,
        }
    }

    #[test]
    fn test_classify_forwards_ordinary_tokens_in_order() {
        let raw = ["host", "--debug", "-V", "cmd", "-la", "--", "x"];
        assert_eq!(classify(raw), continued(&raw, false));
        assert_eq!(classify(Vec::<String>::new()), continued(&[], false));
    }

    #[test]
    fn test_classify_consumes_debug_short_flag() {
        assert_eq!(
            classify(["-v", "host", "ls", "-la"]),
            continued(&["host", "ls", "-la"], true)
        );
        assert_eq!(
            classify(["host", "ls", "-v"]),
            continued(&["host", "ls"], true)
        );
        assert_eq!(
            classify(["-v", "host", "-v"]),
            continued(&["host"], true)
        );
    }

    #[test]
    fn test_classify_stops_at_help() {
        for token in ["-h", "-help", "--help"] {
            assert_eq!(classify([token, "anything", "after"]), Scan::Help);
            assert_eq!(classify(["host", "-v", token, "--version"]), Scan::Help);
        }
    }

    #[test]
    fn test_classify_stops_at_version() {
        for token in ["-version", "--version"] {
            assert_eq!(classify([token, "-h"]), Scan::Version);
            assert_eq!(classify(["host", token]), Scan::Version);
        }
    }

    #[test]
    fn test_classify_matches_exact_tokens_only() {
        let raw = ["-vv", "--verbose", "-hv", "--help=yes", "-V", "-Version"];
        assert_eq!(classify(raw), continued(&raw, false));
    }

    #[test]
    fn test_debug_requested() {
        assert!(classify(["-v"]).debug_requested());
        assert!(!classify(["host"]).debug_requested());
        assert!(!Scan::Help.debug_requested());
    }
}
