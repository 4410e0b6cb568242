//! Argument front end for `tssh`.
//!
//! Raw arguments go through [`prescan::classify`] first, which intercepts
//! `-h`/`-help`/`--help`, `-version`/`--version` and `-v` before the generic
//! parser from `tssh_args` sees them. [`frontend::Frontend`] delegates the
//! remaining tokens, merges the intercepted debug request and reports an
//! [`frontend::Outcome`]; help and usage text pass through [`sanitize`] on
//! the way out.

pub mod args;
pub mod frontend;
pub mod prescan;
pub mod sanitize;
pub mod session;

pub use args::{SshArgs, version_string};
pub use frontend::{Frontend, FrontendConfig, Outcome};
