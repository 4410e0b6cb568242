use std::io::{self, IsTerminal};
use std::process::ExitCode;

use tracing::debug;
use tracing_subscriber::EnvFilter;
use tssh::frontend::{Frontend, FrontendConfig, Outcome};
use tssh::prescan::classify;
use tssh::session;

fn main() -> ExitCode {
    let raw_args = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned());
    let scan = classify(raw_args);
    init_tracing(scan.debug_requested());
    debug!("Overriding the parser's built-in `-v, --version` binding");

    let frontend = match Frontend::new(FrontendConfig::default()) {
        Ok(frontend) => frontend,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(1);
        }
    };

    let outcome = frontend.resolve(scan);
    if let Err(err) = outcome.emit(&mut io::stdout().lock(), &mut io::stderr().lock()) {
        eprintln!("error: {err}");
        return ExitCode::from(1);
    }
    if let Outcome::Parsed(args) = &outcome {
        session::launch(args);
    }

    ExitCode::from(frontend.exit_status(&outcome))
}

fn init_tracing(debug: bool) {
    let default_directive = if debug {
        "tssh=debug,tssh_args=debug"
    } else {
        "tssh=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}
