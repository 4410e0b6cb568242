//! Hand-off to the session layer.
//!
//! Opening the remote connection happens outside this crate; the front end's
//! last step is to pass the final arguments on and record what was passed.

use tracing::info;

use crate::args::SshArgs;

pub fn launch(args: &SshArgs) {
    info!(
        destination = %args.destination,
        command = %args.command,
        arguments = ?args.arguments,
        debug = args.debug,
        show_version = args.show_version,
        "Starting session"
    );
}
