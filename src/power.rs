//! Host power actions triggered by long button holds.
//!
//! Actions are fire-and-forget: the command is spawned and never awaited,
//! because the host is about to go down anyway. The caller is responsible for
//! exiting the process immediately after invoking one.

use std::process::Command;

use log::{error, info};

/// A power action confirmed by a button release.
///
/// Produced by the input classifier; executed by the composition root so the
/// classifier stays free of side effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerRequest {
    Reboot,
    Shutdown,
}

impl PowerRequest {
    /// Banner text flashed on the display just before the action fires.
    pub const fn confirm_banner(self) -> &'static str {
        match self {
            Self::Reboot => "Rebooting...",
            Self::Shutdown => "Shutting Down...",
        }
    }

    const fn command(self) -> &'static [&'static str] {
        match self {
            Self::Reboot => &["sudo", "reboot", "now"],
            Self::Shutdown => &["sudo", "shutdown", "now"],
        }
    }
}

/// Spawn the host command for `request` without waiting on it.
///
/// A spawn failure is logged and otherwise ignored; there is nothing useful
/// left to do from this process if the host refuses the request.
pub fn invoke(request: PowerRequest) {
    let argv = request.command();
    match Command::new(argv[0]).args(&argv[1..]).spawn() {
        Ok(_) => info!("issued {request:?} via {argv:?}"),
        Err(e) => error!("failed to issue {request:?}: {e}"),
    }
}
