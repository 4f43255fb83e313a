//! Subcommand implementations, one module per screen.

pub mod auth;
pub mod class_registrations;
pub mod debug;
pub mod equipment;
pub mod gym_classes;
pub mod memberships;
pub mod payments;
pub mod training_sessions;
pub mod users;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use serde_json::Value;

use gymdesk_auth::{Access, Role, check_access};
use gymdesk_session::SessionManager;

/// Gate a screen: unauthenticated users are pointed at login,
/// authenticated users with the wrong role are turned away. An empty role
/// set admits any signed-in user.
pub fn require_screen(manager: &SessionManager, required: &[Role]) -> Result<()> {
    match check_access(&manager.state(), required) {
        Access::Granted => Ok(()),
        Access::RedirectToLogin => bail!("not signed in; run `gymdesk login <username>` first"),
        Access::RedirectToHome => bail!("your role does not grant access to this screen"),
    }
}

/// Parse a `--data` payload. Contents are passed to the backend verbatim.
pub fn parse_json(data: &str) -> Result<Value> {
    serde_json::from_str(data).context("payload must be valid JSON")
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
