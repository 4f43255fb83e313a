//! Login, logout, register, whoami.

use anyhow::{Context, Result, bail};
use clap::Args;
use chrono::Utc;

use gymdesk_auth::{decode_unverified, validate_claims};
use gymdesk_client::SignupRequest;
use gymdesk_session::SessionManager;

use super::{print_json, require_screen};

#[derive(Debug, Args)]
pub struct LoginArgs {
    pub username: String,

    /// Password; prompted on stdin when omitted
    #[arg(long)]
    pub password: Option<String>,
}

#[derive(Debug, Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(long)]
    pub username: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    /// Requested role: member, trainer, staff, or admin
    #[arg(long, default_value = "member")]
    pub role: String,
}

pub async fn login(manager: &SessionManager, args: LoginArgs) -> Result<()> {
    let password = match args.password {
        Some(password) => password,
        None => prompt_password()?,
    };

    let session = manager.login(&args.username, &password).await?;

    let role = session
        .profile
        .primary_role()
        .map(|r| r.as_str().to_string())
        .unwrap_or_else(|| "no role".to_string());
    println!("Signed in as {} ({role})", session.profile.username);
    Ok(())
}

fn prompt_password() -> Result<String> {
    eprint!("Password: ");
    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("failed to read password from stdin")?;
    let password = line.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        bail!("password must not be empty");
    }
    Ok(password)
}

pub fn logout(manager: &SessionManager) -> Result<()> {
    manager.logout();
    println!("Signed out");
    Ok(())
}

pub async fn register(manager: &SessionManager, args: RegisterArgs) -> Result<()> {
    let message = manager
        .register(&SignupRequest {
            first_name: args.first_name,
            last_name: args.last_name,
            username: args.username,
            email: args.email,
            password: args.password,
            role: vec![args.role],
        })
        .await?;

    println!("{message}");
    println!("Sign in with `gymdesk login <username>`.");
    Ok(())
}

pub fn whoami(manager: &SessionManager) -> Result<()> {
    require_screen(manager, &[])?;
    let Some(session) = manager.session() else {
        bail!("not signed in; run `gymdesk login <username>` first");
    };

    print_json(&session.profile)?;

    // Claims are shown for orientation only; the backend remains the
    // authority on whether the token is accepted.
    match decode_unverified(&session.token) {
        Ok(decoded) => {
            if let Some(expires_at) = decoded.claims.expires_at() {
                match validate_claims(&decoded.claims, Utc::now()) {
                    Ok(()) => println!("Token expires at {expires_at}"),
                    Err(e) => println!("Token expires at {expires_at} ({e})"),
                }
            }
        }
        Err(e) => println!("Token is not inspectable: {e}"),
    }
    Ok(())
}
