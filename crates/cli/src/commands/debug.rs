//! Debug harnesses for auth and JWT behavior.
//!
//! Manual checks for backend bring-up. Each uses a throwaway client and
//! never touches the persisted session.

use std::sync::Arc;

use anyhow::{Result, bail};
use chrono::Utc;
use clap::Subcommand;

use gymdesk_auth::{decode_unverified, validate_claims};
use gymdesk_client::{ApiClient, ApiError, SigninRequest};
use gymdesk_core::Config;
use gymdesk_session::{KEY_TOKEN, MemoryStore, SessionStore, StoreCredentials};

#[derive(Debug, Subcommand)]
pub enum DebugCommand {
    /// Sign in, then probe every entity endpoint with and without the token
    Auth {
        #[arg(default_value = "admin")]
        username: String,
        #[arg(default_value = "admin123")]
        password: String,
    },
    /// Sign in and decode the issued token (display only, no verification)
    Jwt {
        #[arg(default_value = "admin")]
        username: String,
        #[arg(default_value = "admin123")]
        password: String,
    },
    /// Check whether the backend answers at all
    Connection,
}

pub async fn run(config: &Config, command: DebugCommand) -> Result<()> {
    match command {
        DebugCommand::Auth { username, password } => debug_auth(config, &username, &password).await,
        DebugCommand::Jwt { username, password } => debug_jwt(config, &username, &password).await,
        DebugCommand::Connection => debug_connection(config).await,
    }
}

async fn signin(config: &Config, username: &str, password: &str) -> Result<String> {
    let client = ApiClient::new(config.api_url.clone());
    let resp = client
        .auth()
        .signin(&SigninRequest {
            username: username.to_string(),
            password: password.to_string(),
        })
        .await?;
    Ok(resp.access_token)
}

async fn debug_auth(config: &Config, username: &str, password: &str) -> Result<()> {
    println!("1. signin as {username}");
    let token = signin(config, username, password).await?;
    let preview: String = token.chars().take(50).collect();
    println!("   token received ({} chars): {preview}...", token.len());

    println!("2. probing endpoints with the token");
    let store = Arc::new(MemoryStore::default());
    store.set(KEY_TOKEN, &token);
    let authed =
        ApiClient::new(config.api_url.clone()).with_credentials(Arc::new(StoreCredentials(store)));

    report("/api/users", authed.users().list().await);
    report("/api/memberships", authed.memberships().list().await);
    report("/api/equipment", authed.equipment().list().await);
    report("/api/gym-classes", authed.gym_classes().list().await);
    report(
        "/api/training-sessions",
        authed.training_sessions().list().await,
    );
    report(
        "/api/class-registrations",
        authed.class_registrations().list().await,
    );
    report("/api/payments", authed.payments().list().await);

    println!("3. probing /api/users without a token (expect a rejection)");
    let bare = ApiClient::new(config.api_url.clone());
    match bare.users().list().await {
        Err(ApiError::Unauthorized) => println!("   rejected as expected"),
        Ok(_) => println!("   NOT rejected: the endpoint is unprotected"),
        Err(e) => println!("   failed differently: {e}"),
    }
    Ok(())
}

fn report(endpoint: &str, result: Result<Vec<serde_json::Value>, ApiError>) {
    match result {
        Ok(items) => println!("   {endpoint}: ok ({} items)", items.len()),
        Err(e) => println!("   {endpoint}: {e}"),
    }
}

async fn debug_jwt(config: &Config, username: &str, password: &str) -> Result<()> {
    let token = signin(config, username, password).await?;
    let decoded = decode_unverified(&token)?;

    println!("header: {}", serde_json::to_string_pretty(&decoded.header)?);
    println!(
        "claims: {}",
        serde_json::to_string_pretty(&decoded.claims)?
    );

    let now = Utc::now();
    if let Some(issued_at) = decoded.claims.issued_at() {
        println!("issued at:  {issued_at}");
    }
    if let Some(expires_at) = decoded.claims.expires_at() {
        println!("expires at: {expires_at}");
        println!("remaining:  {}s", (expires_at - now).num_seconds());
    }
    match validate_claims(&decoded.claims, now) {
        Ok(()) => println!("claim window: live"),
        Err(e) => println!("claim window: {e}"),
    }
    Ok(())
}

async fn debug_connection(config: &Config) -> Result<()> {
    // Any HTTP answer, including a 401, proves the backend is up.
    let client = ApiClient::new(config.api_url.clone());
    match client.users().list().await {
        Ok(_) | Err(ApiError::Unauthorized) | Err(ApiError::Api { .. }) => {
            println!("backend reachable at {}", config.api_url);
            Ok(())
        }
        Err(ApiError::Network(e)) => bail!("cannot reach backend at {}: {e}", config.api_url),
        Err(e) => bail!("unexpected response from {}: {e}", config.api_url),
    }
}
