//! User administration screen (admin board).

use anyhow::Result;
use clap::Subcommand;

use gymdesk_auth::Role;
use gymdesk_core::UserId;
use gymdesk_session::SessionManager;

use super::{parse_json, print_json, require_screen};

#[derive(Debug, Subcommand)]
pub enum UsersCommand {
    /// List all accounts
    List,
    /// Show one account
    Get { id: UserId },
    /// Update an account from a JSON payload
    Update {
        id: UserId,
        #[arg(long)]
        data: String,
    },
    /// Delete an account
    Delete { id: UserId },
}

pub async fn run(manager: &SessionManager, command: UsersCommand) -> Result<()> {
    require_screen(manager, &[Role::ADMIN])?;
    let api = manager.client().users();

    match command {
        UsersCommand::List => print_json(&api.list().await?),
        UsersCommand::Get { id } => print_json(&api.get(id).await?),
        UsersCommand::Update { id, data } => print_json(&api.update(id, &parse_json(&data)?).await?),
        UsersCommand::Delete { id } => print_json(&api.delete(id).await?),
    }
}
