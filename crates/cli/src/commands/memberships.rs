//! Membership management screen.

use anyhow::Result;
use clap::Subcommand;

use gymdesk_auth::Role;
use gymdesk_core::{MembershipId, UserId};
use gymdesk_session::SessionManager;

use super::{parse_json, print_json, require_screen};

#[derive(Debug, Subcommand)]
pub enum MembershipsCommand {
    /// List all memberships
    List,
    /// Show one membership
    Get { id: MembershipId },
    /// Memberships belonging to a user
    ByUser { user_id: UserId },
    /// Memberships with the given status
    ByStatus { status: String },
    /// Memberships whose end date falls in a window (ISO dates)
    Expiring {
        start_date: String,
        end_date: String,
    },
    /// Memberships past their end date
    Expired,
    /// Number of active memberships
    ActiveCount,
    /// Whether a user has an active membership
    Check { user_id: UserId },
    /// Create from a JSON payload
    Create {
        #[arg(long)]
        data: String,
    },
    /// Update from a JSON payload
    Update {
        id: MembershipId,
        #[arg(long)]
        data: String,
    },
    /// Delete a membership
    Delete { id: MembershipId },
    /// Set the status
    Status { id: MembershipId, status: String },
    /// Extend a membership to a new end date
    Renew {
        id: MembershipId,
        new_end_date: String,
    },
}

pub async fn run(manager: &SessionManager, command: MembershipsCommand) -> Result<()> {
    require_screen(manager, &[Role::ADMIN, Role::STAFF])?;
    let api = manager.client().memberships();

    match command {
        MembershipsCommand::List => print_json(&api.list().await?),
        MembershipsCommand::Get { id } => print_json(&api.get(id).await?),
        MembershipsCommand::ByUser { user_id } => print_json(&api.by_user(user_id).await?),
        MembershipsCommand::ByStatus { status } => print_json(&api.by_status(&status).await?),
        MembershipsCommand::Expiring {
            start_date,
            end_date,
        } => print_json(&api.expiring(&start_date, &end_date).await?),
        MembershipsCommand::Expired => print_json(&api.expired().await?),
        MembershipsCommand::ActiveCount => print_json(&api.active_count().await?),
        MembershipsCommand::Check { user_id } => {
            print_json(&api.check_user_has_active(user_id).await?)
        }
        MembershipsCommand::Create { data } => print_json(&api.create(&parse_json(&data)?).await?),
        MembershipsCommand::Update { id, data } => {
            print_json(&api.update(id, &parse_json(&data)?).await?)
        }
        MembershipsCommand::Delete { id } => print_json(&api.delete(id).await?),
        MembershipsCommand::Status { id, status } => {
            print_json(&api.update_status(id, &status).await?)
        }
        MembershipsCommand::Renew { id, new_end_date } => {
            print_json(&api.renew(id, &new_end_date).await?)
        }
    }
}
