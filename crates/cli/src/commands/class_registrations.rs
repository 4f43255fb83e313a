//! Class registration management screen.

use anyhow::Result;
use clap::Subcommand;

use gymdesk_auth::Role;
use gymdesk_core::{ClassRegistrationId, GymClassId, UserId};
use gymdesk_session::SessionManager;

use super::{print_json, require_screen};

#[derive(Debug, Subcommand)]
pub enum RegistrationsCommand {
    /// List all registrations
    List,
    /// Show one registration
    Get { id: ClassRegistrationId },
    /// Registrations of a member
    ByMember {
        member_id: UserId,
        /// Restrict to a status
        #[arg(long)]
        status: Option<String>,
    },
    /// Registrations for a class
    ByClass {
        class_id: GymClassId,
        /// Restrict to a status
        #[arg(long)]
        status: Option<String>,
    },
    /// Upcoming registrations
    Upcoming {
        #[arg(long)]
        member_id: Option<UserId>,
    },
    /// Number of registrations for a class
    CountByClass { class_id: GymClassId },
    /// Attended-class count for a member
    AttendedCount { member_id: UserId },
    /// Whether a member is registered for a class
    Check {
        member_id: UserId,
        class_id: GymClassId,
    },
    /// Register a member for a class
    Register {
        member_id: UserId,
        class_id: GymClassId,
    },
    /// Set the status
    Status {
        id: ClassRegistrationId,
        status: String,
    },
    /// Cancel a registration
    Cancel { id: ClassRegistrationId },
    /// Delete a registration
    Delete { id: ClassRegistrationId },
    /// Mark the member as attended
    Attendance { id: ClassRegistrationId },
    /// Mark the member as a no-show
    NoShow { id: ClassRegistrationId },
}

pub async fn run(manager: &SessionManager, command: RegistrationsCommand) -> Result<()> {
    require_screen(manager, &[Role::ADMIN, Role::STAFF, Role::TRAINER])?;
    let api = manager.client().class_registrations();

    match command {
        RegistrationsCommand::List => print_json(&api.list().await?),
        RegistrationsCommand::Get { id } => print_json(&api.get(id).await?),
        RegistrationsCommand::ByMember { member_id, status } => match status {
            Some(status) => print_json(&api.by_member_and_status(member_id, &status).await?),
            None => print_json(&api.by_member(member_id).await?),
        },
        RegistrationsCommand::ByClass { class_id, status } => match status {
            Some(status) => print_json(&api.by_class_and_status(class_id, &status).await?),
            None => print_json(&api.by_class(class_id).await?),
        },
        RegistrationsCommand::Upcoming { member_id } => match member_id {
            Some(member_id) => print_json(&api.upcoming_by_member(member_id).await?),
            None => print_json(&api.upcoming().await?),
        },
        RegistrationsCommand::CountByClass { class_id } => {
            print_json(&api.count_by_class(class_id).await?)
        }
        RegistrationsCommand::AttendedCount { member_id } => {
            print_json(&api.attended_count_by_member(member_id).await?)
        }
        RegistrationsCommand::Check {
            member_id,
            class_id,
        } => print_json(&api.check_member_registered(member_id, class_id).await?),
        RegistrationsCommand::Register {
            member_id,
            class_id,
        } => print_json(&api.register(member_id, class_id).await?),
        RegistrationsCommand::Status { id, status } => {
            print_json(&api.update_status(id, &status).await?)
        }
        RegistrationsCommand::Cancel { id } => print_json(&api.cancel(id).await?),
        RegistrationsCommand::Delete { id } => print_json(&api.delete(id).await?),
        RegistrationsCommand::Attendance { id } => print_json(&api.mark_attendance(id).await?),
        RegistrationsCommand::NoShow { id } => print_json(&api.mark_no_show(id).await?),
    }
}
