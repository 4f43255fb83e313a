//! Training session management screen.

use anyhow::Result;
use clap::Subcommand;

use gymdesk_auth::Role;
use gymdesk_core::{TrainingSessionId, UserId};
use gymdesk_session::SessionManager;

use super::{parse_json, print_json, require_screen};

#[derive(Debug, Subcommand)]
pub enum SessionsCommand {
    /// List all training sessions
    List,
    /// Show one session
    Get { id: TrainingSessionId },
    /// Sessions led by a trainer
    ByTrainer { trainer_id: UserId },
    /// Sessions booked by a member
    ByMember { member_id: UserId },
    /// Sessions with the given status
    ByStatus { status: String },
    /// Sessions of a given type
    ByType { session_type: String },
    /// Upcoming sessions
    Upcoming {
        /// Restrict to a trainer
        #[arg(long)]
        trainer_id: Option<UserId>,
        /// Restrict to a member
        #[arg(long)]
        member_id: Option<UserId>,
    },
    /// Sessions inside a date window
    DateRange {
        start_date: String,
        end_date: String,
        #[arg(long)]
        trainer_id: Option<UserId>,
        #[arg(long)]
        member_id: Option<UserId>,
    },
    /// Completed-session count for a trainer
    CompletedByTrainer { trainer_id: UserId },
    /// Completed-session count for a member
    CompletedByMember { member_id: UserId },
    /// Book a session (member-facing endpoint)
    Book {
        #[arg(long)]
        data: String,
    },
    /// Create from a JSON payload
    Create {
        #[arg(long)]
        data: String,
    },
    /// Update from a JSON payload
    Update {
        id: TrainingSessionId,
        #[arg(long)]
        data: String,
    },
    /// Delete a session
    Delete { id: TrainingSessionId },
    /// Set the status
    Status {
        id: TrainingSessionId,
        status: String,
    },
    /// Move a session to a new date
    Reschedule {
        id: TrainingSessionId,
        new_scheduled_date: String,
    },
}

pub async fn run(manager: &SessionManager, command: SessionsCommand) -> Result<()> {
    require_screen(manager, &[Role::ADMIN, Role::STAFF, Role::TRAINER])?;
    let api = manager.client().training_sessions();

    match command {
        SessionsCommand::List => print_json(&api.list().await?),
        SessionsCommand::Get { id } => print_json(&api.get(id).await?),
        SessionsCommand::ByTrainer { trainer_id } => print_json(&api.by_trainer(trainer_id).await?),
        SessionsCommand::ByMember { member_id } => print_json(&api.by_member(member_id).await?),
        SessionsCommand::ByStatus { status } => print_json(&api.by_status(&status).await?),
        SessionsCommand::ByType { session_type } => print_json(&api.by_type(&session_type).await?),
        SessionsCommand::Upcoming {
            trainer_id,
            member_id,
        } => match (trainer_id, member_id) {
            (Some(trainer_id), _) => print_json(&api.upcoming_by_trainer(trainer_id).await?),
            (None, Some(member_id)) => print_json(&api.upcoming_by_member(member_id).await?),
            (None, None) => print_json(&api.upcoming().await?),
        },
        SessionsCommand::DateRange {
            start_date,
            end_date,
            trainer_id,
            member_id,
        } => match (trainer_id, member_id) {
            (Some(trainer_id), _) => print_json(
                &api.by_trainer_and_date_range(trainer_id, &start_date, &end_date)
                    .await?,
            ),
            (None, Some(member_id)) => print_json(
                &api.by_member_and_date_range(member_id, &start_date, &end_date)
                    .await?,
            ),
            (None, None) => print_json(&api.by_date_range(&start_date, &end_date).await?),
        },
        SessionsCommand::CompletedByTrainer { trainer_id } => {
            print_json(&api.completed_count_by_trainer(trainer_id).await?)
        }
        SessionsCommand::CompletedByMember { member_id } => {
            print_json(&api.completed_count_by_member(member_id).await?)
        }
        SessionsCommand::Book { data } => print_json(&api.book(&parse_json(&data)?).await?),
        SessionsCommand::Create { data } => print_json(&api.create(&parse_json(&data)?).await?),
        SessionsCommand::Update { id, data } => {
            print_json(&api.update(id, &parse_json(&data)?).await?)
        }
        SessionsCommand::Delete { id } => print_json(&api.delete(id).await?),
        SessionsCommand::Status { id, status } => {
            print_json(&api.update_status(id, &status).await?)
        }
        SessionsCommand::Reschedule {
            id,
            new_scheduled_date,
        } => print_json(&api.reschedule(id, &new_scheduled_date).await?),
    }
}
