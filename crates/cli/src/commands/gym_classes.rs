//! Gym class management screen.

use anyhow::Result;
use clap::Subcommand;

use gymdesk_auth::Role;
use gymdesk_core::{GymClassId, UserId};
use gymdesk_session::SessionManager;

use super::{parse_json, print_json, require_screen};

#[derive(Debug, Subcommand)]
pub enum ClassesCommand {
    /// List all classes
    List,
    /// Show one class
    Get { id: GymClassId },
    /// Classes of a given type
    ByType { class_type: String },
    /// Classes with the given status
    ByStatus { status: String },
    /// Classes led by a trainer
    ByTrainer { trainer_id: UserId },
    /// Classes at a location
    ByLocation { location: String },
    /// Classes with open spots
    Available,
    /// Classes at capacity
    Full,
    /// Classes inside a time window
    TimeRange { start_time: String, end_time: String },
    /// Classes on a weekday
    ByDay { day: String },
    /// Number of active classes
    ActiveCount,
    /// Search by name
    Search { term: String },
    /// Create from a JSON payload
    Create {
        #[arg(long)]
        data: String,
    },
    /// Update from a JSON payload
    Update {
        id: GymClassId,
        #[arg(long)]
        data: String,
    },
    /// Delete a class
    Delete { id: GymClassId },
    /// Set the status
    Status { id: GymClassId, status: String },
    /// Overwrite the enrollment counter
    SetEnrollment { id: GymClassId, count: i64 },
    /// Bump the enrollment counter
    IncrementEnrollment { id: GymClassId },
    /// Drop the enrollment counter
    DecrementEnrollment { id: GymClassId },
}

pub async fn run(manager: &SessionManager, command: ClassesCommand) -> Result<()> {
    require_screen(manager, &[Role::ADMIN, Role::STAFF])?;
    let api = manager.client().gym_classes();

    match command {
        ClassesCommand::List => print_json(&api.list().await?),
        ClassesCommand::Get { id } => print_json(&api.get(id).await?),
        ClassesCommand::ByType { class_type } => print_json(&api.by_type(&class_type).await?),
        ClassesCommand::ByStatus { status } => print_json(&api.by_status(&status).await?),
        ClassesCommand::ByTrainer { trainer_id } => print_json(&api.by_trainer(trainer_id).await?),
        ClassesCommand::ByLocation { location } => print_json(&api.by_location(&location).await?),
        ClassesCommand::Available => print_json(&api.available().await?),
        ClassesCommand::Full => print_json(&api.full().await?),
        ClassesCommand::TimeRange {
            start_time,
            end_time,
        } => print_json(&api.by_time_range(&start_time, &end_time).await?),
        ClassesCommand::ByDay { day } => print_json(&api.by_day(&day).await?),
        ClassesCommand::ActiveCount => print_json(&api.active_count().await?),
        ClassesCommand::Search { term } => print_json(&api.search(&term).await?),
        ClassesCommand::Create { data } => print_json(&api.create(&parse_json(&data)?).await?),
        ClassesCommand::Update { id, data } => {
            print_json(&api.update(id, &parse_json(&data)?).await?)
        }
        ClassesCommand::Delete { id } => print_json(&api.delete(id).await?),
        ClassesCommand::Status { id, status } => print_json(&api.update_status(id, &status).await?),
        ClassesCommand::SetEnrollment { id, count } => {
            print_json(&api.update_enrollment(id, count).await?)
        }
        ClassesCommand::IncrementEnrollment { id } => {
            print_json(&api.increment_enrollment(id).await?)
        }
        ClassesCommand::DecrementEnrollment { id } => {
            print_json(&api.decrement_enrollment(id).await?)
        }
    }
}
