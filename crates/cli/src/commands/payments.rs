//! Payment management screen.

use anyhow::Result;
use clap::Subcommand;

use gymdesk_auth::Role;
use gymdesk_core::{PaymentId, UserId};
use gymdesk_session::SessionManager;

use super::{parse_json, print_json, require_screen};

#[derive(Debug, Subcommand)]
pub enum PaymentsCommand {
    /// List all payments
    List,
    /// Show one payment
    Get { id: PaymentId },
    /// Payments of a user
    ByUser {
        user_id: UserId,
        /// Only completed payments
        #[arg(long)]
        completed: bool,
    },
    /// Payments with the given status
    ByStatus { status: String },
    /// Payments of a given type
    ByType { payment_type: String },
    /// Payments made with a method
    ByMethod { method: String },
    /// Payments inside a date window
    DateRange {
        start_date: String,
        end_date: String,
        #[arg(long)]
        user_id: Option<UserId>,
    },
    /// Total paid by a user
    TotalByUser { user_id: UserId },
    /// Revenue inside a date window
    Revenue {
        start_date: String,
        end_date: String,
    },
    /// Number of completed payments
    CompletedCount,
    /// Number of pending payments
    PendingCount,
    /// Payments overdue relative to a date
    Overdue { due_date: String },
    /// Payments at or above an amount
    HighValue { min_amount: f64 },
    /// Create from a JSON payload
    Create {
        #[arg(long)]
        data: String,
    },
    /// Update from a JSON payload
    Update {
        id: PaymentId,
        #[arg(long)]
        data: String,
    },
    /// Delete a payment
    Delete { id: PaymentId },
    /// Set the status
    Status { id: PaymentId, status: String },
    /// Mark a payment as processed
    Process { id: PaymentId },
    /// Refund a payment
    Refund {
        id: PaymentId,
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Cancel a payment
    Cancel { id: PaymentId },
    /// Record a membership payment
    Membership {
        user_id: UserId,
        amount: f64,
        method: String,
    },
    /// Record a class payment
    Class {
        user_id: UserId,
        amount: f64,
        method: String,
    },
    /// Record a training-session payment
    TrainingSession {
        user_id: UserId,
        amount: f64,
        method: String,
    },
}

pub async fn run(manager: &SessionManager, command: PaymentsCommand) -> Result<()> {
    require_screen(manager, &[Role::ADMIN, Role::STAFF])?;
    let api = manager.client().payments();

    match command {
        PaymentsCommand::List => print_json(&api.list().await?),
        PaymentsCommand::Get { id } => print_json(&api.get(id).await?),
        PaymentsCommand::ByUser { user_id, completed } => {
            if completed {
                print_json(&api.completed_by_user(user_id).await?)
            } else {
                print_json(&api.by_user(user_id).await?)
            }
        }
        PaymentsCommand::ByStatus { status } => print_json(&api.by_status(&status).await?),
        PaymentsCommand::ByType { payment_type } => print_json(&api.by_type(&payment_type).await?),
        PaymentsCommand::ByMethod { method } => print_json(&api.by_method(&method).await?),
        PaymentsCommand::DateRange {
            start_date,
            end_date,
            user_id,
        } => match user_id {
            Some(user_id) => print_json(
                &api.by_user_and_date_range(user_id, &start_date, &end_date)
                    .await?,
            ),
            None => print_json(&api.by_date_range(&start_date, &end_date).await?),
        },
        PaymentsCommand::TotalByUser { user_id } => print_json(&api.total_by_user(user_id).await?),
        PaymentsCommand::Revenue {
            start_date,
            end_date,
        } => print_json(&api.revenue_by_date_range(&start_date, &end_date).await?),
        PaymentsCommand::CompletedCount => print_json(&api.completed_count().await?),
        PaymentsCommand::PendingCount => print_json(&api.pending_count().await?),
        PaymentsCommand::Overdue { due_date } => print_json(&api.overdue(&due_date).await?),
        PaymentsCommand::HighValue { min_amount } => print_json(&api.high_value(min_amount).await?),
        PaymentsCommand::Create { data } => print_json(&api.create(&parse_json(&data)?).await?),
        PaymentsCommand::Update { id, data } => {
            print_json(&api.update(id, &parse_json(&data)?).await?)
        }
        PaymentsCommand::Delete { id } => print_json(&api.delete(id).await?),
        PaymentsCommand::Status { id, status } => print_json(&api.update_status(id, &status).await?),
        PaymentsCommand::Process { id } => print_json(&api.process(id).await?),
        PaymentsCommand::Refund { id, notes } => print_json(&api.refund(id, &notes).await?),
        PaymentsCommand::Cancel { id } => print_json(&api.cancel(id).await?),
        PaymentsCommand::Membership {
            user_id,
            amount,
            method,
        } => print_json(&api.create_membership_payment(user_id, amount, &method).await?),
        PaymentsCommand::Class {
            user_id,
            amount,
            method,
        } => print_json(&api.create_class_payment(user_id, amount, &method).await?),
        PaymentsCommand::TrainingSession {
            user_id,
            amount,
            method,
        } => print_json(
            &api.create_training_session_payment(user_id, amount, &method)
                .await?,
        ),
    }
}
