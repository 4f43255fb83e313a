//! Equipment management screen.

use anyhow::Result;
use clap::Subcommand;

use gymdesk_auth::Role;
use gymdesk_core::EquipmentId;
use gymdesk_session::SessionManager;

use super::{parse_json, print_json, require_screen};

#[derive(Debug, Subcommand)]
pub enum EquipmentCommand {
    /// List all equipment
    List,
    /// Show one piece of equipment
    Get { id: EquipmentId },
    /// Equipment of a given type
    ByType { equipment_type: String },
    /// Equipment with the given status
    ByStatus { status: String },
    /// Equipment at a location
    ByLocation { location: String },
    /// Equipment due for maintenance
    NeedingMaintenance,
    /// Equipment whose warranty expires before a date
    WarrantyExpiring { expiry_date: String },
    /// Number of available items
    AvailableCount,
    /// Number of items under maintenance
    MaintenanceCount,
    /// Search by name
    Search { term: String },
    /// Equipment purchased inside a date window
    Purchased {
        start_date: String,
        end_date: String,
    },
    /// Create from a JSON payload
    Create {
        #[arg(long)]
        data: String,
    },
    /// Update from a JSON payload
    Update {
        id: EquipmentId,
        #[arg(long)]
        data: String,
    },
    /// Delete equipment
    Delete { id: EquipmentId },
    /// Set the status
    Status { id: EquipmentId, status: String },
    /// Schedule the next maintenance
    ScheduleMaintenance {
        id: EquipmentId,
        next_maintenance_date: String,
    },
    /// Mark maintenance as done
    CompleteMaintenance { id: EquipmentId },
    /// Set the warranty expiry date
    SetWarranty {
        id: EquipmentId,
        warranty_expiry: String,
    },
}

pub async fn run(manager: &SessionManager, command: EquipmentCommand) -> Result<()> {
    require_screen(manager, &[Role::ADMIN, Role::STAFF])?;
    let api = manager.client().equipment();

    match command {
        EquipmentCommand::List => print_json(&api.list().await?),
        EquipmentCommand::Get { id } => print_json(&api.get(id).await?),
        EquipmentCommand::ByType { equipment_type } => {
            print_json(&api.by_type(&equipment_type).await?)
        }
        EquipmentCommand::ByStatus { status } => print_json(&api.by_status(&status).await?),
        EquipmentCommand::ByLocation { location } => print_json(&api.by_location(&location).await?),
        EquipmentCommand::NeedingMaintenance => print_json(&api.needing_maintenance().await?),
        EquipmentCommand::WarrantyExpiring { expiry_date } => {
            print_json(&api.warranty_expiring(&expiry_date).await?)
        }
        EquipmentCommand::AvailableCount => print_json(&api.available_count().await?),
        EquipmentCommand::MaintenanceCount => print_json(&api.maintenance_count().await?),
        EquipmentCommand::Search { term } => print_json(&api.search(&term).await?),
        EquipmentCommand::Purchased {
            start_date,
            end_date,
        } => print_json(&api.purchased_between(&start_date, &end_date).await?),
        EquipmentCommand::Create { data } => print_json(&api.create(&parse_json(&data)?).await?),
        EquipmentCommand::Update { id, data } => {
            print_json(&api.update(id, &parse_json(&data)?).await?)
        }
        EquipmentCommand::Delete { id } => print_json(&api.delete(id).await?),
        EquipmentCommand::Status { id, status } => {
            print_json(&api.update_status(id, &status).await?)
        }
        EquipmentCommand::ScheduleMaintenance {
            id,
            next_maintenance_date,
        } => print_json(&api.schedule_maintenance(id, &next_maintenance_date).await?),
        EquipmentCommand::CompleteMaintenance { id } => {
            print_json(&api.complete_maintenance(id).await?)
        }
        EquipmentCommand::SetWarranty {
            id,
            warranty_expiry,
        } => print_json(&api.set_warranty_expiry(id, &warranty_expiry).await?),
    }
}
