//! `gymdesk` — operations client for the gym-management backend.
//!
//! Each subcommand is the terminal equivalent of one of the web screens:
//! it checks the session against the screen's role requirements, calls the
//! backend through the shared API client, and renders the response.

mod commands;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use gymdesk_core::Config;
use gymdesk_session::{FileStore, SessionManager};

use commands::{
    auth, class_registrations, debug, equipment, gym_classes, memberships, payments,
    training_sessions, users,
};

#[derive(Parser)]
#[command(name = "gymdesk", version, about = "Operations client for the gym management backend")]
struct Cli {
    /// Backend origin (overrides GYMDESK_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and persist the session
    Login(auth::LoginArgs),
    /// Drop the stored session
    Logout,
    /// Create an account (does not sign in)
    Register(auth::RegisterArgs),
    /// Show the current session and its token claims
    Whoami,
    /// User administration
    Users {
        #[command(subcommand)]
        command: users::UsersCommand,
    },
    /// Membership records
    Memberships {
        #[command(subcommand)]
        command: memberships::MembershipsCommand,
    },
    /// Equipment inventory and maintenance
    Equipment {
        #[command(subcommand)]
        command: equipment::EquipmentCommand,
    },
    /// Group classes and enrollment
    Classes {
        #[command(subcommand)]
        command: gym_classes::ClassesCommand,
    },
    /// One-on-one training sessions
    Sessions {
        #[command(subcommand)]
        command: training_sessions::SessionsCommand,
    },
    /// Class registrations and attendance
    Registrations {
        #[command(subcommand)]
        command: class_registrations::RegistrationsCommand,
    },
    /// Payment records and revenue views
    Payments {
        #[command(subcommand)]
        command: payments::PaymentsCommand,
    },
    /// Debug harnesses for auth and connectivity
    Debug {
        #[command(subcommand)]
        command: debug::DebugCommand,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    gymdesk_observability::init();

    let cli = Cli::parse();
    let config = Config::from_env().with_api_url(cli.api_url.clone());

    let store = Arc::new(FileStore::new(&config.data_dir));
    let manager = SessionManager::new(config.api_url.clone(), store);
    manager.restore();

    match cli.command {
        Commands::Login(args) => auth::login(&manager, args).await,
        Commands::Logout => auth::logout(&manager),
        Commands::Register(args) => auth::register(&manager, args).await,
        Commands::Whoami => auth::whoami(&manager),
        Commands::Users { command } => users::run(&manager, command).await,
        Commands::Memberships { command } => memberships::run(&manager, command).await,
        Commands::Equipment { command } => equipment::run(&manager, command).await,
        Commands::Classes { command } => gym_classes::run(&manager, command).await,
        Commands::Sessions { command } => training_sessions::run(&manager, command).await,
        Commands::Registrations { command } => class_registrations::run(&manager, command).await,
        Commands::Payments { command } => payments::run(&manager, command).await,
        Commands::Debug { command } => debug::run(&config, command).await,
    }
}
