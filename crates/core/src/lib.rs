//! `gymdesk-core` — shared foundation building blocks.
//!
//! This crate contains **pure client-side** primitives (no HTTP, no storage):
//! typed identifiers for backend entities and process configuration.

pub mod config;
pub mod id;

pub use config::Config;
pub use id::{
    ClassRegistrationId, EquipmentId, GymClassId, MembershipId, PaymentId, TrainingSessionId,
    UserId,
};
