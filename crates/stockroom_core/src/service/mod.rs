//! Core use-case services.
//!
//! # Responsibility
//! - Expose one async facade per entity family to UI callers.
//! - Orchestrate the active-selection cascade across repositories.
//! - Keep callers decoupled from storage details.
//!
//! # Invariants
//! - Services never bypass repository validation or uniqueness checks.
//! - Repository errors reach callers unchanged; nothing is retried.
//! - Service futures complete without suspending; the async signature
//!   keeps the boundary stable for a remote backend.

pub mod backup_service;
pub mod company_service;
pub mod department_service;
pub mod inventory_service;
pub mod item_service;
pub mod preference_service;
pub mod selection_service;
pub mod unit_service;
