//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers, the admin CLI and the background expiry worker.
//!
//! # Available Services
//!
//! - [`services::car_service::CarService`] - Car listing and the insurance validity check
//! - [`services::policy_service::PolicyService`] - Policy creation
//! - [`services::claim_service::ClaimService`] - Claim registration
//! - [`services::history_service::HistoryService`] - Chronological car history
//! - [`services::expiry_scheduler::ExpiryScheduler`] - Idempotent expired-policy logging
//!
//! [`expiry_worker`] drives the expiry scheduler once a day.

pub mod expiry_worker;
pub mod services;
