//! Repository trait definitions for the domain layer.
//!
//! These traits are the persistence contracts the services depend on. They
//! are implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`CarRepository`] - Car lookups
//! - [`PolicyRepository`] - Insurance policy storage and date queries
//! - [`ClaimRepository`] - Claim storage
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod car_repository;
pub mod claim_repository;
pub mod policy_repository;

pub use car_repository::CarRepository;
pub use claim_repository::ClaimRepository;
pub use policy_repository::PolicyRepository;

#[cfg(test)]
pub use car_repository::MockCarRepository;
#[cfg(test)]
pub use claim_repository::MockClaimRepository;
#[cfg(test)]
pub use policy_repository::MockPolicyRepository;
