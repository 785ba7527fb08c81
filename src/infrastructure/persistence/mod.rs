//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! bound parameters and `FromRow` row mapping.
//!
//! # Repositories
//!
//! - [`PgCarRepository`] - Car and owner lookups
//! - [`PgPolicyRepository`] - Insurance policy storage and date queries
//! - [`PgClaimRepository`] - Claim storage

pub mod pg_car_repository;
pub mod pg_claim_repository;
pub mod pg_policy_repository;

pub use pg_car_repository::PgCarRepository;
pub use pg_claim_repository::PgClaimRepository;
pub use pg_policy_repository::PgPolicyRepository;
