//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Cars, policies, claims and the derived history events
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Orchestration lives in services (see [`crate::application::services`])

pub mod entities;
pub mod repositories;
