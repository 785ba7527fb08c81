//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization with camelCase
//! field names, and validator for input validation.

pub mod car;
pub mod claim;
pub mod created;
pub mod health;
pub mod history;
pub mod policy;
pub mod validity;
