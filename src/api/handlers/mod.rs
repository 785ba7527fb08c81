//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod cars;
pub mod claims;
pub mod health;
pub mod history;
pub mod policies;
pub mod validity;

pub use cars::list_cars_handler;
pub use claims::register_claim_handler;
pub use health::health_handler;
pub use history::car_history_handler;
pub use policies::create_policy_handler;
pub use validity::insurance_validity_handler;
