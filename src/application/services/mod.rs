//! Business logic services for the application layer.

pub mod car_service;
pub mod claim_service;
pub mod expiry_scheduler;
pub mod history_service;
pub mod policy_service;

pub use car_service::CarService;
pub use claim_service::ClaimService;
pub use expiry_scheduler::ExpiryScheduler;
pub use history_service::HistoryService;
pub use policy_service::PolicyService;
