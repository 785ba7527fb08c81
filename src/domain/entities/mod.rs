//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures. The only logic kept here is the
//! date arithmetic that operates on them directly:
//!
//! - [`policy::is_valid_on`] - whether any policy covers a date
//! - [`history::build_history`] - chronological merge of policies and claims
//!
//! # Design Pattern
//!
//! Persisted entities have a separate `New*` struct used for inserts:
//! `NewInsurancePolicy`, `NewClaim`.

pub mod car;
pub mod claim;
pub mod history;
pub mod policy;

pub use car::{Car, Owner};
pub use claim::{Claim, NewClaim};
pub use history::{HistoryEvent, HistoryEventKind, build_history};
pub use policy::{InsurancePolicy, NewInsurancePolicy, is_valid_on};
