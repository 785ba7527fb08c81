//! Helper functions used across the application.
//!
//! - [`dates`] - ISO date parsing and the supported-range check

pub mod dates;
