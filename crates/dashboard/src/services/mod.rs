//! Business logic services for the dashboard.
//!
//! # Services
//!
//! - `contacts` - Fetch remote contacts and normalize them for display

pub mod contacts;

pub use contacts::{ContactService, ContactSource, normalize_contacts};
