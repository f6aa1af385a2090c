//! Domain models for the dashboard.

pub mod contact;

pub use contact::DisplayContact;
