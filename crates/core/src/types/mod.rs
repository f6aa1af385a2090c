//! Core types for the contacts dashboard.
//!
//! This module provides type-safe wrappers for contact domain concepts.

pub mod chip;
pub mod contact_type;
pub mod id;

pub use chip::ChipColor;
pub use contact_type::ContactType;
pub use id::{ContactId, ContactIdError};
