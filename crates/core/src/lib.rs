//! Contacts Dashboard Core - Shared types library.
//!
//! This crate provides the domain types used by the dashboard:
//! - `ContactId` - non-empty identifier of a remote contact
//! - `ContactType` - business relationship category (client, supplier, ...)
//! - `ChipColor` - display color of the type chip in the contacts table
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no
//! templates. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers and enums for contacts

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
