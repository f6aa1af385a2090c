//! Contacts Dashboard library.
//!
//! Fetches the contact list from the Holded invoicing API, drops records
//! without an identifier, and renders the rest in a table with colored type
//! chips. Exposed as a library so the router and services can be tested
//! without a running server.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod components;
pub mod config;
pub mod error;
pub mod filters;
pub mod holded;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
