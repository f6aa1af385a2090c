//! JSON API routes.

pub mod contacts;
