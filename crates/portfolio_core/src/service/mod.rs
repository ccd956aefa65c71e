//! Use-case services.
//!
//! # Responsibility
//! - Turn a catalog source into a ready-to-use view.
//! - Keep presentation layers decoupled from where the catalog lives.

pub mod catalog_service;
