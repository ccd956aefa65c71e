//! Domain model for the portfolio catalog.
//!
//! # Responsibility
//! - Define the canonical project and skill records shown by the site.
//! - Define the closed category and filter enumerations used by views.
//!
//! # Invariants
//! - Every project is identified by a positive, catalog-unique `ProjectId`.
//! - Category and icon sets are closed; wire names are snake_case.

pub mod filter;
pub mod project;
pub mod skill;
