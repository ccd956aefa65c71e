//! Projects catalog: view state, projections and sources.
//!
//! # Responsibility
//! - Hold the filter/selection state of the projects page.
//! - Turn that state into render-ready snapshots.
//! - Load the item list from a pluggable source.

pub mod projection;
pub mod seed;
pub mod source;
pub mod view;
