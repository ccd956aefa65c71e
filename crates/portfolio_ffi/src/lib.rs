//! Flutter-facing bridge for the portfolio core.

pub mod api;
