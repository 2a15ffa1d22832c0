//! Multi-opening frame sizing, geometry and pricing.
//!
//! The calculators are plain functions over read-only catalogs and can be linked
//! directly; `routes::build_router` exposes the same operations as a JSON API.

pub mod catalog;
pub mod config;
pub mod errors;
pub mod preview;
pub mod pricing;
pub mod routes;
pub mod sizing;
pub mod state;
