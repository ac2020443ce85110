//! `petcare-catalog` — the read-only service catalog and its filter/sort engine.
//!
//! Pure, deterministic functions over `&[Service]`; no IO, no shared state.

pub mod engine;
pub mod seed;

pub use engine::{filter_services, service_by_id, sort_services};
pub use seed::seed_services;
