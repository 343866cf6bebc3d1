//! Derived metrics for the fundi trust dashboard.
//!
//! The three computational cores ([`trend`], [`regions`], [`metrics`]) are pure
//! functions over already-loaded values. [`import`] reads those values from
//! files and [`dashboard`] assembles them into a single display payload.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod import;
pub mod metrics;
pub mod regions;
pub mod telemetry;
pub mod trend;
