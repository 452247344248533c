//! Physical state of simulated celestial bodies.
//!
//! The library hosts the body data model, closed-form physical relationships,
//! and the step-to-step propagation of shared body state. Constants, the
//! mass-radius correlations, manifest parsing, and export live in member crates
//! and are re-exported here so front-ends depend on a single crate.

pub mod body;
pub mod evolve;
pub mod snapshot;
pub mod system;

pub use body_config as config;
pub use body_core as core;
pub use body_export as export;
pub use body_massradius as massradius;

