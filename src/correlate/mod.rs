//! The cross-service correlation engine.
//!
//! - [`classifier`] — normalizes one heterogeneous connector descriptor into a
//!   canonical service match (or no match).
//! - [`scanner`] — applies the classifier to every connector on one asset.
//! - [`propagate`] — walks bot→flow reference edges so containers inherit the
//!   matched services of the flows they trigger.
//! - [`aggregate`] — the entry point: scans all collections, propagates, and
//!   returns the unified list of assets with at least one match.

pub mod aggregate;
pub mod classifier;
pub mod patterns;
pub mod propagate;
pub mod scanner;
