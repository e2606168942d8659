//! Report renderers for correlation results.
//!
//! - [`terminal`] — colored, tabular output with summary box; respects
//!   `--verbose` / `--quiet`.
//! - [`csv`] — flat evidence rows for migration-planning spreadsheets.

pub mod csv;
pub mod terminal;
