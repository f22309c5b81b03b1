//! probe-layout: generators for synthetic electrode-array layouts
//!
//! This library builds the geometric description of neurophysiology probes:
//! where each contact sits, what shape it has, and an outline around them.
//!
//! # Architecture
//!
//! - **Probe records**: contacts, outline, annotations, translation
//! - **Layout engine**: column grids from pitch and per-column counts
//! - **Generators**: tetrode, linear, multi-column, multi-shank and dummy probes
//!
//! # Modules
//!
//! - [`config`] - Configuration loading and validation
//! - [`error`] - Configuration error types
//! - [`generator`] - Probe generators
//! - [`output`] - JSON output
//! - [`probe`] - Probe record, group, combination and outline

pub mod config;
pub mod error;
pub mod generator;
pub mod output;
pub mod probe;
