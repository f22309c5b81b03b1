//! Probe generators.
//!
//! Every generator is a pure function: the same inputs always give the same
//! probe, and nothing is shared between calls.
//!
//! # Generators
//!
//! - [`generate_multi_columns_probe`] - columns of contacts with optional per-column shift
//! - [`generate_linear_probe`] - a single column
//! - [`generate_tetrode`] - four contacts on a circle
//! - [`generate_multi_shank`] - several column probes side by side, merged
//! - [`generate_dummy_probe`] / [`generate_dummy_probe_group`] - fixed test fixtures
//!
//! # Example
//!
//! ```
//! use probe_layout::generator::{generate_multi_columns_probe, ColumnLayout, ContactsPerColumn};
//! use probe_layout::probe::ContactShape;
//!
//! let layout = ColumnLayout {
//!     num_columns: 2,
//!     num_contact_per_column: ContactsPerColumn::Uniform(8),
//!     xpitch: 30.0,
//!     contact_shape: ContactShape::Square { width: 10.0 },
//!     ..ColumnLayout::default()
//! };
//! let probe = generate_multi_columns_probe(&layout).unwrap();
//!
//! assert_eq!(probe.contact_count(), 16);
//! ```

pub mod columns;
pub mod dummy;
pub mod layout;
pub mod shank;
pub mod tetrode;

pub use columns::{generate_linear_probe, generate_multi_columns_probe, ColumnLayout};
pub use dummy::{generate_dummy_probe, generate_dummy_probe_group};
pub use layout::{generate_columns, ContactsPerColumn};
pub use shank::{generate_multi_shank, DEFAULT_NUM_SHANK, DEFAULT_SHANK_PITCH};
pub use tetrode::{generate_tetrode, DEFAULT_TETRODE_RADIUS};
