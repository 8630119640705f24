//! Checks applied to PO entries.
//!
//! Pure functions: check definitions are immutable and every evaluation
//! returns its results instead of storing them.
//!
//! ## Module Structure
//!
//! - `registry`: The fixed check table (ids, kinds, item extractors)
//! - `selection`: Choosing the enabled checks (`-a`, `-e`, `-d`)
//! - `engine`: Comparing originals with translations and emitting findings

pub mod engine;
pub mod registry;
pub mod selection;

pub use engine::{check_entries, check_entry};
pub use registry::{CHECKS, CheckDefinition, CheckId, CheckKind};
pub use selection::{CheckSelection, EnabledChecks, SelectionError};
