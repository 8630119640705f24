//! pocheck - consistency checker for gettext PO catalogs
//!
//! pocheck compares every translation in a PO file with its original and
//! reports likely mistakes: mismatched format specifiers, escape sequences,
//! ellipses, keyboard accelerators and stray whitespace.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, reports, summary table)
//! - `config`: Configuration file loading and parsing
//! - `core`: PO parsing and per-file checking
//! - `issues`: Finding types and reporting
//! - `rules`: Check definitions, selection and evaluation

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
