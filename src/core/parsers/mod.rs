//! File parsers.
//!
//! - `po`: gettext PO catalog parser (line joiner and entry automaton)

pub mod po;
