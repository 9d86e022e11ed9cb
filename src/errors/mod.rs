//! Parse diagnostics.
//!
//! Every diagnostic is non-fatal: the parser records it and keeps going.
//! This module defines:
//!
//! - The error structure carrying the source position of the offending token
//! - The error variants with their exact messages
//! - Suggestions attached to some variants

pub mod errors;
