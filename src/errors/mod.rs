//! Error types and error handling for the front end.
//!
//! This module defines the diagnostics the parser records. It includes:
//!
//! - Error structures carrying the source span of the offending token
//! - Specific error variants for each kind of parse failure
//! - Helpful suggestions for displaying errors to a user

pub mod errors;
