//! Utility functions for numeric conversions.

pub mod safe_cast;
