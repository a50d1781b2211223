//! GTIN/EAN-13 validation
//!
//! This module implements the EAN-13 checksum algorithm and the
//! normalization rules that decide whether an arbitrary string represents a
//! valid GTIN code:
//! - [`checksum`] - Weighted-sum check digit computation over 12 digits
//! - [`validator`] - Length gating, zero-padding normalization, and the
//!   final checksum comparison
//!
//! Both functions are pure; the same input always yields the same verdict.

pub mod checksum;
pub mod validator;

// Re-export main entry points for easy access
pub use checksum::check_digit;
pub use validator::is_valid;
