//! API middleware
//!
//! CORS configuration and request validation utilities.

pub mod cors;
pub mod validation;
