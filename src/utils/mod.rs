//! Utility functions used by the shortening engine.
//!
//! - [`code_generator`] - Short code generation and validation
//! - [`url_validator`] - Validation of URLs submitted for shortening

pub mod code_generator;
pub mod url_validator;

pub use code_generator::{generate_code, is_valid_short_code};
pub use url_validator::is_valid_url;
