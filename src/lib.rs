//! Fraction Core - exact rational arithmetic over fixed-width integers
//!
//! This crate provides:
//! - A normalized `i32` Fraction value type with operator support
//! - Error types for invalid construction, division by zero and narrowing casts
//! - Optional JavaScript bindings (the `wasm` feature)

pub mod error;
pub mod fraction;
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export main types for convenience
pub use error::FractionError;
pub use fraction::Fraction;

/// Get the version of the fraction-core library
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
