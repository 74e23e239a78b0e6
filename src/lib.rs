//! # cplx
//!
//! cplx is a small complex number algebra written in Rust.
//! A complex value is an ordered `(real, imaginary)` pair of `f64`s. The crate
//! provides accessors and mutators, the usual algebraic operations
//! (conjugate, addition, subtraction, multiplication, real scaling and
//! non-negative integer powers) and the polar-form queries (squared
//! magnitude, magnitude and argument).
//!
//! `Complex::argument` follows the two-argument arctangent, so its range is
//! `(-π, π]` with one exception: a value on the negative real axis whose
//! imaginary part is `-0.0` yields `-π`. Callers relying on the half-open
//! range should normalise the sign of a zero imaginary part first.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// The complex value type and every operation on it.
///
/// This module owns the `Complex` representation together with the pure
/// functions that act on it. Values are plain `Copy` aggregates, so every
/// producing operation returns a fresh value and operands are never modified.
///
/// # Responsibilities
/// - Defines `Complex`, its constants, accessors and mutators.
/// - Implements the algebra: conjugate, add, subtract, multiply, scale, power.
/// - Answers the polar-form queries: squared magnitude, magnitude, argument.
pub mod complex;
/// Error types for the few operations that can reject their input.
///
/// Every algebraic operation is total over its domain. The only failure mode
/// is a caller handing a signed exponent to `checked_power` that does not fit
/// the non-negative exponent range.
pub mod error;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Convert a signed exponent into the unsigned range accepted by `power`
///   without silent wrapping.
pub mod util;
