/// Domain errors.
///
/// Raised when an input lies outside the documented domain of an operation,
/// such as a negative exponent handed to `checked_power`.
pub mod domain_error;

pub use domain_error::DomainError;
