use crate::error::DomainError;

/// Safely converts a signed exponent to the `u32` range accepted by
/// [`Complex::power`](crate::complex::core::Complex::power).
///
/// ## Errors
/// Returns `DomainError::NegativeExponent` if `value < 0` and
/// `DomainError::ExponentTooLarge` if `value > u32::MAX`.
///
/// ## Parameters
/// - `value`: The exponent to convert.
///
/// ## Returns
/// - `Ok(u32)`: The converted exponent.
/// - `Err(DomainError)`: If the exponent lies outside `0..=u32::MAX`.
///
/// ## Example
/// ```
/// use cplx::{error::DomainError, util::num::exponent_from_i64};
///
/// assert_eq!(exponent_from_i64(45).unwrap(), 45);
///
/// let err = exponent_from_i64(-1).unwrap_err();
/// assert_eq!(err, DomainError::NegativeExponent { exponent: -1 });
///
/// let err = exponent_from_i64(i64::MAX).unwrap_err();
/// assert_eq!(err, DomainError::ExponentTooLarge { exponent: i64::MAX });
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
#[allow(clippy::cast_lossless)]
pub const fn exponent_from_i64(value: i64) -> Result<u32, DomainError> {
    if value < 0 {
        return Err(DomainError::NegativeExponent { exponent: value });
    }

    if value > u32::MAX as i64 {
        return Err(DomainError::ExponentTooLarge { exponent: value });
    }
    Ok(value as u32)
}
