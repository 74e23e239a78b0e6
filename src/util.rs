/// Numeric conversion helpers.
///
/// Functions here convert between integer types without silently wrapping
/// or truncating. All of them return a `Result` that is `Ok` only if the
/// conversion is lossless.
pub mod num;
