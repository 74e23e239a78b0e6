/// Representation, construction, accessors and mutators.
///
/// Defines the `Complex` type and its `ZERO`, `ONE` and `I` constants, along
/// with conversions and the equality, hashing and ordering impls used to
/// compare values exactly.
pub mod core;
/// Algebraic operations.
///
/// Conjugation, addition, subtraction, multiplication, real scaling and
/// integer exponentiation, both as named methods and as operator overloads.
/// Unary negation is provided as `-z` and is distinct from `conjugate`.
pub mod algebra;
/// Polar-form queries.
///
/// Squared magnitude, magnitude and argument (phase angle) of a value.
pub mod polar;
