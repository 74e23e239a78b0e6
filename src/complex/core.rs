use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

use ordered_float::OrderedFloat;

/// `0` as a complex number.
pub const ZERO: Complex = Complex::new(0.0, 0.0);
/// `1` as a complex number, the multiplicative identity.
pub const ONE: Complex = Complex::new(1.0, 0.0);
/// The imaginary unit `i`.
pub const I: Complex = Complex::new(0.0, 1.0);

/// A complex number `real + imag·i` stored as an ordered pair of `f64`s.
///
/// `Complex` has value semantics: it is `Copy`, and copying a value never
/// shares storage with the original. Components are trusted as given; no
/// finiteness checks are made.
#[derive(Debug, Clone, Copy, Default)]
pub struct Complex {
    pub(super) real: f64,
    pub(super) imag: f64,
}

impl Complex {
    /// Constructs a new complex number from its real and imaginary parts.
    ///
    /// # Example
    /// ```
    /// use cplx::complex::core::Complex;
    /// let z = Complex::new(5.0, -1.0);
    /// assert_eq!(z.real(), 5.0);
    /// assert_eq!(z.imag(), -1.0);
    /// ```
    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    /// Returns the real part.
    #[must_use]
    pub const fn real(self) -> f64 {
        self.real
    }

    /// Returns the imaginary part.
    #[must_use]
    pub const fn imag(self) -> f64 {
        self.imag
    }

    /// Overwrites the real part, leaving the imaginary part unchanged.
    ///
    /// # Example
    /// ```
    /// use cplx::complex::core::Complex;
    /// let mut z = Complex::new(1.0, 2.0);
    /// z.set_real(7.0);
    /// assert_eq!(z, Complex::new(7.0, 2.0));
    /// ```
    pub const fn set_real(&mut self, real: f64) {
        self.real = real;
    }

    /// Overwrites the imaginary part, leaving the real part unchanged.
    pub const fn set_imag(&mut self, imag: f64) {
        self.imag = imag;
    }

    /// Sets both components at once.
    ///
    /// The exclusive borrow rules out any observer seeing one component
    /// updated without the other.
    ///
    /// # Example
    /// ```
    /// use cplx::complex::core::Complex;
    /// let mut z = Complex::default();
    /// z.init(3.0, 4.0);
    /// assert_eq!(z.real(), 3.0);
    /// assert_eq!(z.imag(), 4.0);
    /// ```
    pub const fn init(&mut self, real: f64, imag: f64) {
        *self = Self::new(real, imag);
    }

    /// Makes `self` equal to `src` by value.
    ///
    /// `src` is taken by value, so later mutation of either side is never
    /// visible through the other.
    ///
    /// # Example
    /// ```
    /// use cplx::complex::core::Complex;
    /// let src = Complex::new(1.5, -2.5);
    /// let mut dest = Complex::default();
    /// dest.copy(src);
    /// dest.set_real(0.0);
    /// assert_eq!(src, Complex::new(1.5, -2.5));
    /// ```
    pub const fn copy(&mut self, src: Self) {
        *self = src;
    }
}

impl<T> From<T> for Complex where T: Into<f64>
{
    fn from(value: T) -> Self {
        Self { real: value.into(),
               imag: 0.0, }
    }
}

impl From<Complex> for (f64, f64) {
    fn from(value: Complex) -> Self {
        (value.real, value.imag)
    }
}

impl PartialEq for Complex {
    fn eq(&self, other: &Self) -> bool {
        OrderedFloat(self.real) == OrderedFloat(other.real)
        && OrderedFloat(self.imag) == OrderedFloat(other.imag)
    }
}

impl Eq for Complex {}

impl Hash for Complex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        OrderedFloat(self.real).hash(state);
        OrderedFloat(self.imag).hash(state);
    }
}

impl PartialOrd for Complex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Lexicographic: real part first, then imaginary part.
impl Ord for Complex {
    fn cmp(&self, other: &Self) -> Ordering {
        let real_cmp = OrderedFloat(self.real).cmp(&OrderedFloat(other.real));
        if real_cmp == Ordering::Equal {
            OrderedFloat(self.imag).cmp(&OrderedFloat(other.imag))
        } else {
            real_cmp
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{Complex, I, ONE, ZERO};

    #[test]
    fn default_is_zero() {
        assert_eq!(Complex::default(), ZERO);
    }

    #[test]
    fn setters_touch_one_component() {
        let mut z = Complex::new(1.0, 2.0);
        z.set_imag(-9.0);
        assert_eq!((z.real(), z.imag()), (1.0, -9.0));
        z.set_real(4.0);
        assert_eq!((z.real(), z.imag()), (4.0, -9.0));
    }

    #[test]
    fn copy_is_independent_of_source() {
        let mut src = Complex::new(2.0, 3.0);
        let mut dest = ZERO;
        dest.copy(src);
        assert_eq!(dest, src);

        dest.set_imag(100.0);
        assert_eq!(src, Complex::new(2.0, 3.0));
        src.set_real(-1.0);
        assert_eq!(dest, Complex::new(2.0, 100.0));
    }

    #[test]
    fn converts_from_reals_and_into_pairs() {
        assert_eq!(Complex::from(3), Complex::new(3.0, 0.0));
        assert_eq!(Complex::from(2.5_f32), Complex::new(2.5, 0.0));
        assert_eq!(<(f64, f64)>::from(Complex::new(1.0, -1.0)), (1.0, -1.0));
    }

    #[test]
    fn signed_zeros_compare_equal() {
        assert_eq!(Complex::new(-0.0, 0.0), Complex::new(0.0, -0.0));
    }

    #[test]
    fn orders_by_real_then_imaginary() {
        let mut values = vec![I, ONE, ZERO, Complex::new(0.0, -1.0)];
        values.sort();
        assert_eq!(values, vec![Complex::new(0.0, -1.0), ZERO, I, ONE]);
    }

    #[test]
    fn usable_as_set_key() {
        let set: HashSet<Complex> = [ONE, ONE, I].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}
