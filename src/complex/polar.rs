use super::core::Complex;

impl Complex {
    /// Returns `real² + imag²`.
    ///
    /// # Example
    /// ```
    /// use cplx::complex::core::Complex;
    /// assert_eq!(Complex::new(3.0, -4.0).squared_magnitude(), 25.0);
    /// ```
    #[must_use]
    pub const fn squared_magnitude(self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    /// Returns the magnitude `|z|`, the square root of the squared magnitude.
    ///
    /// # Example
    /// ```
    /// use cplx::complex::core::Complex;
    /// let z = Complex::new(3.0, 4.0);
    /// assert_eq!(z.magnitude(), 5.0);
    /// ```
    #[must_use]
    pub fn magnitude(self) -> f64 {
        self.squared_magnitude().sqrt()
    }

    /// Returns the argument (phase angle) in radians, measured from the
    /// positive real axis.
    ///
    /// Uses the two-argument arctangent, so the quadrant follows the signs of
    /// both components. `(0, 0)` yields `0` and a negative-zero imaginary part
    /// on the negative real axis yields `-π`; neither is special-cased.
    ///
    /// # Example
    /// ```
    /// use std::f64::consts::{FRAC_PI_2, PI};
    ///
    /// use cplx::complex::core::Complex;
    /// assert!((Complex::new(0.0, 1.0).argument() - FRAC_PI_2).abs() < 1e-10);
    /// assert!((Complex::new(-1.0, 0.0).argument() - PI).abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn argument(self) -> f64 {
        self.imag.atan2(self.real)
    }
}
