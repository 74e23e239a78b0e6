use std::ops;

use super::core::{Complex, ONE};
use crate::{error::DomainError, util::num::exponent_from_i64};

impl Complex {
    /// Returns the complex conjugate: same real part, negated imaginary part.
    ///
    /// # Example
    /// ```
    /// use cplx::complex::core::Complex;
    /// let z = Complex::new(2.0, -3.0);
    /// assert_eq!(z.conjugate(), Complex::new(2.0, 3.0));
    /// ```
    #[must_use]
    pub const fn conjugate(self) -> Self {
        Self { real: self.real,
               imag: -self.imag, }
    }

    /// Returns `self + rhs`, component by component.
    ///
    /// # Example
    /// ```
    /// use cplx::complex::core::{Complex, ZERO};
    /// let z = Complex::new(1.5, -2.0);
    /// assert_eq!(z.add(ZERO), z);
    /// assert_eq!(z.add(Complex::new(0.5, 2.0)), Complex::new(2.0, 0.0));
    /// ```
    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub const fn add(self, rhs: Self) -> Self {
        Self { real: self.real + rhs.real,
               imag: self.imag + rhs.imag, }
    }

    /// Returns `self - rhs`, component by component.
    #[must_use]
    pub const fn subtract(self, rhs: Self) -> Self {
        Self { real: self.real - rhs.real,
               imag: self.imag - rhs.imag, }
    }

    /// Returns the product `(a + bi)(c + di) = (ac - bd) + (ad + bc)i`.
    ///
    /// # Example
    /// ```
    /// use cplx::complex::core::Complex;
    /// let product = Complex::new(1.0, 2.0).multiply(Complex::new(3.0, 4.0));
    /// assert_eq!(product, Complex::new(-5.0, 10.0));
    /// ```
    #[must_use]
    pub const fn multiply(self, rhs: Self) -> Self {
        Self { real: self.real * rhs.real - self.imag * rhs.imag,
               imag: self.real * rhs.imag + self.imag * rhs.real, }
    }

    /// Multiplies both components by the real `factor`.
    ///
    /// # Example
    /// ```
    /// use cplx::complex::core::Complex;
    /// assert_eq!(Complex::new(1.0, -2.0).scale(3.0), Complex::new(3.0, -6.0));
    /// ```
    #[must_use]
    pub const fn scale(self, factor: f64) -> Self {
        Self { real: self.real * factor,
               imag: self.imag * factor, }
    }

    /// Raises the complex number to a non-negative integer power.
    ///
    /// `z.power(0)` is `ONE` for every `z`, `(0, 0)` included. Otherwise the
    /// result is computed by repeated squaring, so `O(log exponent)`
    /// multiplications are performed. The accumulator starts from the lowest
    /// set bit of `exponent` rather than from `ONE`, which makes
    /// `z.power(1)` return `z` bit for bit.
    ///
    /// # Example
    /// ```
    /// use cplx::complex::core::{Complex, ONE, ZERO};
    /// let z = Complex::new(1.0, 1.0);
    /// assert_eq!(z.power(4), Complex::new(-4.0, 0.0));
    /// assert_eq!(z.power(1), z);
    /// assert_eq!(ZERO.power(0), ONE);
    /// ```
    #[must_use]
    pub const fn power(self, exponent: u32) -> Self {
        if exponent == 0 {
            return ONE;
        }

        let mut base = self;
        let mut n = exponent;

        while n & 1 == 0 {
            base = base.multiply(base);
            n >>= 1;
        }

        let mut result = base;
        n >>= 1;

        while n > 0 {
            base = base.multiply(base);
            if n & 1 == 1 {
                result = result.multiply(base);
            }
            n >>= 1;
        }

        result
    }

    /// Raises the complex number to a signed integer power.
    ///
    /// Only `exponent >= 0` is defined; anything else is reported instead of
    /// producing a number.
    ///
    /// # Errors
    /// - `DomainError::NegativeExponent` if `exponent < 0`.
    /// - `DomainError::ExponentTooLarge` if `exponent > u32::MAX`.
    ///
    /// # Example
    /// ```
    /// use cplx::{complex::core::Complex, error::DomainError};
    /// let z = Complex::new(2.0, 0.0);
    /// assert_eq!(z.checked_power(3).unwrap(), Complex::new(8.0, 0.0));
    /// assert_eq!(z.checked_power(-1).unwrap_err(),
    ///            DomainError::NegativeExponent { exponent: -1 });
    /// ```
    pub fn checked_power(self, exponent: i64) -> Result<Self, DomainError> {
        Ok(self.power(exponent_from_i64(exponent)?))
    }
}

impl ops::Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { real: -self.real,
               imag: -self.imag, }
    }
}

impl ops::Add for Complex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::add(self, rhs)
    }
}

impl ops::AddAssign for Complex {
    fn add_assign(&mut self, rhs: Self) {
        *self = Self::add(*self, rhs);
    }
}

impl ops::Sub for Complex {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(rhs)
    }
}

impl ops::SubAssign for Complex {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.subtract(rhs);
    }
}

impl ops::Mul for Complex {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(rhs)
    }
}

impl ops::MulAssign for Complex {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(rhs);
    }
}

impl ops::Mul<f64> for Complex {
    type Output = Self;

    fn mul(self, factor: f64) -> Self::Output {
        self.scale(factor)
    }
}

impl ops::MulAssign<f64> for Complex {
    fn mul_assign(&mut self, factor: f64) {
        *self = self.scale(factor);
    }
}
