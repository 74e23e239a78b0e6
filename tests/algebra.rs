use std::f64::consts::{FRAC_PI_2, PI};

use cplx::{
    complex::core::{Complex, I, ONE, ZERO},
    error::DomainError,
};

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-10,
            "expected {expected}, but found {actual}");
}

#[test]
fn init_three_four_has_magnitude_five() {
    let mut z = Complex::default();
    z.init(3.0, 4.0);
    assert_eq!(z.magnitude(), 5.0);
    assert_eq!(z.squared_magnitude(), 25.0);
}

#[test]
fn multiply_follows_the_textbook_formula() {
    assert_eq!(Complex::new(1.0, 2.0).multiply(Complex::new(3.0, 4.0)),
               Complex::new(-5.0, 10.0));
    assert_eq!(I.multiply(I), -ONE);
}

#[test]
fn one_plus_i_to_the_fourth() {
    assert_eq!(Complex::new(1.0, 1.0).power(2), Complex::new(0.0, 2.0));
    assert_eq!(Complex::new(1.0, 1.0).power(4), Complex::new(-4.0, 0.0));
}

#[test]
fn argument_on_the_axes() {
    assert_close(Complex::new(0.0, 1.0).argument(), FRAC_PI_2);
    assert_close(Complex::new(-1.0, 0.0).argument(), PI);
    assert_close(Complex::new(5.0, 0.0).argument(), 0.0);
}

#[test]
fn conjugate_negates_only_the_imaginary_part() {
    assert_eq!(Complex::new(2.0, -3.0).conjugate(), Complex::new(2.0, 3.0));
}

#[test]
fn subtract_and_scale() {
    let left = Complex::new(5.0, 1.0);
    let right = Complex::new(2.0, -4.0);
    assert_eq!(left.subtract(right), Complex::new(3.0, 5.0));
    assert_eq!(left - right, Complex::new(3.0, 5.0));
    assert_eq!(right.scale(-0.5), Complex::new(-1.0, 2.0));
    assert_eq!(right.scale(0.0), ZERO);
}

#[test]
fn power_base_cases() {
    let z = Complex::new(-0.75, 2.5);
    assert_eq!(z.power(0), ONE);
    assert_eq!(ZERO.power(0), ONE);
    assert_eq!(z.power(1), z);
    assert_eq!(z.power(3), z.multiply(z).multiply(z));
}

#[test]
fn negative_exponents_are_rejected() {
    assert_eq!(ONE.checked_power(-1),
               Err(DomainError::NegativeExponent { exponent: -1 }));
    assert_eq!(ZERO.checked_power(0), Ok(ONE));
}

#[test]
fn mutators_leave_the_other_component_alone() {
    let mut z = Complex::new(1.0, 2.0);
    z.set_real(-8.0);
    assert_eq!(z.imag(), 2.0);
    z.set_imag(0.25);
    assert_eq!(z.real(), -8.0);
    assert_eq!(<(f64, f64)>::from(z), (-8.0, 0.25));
}
