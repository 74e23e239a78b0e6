use clap::{Parser, Subcommand};
use cplx::{complex::core::Complex, error::DomainError};

/// cplx evaluates a single complex number operation and prints the result.
///
/// Operands are written as two numbers, `REAL IMAG`. Complex results are
/// printed the same way; scalar results are printed as one number.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    operation: Operation,
}

#[derive(Subcommand, Debug)]
enum Operation {
    /// Prints the real part.
    Real {
        #[arg(required = true, num_args = 2, value_names = ["REAL", "IMAG"], allow_negative_numbers = true)]
        op: Vec<f64>,
    },
    /// Prints the imaginary part.
    Imag {
        #[arg(required = true, num_args = 2, value_names = ["REAL", "IMAG"], allow_negative_numbers = true)]
        op: Vec<f64>,
    },
    /// Prints the complex conjugate.
    Conjugate {
        #[arg(required = true, num_args = 2, value_names = ["REAL", "IMAG"], allow_negative_numbers = true)]
        op: Vec<f64>,
    },
    /// Prints `left + right`.
    Add {
        #[arg(required = true,
              num_args = 4,
              value_names = ["LEFT_REAL", "LEFT_IMAG", "RIGHT_REAL", "RIGHT_IMAG"],
              allow_negative_numbers = true)]
        operands: Vec<f64>,
    },
    /// Prints `left - right`.
    Subtract {
        #[arg(required = true,
              num_args = 4,
              value_names = ["LEFT_REAL", "LEFT_IMAG", "RIGHT_REAL", "RIGHT_IMAG"],
              allow_negative_numbers = true)]
        operands: Vec<f64>,
    },
    /// Prints `left * right`.
    Multiply {
        #[arg(required = true,
              num_args = 4,
              value_names = ["LEFT_REAL", "LEFT_IMAG", "RIGHT_REAL", "RIGHT_IMAG"],
              allow_negative_numbers = true)]
        operands: Vec<f64>,
    },
    /// Prints the operand multiplied by a real factor.
    Scale {
        #[arg(required = true, num_args = 2, value_names = ["REAL", "IMAG"], allow_negative_numbers = true)]
        op:     Vec<f64>,
        #[arg(allow_negative_numbers = true)]
        factor: f64,
    },
    /// Prints the operand raised to a non-negative integer power.
    Power {
        #[arg(required = true, num_args = 2, value_names = ["REAL", "IMAG"], allow_negative_numbers = true)]
        op:       Vec<f64>,
        #[arg(allow_negative_numbers = true)]
        exponent: i64,
    },
    /// Prints `real² + imag²`.
    SquaredMagnitude {
        #[arg(required = true, num_args = 2, value_names = ["REAL", "IMAG"], allow_negative_numbers = true)]
        op: Vec<f64>,
    },
    /// Prints the magnitude.
    Magnitude {
        #[arg(required = true, num_args = 2, value_names = ["REAL", "IMAG"], allow_negative_numbers = true)]
        op: Vec<f64>,
    },
    /// Prints the argument in radians, in `(-π, π]`.
    Argument {
        #[arg(required = true, num_args = 2, value_names = ["REAL", "IMAG"], allow_negative_numbers = true)]
        op: Vec<f64>,
    },
}

#[derive(Debug, PartialEq)]
enum Output {
    Complex(Complex),
    Scalar(f64),
}

/// Builds a complex number from a `REAL IMAG` pair.
///
/// clap enforces the value count, so `values` always holds at least two
/// numbers.
fn operand(values: &[f64]) -> Complex {
    Complex::new(values[0], values[1])
}

fn evaluate(operation: Operation) -> Result<Output, DomainError> {
    let output = match operation {
        Operation::Real { op } => Output::Scalar(operand(&op).real()),
        Operation::Imag { op } => Output::Scalar(operand(&op).imag()),
        Operation::Conjugate { op } => Output::Complex(operand(&op).conjugate()),
        Operation::Add { operands } => {
            Output::Complex(operand(&operands).add(operand(&operands[2..])))
        },
        Operation::Subtract { operands } => {
            Output::Complex(operand(&operands).subtract(operand(&operands[2..])))
        },
        Operation::Multiply { operands } => {
            Output::Complex(operand(&operands).multiply(operand(&operands[2..])))
        },
        Operation::Scale { op, factor } => Output::Complex(operand(&op).scale(factor)),
        Operation::Power { op, exponent } => Output::Complex(operand(&op).checked_power(exponent)?),
        Operation::SquaredMagnitude { op } => Output::Scalar(operand(&op).squared_magnitude()),
        Operation::Magnitude { op } => Output::Scalar(operand(&op).magnitude()),
        Operation::Argument { op } => Output::Scalar(operand(&op).argument()),
    };

    Ok(output)
}

fn main() {
    let args = Args::parse();

    match evaluate(args.operation) {
        Ok(Output::Complex(z)) => println!("{} {}", z.real(), z.imag()),
        Ok(Output::Scalar(x)) => println!("{x}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
