#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors raised when an input falls outside the domain of an
/// operation.
pub enum DomainError {
    /// A negative exponent was supplied where only `exponent >= 0` is defined.
    NegativeExponent {
        /// The exponent that was requested.
        exponent: i64,
    },
    /// The exponent does not fit the unsigned exponent range of `power`.
    ExponentTooLarge {
        /// The exponent that was requested.
        exponent: i64,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeExponent { exponent } => write!(f,
                                                          "Domain error: exponent must be non-negative, but found {exponent}."),
            Self::ExponentTooLarge { exponent } => write!(f,
                                                          "Domain error: exponent {exponent} exceeds the maximum of {}.",
                                                          u32::MAX),
        }
    }
}

impl std::error::Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::DomainError;

    #[test]
    fn negative_exponent_message_names_the_exponent() {
        let err = DomainError::NegativeExponent { exponent: -3 };
        assert_eq!(err.to_string(),
                   "Domain error: exponent must be non-negative, but found -3.");
    }

    #[test]
    fn too_large_message_names_the_limit() {
        let err = DomainError::ExponentTooLarge { exponent: 1 << 40 };
        let message = err.to_string();
        assert!(message.contains("1099511627776"));
        assert!(message.contains(&u32::MAX.to_string()));
    }

    #[test]
    fn is_a_std_error() {
        let boxed: Box<dyn std::error::Error> = Box::new(DomainError::NegativeExponent { exponent: -1 });
        assert!(boxed.source().is_none());
    }
}
