use std::{error, fmt};

/// An error.
#[derive(Clone, PartialEq)]
pub enum Error {
    /// A parameter is outside of its admissible range.
    InvalidParameter(String),
    /// The bookkeeping of the engine has been violated.
    InternalInconsistency(String),
}

pub type Result<T> = ::std::result::Result<T, Error>;

impl Error {
    #[inline]
    pub fn invalid<T: ToString>(message: T) -> Error {
        Error::InvalidParameter(message.to_string())
    }

    #[inline]
    pub fn inconsistent<T: ToString>(message: T) -> Error {
        Error::InternalInconsistency(message.to_string())
    }

    /// Check if the error is due to the input rather than the engine.
    #[inline]
    pub fn is_invalid(&self) -> bool {
        match *self {
            Error::InvalidParameter(..) => true,
            _ => false,
        }
    }

    #[inline]
    fn message(&self) -> &str {
        match *self {
            Error::InvalidParameter(ref message) => message,
            Error::InternalInconsistency(ref message) => message,
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidParameter(_) => write!(formatter, "InvalidParameter({:?})", self.message()),
            Error::InternalInconsistency(_) => {
                write!(formatter, "InternalInconsistency({:?})", self.message())
            },
        }
    }
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        self.message().fmt(formatter)
    }
}

impl error::Error for Error {
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn display() {
        let error = Error::invalid("the arrival rate should be positive");
        assert!(error.is_invalid());
        assert_eq!(error.to_string(), "the arrival rate should be positive");

        let error = Error::inconsistent("the timeline has been exhausted");
        assert!(!error.is_invalid());
        assert_eq!(format!("{:?}", error),
                   "InternalInconsistency(\"the timeline has been exhausted\")");
    }
}
