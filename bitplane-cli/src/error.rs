use core::fmt;

/// Result with internal [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The supplied colour could not be parsed.
    ColourInvalid(String),
    /// An error occurred while attempting to decode data from an image.
    Decoding(String),
    /// An error occurred while attempting to encode data into an image.
    Encoding(String),
    /// An error occurred while attempting to load or save an image.
    Image(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ColourInvalid(s) => write!(
                f,
                "The colour {s:?} is invalid. Colours must be given as three comma-separated values between 0 and 255, e.g. 255,175,175."
            ),
            Error::Decoding(s) => f.write_str(s),
            Error::Encoding(s) => f.write_str(s),
            Error::Image(s) => f.write_str(s),
        }
    }
}

impl std::error::Error for Error {}
