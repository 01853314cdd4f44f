use core::fmt;

/// Result with internal [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The same symbol appears more than once within an alphabet.
    AlphabetDuplicate(char),
    /// An alphabet must contain at least one symbol.
    AlphabetEmpty,
    /// A symbol can never be matched because input text is uppercased before lookup.
    AlphabetSymbolUnreachable(char),
    /// An alphabet may contain at most 63 symbols, as codes are stored in 6 bits.
    AlphabetTooLarge,
    /// There are insufficient pixels within the carrier image to hold the payload.
    CapacityExceeded { needed: usize, available: usize },
    /// The text contains a character that isn't part of the alphabet.
    CharacterUnsupported(char),
    /// A decoded code doesn't correspond to any symbol within the alphabet.
    CodeUnknown(u8),
    /// The pixel data does not match the image dimensions.
    ImageDimensionsInvalid,
    /// The image format would destroy the low-bit plane when saved.
    ImageFormatLossy,
    /// The image format is unknown.
    ImageFormatNotRecognized,
    /// There was an error when attempting to load an image file.
    ImageOpening,
    /// There was an error when attempting to save an image file.
    ImageSaving(String),
    /// The specified path is invalid.
    PathInvalid,
    /// The requested region does not fit within the image.
    RegionTooLarge,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::AlphabetDuplicate(c) => {
                write!(f, "The symbol {c:?} appears more than once in the alphabet.")
            }
            Error::AlphabetEmpty => f.write_str("The alphabet must contain at least one symbol."),
            Error::AlphabetSymbolUnreachable(c) => write!(
                f,
                "The symbol {c:?} can never be matched as the alphabet converts input to uppercase."
            ),
            Error::AlphabetTooLarge => {
                f.write_str("The alphabet may contain no more than 63 symbols.")
            }
            Error::CapacityExceeded { needed, available } => write!(
                f,
                "There is insufficient space within the image: {needed} pixels are needed but only {available} are available."
            ),
            Error::CharacterUnsupported(c) => {
                write!(f, "The character {c:?} cannot be represented by the alphabet.")
            }
            Error::CodeUnknown(code) => {
                write!(f, "The code {code} does not correspond to any symbol.")
            }
            Error::ImageDimensionsInvalid => {
                f.write_str("The pixel data does not match the image dimensions.")
            }
            Error::ImageFormatLossy => f.write_str(
                "The image format is lossy and would destroy any hidden data. Please use a lossless format, such as PNG.",
            ),
            Error::ImageFormatNotRecognized => f.write_str("The image format was not recognized."),
            Error::ImageOpening => f.write_str("Error when attempting to load the image."),
            Error::ImageSaving(s) => f.write_str(s),
            Error::PathInvalid => f.write_str("The path is invalid or does not exist."),
            Error::RegionTooLarge => f.write_str("The region is too large for the image."),
        }
    }
}

impl std::error::Error for Error {}
