use crate::{
    alphabet::{Alphabet, Message, TERMINATOR},
    bit_plane,
    codecs::codec::{Codec, ConfigFlags, ConfigParams, Embedded},
    error::{Error, Result},
    image_wrapper::PixelBuffer,
    logger::Logger,
    pixel,
};

/// The struct that holds the text steganography algorithm.
///
/// Each code of a message occupies a single pixel, in row-major order. The code
/// is split into three base-4 digits: the red channel holds the least significant
/// digit, green the middle digit, and blue the most significant digit.
pub struct StegaText {
    /// The symbol table used to convert text into codes.
    alphabet: Alphabet,
    /// If a message that does not fit should be partially written, rather than failing.
    truncate: bool,
    /// The logger instance for this codec.
    logger: Logger,
}

impl StegaText {
    pub fn new() -> Self {
        Self {
            alphabet: Alphabet::standard(),
            truncate: false,
            logger: Logger::new(false),
        }
    }

    /// Get the alphabet used by this codec.
    #[inline]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Encode a string of text into a [`Message`].
    ///
    /// # Arguments
    ///
    /// * `text` - The text to be encoded.
    ///
    pub fn encode_text(&self, text: &str) -> Result<Message> {
        self.alphabet.encode(text)
    }

    /// Decode a sequence of codes, stopping at the first terminator.
    ///
    /// # Arguments
    ///
    /// * `codes` - The codes to be decoded.
    ///
    pub fn decode_codes(&self, codes: &[u8]) -> Result<String> {
        self.alphabet.decode(codes)
    }

    /// The maximum number of symbols that can be hidden within an image.
    ///
    /// One pixel is always reserved for the terminator.
    #[inline]
    pub fn capacity<B: PixelBuffer + ?Sized>(image: &B) -> usize {
        image.pixel_count().saturating_sub(1)
    }

    /// Hide a string of text within a copy of an image.
    ///
    /// # Arguments
    ///
    /// * `image` - The carrier image.
    /// * `text` - The text to be hidden.
    ///
    /// `Note:` if the message does not fit then an error is returned, unless
    /// truncation has been enabled. A truncated message has no terminator.
    ///
    pub fn hide_text<B>(&self, image: &B, text: &str) -> Result<Embedded<B>>
    where
        B: PixelBuffer + Clone,
    {
        let codes = self.encode_text(text)?.to_codes();

        let requested = codes.len();
        let available = image.pixel_count();
        if requested > available {
            if !self.truncate {
                return Err(Error::CapacityExceeded {
                    needed: requested,
                    available,
                });
            }

            self.logger.log(&format!(
                "truncating message: {requested} codes requested, {available} pixels available"
            ));
        }

        let mut copy = image.clone();
        let mut written = 0;
        for (point, &code) in pixel::row_major(image.width(), image.height()).zip(&codes) {
            let digits = bit_plane::split_to_base4_triple(code);
            let colour = bit_plane::insert_rgb(copy.colour(point.row, point.col), digits);
            copy.set_colour(point.row, point.col, colour);
            written += 1;
        }

        self.logger.log(&format!("wrote {written} of {requested} codes"));

        Ok(Embedded {
            image: copy,
            written,
            requested,
        })
    }

    /// Recover a string of text from an image.
    ///
    /// Pixels are read in row-major order until a terminator is found. If the image
    /// ends before a terminator is found then everything read so far is decoded.
    ///
    /// # Arguments
    ///
    /// * `image` - The image holding the hidden text.
    ///
    pub fn reveal_text<B: PixelBuffer + ?Sized>(&self, image: &B) -> Result<String> {
        let codes: Vec<u8> = pixel::row_major(image.width(), image.height())
            .map(|p| image.colour(p.row, p.col))
            .map(|colour| bit_plane::combine_base4_triple(bit_plane::extract_rgb(colour)))
            .take_while(|&code| code != TERMINATOR)
            .collect();

        self.logger
            .log(&format!("read {} codes before the terminator", codes.len()));

        self.decode_codes(&codes)
    }
}

impl Codec for StegaText {
    type Payload = String;

    fn encode<B: PixelBuffer + Clone>(
        &self,
        carrier: &B,
        payload: &String,
    ) -> Result<Embedded<B>> {
        self.hide_text(carrier, payload)
    }

    fn decode<B: PixelBuffer>(&self, encoded: &B) -> Result<String> {
        self.reveal_text(encoded)
    }

    fn set_flag_state(&mut self, config: ConfigFlags, state: bool) {
        match config {
            ConfigFlags::Verbose => {
                if state {
                    self.logger.enable_verbose_mode();
                } else {
                    self.logger.disable_verbose_mode();
                }
            }
            ConfigFlags::Truncate => {
                self.truncate = state;
            }
        }
    }

    fn set_parameter(&mut self, param: ConfigParams) {
        match param {
            ConfigParams::Anchor { .. } => {
                self.logger.log("an anchor is not supported for this codec.");
            }
            ConfigParams::Alphabet(alphabet) => {
                self.alphabet = alphabet;
            }
        }
    }
}

impl Default for StegaText {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests_encode_decode_text {
    use crate::{
        alphabet::Alphabet,
        codecs::codec::{Codec, ConfigFlags, ConfigParams},
        error::Error,
        image_wrapper::{ImageWrapper, PixelBuffer},
        pixel::Rgb,
    };

    use super::StegaText;

    // The generic text used to text encoding and decoding.
    const TEXT: &str = "HELLO WORLD";

    /// Create an image where the low bits of every pixel are set, so that a
    /// missing terminator would be noticed.
    fn noisy_image(width: usize, height: usize) -> ImageWrapper {
        ImageWrapper::filled(width, height, Rgb::new(0x81, 0x42, 0xC3))
    }

    #[test]
    fn test_roundtrip() {
        let img = noisy_image(4, 4);
        let stega = StegaText::new();

        let embedded = stega.hide_text(&img, TEXT).expect("failed to hide the text");
        assert!(embedded.is_complete());
        assert_eq!(embedded.written, TEXT.len() + 1);

        let r = stega
            .reveal_text(&embedded.image)
            .expect("failed to reveal the text");
        assert_eq!(r, TEXT, "revealed text does not match");
    }

    #[test]
    fn test_roundtrip_exact_capacity() {
        let img = noisy_image(3, 4);
        let stega = StegaText::new();
        assert_eq!(StegaText::capacity(&img), TEXT.len());

        let embedded = stega.hide_text(&img, TEXT).expect("failed to hide the text");
        assert_eq!(stega.reveal_text(&embedded.image), Ok(TEXT.to_string()));
    }

    #[test]
    fn test_roundtrip_lowercase_is_folded() {
        let img = noisy_image(8, 2);
        let stega = StegaText::new();

        let embedded = stega.hide_text(&img, "hello").expect("failed to hide the text");
        assert_eq!(stega.reveal_text(&embedded.image), Ok("HELLO".to_string()));
    }

    #[test]
    fn test_bit_layout() {
        let img = ImageWrapper::filled(2, 2, Rgb::new(252, 252, 252));
        let stega = StegaText::new();

        // Space is code 27, which is 3 + 2 * 4 + 1 * 16.
        let embedded = stega.hide_text(&img, " ").expect("failed to hide the text");

        assert_eq!(embedded.image.colour(0, 0), Rgb::new(255, 254, 253));
        assert_eq!(embedded.image.colour(0, 1), Rgb::new(252, 252, 252));
        assert_eq!(embedded.image.colour(1, 0), Rgb::new(252, 252, 252));
    }

    #[test]
    fn test_hide_does_not_modify_original() {
        let img = noisy_image(4, 4);
        let _ = StegaText::new().hide_text(&img, TEXT);

        assert_eq!(img, noisy_image(4, 4));
    }

    #[test]
    fn test_capacity_exceeded() {
        let img = noisy_image(3, 3);
        let r = StegaText::new().hide_text(&img, TEXT);

        assert_eq!(
            r,
            Err(Error::CapacityExceeded {
                needed: 12,
                available: 9
            })
        );
    }

    #[test]
    fn test_truncated() {
        let img = noisy_image(3, 2);
        let mut stega = StegaText::new();
        stega.set_flag_state(ConfigFlags::Truncate, true);

        let embedded = stega.hide_text(&img, "ABCDEFGH").expect("truncation should not fail");
        assert!(!embedded.is_complete());
        assert_eq!(embedded.written, 6);
        assert_eq!(embedded.requested, 9);

        // No terminator was written, so every pixel is decoded.
        assert_eq!(stega.reveal_text(&embedded.image), Ok("ABCDEF".to_string()));
    }

    #[test]
    fn test_unsupported_character() {
        let img = noisy_image(8, 8);
        let r = StegaText::new().hide_text(&img, "HELLO, WORLD");

        assert_eq!(r, Err(Error::CharacterUnsupported(',')));
    }

    #[test]
    fn test_reveal_without_terminator() {
        // 0b01 in every channel is code 1 + 4 + 16 = 21, which is "U".
        let img = ImageWrapper::filled(3, 1, Rgb::new(1, 1, 1));

        assert_eq!(StegaText::new().reveal_text(&img), Ok("UUU".to_string()));
    }

    #[test]
    fn test_reveal_unknown_code() {
        // 0b11 in every channel is code 63, which is not part of the standard alphabet.
        let img = ImageWrapper::filled(2, 2, Rgb::WHITE);

        assert_eq!(StegaText::new().reveal_text(&img), Err(Error::CodeUnknown(63)));
    }

    #[test]
    fn test_reveal_cleared_image_is_empty() {
        let img = ImageWrapper::new(2, 2);
        assert_eq!(StegaText::new().reveal_text(&img), Ok(String::new()));
    }

    #[test]
    fn test_codec_custom_alphabet() {
        let img = noisy_image(5, 5);
        let mut stega = StegaText::new();
        let alphabet = Alphabet::new("0123456789.-", false).expect("failed to create alphabet");
        stega.set_parameter(ConfigParams::Alphabet(alphabet));

        let text = "3.1415926535".to_string();
        let embedded = stega.encode(&img, &text).expect("failed to encode");
        let r = stega.decode(&embedded.image).expect("failed to decode");

        assert_eq!(r, text);
        assert!(img.pixel_count() > text.len());
    }
}
