use crate::{
    bit_plane,
    codecs::codec::{Codec, ConfigFlags, ConfigParams, Embedded},
    error::{Error, Result},
    image_wrapper::{ImageWrapper, PixelBuffer},
    logger::Logger,
    pixel::{self, Rgb},
};

/// The struct that holds the whole-image steganography algorithm.
///
/// The two most significant bits of each channel of the secret image are
/// stored within the two least significant bits of the matching carrier channel.
pub struct StegaImage {
    /// The carrier location of the top-left pixel of the secret image.
    anchor: (usize, usize),
    /// If secret pixels falling outside of the carrier should be skipped, rather than failing.
    truncate: bool,
    /// The logger instance for this codec.
    logger: Logger,
}

impl StegaImage {
    pub fn new() -> Self {
        Self {
            anchor: (0, 0),
            truncate: true,
            logger: Logger::new(false),
        }
    }

    /// Create a copy of an image with the two low bits of every channel cleared.
    ///
    /// # Arguments
    ///
    /// * `image` - The source image.
    ///
    pub fn clear_low_bits<B: PixelBuffer + Clone>(image: &B) -> B {
        StegaImage::map_colours(image, |c| c.map(bit_plane::clear_low2))
    }

    /// Create a copy of an image with the two low bits of every channel set to the
    /// two high bits of the matching channel of a fixed colour.
    ///
    /// # Arguments
    ///
    /// * `image` - The source image.
    /// * `colour` - The colour whose high bits will be written into every pixel.
    ///
    pub fn insert_low_bits<B: PixelBuffer + Clone>(image: &B, colour: Rgb) -> B {
        let payload = colour.channels().map(bit_plane::top2);
        StegaImage::map_colours(image, |c| bit_plane::insert_rgb(c, payload))
    }

    /// Create a copy of an image where the two low bits of every channel are moved
    /// into the two high bits, making any hidden data visible.
    ///
    /// # Arguments
    ///
    /// * `image` - The image that may contain hidden data.
    ///
    pub fn reveal_low_bits<B: PixelBuffer + Clone>(image: &B) -> B {
        StegaImage::map_colours(image, |c| c.map(bit_plane::amplify_low2))
    }

    /// Check whether a secret image can be hidden, in its entirety, within a carrier image.
    ///
    /// # Arguments
    ///
    /// * `carrier` - The carrier image.
    /// * `secret` - The image to be hidden.
    ///
    pub fn can_embed<C, S>(carrier: &C, secret: &S) -> bool
    where
        C: PixelBuffer + ?Sized,
        S: PixelBuffer + ?Sized,
    {
        carrier.width() >= secret.width() && carrier.height() >= secret.height()
    }

    /// Hide a secret image within a copy of a carrier image.
    ///
    /// # Arguments
    ///
    /// * `carrier` - The carrier image.
    /// * `secret` - The image to be hidden.
    /// * `start_row` - The carrier row of the top row of the secret image.
    /// * `start_col` - The carrier column of the leftmost column of the secret image.
    ///
    /// `Note:` secret pixels that fall outside of the carrier are skipped. If truncation
    /// has been disabled then an error will be returned instead.
    ///
    pub fn embed_image<B, S>(
        &self,
        carrier: &B,
        secret: &S,
        start_row: usize,
        start_col: usize,
    ) -> Result<Embedded<B>>
    where
        B: PixelBuffer + Clone,
        S: PixelBuffer + ?Sized,
    {
        // The number of secret rows and columns that land within the carrier.
        let rows = carrier
            .height()
            .saturating_sub(start_row)
            .min(secret.height());
        let cols = carrier
            .width()
            .saturating_sub(start_col)
            .min(secret.width());

        let requested = secret.pixel_count();
        let written = rows * cols;
        if written < requested && !self.truncate {
            return Err(Error::CapacityExceeded {
                needed: requested,
                available: written,
            });
        }

        let mut image = carrier.clone();
        for point in pixel::row_major(cols, rows) {
            let payload = secret.colour(point.row, point.col).channels().map(bit_plane::top2);

            let (row, col) = (start_row + point.row, start_col + point.col);
            let colour = bit_plane::insert_rgb(image.colour(row, col), payload);
            image.set_colour(row, col, colour);
        }

        self.logger.log(&format!(
            "wrote {written} of {requested} secret pixels at ({start_row}, {start_col})"
        ));

        Ok(Embedded {
            image,
            written,
            requested,
        })
    }

    /// Recover any hidden image from a carrier image.
    ///
    /// The entire carrier is revealed, as the location of the hidden image is not
    /// stored. Areas without a hidden image will show amplified noise.
    ///
    /// # Arguments
    ///
    /// * `carrier` - The image holding the hidden image.
    ///
    pub fn extract_image<B: PixelBuffer + Clone>(carrier: &B) -> B {
        StegaImage::reveal_low_bits(carrier)
    }

    /// Create a copy of an image, with a function applied to the colour of every pixel.
    fn map_colours<B, F>(image: &B, f: F) -> B
    where
        B: PixelBuffer + Clone,
        F: Fn(Rgb) -> Rgb,
    {
        let mut copy = image.clone();
        for point in pixel::row_major(image.width(), image.height()) {
            let colour = f(copy.colour(point.row, point.col));
            copy.set_colour(point.row, point.col, colour);
        }

        copy
    }
}

impl Codec for StegaImage {
    type Payload = ImageWrapper;

    fn encode<B: PixelBuffer + Clone>(
        &self,
        carrier: &B,
        payload: &ImageWrapper,
    ) -> Result<Embedded<B>> {
        let (row, col) = self.anchor;
        self.embed_image(carrier, payload, row, col)
    }

    fn decode<B: PixelBuffer>(&self, encoded: &B) -> Result<ImageWrapper> {
        Ok(StegaImage::extract_image(&ImageWrapper::from_buffer(encoded)))
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
            ConfigParams::Anchor { row, col } => {
                self.anchor = (row, col);
            }
            ConfigParams::Alphabet(_) => {
                self.logger
                    .log("an alphabet is not supported for this codec.");
            }
        }
    }
}

impl Default for StegaImage {
    fn default() -> Self {
        Self::new()
    }
}
