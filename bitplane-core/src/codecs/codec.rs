use crate::{alphabet::Alphabet, error::Result, image_wrapper::PixelBuffer};

pub trait Codec {
    /// The type of data that this codec hides within an image.
    type Payload;

    /// Hide a payload within a copy of the carrier image.
    ///
    /// # Arguments
    ///
    /// * `carrier` - The image within which the payload should be hidden.
    /// * `payload` - The data to be hidden.
    ///
    /// `Note:` the carrier is never modified. The returned [`Embedded`] holds the
    /// modified copy, along with how much of the payload was written.
    ///
    fn encode<B: PixelBuffer + Clone>(
        &self,
        carrier: &B,
        payload: &Self::Payload,
    ) -> Result<Embedded<B>>;

    /// Recover a payload from an image.
    ///
    /// # Arguments
    ///
    /// * `encoded` - The image holding the hidden payload.
    ///
    fn decode<B: PixelBuffer>(&self, encoded: &B) -> Result<Self::Payload>;

    /// Enable or disable a specific configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - The [`ConfigFlags`] option to be configured.
    /// * `state` - A boolean indicating whether the config option should be enabled or disabled.
    ///
    fn set_flag_state(&mut self, config: ConfigFlags, state: bool);

    /// Set the value of a configuration parameter.
    ///
    /// # Arguments
    ///
    /// * `param` - The [`ConfigParams`] option to be configured.
    ///
    fn set_parameter(&mut self, param: ConfigParams);
}

/// A list of configuration flags that are applicable to a [`Codec`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigFlags {
    /// Enable or disable verbose mode.
    ///
    /// Applicable to: image, text.
    Verbose,
    /// Allow a payload that does not fit to be partially written, rather than failing.
    ///
    /// Applicable to: image (enabled by default), text (disabled by default).
    Truncate,
}

/// A list of configuration parameters that are applicable to a [`Codec`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigParams {
    /// The location within the carrier of the top-left pixel of a hidden image.
    ///
    /// Applicable to: image.
    Anchor { row: usize, col: usize },
    /// The symbol table used to encode text.
    ///
    /// Applicable to: text.
    Alphabet(Alphabet),
}

/// The outcome of hiding a payload within an image.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Embedded<B> {
    /// The carrier image, with the payload written into it.
    pub image: B,
    /// The number of payload units that were written.
    pub written: usize,
    /// The number of payload units that were requested to be written.
    pub requested: usize,
}

impl<B> Embedded<B> {
    /// Whether the entire payload was written.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.written == self.requested
    }

    /// Discard the write statistics and return the image.
    #[inline]
    pub fn into_image(self) -> B {
        self.image
    }
}
