use crate::{
    error::{Error, Result},
    macros::*,
    pixel::Rgb,
    utilities::file_utils,
};

use image::{ColorType, ImageFormat};

/// The number of bytes used to store a single RGB pixel.
const BYTES_PER_PIXEL: usize = 3;

/// The minimal image buffer interface used by the codecs.
///
/// Rows and columns are zero-indexed, and the grid is always rectangular.
/// Accessing a location outside of the grid will panic, in the same way as
/// indexing a slice out of bounds.
pub trait PixelBuffer {
    /// The number of columns in the image.
    fn width(&self) -> usize;

    /// The number of rows in the image.
    fn height(&self) -> usize;

    /// Get the colour of the pixel at the specified location.
    fn colour(&self, row: usize, col: usize) -> Rgb;

    /// Set the colour of the pixel at the specified location.
    fn set_colour(&mut self, row: usize, col: usize, colour: Rgb);

    /// The image's dimensions, as (width, height).
    #[inline]
    fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    /// The total number of pixels within the image.
    #[inline]
    fn pixel_count(&self) -> usize {
        self.width() * self.height()
    }

    /// Check whether another buffer has the same dimensions as this one.
    #[inline]
    fn same_dimensions<O: PixelBuffer + ?Sized>(&self, other: &O) -> bool {
        self.dimensions() == other.dimensions()
    }
}

/// An owned, row-major, 8-bit RGB image.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ImageWrapper {
    image_bytes: Vec<u8>,
    /// The dimensions of the image, as (width, height).
    dimensions: (usize, usize),
}

impl ImageWrapper {
    /// Create a black image of the specified dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Rgb::BLACK)
    }

    /// Create an image of the specified dimensions where every pixel has the same colour.
    ///
    /// # Arguments
    ///
    /// * `width` - The number of columns.
    /// * `height` - The number of rows.
    /// * `colour` - The colour of every pixel.
    ///
    pub fn filled(width: usize, height: usize, colour: Rgb) -> Self {
        let image_bytes = colour
            .channels()
            .iter()
            .copied()
            .cycle()
            .take(width * height * BYTES_PER_PIXEL)
            .collect();

        Self {
            image_bytes,
            dimensions: (width, height),
        }
    }

    /// Create an image from raw, row-major, RGB bytes.
    ///
    /// # Arguments
    ///
    /// * `width` - The number of columns.
    /// * `height` - The number of rows.
    /// * `image_bytes` - The pixel data, three bytes per pixel.
    ///
    pub fn from_rgb_bytes(width: usize, height: usize, image_bytes: Vec<u8>) -> Result<Self> {
        if image_bytes.len() != width * height * BYTES_PER_PIXEL {
            return Err(Error::ImageDimensionsInvalid);
        }

        Ok(Self {
            image_bytes,
            dimensions: (width, height),
        })
    }

    /// Create an owned copy of any other pixel buffer.
    pub fn from_buffer<B: PixelBuffer + ?Sized>(buffer: &B) -> Self {
        let (width, height) = buffer.dimensions();
        let mut image_bytes = Vec::with_capacity(width * height * BYTES_PER_PIXEL);
        for row in 0..height {
            for col in 0..width {
                image_bytes.extend_from_slice(&buffer.colour(row, col).channels());
            }
        }

        Self {
            image_bytes,
            dimensions: (width, height),
        }
    }

    /// Get the raw, row-major, RGB bytes of the image.
    #[inline]
    pub fn as_rgb_bytes(&self) -> &[u8] {
        &self.image_bytes
    }

    /// Attempt to load an image from a file.
    ///
    /// Any decodable image is converted into 8-bit RGB, discarding the alpha channel.
    ///
    /// # Arguments
    ///
    /// * `file_path` - The path to the image file.
    ///
    pub fn load_from_file(file_path: &str) -> Result<ImageWrapper> {
        if !file_utils::path_exists(file_path) {
            return Err(Error::PathInvalid);
        }

        let image = unwrap_or_return_err!(image::open(file_path), Error::ImageOpening).to_rgb8();
        let (width, height) = image.dimensions();

        ImageWrapper::from_rgb_bytes(width as usize, height as usize, image.into_raw())
    }

    /// Save the buffer to a file at the specified path.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to which the file should be saved.
    ///
    /// `Note:` the file type is derived from the file extension. Lossy formats are
    /// rejected as they would not preserve the low-bit plane.
    ///
    pub fn save(&self, path: &str) -> Result<()> {
        let format = unwrap_or_return_err!(
            ImageFormat::from_path(path),
            Error::ImageFormatNotRecognized
        );
        if format == ImageFormat::Jpeg {
            return Err(Error::ImageFormatLossy);
        }

        let (w, h) = self.dimensions;
        let w = unwrap_or_return_err!(u32::try_from(w), Error::ImageDimensionsInvalid);
        let h = unwrap_or_return_err!(u32::try_from(h), Error::ImageDimensionsInvalid);

        image::save_buffer_with_format(path, &self.image_bytes, w, h, ColorType::Rgb8, format)
            .map_err(|e| Error::ImageSaving(e.to_string()))
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        let (width, height) = self.dimensions;
        assert!(
            row < height && col < width,
            "pixel ({row}, {col}) is outside of a {width}x{height} image"
        );

        (row * width + col) * BYTES_PER_PIXEL
    }
}

impl PixelBuffer for ImageWrapper {
    #[inline]
    fn width(&self) -> usize {
        self.dimensions.0
    }

    #[inline]
    fn height(&self) -> usize {
        self.dimensions.1
    }

    #[inline]
    fn colour(&self, row: usize, col: usize) -> Rgb {
        let start = self.offset(row, col);
        let px = &self.image_bytes[start..start + BYTES_PER_PIXEL];
        Rgb::new(px[0], px[1], px[2])
    }

    #[inline]
    fn set_colour(&mut self, row: usize, col: usize, colour: Rgb) {
        let start = self.offset(row, col);
        self.image_bytes[start..start + BYTES_PER_PIXEL].copy_from_slice(&colour.channels());
    }
}

#[cfg(test)]
mod tests_image_wrapper {
    use super::{ImageWrapper, PixelBuffer};
    use crate::{error::Error, pixel::Rgb, utilities::test_utils::TestUtils};

    #[test]
    fn test_filled_dimensions() {
        let img = ImageWrapper::filled(4, 3, Rgb::new(1, 2, 3));

        assert_eq!(img.dimensions(), (4, 3));
        assert_eq!(img.pixel_count(), 12);
        assert_eq!(img.as_rgb_bytes().len(), 36);
        assert!(img.as_rgb_bytes().chunks_exact(3).all(|px| px == [1, 2, 3]));
    }

    #[test]
    fn test_set_colour_is_row_major() {
        let mut img = ImageWrapper::new(3, 2);
        img.set_colour(1, 0, Rgb::WHITE);

        // Row 1, column 0 is the fourth pixel.
        assert_eq!(&img.as_rgb_bytes()[9..12], &[255, 255, 255]);
        assert_eq!(img.colour(1, 0), Rgb::WHITE);
        assert_eq!(img.colour(0, 1), Rgb::BLACK);
    }

    #[test]
    #[should_panic]
    fn test_out_of_bounds_access() {
        let img = ImageWrapper::new(2, 2);
        let _ = img.colour(2, 0);
    }

    #[test]
    fn test_from_rgb_bytes_invalid_length() {
        let r = ImageWrapper::from_rgb_bytes(2, 2, vec![0; 11]);
        assert_eq!(r, Err(Error::ImageDimensionsInvalid));
    }

    #[test]
    fn test_from_buffer_copy() {
        let mut img = ImageWrapper::new(2, 2);
        img.set_colour(0, 1, Rgb::new(9, 8, 7));

        let copy = ImageWrapper::from_buffer(&img);
        assert_eq!(copy, img);
    }

    #[test]
    fn test_save_load_roundtrip() {
        let mut tu = TestUtils::new();
        let path = tu.get_out_file("png", true);

        let mut img = ImageWrapper::filled(5, 4, Rgb::new(253, 2, 129));
        img.set_colour(3, 4, Rgb::new(0, 1, 3));

        img.save(&path).expect("failed to save the image");
        let loaded = ImageWrapper::load_from_file(&path).expect("failed to load the image");

        assert_eq!(loaded, img, "the low bits did not survive a PNG roundtrip");
    }

    #[test]
    fn test_save_lossy_format_rejected() {
        let mut tu = TestUtils::new();
        let path = tu.get_out_file("jpg", true);

        let img = ImageWrapper::new(2, 2);
        assert_eq!(img.save(&path), Err(Error::ImageFormatLossy));
    }

    #[test]
    fn test_save_unknown_format_rejected() {
        let mut tu = TestUtils::new();
        let path = tu.get_out_file("notanimage", true);

        let img = ImageWrapper::new(2, 2);
        assert_eq!(img.save(&path), Err(Error::ImageFormatNotRecognized));
    }

    #[test]
    fn test_load_missing_file() {
        let mut tu = TestUtils::new();
        let path = tu.get_out_file("png", false);

        assert_eq!(
            ImageWrapper::load_from_file(&path),
            Err(Error::PathInvalid)
        );
    }

    #[test]
    fn test_load_invalid_file() {
        let mut tu = TestUtils::new();
        let path = tu.get_out_file("png", true);
        std::fs::write(&path, b"definitely not a png").expect("failed to write test file");

        assert_eq!(
            ImageWrapper::load_from_file(&path),
            Err(Error::ImageOpening)
        );
    }
}
