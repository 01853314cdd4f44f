use crate::{
    error::{Error, Result},
    image_wrapper::PixelBuffer,
    pixel::{self, Point, Rgb},
};

use rand::Rng;

/// Create a copy of an image with a rectangular region converted to greyscale.
///
/// Each pixel within the region is replaced by the mean of its channels.
///
/// # Arguments
///
/// * `image` - The source image.
/// * `origin` - The top-left pixel of the region.
/// * `width` - The number of columns in the region.
/// * `height` - The number of rows in the region.
///
pub fn grey_region<B: PixelBuffer + Clone>(
    image: &B,
    origin: Point,
    width: usize,
    height: usize,
) -> Result<B> {
    let fits_rows = origin.row.checked_add(height).is_some_and(|end| end <= image.height());
    let fits_cols = origin.col.checked_add(width).is_some_and(|end| end <= image.width());
    if !fits_rows || !fits_cols {
        return Err(Error::RegionTooLarge);
    }

    let mut copy = image.clone();
    for p in pixel::row_major(width, height) {
        let (row, col) = (origin.row + p.row, origin.col + p.col);
        let c = copy.colour(row, col);
        let grey = ((c.r as u16 + c.g as u16 + c.b as u16) / 3) as u8;
        copy.set_colour(row, col, Rgb::new(grey, grey, grey));
    }

    Ok(copy)
}

/// Create a copy of an image with a randomly placed rectangular region converted to greyscale.
///
/// # Arguments
///
/// * `image` - The source image.
/// * `width` - The number of columns in the region.
/// * `height` - The number of rows in the region.
/// * `rng` - The random number generator used to place the region.
///
/// Returns the modified copy, along with the top-left pixel of the region.
///
pub fn grey_random_region<B, R>(
    image: &B,
    width: usize,
    height: usize,
    rng: &mut R,
) -> Result<(B, Point)>
where
    B: PixelBuffer + Clone,
    R: Rng,
{
    if width > image.width() || height > image.height() {
        return Err(Error::RegionTooLarge);
    }

    let origin = Point::new(
        rng.random_range(0..=image.height() - height),
        rng.random_range(0..=image.width() - width),
    );

    let copy = grey_region(image, origin, width, height)?;
    Ok((copy, origin))
}
