//! Pixel-by-pixel comparison of images, used to locate and visualise hidden payloads.

use crate::{
    image_wrapper::PixelBuffer,
    pixel::{self, Point, Rgb},
};

/// The colour of the outline drawn by [`highlight_region`].
pub const HIGHLIGHT_COLOUR: Rgb = Rgb::BLUE;

/// The smallest axis-aligned rectangle that encloses a set of points.
///
/// All bounds are inclusive.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct BoundingBox {
    pub min_row: usize,
    pub min_col: usize,
    pub max_row: usize,
    pub max_col: usize,
}

impl BoundingBox {
    /// The number of columns spanned by the box.
    ///
    /// Saturates at `usize::MAX` for a box spanning every possible column.
    #[inline]
    pub fn width(&self) -> usize {
        (self.max_col - self.min_col).saturating_add(1)
    }

    /// The number of rows spanned by the box.
    ///
    /// Saturates at `usize::MAX` for a box spanning every possible row.
    #[inline]
    pub fn height(&self) -> usize {
        (self.max_row - self.min_row).saturating_add(1)
    }

    /// Check whether a point lies within, or on the edge of, the box.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        (self.min_row..=self.max_row).contains(&point.row)
            && (self.min_col..=self.max_col).contains(&point.col)
    }

    /// Check whether a point lies on the edge of the box.
    #[inline]
    pub fn on_border(&self, point: Point) -> bool {
        self.contains(point)
            && (point.row == self.min_row
                || point.row == self.max_row
                || point.col == self.min_col
                || point.col == self.max_col)
    }
}

/// Check whether two images are identical.
///
/// Images with different dimensions are never equal.
pub fn equal_images<A, B>(a: &A, b: &B) -> bool
where
    A: PixelBuffer + ?Sized,
    B: PixelBuffer + ?Sized,
{
    if !a.same_dimensions(b) {
        return false;
    }

    pixel::row_major(a.width(), a.height())
        .all(|p| a.colour(p.row, p.col) == b.colour(p.row, p.col))
}

/// Find every location, in row-major order, where the colours of two images differ.
///
/// `Note:` images with different dimensions are treated as having no
/// reportable differences, and an empty list is returned.
///
pub fn find_differences<A, B>(a: &A, b: &B) -> Vec<Point>
where
    A: PixelBuffer + ?Sized,
    B: PixelBuffer + ?Sized,
{
    if !a.same_dimensions(b) {
        return Vec::new();
    }

    pixel::row_major(a.width(), a.height())
        .filter(|p| a.colour(p.row, p.col) != b.colour(p.row, p.col))
        .collect()
}

/// Compute the bounding box of a set of points.
///
/// Returns `None` if there are no points.
pub fn bounding_box_of(points: &[Point]) -> Option<BoundingBox> {
    let (first, rest) = points.split_first()?;

    let init = BoundingBox {
        min_row: first.row,
        min_col: first.col,
        max_row: first.row,
        max_col: first.col,
    };

    Some(rest.iter().fold(init, |bb, p| BoundingBox {
        min_row: bb.min_row.min(p.row),
        min_col: bb.min_col.min(p.col),
        max_row: bb.max_row.max(p.row),
        max_col: bb.max_col.max(p.col),
    }))
}

/// Create a copy of an image with an outline drawn around the bounding box of a set of points.
///
/// # Arguments
///
/// * `image` - The source image.
/// * `points` - The points to be enclosed. If empty, an unmodified copy is returned.
///
/// `Note:` only the border pixels are modified, and any part of the border
/// that falls outside of the image is skipped.
///
pub fn highlight_region<B: PixelBuffer + Clone>(image: &B, points: &[Point]) -> B {
    let mut copy = image.clone();
    let Some(bb) = bounding_box_of(points) else {
        return copy;
    };

    let (width, height) = image.dimensions();
    if width == 0 || height == 0 || bb.min_row >= height || bb.min_col >= width {
        return copy;
    }

    // Clamp the edges to the image so the loops are bounded by its dimensions.
    let last_row = bb.max_row.min(height - 1);
    let last_col = bb.max_col.min(width - 1);
    let draw_max_row = bb.max_row < height;
    let draw_max_col = bb.max_col < width;

    for col in bb.min_col..=last_col {
        copy.set_colour(bb.min_row, col, HIGHLIGHT_COLOUR);
        if draw_max_row {
            copy.set_colour(bb.max_row, col, HIGHLIGHT_COLOUR);
        }
    }
    for row in bb.min_row..=last_row {
        copy.set_colour(row, bb.min_col, HIGHLIGHT_COLOUR);
        if draw_max_col {
            copy.set_colour(row, bb.max_col, HIGHLIGHT_COLOUR);
        }
    }

    copy
}
