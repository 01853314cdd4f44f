/// An 8-bit RGB colour triple.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a colour from its channels, in red, green, blue order.
    #[inline]
    pub const fn from_channels(channels: [u8; 3]) -> Self {
        Self::new(channels[0], channels[1], channels[2])
    }

    /// Get the channels of the colour, in red, green, blue order.
    #[inline]
    pub const fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Apply a function to each of the channels of the colour.
    #[inline]
    pub fn map<F>(self, f: F) -> Self
    where
        F: Fn(u8) -> u8,
    {
        Self::new(f(self.r), f(self.g), f(self.b))
    }
}

/// A pixel location within an image, as a (row, column) pair.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Iterate over every location of a `width` × `height` grid, in row-major order.
pub fn row_major(width: usize, height: usize) -> impl Iterator<Item = Point> {
    (0..height).flat_map(move |row| (0..width).map(move |col| Point::new(row, col)))
}
