//! Tile colors and the fixed cycle a tile steps through when clicked.

use hexmap_engine::paint::Color;

/// Straight 8-bit sRGB triple.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Opaque engine color.
    #[inline]
    pub fn to_color(self) -> Color {
        Color::from_srgb_u8(self.0, self.1, self.2, 255)
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Color {
        c.to_color()
    }
}

/// Ordered, non-empty list of tile colors.
///
/// A new tile takes the first entry; each further click advances one entry
/// and wraps around at the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    pub const DEFAULT_COLORS: [Rgb; 8] = [
        Rgb(231, 76, 60),   // red
        Rgb(230, 126, 34),  // orange
        Rgb(241, 196, 15),  // yellow
        Rgb(46, 204, 113),  // green
        Rgb(26, 188, 156),  // teal
        Rgb(52, 152, 219),  // blue
        Rgb(155, 89, 182),  // purple
        Rgb(236, 240, 241), // white
    ];

    /// Builds a palette; returns `None` for an empty list.
    pub fn new(colors: Vec<Rgb>) -> Option<Self> {
        if colors.is_empty() {
            None
        } else {
            Some(Self { colors })
        }
    }

    /// Color for a freshly created tile.
    #[inline]
    pub fn first(&self) -> Rgb {
        self.colors[0]
    }

    /// The entry after `current`. Colors not in the palette restart the cycle.
    pub fn next_after(&self, current: Rgb) -> Rgb {
        match self.colors.iter().position(|&c| c == current) {
            Some(i) => self.colors[(i + 1) % self.colors.len()],
            None => self.first(),
        }
    }

    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self { colors: Self::DEFAULT_COLORS.to_vec() }
    }
}
