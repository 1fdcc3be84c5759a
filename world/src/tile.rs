//! Static terrain state of a single grid cell.

use landfall_core::Rgb;

/// Glyph drawn for open floor.
pub const FLOOR_GLYPH: char = '.';

/// Glyph used when solidifying without an explicit choice.
pub const SOLID_GLYPH: char = '#';

/// Terrain occupying one cell of a [`Map`](crate::Map).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    walkable: bool,
    transparent: bool,
    glyph: char,
    foreground: Rgb,
    background: Rgb,
}

impl Tile {
    /// Open floor: walkable, transparent, grey `.` on black.
    #[must_use]
    pub const fn floor() -> Self {
        Self {
            walkable: true,
            transparent: true,
            glyph: FLOOR_GLYPH,
            foreground: Rgb::GREY,
            background: Rgb::BLACK,
        }
    }

    /// Whether entities may enter the tile.
    #[must_use]
    pub const fn walkable(&self) -> bool {
        self.walkable
    }

    /// Whether the tile lets light through.
    #[must_use]
    pub const fn transparent(&self) -> bool {
        self.transparent
    }

    /// Glyph drawn for the tile.
    #[must_use]
    pub const fn glyph(&self) -> char {
        self.glyph
    }

    /// Glyph color.
    #[must_use]
    pub const fn foreground(&self) -> Rgb {
        self.foreground
    }

    /// Cell background color.
    #[must_use]
    pub const fn background(&self) -> Rgb {
        self.background
    }

    /// Turns the tile into impassable, opaque terrain.
    ///
    /// The glyph is always replaced; colors only when provided. There is no
    /// inverse operation.
    pub fn solidify(&mut self, glyph: char, foreground: Option<Rgb>, background: Option<Rgb>) {
        self.walkable = false;
        self.transparent = false;
        self.glyph = glyph;
        if let Some(foreground) = foreground {
            self.foreground = foreground;
        }
        if let Some(background) = background {
            self.background = background;
        }
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::floor()
    }
}
