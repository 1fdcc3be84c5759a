#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for Landfall adapters.
//!
//! Adapters draw glyph cells through a [`DisplaySink`] and read player intents
//! from an [`InputSource`]. A [`RenderingBackend`] owns the frame loop and
//! hands every intent to the simulation, which updates the [`Scene`] before
//! the next frame is drawn.

mod headless;
mod script;
mod text;

pub use headless::HeadlessBackend;
pub use script::{intent_for_key, KeyStream, ScriptedInput};
pub use text::TextSink;

use anyhow::Result as AnyResult;
use landfall_core::{Flow, Intent, Rgb, SCREEN_HEIGHT, SCREEN_WIDTH};
use std::{error::Error, fmt};

/// RGBA color used when presenting frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity in the range 0.0..=1.0.
    pub alpha: f32,
}

impl Color {
    /// Creates a new color from floating point channels.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb_u8(rgb.red(), rgb.green(), rgb.blue())
    }
}

/// A single glyph drawn at a screen cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphCell {
    /// Zero-based screen column.
    pub column: u32,
    /// Zero-based screen row.
    pub row: u32,
    /// Character drawn in the cell.
    pub glyph: char,
    /// Glyph color.
    pub foreground: Color,
    /// Cell background color.
    pub background: Color,
}

impl GlyphCell {
    /// Creates a new glyph cell.
    #[must_use]
    pub const fn new(
        column: u32,
        row: u32,
        glyph: char,
        foreground: Color,
        background: Color,
    ) -> Self {
        Self {
            column,
            row,
            glyph,
            foreground,
            background,
        }
    }
}

/// Scene description combining the active level's terrain and inhabitants.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Scene {
    /// One cell per map tile.
    pub tiles: Vec<GlyphCell>,
    /// Entities of the active level, in the level's order.
    pub entities: Vec<GlyphCell>,
    /// The player, drawn on top of everything else.
    pub player: Option<GlyphCell>,
}

impl Scene {
    /// Creates a new scene descriptor.
    #[must_use]
    pub fn new(tiles: Vec<GlyphCell>, entities: Vec<GlyphCell>, player: Option<GlyphCell>) -> Self {
        Self {
            tiles,
            entities,
            player,
        }
    }
}

/// Presentation descriptor consumed by rendering backends.
#[derive(Clone, Debug, PartialEq)]
pub struct Presentation {
    /// Title used by the created window.
    pub window_title: String,
    /// Number of glyph columns on screen.
    pub screen_columns: u32,
    /// Number of glyph rows on screen.
    pub screen_rows: u32,
    /// Edge length of a glyph cell in pixels.
    pub cell_size: f32,
    /// Whether the backend starts in fullscreen mode.
    pub fullscreen: bool,
    /// Solid color used to clear each frame.
    pub clear_color: Color,
    /// Scene content that should be displayed.
    pub scene: Scene,
}

impl Presentation {
    /// Constructs a presentation for the standard 80x50 glyph screen.
    ///
    /// Returns an error when `cell_size` is not a positive, finite number.
    pub fn new<T>(
        window_title: T,
        cell_size: f32,
        fullscreen: bool,
        scene: Scene,
    ) -> Result<Self, RenderingError>
    where
        T: Into<String>,
    {
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(RenderingError::InvalidCellSize { cell_size });
        }

        Ok(Self {
            window_title: window_title.into(),
            screen_columns: SCREEN_WIDTH,
            screen_rows: SCREEN_HEIGHT,
            cell_size,
            fullscreen,
            clear_color: Color::from(Rgb::BLACK),
            scene,
        })
    }
}

/// Destination for glyph frames.
pub trait DisplaySink {
    /// Erases everything drawn since the last presented frame.
    fn clear_buffer(&mut self);

    /// Draws a glyph at the provided screen cell; cells off screen are ignored.
    fn draw_glyph_at(
        &mut self,
        column: u32,
        row: u32,
        glyph: char,
        foreground: Color,
        background: Color,
    );

    /// Makes the buffered frame visible.
    fn present_frame(&mut self) -> AnyResult<()>;
}

/// Source of player intents.
pub trait InputSource {
    /// Blocks until the next intent is available.
    fn poll_intent(&mut self) -> AnyResult<Intent>;
}

/// Draws a complete frame: terrain, then entities, then the player.
pub fn draw_scene<S>(scene: &Scene, sink: &mut S) -> AnyResult<()>
where
    S: DisplaySink + ?Sized,
{
    sink.clear_buffer();
    let cells = scene
        .tiles
        .iter()
        .chain(scene.entities.iter())
        .chain(scene.player.iter());
    for cell in cells {
        sink.draw_glyph_at(
            cell.column,
            cell.row,
            cell.glyph,
            cell.foreground,
            cell.background,
        );
    }
    sink.present_frame()
}

/// Rendering backend capable of presenting Landfall scenes.
pub trait RenderingBackend {
    /// Runs the rendering backend until it is requested to exit.
    ///
    /// The provided `update_scene` closure receives every intent the adapter
    /// observes, may rewrite the scene before it is drawn again, and returns
    /// how the loop should continue.
    fn run<F>(self, presentation: Presentation, update_scene: F) -> AnyResult<()>
    where
        F: FnMut(Intent, &mut Scene) -> Flow + 'static;
}

/// Errors that can occur when constructing rendering descriptors or inputs.
#[derive(Debug, PartialEq)]
pub enum RenderingError {
    /// Cell size must be positive to produce a visible grid.
    InvalidCellSize {
        /// Provided cell size that failed validation.
        cell_size: f32,
    },
    /// A key script contained a character with no intent mapping.
    UnknownScriptKey {
        /// Offending character.
        key: char,
        /// Character offset of the key within the script.
        position: usize,
    },
}

impl fmt::Display for RenderingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCellSize { cell_size } => {
                write!(f, "cell_size must be positive (received {cell_size})")
            }
            Self::UnknownScriptKey { key, position } => {
                write!(f, "unknown script key {key:?} at position {position}")
            }
        }
    }
}

impl Error for RenderingError {}
