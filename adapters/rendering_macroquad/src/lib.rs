#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Macroquad-backed rendering adapter for Landfall.
//!
//! Macroquad's optional audio stack depends on native ALSA development
//! libraries, which are unavailable in the containerised CI environment.
//! To keep `cargo test` usable everywhere we depend on macroquad without its
//! default `audio` feature.
//!
//! The adapter polls the keyboard once per frame. Frames without a mapped key
//! only redraw; the simulation advances exactly one turn per key press.

use anyhow::Result;
use glam::Vec2;
use landfall_core::{Flow, Intent};
use landfall_rendering::{draw_scene, Color, DisplaySink, Presentation, RenderingBackend, Scene};
use macroquad::input::{is_key_down, is_key_pressed, KeyCode};
use std::sync::mpsc;
use tracing::{debug, info};

/// Share of a cell's height used by the glyph font.
const GLYPH_SCALE: f32 = 1.25;

/// Edge-triggered keys observed during a single frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct KeyboardState {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
    escape: bool,
    enter: bool,
    alt_held: bool,
}

impl KeyboardState {
    fn poll() -> Self {
        Self {
            up: is_key_pressed(KeyCode::Up),
            down: is_key_pressed(KeyCode::Down),
            left: is_key_pressed(KeyCode::Left),
            right: is_key_pressed(KeyCode::Right),
            escape: is_key_pressed(KeyCode::Escape),
            enter: is_key_pressed(KeyCode::Enter),
            alt_held: is_key_down(KeyCode::LeftAlt) || is_key_down(KeyCode::RightAlt),
        }
    }

    /// Resolves the frame's keys into at most one intent.
    ///
    /// Quitting wins over everything else, then the fullscreen chord, then
    /// movement in the order up, down, left, right.
    fn intent(self) -> Intent {
        if self.escape {
            Intent::Quit
        } else if self.enter && self.alt_held {
            Intent::ToggleFullscreen
        } else if self.up {
            Intent::MoveUp
        } else if self.down {
            Intent::MoveDown
        } else if self.left {
            Intent::MoveLeft
        } else if self.right {
            Intent::MoveRight
        } else {
            Intent::None
        }
    }
}

/// Screen-space placement of the glyph grid.
#[derive(Clone, Copy, Debug, PartialEq)]
struct GridLayout {
    origin: Vec2,
    cell_step: f32,
    columns: u32,
    rows: u32,
}

impl GridLayout {
    /// Scales the grid to fit the screen while keeping cells square, centred.
    fn fit(screen: Vec2, columns: u32, rows: u32) -> Self {
        let grid = Vec2::new(columns as f32, rows as f32);
        let cell_step = if columns == 0 || rows == 0 {
            0.0
        } else {
            (screen / grid).min_element().max(0.0)
        };
        let origin = ((screen - grid * cell_step) * 0.5).max(Vec2::ZERO);

        Self {
            origin,
            cell_step,
            columns,
            rows,
        }
    }

    /// Top-left pixel of a cell, or `None` when the cell is off the grid.
    fn cell_origin(&self, column: u32, row: u32) -> Option<Vec2> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        Some(self.origin + Vec2::new(column as f32, row as f32) * self.cell_step)
    }
}

/// Draws glyph cells straight into macroquad's frame buffer.
#[derive(Debug)]
struct MacroquadSink {
    layout: GridLayout,
    clear_color: macroquad::color::Color,
}

impl DisplaySink for MacroquadSink {
    fn clear_buffer(&mut self) {
        macroquad::window::clear_background(self.clear_color);
    }

    fn draw_glyph_at(
        &mut self,
        column: u32,
        row: u32,
        glyph: char,
        foreground: Color,
        background: Color,
    ) {
        let Some(top_left) = self.layout.cell_origin(column, row) else {
            return;
        };
        let step = self.layout.cell_step;
        macroquad::shapes::draw_rectangle(
            top_left.x,
            top_left.y,
            step,
            step,
            to_macroquad_color(background),
        );

        let mut buffer = [0_u8; 4];
        let text = glyph.encode_utf8(&mut buffer);
        let font_size = step * GLYPH_SCALE;
        let _ = macroquad::text::draw_text(
            text,
            top_left.x + step * 0.15,
            top_left.y + step * 0.85,
            font_size,
            to_macroquad_color(foreground),
        );
    }

    fn present_frame(&mut self) -> Result<()> {
        // Macroquad swaps buffers when the frame future yields.
        Ok(())
    }
}

/// Rendering backend implemented on top of macroquad.
#[derive(Debug, Default)]
pub struct MacroquadBackend {
    swap_interval: Option<i32>,
}

impl MacroquadBackend {
    /// Returns a backend that requests the platform's default swap interval.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the backend to request a specific swap interval from the platform.
    #[must_use]
    pub fn with_swap_interval(mut self, swap_interval: Option<i32>) -> Self {
        self.swap_interval = swap_interval;
        self
    }

    /// Configures the backend to either synchronise presentation with the display refresh rate
    /// or render as fast as possible.
    #[must_use]
    pub fn with_vsync(self, enabled: bool) -> Self {
        let swap_interval = if enabled { Some(1) } else { Some(0) };
        self.with_swap_interval(swap_interval)
    }
}

impl RenderingBackend for MacroquadBackend {
    fn run<F>(self, presentation: Presentation, mut update_scene: F) -> Result<()>
    where
        F: FnMut(Intent, &mut Scene) -> Flow + 'static,
    {
        let Self { swap_interval } = self;

        let Presentation {
            window_title,
            screen_columns,
            screen_rows,
            cell_size,
            fullscreen,
            clear_color,
            scene,
        } = presentation;

        let mut config = macroquad::window::Conf {
            window_title,
            window_width: window_extent(screen_columns, cell_size),
            window_height: window_extent(screen_rows, cell_size),
            fullscreen,
            ..macroquad::window::Conf::default()
        };
        if let Some(swap_interval) = swap_interval {
            config.platform.swap_interval = Some(swap_interval);
        }

        let (result_sender, result_receiver) = mpsc::channel::<Result<()>>();
        let clear_color = to_macroquad_color(clear_color);

        macroquad::Window::from_config(config, async move {
            let mut scene = scene;
            let mut fullscreen = fullscreen;

            loop {
                let intent = KeyboardState::poll().intent();
                if intent != Intent::None {
                    match update_scene(intent, &mut scene) {
                        Flow::Continue => {}
                        Flow::ToggleFullscreen => {
                            fullscreen = !fullscreen;
                            debug!(fullscreen, "toggling fullscreen");
                            macroquad::window::set_fullscreen(fullscreen);
                        }
                        Flow::Quit => {
                            info!("quit requested");
                            break;
                        }
                    }
                }

                let screen = Vec2::new(
                    macroquad::window::screen_width(),
                    macroquad::window::screen_height(),
                );
                let mut sink = MacroquadSink {
                    layout: GridLayout::fit(screen, screen_columns, screen_rows),
                    clear_color,
                };
                if let Err(error) = draw_scene(&scene, &mut sink) {
                    let _ = result_sender.send(Err(error));
                    return;
                }

                macroquad::window::next_frame().await;
            }

            let _ = result_sender.send(Ok(()));
        });

        result_receiver.recv().unwrap_or(Ok(()))
    }
}

fn window_extent(cells: u32, cell_size: f32) -> i32 {
    let extent = (cells as f32 * cell_size).round();
    if extent >= i32::MAX as f32 {
        i32::MAX
    } else {
        extent.max(1.0) as i32
    }
}

fn to_macroquad_color(color: Color) -> macroquad::color::Color {
    macroquad::color::Color::new(color.red, color.green, color.blue, color.alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_wins_over_movement() {
        let keys = KeyboardState {
            escape: true,
            up: true,
            ..KeyboardState::default()
        };
        assert_eq!(keys.intent(), Intent::Quit);
    }

    #[test]
    fn enter_toggles_fullscreen_only_with_alt() {
        let chord = KeyboardState {
            enter: true,
            alt_held: true,
            ..KeyboardState::default()
        };
        assert_eq!(chord.intent(), Intent::ToggleFullscreen);

        let plain_enter = KeyboardState {
            enter: true,
            ..KeyboardState::default()
        };
        assert_eq!(plain_enter.intent(), Intent::None);
    }

    #[test]
    fn arrows_map_to_movement() {
        let cases = [
            (
                KeyboardState {
                    up: true,
                    ..KeyboardState::default()
                },
                Intent::MoveUp,
            ),
            (
                KeyboardState {
                    down: true,
                    ..KeyboardState::default()
                },
                Intent::MoveDown,
            ),
            (
                KeyboardState {
                    left: true,
                    ..KeyboardState::default()
                },
                Intent::MoveLeft,
            ),
            (
                KeyboardState {
                    right: true,
                    ..KeyboardState::default()
                },
                Intent::MoveRight,
            ),
        ];

        for (keys, expected) in cases {
            assert_eq!(keys.intent(), expected);
        }
        assert_eq!(KeyboardState::default().intent(), Intent::None);
    }

    #[test]
    fn layout_keeps_cells_square_and_centred() {
        let layout = GridLayout::fit(Vec2::new(1000.0, 500.0), 80, 50);

        assert_eq!(layout.cell_step, 10.0);
        assert_eq!(layout.origin, Vec2::new(100.0, 0.0));
        assert_eq!(layout.cell_origin(1, 2), Some(Vec2::new(110.0, 20.0)));
        assert_eq!(layout.cell_origin(80, 0), None);
        assert_eq!(layout.cell_origin(0, 50), None);
    }

    #[test]
    fn layout_of_empty_grid_is_degenerate() {
        let layout = GridLayout::fit(Vec2::new(640.0, 480.0), 0, 0);

        assert_eq!(layout.cell_step, 0.0);
        assert_eq!(layout.cell_origin(0, 0), None);
    }

    #[test]
    fn window_extent_scales_cells() {
        assert_eq!(window_extent(80, 12.0), 960);
        assert_eq!(window_extent(50, 12.0), 600);
        assert_eq!(window_extent(0, 12.0), 1);
    }

    #[test]
    fn vsync_selects_swap_interval() {
        assert_eq!(MacroquadBackend::new().swap_interval, None);
        assert_eq!(
            MacroquadBackend::new().with_vsync(true).swap_interval,
            Some(1)
        );
        assert_eq!(
            MacroquadBackend::new().with_vsync(false).swap_interval,
            Some(0)
        );
    }
}
