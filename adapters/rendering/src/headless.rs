//! Blocking frame loop driven by an [`InputSource`] and a [`DisplaySink`].

use anyhow::Result as AnyResult;
use landfall_core::{Flow, Intent};
use tracing::debug;

use crate::{draw_scene, DisplaySink, InputSource, Presentation, RenderingBackend, Scene};

/// Backend that renders through any sink and waits on any input source.
///
/// Each turn draws the scene, blocks for one intent and hands it to the
/// simulation. Fullscreen requests are acknowledged but have no effect.
#[derive(Debug)]
pub struct HeadlessBackend<I, S> {
    input: I,
    sink: S,
}

impl<I, S> HeadlessBackend<I, S>
where
    I: InputSource,
    S: DisplaySink,
{
    /// Creates a backend reading from `input` and drawing into `sink`.
    pub fn new(input: I, sink: S) -> Self {
        Self { input, sink }
    }
}

impl<I, S> RenderingBackend for HeadlessBackend<I, S>
where
    I: InputSource,
    S: DisplaySink,
{
    fn run<F>(self, presentation: Presentation, mut update_scene: F) -> AnyResult<()>
    where
        F: FnMut(Intent, &mut Scene) -> Flow + 'static,
    {
        let Self {
            mut input,
            mut sink,
        } = self;
        let mut scene = presentation.scene;

        loop {
            draw_scene(&scene, &mut sink)?;
            let intent = input.poll_intent()?;
            match update_scene(intent, &mut scene) {
                Flow::Continue => {}
                Flow::ToggleFullscreen => debug!("fullscreen unsupported without a window"),
                Flow::Quit => break,
            }
        }

        Ok(())
    }
}
