#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system that turns player intents into world commands.

use landfall_core::{Command, Flow, Intent};
use tracing::trace;

/// Translates one intent per turn into at most one movement command.
///
/// Presentation state such as fullscreen belongs to the rendering backend;
/// the system only reports that a toggle was requested.
#[derive(Debug, Default)]
pub struct Controls;

impl Controls {
    /// Consumes a single intent, emitting commands and telling the loop how to continue.
    pub fn handle(&self, intent: Intent, out: &mut Vec<Command>) -> Flow {
        trace!(?intent, "handling intent");
        if let Some(direction) = intent.direction() {
            out.push(Command::MovePlayer { direction });
            return Flow::Continue;
        }

        match intent {
            Intent::Quit => Flow::Quit,
            Intent::ToggleFullscreen => Flow::ToggleFullscreen,
            _ => Flow::Continue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use landfall_core::Direction;

    #[test]
    fn movement_intents_emit_single_step() {
        let controls = Controls;
        let mut commands = Vec::new();

        let flow = controls.handle(Intent::MoveLeft, &mut commands);

        assert_eq!(flow, Flow::Continue);
        assert_eq!(
            commands,
            vec![Command::MovePlayer {
                direction: Direction::West,
            }]
        );
    }

    #[test]
    fn fullscreen_toggle_is_reported_on_every_request() {
        let controls = Controls;
        let mut commands = Vec::new();

        for _ in 0..2 {
            assert_eq!(
                controls.handle(Intent::ToggleFullscreen, &mut commands),
                Flow::ToggleFullscreen
            );
        }
        assert!(commands.is_empty());
    }

    #[test]
    fn quit_and_idle_emit_nothing() {
        let controls = Controls;
        let mut commands = Vec::new();

        assert_eq!(controls.handle(Intent::None, &mut commands), Flow::Continue);
        assert_eq!(controls.handle(Intent::Quit, &mut commands), Flow::Quit);
        assert!(commands.is_empty());
    }
}
