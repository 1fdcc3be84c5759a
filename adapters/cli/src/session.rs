use landfall_core::{Command, Event, Flow, Intent};
use landfall_rendering::{Color, GlyphCell, Scene};
use landfall_system_bootstrap::Bootstrap;
use landfall_system_controls::Controls;
use landfall_world::{apply, Entity, World};
use tracing::trace;

/// Owns the world and runs one turn per player intent.
#[derive(Debug)]
pub(crate) struct Session {
    world: World,
    bootstrap: Bootstrap,
    controls: Controls,
    commands: Vec<Command>,
    events: Vec<Event>,
}

impl Session {
    pub(crate) fn new(world: World) -> Self {
        Self {
            world,
            bootstrap: Bootstrap,
            controls: Controls,
            commands: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Resolves a single intent against the world.
    pub(crate) fn advance(&mut self, intent: Intent) -> Flow {
        let flow = self.controls.handle(intent, &mut self.commands);
        for command in self.commands.drain(..) {
            apply(&mut self.world, command, &mut self.events);
        }
        for event in self.events.drain(..) {
            trace!(?event, "world event");
        }
        flow
    }

    /// Projects the active level and the player into a drawable scene.
    pub(crate) fn scene(&self) -> Scene {
        let (tiles, entities) = match self.bootstrap.active_level(&self.world) {
            Some(level) => (
                level
                    .map()
                    .iter()
                    .map(|(cell, tile)| {
                        GlyphCell::new(
                            cell.column(),
                            cell.row(),
                            tile.glyph(),
                            Color::from(tile.foreground()),
                            Color::from(tile.background()),
                        )
                    })
                    .collect(),
                level.entities().iter().map(entity_cell).collect(),
            ),
            None => (Vec::new(), Vec::new()),
        };
        let player = entity_cell(self.bootstrap.player(&self.world));

        Scene::new(tiles, entities, Some(player))
    }
}

fn entity_cell(entity: &Entity) -> GlyphCell {
    let cell = entity.cell();
    GlyphCell::new(
        cell.column(),
        cell.row(),
        entity.glyph(),
        Color::from(entity.foreground()),
        Color::from(entity.background()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use landfall_core::{LevelId, MAP_HEIGHT, MAP_WIDTH, START_X, START_Y};
    use landfall_world::query;

    #[test]
    fn initial_scene_shows_surface_with_player_on_top() {
        let session = Session::new(World::with_seed(3));

        let scene = session.scene();

        assert_eq!(query::current_level(&session.world), LevelId::SURFACE);
        assert_eq!(scene.tiles.len(), (MAP_WIDTH * MAP_HEIGHT) as usize);
        assert_eq!(scene.entities.len(), 2);
        let player = scene.player.expect("player is always drawn");
        assert_eq!((player.column, player.row), (START_X, START_Y));
        assert_eq!(player.glyph, '@');
    }

    #[test]
    fn quit_stops_without_touching_the_world() {
        let mut session = Session::new(World::with_seed(3));
        let before = query::player(&session.world).cell();

        assert_eq!(session.advance(Intent::Quit), Flow::Quit);
        assert_eq!(query::player(&session.world).cell(), before);
    }

    #[test]
    fn blocked_step_leaves_player_in_place() {
        let mut session = Session::new(World::with_seed(3));

        // The landing site border directly north of the start is solid.
        assert_eq!(session.advance(Intent::MoveUp), Flow::Continue);

        let player = session.scene().player.expect("player is always drawn");
        assert_eq!((player.column, player.row), (START_X, START_Y));
        assert!(session.commands.is_empty());
        assert!(session.events.is_empty());
    }

    #[test]
    fn fullscreen_toggle_reports_flow() {
        let mut session = Session::new(World::with_seed(3));

        assert_eq!(session.advance(Intent::ToggleFullscreen), Flow::ToggleFullscreen);
        assert_eq!(session.advance(Intent::None), Flow::Continue);
    }
}
