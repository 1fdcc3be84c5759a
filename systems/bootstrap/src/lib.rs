#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure bootstrap system that prepares the Landfall experience.

use landfall_world::{query, Entity, Level, World};

/// Produces data required to greet the player and draw the first frame.
#[derive(Debug, Default)]
pub struct Bootstrap;

impl Bootstrap {
    /// Derives the banner that should be shown when the experience starts.
    #[must_use]
    pub fn welcome_banner<'world>(&self, world: &'world World) -> &'world str {
        query::welcome_banner(world)
    }

    /// Seed the session was generated from, for reproducing a run.
    #[must_use]
    pub fn seed(&self, world: &World) -> u64 {
        query::seed(world)
    }

    /// Exposes the map and entities of the level currently presented.
    #[must_use]
    pub fn active_level<'world>(&self, world: &'world World) -> Option<&'world Level> {
        query::level(world, query::current_level(world))
    }

    /// Exposes the player for presentation purposes.
    #[must_use]
    pub fn player<'world>(&self, world: &'world World) -> &'world Entity {
        query::player(world)
    }
}
