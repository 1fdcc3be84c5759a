#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for Landfall.
//!
//! The world owns one [`Map`] and one entity list per level, the active level
//! and the player. Every mutation goes through [`apply`], which reports the
//! outcome as [`Event`] values; [`query`] offers read-only access for systems
//! and adapters.

mod entity;
mod generation;
mod map;
mod tile;

pub use entity::{Entity, PushEffect};
pub use generation::SURFACE_TELEPORT_DESTINATION;
pub use map::{Map, MapError};
pub use tile::{Tile, FLOOR_GLYPH, SOLID_GLYPH};

use landfall_core::{
    BlockReason, CellCoord, Command, EntityBlueprint, EntityId, Event, LevelId, PlacementError,
    TeleportDestination, LEVEL_COUNT, MAP_HEIGHT, MAP_WIDTH, START_X, START_Y, WELCOME_BANNER,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

/// Seed used when no other seed is supplied.
pub const DEFAULT_SEED: u64 = 0;

/// Map and entity list making up one level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Level {
    map: Map,
    entities: Vec<Entity>,
}

impl Level {
    fn open() -> Self {
        Self {
            map: Map::new(MAP_WIDTH, MAP_HEIGHT),
            entities: Vec::new(),
        }
    }

    /// Terrain of the level.
    #[must_use]
    pub fn map(&self) -> &Map {
        &self.map
    }

    /// Entities placed on the level, in placement order.
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }
}

/// Represents the authoritative Landfall world state.
#[derive(Debug)]
pub struct World {
    banner: &'static str,
    seed: u64,
    levels: Vec<Level>,
    current_level: LevelId,
    player: Entity,
    next_entity_id: u32,
}

impl World {
    /// Creates a world generated from [`DEFAULT_SEED`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    /// Creates a world whose generation is fully determined by `seed`.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        let start = CellCoord::new(START_X, START_Y);
        let mut world = Self {
            banner: WELCOME_BANNER,
            seed,
            levels: (0..LEVEL_COUNT).map(|_| Level::open()).collect(),
            current_level: LevelId::SURFACE,
            player: Entity::player(start),
            next_entity_id: EntityId::PLAYER.get() + 1,
        };

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let blueprints = match world.level_mut(LevelId::SURFACE) {
            Some(surface) => generation::generate_surface(&mut surface.map, start, &mut rng),
            None => Vec::new(),
        };
        for blueprint in blueprints {
            if let Err(reason) = world.spawn(LevelId::SURFACE, blueprint) {
                warn!(?reason, ?blueprint, "generated entity could not be placed");
            }
        }

        info!(seed, levels = LEVEL_COUNT, "world generated");
        world
    }

    fn level(&self, level: LevelId) -> Option<&Level> {
        self.levels.get(level.index()?)
    }

    fn level_mut(&mut self, level: LevelId) -> Option<&mut Level> {
        self.levels.get_mut(level.index()?)
    }

    fn spawn(
        &mut self,
        level: LevelId,
        blueprint: EntityBlueprint,
    ) -> Result<EntityId, PlacementError> {
        let id = EntityId::new(self.next_entity_id);
        let target = self.level_mut(level).ok_or(PlacementError::UnknownLevel)?;
        if !target.map.contains(blueprint.cell) {
            return Err(PlacementError::OutOfBounds);
        }
        target.entities.push(Entity::from_blueprint(id, blueprint));
        self.next_entity_id = self.next_entity_id.saturating_add(1);
        Ok(id)
    }

    fn solidify(
        &mut self,
        level: LevelId,
        cell: CellCoord,
        glyph: char,
    ) -> Result<(), PlacementError> {
        let target = self.level_mut(level).ok_or(PlacementError::UnknownLevel)?;
        let tile = target
            .map
            .tile_at_mut(cell)
            .map_err(|_| PlacementError::OutOfBounds)?;
        tile.solidify(glyph, None, None);
        Ok(())
    }

    fn entity_cell(&self, entity: EntityId) -> Option<CellCoord> {
        if entity.is_player() {
            return Some(self.player.cell());
        }
        self.level(self.current_level)?
            .entities
            .iter()
            .find(|candidate| candidate.id() == entity)
            .map(Entity::cell)
    }

    fn set_entity_cell(&mut self, entity: EntityId, cell: CellCoord) {
        if entity.is_player() {
            self.player.set_cell(cell);
            return;
        }
        let current_level = self.current_level;
        if let Some(moved) = self
            .level_mut(current_level)
            .and_then(|level| {
                level
                    .entities
                    .iter_mut()
                    .find(|candidate| candidate.id() == entity)
            })
        {
            moved.set_cell(cell);
        }
    }

    fn move_entity(
        &mut self,
        entity: EntityId,
        dx: i32,
        dy: i32,
        check_collisions: bool,
        out_events: &mut Vec<Event>,
    ) {
        let level_id = self.current_level;
        let Some(from) = self.entity_cell(entity) else {
            block(entity, BlockReason::UnknownEntity, out_events);
            return;
        };
        let Some(level) = self.level(level_id) else {
            block(entity, BlockReason::UnknownEntity, out_events);
            return;
        };

        let Some(target) = from.offset(dx, dy).filter(|cell| level.map.contains(*cell)) else {
            block(entity, BlockReason::OutOfBounds, out_events);
            return;
        };

        if check_collisions {
            match level.map.tile_at(target) {
                Ok(tile) if tile.walkable() => {}
                Ok(_) => {
                    block(entity, BlockReason::SolidTile, out_events);
                    return;
                }
                Err(error) => {
                    debug!(%error, "move target not addressable");
                    block(entity, BlockReason::OutOfBounds, out_events);
                    return;
                }
            }

            let occupants: Vec<(EntityId, bool, PushEffect)> = level
                .entities
                .iter()
                .filter(|occupant| occupant.cell() == target && occupant.id() != entity)
                .map(|occupant| {
                    (
                        occupant.id(),
                        occupant.walkable(),
                        occupant.pushed_by(entity),
                    )
                })
                .collect();

            for (occupant, walkable, effect) in occupants {
                out_events.push(Event::EntityPushed {
                    pushed: occupant,
                    by: entity,
                    level: level_id,
                });
                if let PushEffect::RelocatePlayer(destination) = effect {
                    if self.teleport_player(destination, out_events) {
                        return;
                    }
                }
                if !walkable {
                    block(entity, BlockReason::SolidEntity { blocker: occupant }, out_events);
                    return;
                }
            }
        }

        self.set_entity_cell(entity, target);
        debug!(entity = entity.get(), ?from, ?target, "entity moved");
        out_events.push(Event::EntityMoved {
            entity,
            level: level_id,
            from,
            to: target,
        });
    }

    fn teleport_player(
        &mut self,
        destination: TeleportDestination,
        out_events: &mut Vec<Event>,
    ) -> bool {
        let reachable = self
            .level(destination.level)
            .map_or(false, |level| level.map.contains(destination.cell));
        if !reachable {
            warn!(?destination, "teleport destination does not exist; ignoring");
            return false;
        }

        let from_level = self.current_level;
        self.current_level = destination.level;
        self.player.set_cell(destination.cell);
        info!(
            from = from_level.get(),
            to = destination.level.get(),
            "player teleported"
        );
        out_events.push(Event::PlayerTeleported {
            from_level,
            to_level: destination.level,
            cell: destination.cell,
        });
        true
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

fn block(entity: EntityId, reason: BlockReason, out_events: &mut Vec<Event>) {
    debug!(entity = entity.get(), ?reason, "move blocked");
    out_events.push(Event::MoveBlocked { entity, reason });
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::MovePlayer { direction } => {
            let (dx, dy) = direction.delta();
            world.move_entity(EntityId::PLAYER, dx, dy, true, out_events);
        }
        Command::MoveEntity {
            entity,
            dx,
            dy,
            check_collisions,
        } => world.move_entity(entity, dx, dy, check_collisions, out_events),
        Command::PlaceEntity { level, blueprint } => match world.spawn(level, blueprint) {
            Ok(entity) => out_events.push(Event::EntityPlaced {
                entity,
                level,
                cell: blueprint.cell,
            }),
            Err(reason) => out_events.push(Event::PlacementRejected {
                level,
                cell: blueprint.cell,
                reason,
            }),
        },
        Command::SolidifyTile { level, cell, glyph } => match world.solidify(level, cell, glyph) {
            Ok(()) => out_events.push(Event::TileSolidified { level, cell }),
            Err(reason) => out_events.push(Event::PlacementRejected { level, cell, reason }),
        },
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use super::{Entity, Level, Map, World};
    use landfall_core::LevelId;

    /// Retrieves the welcome banner that adapters may display to players.
    #[must_use]
    pub fn welcome_banner(world: &World) -> &'static str {
        world.banner
    }

    /// Seed the world was generated from.
    #[must_use]
    pub fn seed(world: &World) -> u64 {
        world.seed
    }

    /// Number of levels allocated in the world.
    #[must_use]
    pub fn level_count(world: &World) -> usize {
        world.levels.len()
    }

    /// Level the player currently occupies.
    #[must_use]
    pub fn current_level(world: &World) -> LevelId {
        world.current_level
    }

    /// The player entity.
    #[must_use]
    pub fn player(world: &World) -> &Entity {
        &world.player
    }

    /// Map and entities of the requested level.
    #[must_use]
    pub fn level(world: &World, level: LevelId) -> Option<&Level> {
        world.level(level)
    }

    /// Terrain of the requested level.
    #[must_use]
    pub fn map(world: &World, level: LevelId) -> Option<&Map> {
        world.level(level).map(Level::map)
    }

    /// Entities of the requested level; empty for unknown levels.
    #[must_use]
    pub fn entities(world: &World, level: LevelId) -> &[Entity] {
        world.level(level).map_or(&[], Level::entities)
    }
}
