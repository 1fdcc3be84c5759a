//! Seeded terrain and entity generation for the surface level.

use landfall_core::{CellCoord, EntityBlueprint, LevelId, TeleportDestination};
use rand::{seq::SliceRandom, Rng};
use tracing::{debug, warn};

use crate::Map;

/// Landing-site border glyphs laid out relative to the start cell.
const LANDING_SITE: [(i32, i32, char); 5] = [
    (-1, -1, '╔'),
    (0, -1, '═'),
    (1, -1, '╗'),
    (-1, 0, '╚'),
    (1, 0, '╝'),
];

/// Cells this close to the start (squared distance) stay clear of mountains.
const CLEARING_RADIUS_SQUARED: u64 = 16;
const MOUNTAIN_PROBABILITY: f64 = 0.2;
const MOUNTAIN_GLYPHS: [char; 2] = ['^', '#'];

/// Random draws attempted before falling back to a scan of the map.
pub(crate) const PLACEMENT_ATTEMPTS: usize = 10_000;

/// Where the surface teleport leads.
pub const SURFACE_TELEPORT_DESTINATION: TeleportDestination =
    TeleportDestination::new(CellCoord::new(10, 10), LevelId::new(1));

/// Shapes the surface map and returns the entities that populate it.
pub(crate) fn generate_surface<R: Rng>(
    map: &mut Map,
    start: CellCoord,
    rng: &mut R,
) -> Vec<EntityBlueprint> {
    carve_landing_site(map, start);
    scatter_mountains(map, start, rng);

    let mut blueprints = Vec::with_capacity(2);
    match pick_walkable_cell(map, rng) {
        Some(cell) => {
            blueprints.push(EntityBlueprint::teleport(cell, SURFACE_TELEPORT_DESTINATION));
        }
        None => warn!("surface has no walkable tile; teleport not placed"),
    }
    blueprints.push(EntityBlueprint::spaceship(start));
    blueprints
}

fn carve_landing_site(map: &mut Map, start: CellCoord) {
    for (dx, dy, glyph) in LANDING_SITE {
        let Some(cell) = start.offset(dx, dy) else {
            warn!(?start, dx, dy, "landing site border falls off the map");
            continue;
        };
        match map.tile_at_mut(cell) {
            Ok(tile) => tile.solidify(glyph, None, None),
            Err(error) => warn!(%error, "landing site border falls off the map"),
        }
    }
}

fn scatter_mountains<R: Rng>(map: &mut Map, start: CellCoord, rng: &mut R) {
    for column in 0..map.columns() {
        for row in 0..map.rows() {
            let cell = CellCoord::new(column, row);
            if cell.distance_squared(start) <= CLEARING_RADIUS_SQUARED {
                continue;
            }
            if !rng.gen_bool(MOUNTAIN_PROBABILITY) {
                continue;
            }
            let Some(&glyph) = MOUNTAIN_GLYPHS.choose(rng) else {
                continue;
            };
            if let Ok(tile) = map.tile_at_mut(cell) {
                tile.solidify(glyph, None, None);
            }
        }
    }
}

/// Picks a walkable cell uniformly at random.
///
/// Sampling gives up after [`PLACEMENT_ATTEMPTS`] draws and returns the first
/// walkable cell in row-major order instead, or `None` when every tile is solid.
pub(crate) fn pick_walkable_cell<R: Rng>(map: &Map, rng: &mut R) -> Option<CellCoord> {
    if map.columns() == 0 || map.rows() == 0 {
        return None;
    }

    for _ in 0..PLACEMENT_ATTEMPTS {
        let column = rng.gen_range(0..map.columns());
        let row = rng.gen_range(0..map.rows());
        let cell = CellCoord::new(column, row);
        if map.tile_at(cell).map_or(false, |tile| tile.walkable()) {
            return Some(cell);
        }
    }

    debug!("rejection sampling exhausted; scanning for a walkable tile");
    map.iter()
        .find(|(_, tile)| tile.walkable())
        .map(|(cell, _)| cell)
}
