//! Actors occupying grid cells and their push interactions.

use landfall_core::{CellCoord, EntityBlueprint, EntityId, Interaction, Rgb, TeleportDestination};

/// State change requested by a push interaction, applied by the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PushEffect {
    /// The push leaves the world untouched.
    None,
    /// The player moves to the destination and its level becomes active.
    RelocatePlayer(TeleportDestination),
}

/// Mobile or static actor placed on a level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entity {
    id: EntityId,
    cell: CellCoord,
    glyph: char,
    foreground: Rgb,
    background: Rgb,
    walkable: bool,
    interaction: Interaction,
}

impl Entity {
    pub(crate) const fn player(cell: CellCoord) -> Self {
        Self {
            id: EntityId::PLAYER,
            cell,
            glyph: '@',
            foreground: Rgb::WHITE,
            background: Rgb::BLACK,
            walkable: true,
            interaction: Interaction::None,
        }
    }

    pub(crate) const fn from_blueprint(id: EntityId, blueprint: EntityBlueprint) -> Self {
        Self {
            id,
            cell: blueprint.cell,
            glyph: blueprint.glyph,
            foreground: blueprint.foreground,
            background: blueprint.background,
            walkable: blueprint.walkable,
            interaction: blueprint.interaction,
        }
    }

    /// Identifier assigned by the world.
    #[must_use]
    pub const fn id(&self) -> EntityId {
        self.id
    }

    /// Cell currently occupied.
    #[must_use]
    pub const fn cell(&self) -> CellCoord {
        self.cell
    }

    /// Glyph drawn for the entity.
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

    /// Whether other entities may move onto this entity's cell.
    #[must_use]
    pub const fn walkable(&self) -> bool {
        self.walkable
    }

    /// Push interaction exposed by the entity.
    #[must_use]
    pub const fn interaction(&self) -> Interaction {
        self.interaction
    }

    /// Runs the push interaction for an entity trying to enter this cell.
    #[must_use]
    pub fn pushed_by(&self, mover: EntityId) -> PushEffect {
        match self.interaction {
            Interaction::None => PushEffect::None,
            Interaction::Teleport(destination) => {
                if mover.is_player() {
                    PushEffect::RelocatePlayer(destination)
                } else {
                    PushEffect::None
                }
            }
            Interaction::Spaceship => spaceship_pushed_by(mover),
        }
    }

    pub(crate) fn set_cell(&mut self, cell: CellCoord) {
        self.cell = cell;
    }
}

#[allow(clippy::if_same_then_else)]
fn spaceship_pushed_by(mover: EntityId) -> PushEffect {
    if mover.is_player() {
        // Boarding menu goes here.
        PushEffect::None
    } else {
        // Intruders will be destroyed here.
        PushEffect::None
    }
}
