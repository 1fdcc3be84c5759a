#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Landfall engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters translate raw input into
//! [`Intent`] values, systems turn intents into [`Command`] values describing
//! desired mutations, the world executes those commands via its `apply` entry
//! point, and then broadcasts [`Event`] values describing what actually
//! happened. Rejected moves are reported as events, never as errors.

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "Welcome to Landfall.";

/// Number of tile columns in every level map.
pub const MAP_WIDTH: u32 = 70;

/// Number of tile rows in every level map.
pub const MAP_HEIGHT: u32 = 50;

/// Number of glyph columns presented by display adapters.
pub const SCREEN_WIDTH: u32 = 80;

/// Number of glyph rows presented by display adapters.
pub const SCREEN_HEIGHT: u32 = 50;

/// Column of the landing site on the surface level.
pub const START_X: u32 = 35;

/// Row of the landing site on the surface level.
pub const START_Y: u32 = 25;

/// Number of levels allocated when the world is initialised.
pub const LEVEL_COUNT: u32 = 5;

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Requests that the player take a single step in the provided direction.
    MovePlayer {
        /// Direction of travel for the attempted step.
        direction: Direction,
    },
    /// Requests that an entity move by an arbitrary offset.
    MoveEntity {
        /// Identifier of the entity attempting to move.
        entity: EntityId,
        /// Column offset of the move.
        dx: i32,
        /// Row offset of the move.
        dy: i32,
        /// Whether terrain and occupants are consulted before committing.
        check_collisions: bool,
    },
    /// Requests that a new entity be added to a level's entity list.
    PlaceEntity {
        /// Level that will own the entity.
        level: LevelId,
        /// Description of the entity to create.
        blueprint: EntityBlueprint,
    },
    /// Requests that a tile be turned into impassable terrain.
    SolidifyTile {
        /// Level containing the tile.
        level: LevelId,
        /// Cell addressing the tile.
        cell: CellCoord,
        /// Glyph drawn for the solidified tile.
        glyph: char,
    },
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Confirms that an entity moved between two cells on a level.
    EntityMoved {
        /// Identifier of the entity that moved.
        entity: EntityId,
        /// Level on which the move happened.
        level: LevelId,
        /// Cell occupied before the move.
        from: CellCoord,
        /// Cell occupied after the move.
        to: CellCoord,
    },
    /// Reports that a move was rejected without changing any position.
    MoveBlocked {
        /// Identifier of the entity whose move was rejected.
        entity: EntityId,
        /// Specific reason the move failed.
        reason: BlockReason,
    },
    /// Reports that an entity attempted to enter a cell occupied by another.
    EntityPushed {
        /// Entity occupying the contested cell.
        pushed: EntityId,
        /// Entity that attempted to enter the cell.
        by: EntityId,
        /// Level on which the push happened.
        level: LevelId,
    },
    /// Announces that the player was relocated by a teleport.
    PlayerTeleported {
        /// Level the player left.
        from_level: LevelId,
        /// Level that became active.
        to_level: LevelId,
        /// Cell the player occupies after the teleport.
        cell: CellCoord,
    },
    /// Confirms that an entity was added to a level.
    EntityPlaced {
        /// Identifier assigned to the entity by the world.
        entity: EntityId,
        /// Level that owns the entity.
        level: LevelId,
        /// Cell the entity occupies.
        cell: CellCoord,
    },
    /// Confirms that a tile was solidified.
    TileSolidified {
        /// Level containing the tile.
        level: LevelId,
        /// Cell addressing the tile.
        cell: CellCoord,
    },
    /// Reports that a placement or terrain request was rejected.
    PlacementRejected {
        /// Level named by the request.
        level: LevelId,
        /// Cell named by the request.
        cell: CellCoord,
        /// Specific reason the request failed.
        reason: PlacementError,
    },
}

/// Reasons a movement request may be rejected by the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockReason {
    /// The target cell lies outside the map grid.
    OutOfBounds,
    /// The target tile is not walkable.
    SolidTile,
    /// A non-walkable entity occupies the target cell.
    SolidEntity {
        /// Identifier of the blocking entity.
        blocker: EntityId,
    },
    /// No entity with the requested identifier exists on the current level.
    UnknownEntity,
}

/// Reasons a placement or terrain request may be rejected by the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlacementError {
    /// The level index does not name an allocated level.
    UnknownLevel,
    /// The requested cell lies outside the map grid.
    OutOfBounds,
}

/// Discrete player intent produced by input adapters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Intent {
    /// Step toward decreasing row indices.
    MoveUp,
    /// Step toward increasing row indices.
    MoveDown,
    /// Step toward decreasing column indices.
    MoveLeft,
    /// Step toward increasing column indices.
    MoveRight,
    /// Switch between windowed and fullscreen presentation.
    ToggleFullscreen,
    /// Leave the game loop.
    Quit,
    /// No actionable input was observed.
    #[default]
    None,
}

impl Intent {
    /// Direction of travel requested by the intent, if it is a movement intent.
    #[must_use]
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::MoveUp => Some(Direction::North),
            Self::MoveDown => Some(Direction::South),
            Self::MoveLeft => Some(Direction::West),
            Self::MoveRight => Some(Direction::East),
            Self::ToggleFullscreen | Self::Quit | Self::None => None,
        }
    }
}

/// Instruction returned to the game loop after an intent was handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Flow {
    /// Keep running the loop.
    #[default]
    Continue,
    /// Keep running and flip the adapter's fullscreen state.
    ToggleFullscreen,
    /// Stop the loop.
    Quit,
}

/// Cardinal movement directions available to entities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Movement toward decreasing row indices.
    North,
    /// Movement toward increasing column indices.
    East,
    /// Movement toward increasing row indices.
    South,
    /// Movement toward decreasing column indices.
    West,
}

impl Direction {
    /// Unit offset `(dx, dy)` travelled by a single step.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::East => (1, 0),
            Self::South => (0, 1),
            Self::West => (-1, 0),
        }
    }
}

/// Color expressed as byte RGB components.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    red: u8,
    green: u8,
    blue: u8,
}

impl Rgb {
    /// Pure white.
    pub const WHITE: Self = Self::new(0xff, 0xff, 0xff);
    /// Pure black.
    pub const BLACK: Self = Self::new(0x00, 0x00, 0x00);
    /// Neutral grey used for open floor and teleports.
    pub const GREY: Self = Self::new(0x7f, 0x7f, 0x7f);

    /// Creates a new color from byte RGB components.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Red component of the color.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Green component of the color.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Blue component of the color.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }
}

/// Unique identifier assigned to an entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u32);

impl EntityId {
    /// Identifier reserved for the player.
    pub const PLAYER: Self = Self(0);

    /// Creates a new entity identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Reports whether the identifier names the player.
    #[must_use]
    pub const fn is_player(&self) -> bool {
        self.0 == Self::PLAYER.0
    }
}

/// Index of a level within the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LevelId(u32);

impl LevelId {
    /// The surface level where the player lands.
    pub const SURFACE: Self = Self(0);

    /// Creates a new level identifier.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Identifier converted into a collection index.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        usize::try_from(self.0).ok()
    }
}

/// Location of a single grid cell expressed as column and row coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Cell reached by adding the provided offset, if it stays non-negative.
    ///
    /// Upper bounds are not checked here; callers compare against the map.
    #[must_use]
    pub fn offset(self, dx: i32, dy: i32) -> Option<CellCoord> {
        let column = self.column.checked_add_signed(dx)?;
        let row = self.row.checked_add_signed(dy)?;
        Some(CellCoord::new(column, row))
    }

    /// Squared Euclidean distance between two cell coordinates.
    #[must_use]
    pub fn distance_squared(self, other: CellCoord) -> u64 {
        let dx = u64::from(self.column.abs_diff(other.column));
        let dy = u64::from(self.row.abs_diff(other.row));
        dx * dx + dy * dy
    }
}

/// Place and level a teleport sends the player to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TeleportDestination {
    /// Cell the player lands on.
    pub cell: CellCoord,
    /// Level that becomes active.
    pub level: LevelId,
}

impl TeleportDestination {
    /// Creates a destination at the provided cell of a level.
    #[must_use]
    pub const fn new(cell: CellCoord, level: LevelId) -> Self {
        Self { cell, level }
    }
}

/// Capability an entity exposes when another entity tries to enter its cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Interaction {
    /// Pushing the entity has no effect.
    #[default]
    None,
    /// Pushing the entity relocates the player.
    Teleport(TeleportDestination),
    /// Landing craft; pushes are reserved for future behaviour.
    Spaceship,
}

/// Description of an entity to be created by the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EntityBlueprint {
    /// Cell the entity occupies.
    pub cell: CellCoord,
    /// Glyph drawn for the entity.
    pub glyph: char,
    /// Glyph color.
    pub foreground: Rgb,
    /// Cell background color.
    pub background: Rgb,
    /// Whether other entities may move onto the entity's cell.
    pub walkable: bool,
    /// Push interaction exposed by the entity.
    pub interaction: Interaction,
}

impl EntityBlueprint {
    /// Teleport drawn as a grey `>` that sends the player to `destination`.
    #[must_use]
    pub const fn teleport(cell: CellCoord, destination: TeleportDestination) -> Self {
        Self {
            cell,
            glyph: '>',
            foreground: Rgb::GREY,
            background: Rgb::BLACK,
            walkable: true,
            interaction: Interaction::Teleport(destination),
        }
    }

    /// Landing craft drawn as a white `O` on white.
    #[must_use]
    pub const fn spaceship(cell: CellCoord) -> Self {
        Self {
            cell,
            glyph: 'O',
            foreground: Rgb::WHITE,
            background: Rgb::WHITE,
            walkable: true,
            interaction: Interaction::Spaceship,
        }
    }

    /// Plain entity without a push interaction.
    #[must_use]
    pub const fn prop(cell: CellCoord, glyph: char, walkable: bool) -> Self {
        Self {
            cell,
            glyph,
            foreground: Rgb::WHITE,
            background: Rgb::BLACK,
            walkable,
            interaction: Interaction::None,
        }
    }
}
