//! Fixed-size tile grid backing a single level.

use landfall_core::CellCoord;
use thiserror::Error;

use crate::Tile;

/// Errors raised when addressing tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MapError {
    /// The requested cell lies outside the grid.
    #[error("cell ({column}, {row}) lies outside the {columns}x{rows} map")]
    OutOfBounds {
        /// Requested column.
        column: u32,
        /// Requested row.
        row: u32,
        /// Number of columns in the map.
        columns: u32,
        /// Number of rows in the map.
        rows: u32,
    },
}

/// Rectangular grid of tiles stored in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Map {
    columns: u32,
    rows: u32,
    tiles: Vec<Tile>,
}

impl Map {
    /// Creates a map filled with open floor.
    #[must_use]
    pub fn new(columns: u32, rows: u32) -> Self {
        let capacity_u64 = u64::from(columns) * u64::from(rows);
        let capacity = usize::try_from(capacity_u64).unwrap_or(0);
        Self {
            columns,
            rows,
            tiles: vec![Tile::floor(); capacity],
        }
    }

    /// Number of columns contained in the map.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows contained in the map.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Reports whether the cell addresses a tile of this map.
    #[must_use]
    pub const fn contains(&self, cell: CellCoord) -> bool {
        cell.column() < self.columns && cell.row() < self.rows
    }

    /// Tile at the provided cell.
    pub fn tile_at(&self, cell: CellCoord) -> Result<&Tile, MapError> {
        let index = self.index(cell)?;
        self.tiles.get(index).ok_or(self.out_of_bounds(cell))
    }

    /// Mutable tile at the provided cell.
    pub fn tile_at_mut(&mut self, cell: CellCoord) -> Result<&mut Tile, MapError> {
        let index = self.index(cell)?;
        let error = self.out_of_bounds(cell);
        self.tiles.get_mut(index).ok_or(error)
    }

    /// Iterates over every tile together with its cell, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (CellCoord, &Tile)> + '_ {
        let columns = self.columns;
        (0..self.rows)
            .flat_map(move |row| (0..columns).map(move |column| CellCoord::new(column, row)))
            .zip(self.tiles.iter())
    }

    fn index(&self, cell: CellCoord) -> Result<usize, MapError> {
        if !self.contains(cell) {
            return Err(self.out_of_bounds(cell));
        }
        let row = usize::try_from(cell.row()).map_err(|_| self.out_of_bounds(cell))?;
        let column = usize::try_from(cell.column()).map_err(|_| self.out_of_bounds(cell))?;
        let width = usize::try_from(self.columns).map_err(|_| self.out_of_bounds(cell))?;
        Ok(row * width + column)
    }

    const fn out_of_bounds(&self, cell: CellCoord) -> MapError {
        MapError::OutOfBounds {
            column: cell.column(),
            row: cell.row(),
            columns: self.columns,
            rows: self.rows,
        }
    }
}
