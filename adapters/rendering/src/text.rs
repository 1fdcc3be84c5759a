//! Plain-text display sink used by the headless front end.

use std::io::Write;

use anyhow::{Context, Result as AnyResult};

use crate::{Color, DisplaySink};

/// Writes every presented frame as rows of characters, colors discarded.
#[derive(Debug)]
pub struct TextSink<W> {
    writer: W,
    columns: u32,
    rows: u32,
    cells: Vec<char>,
}

impl<W: Write> TextSink<W> {
    /// Creates a sink with a `columns` x `rows` character buffer.
    pub fn new(writer: W, columns: u32, rows: u32) -> Self {
        let capacity_u64 = u64::from(columns) * u64::from(rows);
        let capacity = usize::try_from(capacity_u64).unwrap_or(0);
        Self {
            writer,
            columns,
            rows,
            cells: vec![' '; capacity],
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.writer
    }

    fn index(&self, column: u32, row: u32) -> Option<usize> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        let width = usize::try_from(self.columns).ok()?;
        Some(usize::try_from(row).ok()? * width + usize::try_from(column).ok()?)
    }
}

impl<W: Write> DisplaySink for TextSink<W> {
    fn clear_buffer(&mut self) {
        self.cells.fill(' ');
    }

    fn draw_glyph_at(
        &mut self,
        column: u32,
        row: u32,
        glyph: char,
        _foreground: Color,
        _background: Color,
    ) {
        if let Some(index) = self.index(column, row) {
            if let Some(slot) = self.cells.get_mut(index) {
                *slot = glyph;
            }
        }
    }

    fn present_frame(&mut self) -> AnyResult<()> {
        let width = usize::try_from(self.columns).unwrap_or(0).max(1);
        for line in self.cells.chunks(width) {
            let text: String = line.iter().collect();
            writeln!(self.writer, "{}", text.trim_end()).context("failed to write frame row")?;
        }
        writeln!(self.writer).context("failed to write frame separator")?;
        self.writer.flush().context("failed to flush frame")
    }
}
