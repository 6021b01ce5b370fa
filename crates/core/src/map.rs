//! Map module - the immutable tile grid the renderer samples
//!
//! Cells are stored in a flat row-major vector (`y * width + x`).
//! Coordinates: (x, y) where x is the column and y the row, both from 0.
//! Anything outside the grid is treated as wall by [`Map::kind_at_or_wall`].

use std::fs::read_to_string;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::types::CellKind;

/// Built-in layout used when no map file is given.
pub const DEFAULT_LAYOUT: &str = "\
#########.......
#...............
#.......########
#..............#
#......##......#
#......##......#
#..............#
###............#
##.............#
#......####..###
#......#.......#
#......#.......#
#..............#
#......#########
#..............#
################";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    width: usize,
    height: usize,
    cells: Vec<CellKind>,
}

impl Map {
    /// Build a map from row-major cells.
    pub fn from_cells(width: usize, height: usize, cells: Vec<CellKind>) -> Result<Self> {
        if width == 0 || height == 0 {
            bail!("map: dimensions must be non-zero, got {}x{}", width, height);
        }
        if cells.len() != width * height {
            bail!(
                "map: expected {} cells for {}x{}, got {}",
                width * height,
                width,
                height,
                cells.len()
            );
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Parse a text layout: one row per line, `#` for wall and `.` for open.
    ///
    /// Blank lines and trailing whitespace are ignored; every row must have
    /// the same width.
    pub fn parse(text: &str) -> Result<Self> {
        let mut width = None;
        let mut cells = Vec::new();
        let mut height = 0;

        for (line_no, line) in text.lines().enumerate() {
            let row = line.trim_end();
            if row.is_empty() {
                continue;
            }
            let row_width = row.chars().count();
            match width {
                None => width = Some(row_width),
                Some(w) if w != row_width => bail!(
                    "map: line {} has width {}, expected {}",
                    line_no + 1,
                    row_width,
                    w
                ),
                Some(_) => {}
            }
            for (col, ch) in row.chars().enumerate() {
                let kind = CellKind::from_char(ch).with_context(|| {
                    format!(
                        "map: unknown cell {:?} at line {}, column {}",
                        ch,
                        line_no + 1,
                        col + 1
                    )
                })?;
                cells.push(kind);
            }
            height += 1;
        }

        let Some(width) = width else {
            bail!("map: layout is empty");
        };
        Self::from_cells(width, height, cells)
    }

    /// Read and parse a map file.
    pub fn load(path: &Path) -> Result<Self> {
        log::info!("loading map at {}", path.display());
        let text = read_to_string(path)
            .with_context(|| format!("map: failed to read {}", path.display()))?;
        let map = Self::parse(&text)?;
        log::info!("loaded {}x{} map", map.width, map.height);
        Ok(map)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    /// Cell kind at (x, y), or `None` outside the grid.
    pub fn kind_at(&self, x: i32, y: i32) -> Option<CellKind> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Cell kind at (x, y) with out-of-range treated as wall.
    pub fn kind_at_or_wall(&self, x: i32, y: i32) -> CellKind {
        self.kind_at(x, y).unwrap_or(CellKind::Wall)
    }

    /// Iterate rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellKind]> {
        self.cells.chunks(self.width)
    }
}

impl Default for Map {
    fn default() -> Self {
        let cells = DEFAULT_LAYOUT
            .lines()
            .flat_map(|row| row.chars())
            .map(|ch| {
                if ch == crate::types::WALL_CHAR {
                    CellKind::Wall
                } else {
                    CellKind::Open
                }
            })
            .collect();
        Self {
            width: 16,
            height: 16,
            cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_map_matches_parsed_layout() {
        let parsed = Map::parse(DEFAULT_LAYOUT).unwrap();
        assert_eq!(parsed, Map::default());
        assert_eq!(parsed.width(), 16);
        assert_eq!(parsed.height(), 16);
    }

    #[test]
    fn parse_reads_rows_top_to_bottom() {
        let map = Map::parse("..\n.#\n").unwrap();
        assert_eq!(map.kind_at(0, 0), Some(CellKind::Open));
        assert_eq!(map.kind_at(1, 1), Some(CellKind::Wall));
        assert_eq!(map.kind_at(1, 0), Some(CellKind::Open));
    }

    #[test]
    fn out_of_bounds_is_none_or_wall() {
        let map = Map::parse("..\n..").unwrap();
        assert_eq!(map.kind_at(-1, 0), None);
        assert_eq!(map.kind_at(2, 0), None);
        assert_eq!(map.kind_at(0, 2), None);
        assert_eq!(map.kind_at_or_wall(-1, 0), CellKind::Wall);
        assert_eq!(map.kind_at_or_wall(0, 0), CellKind::Open);
        assert!(!map.in_bounds(0, -1));
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        let err = Map::parse("...\n..\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn parse_rejects_unknown_cells() {
        let err = Map::parse("..\n.x\n").unwrap_err();
        assert!(err.to_string().contains("column 2"));
    }

    #[test]
    fn parse_rejects_empty_layout() {
        assert!(Map::parse("\n\n").is_err());
    }

    #[test]
    fn from_cells_checks_length() {
        assert!(Map::from_cells(2, 2, vec![CellKind::Open; 3]).is_err());
        assert!(Map::from_cells(2, 2, vec![CellKind::Open; 4]).is_ok());
    }
}
