use crate::Markers;
use std::io::{self, Write};

/// Maps a possibly out-of-range coordinate onto `[0, count)` with the edges
/// of the axis stitched together.
///
/// `count` must be positive.
pub fn normalize(n: i64, count: usize) -> usize {
    debug_assert!(count > 0);
    n.rem_euclid(count as i64) as usize
}

/// Field of `width x height` cells whose opposite edges are adjacent.
///
/// Cells are stored row-major; dimensions are fixed at creation.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    cells: Vec<bool>,
    width: usize,
    height: usize,
}

impl Grid {
    pub fn blank(width: usize, height: usize) -> Self {
        assert!(width >= 1 && height >= 1);
        Self {
            cells: vec![false; width * height],
            width,
            height,
        }
    }

    /// Create a field from a row-major vector of `width * height` cells.
    pub fn from_cells(width: usize, height: usize, cells: Vec<bool>) -> Self {
        assert!(width >= 1 && height >= 1);
        assert_eq!(cells.len(), width * height);
        Self {
            cells,
            width,
            height,
        }
    }

    /// Returns `(width, height)`.
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[col + row * self.width]
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        self.cells[col + row * self.width] = alive;
    }

    /// Like [`Grid::get`], but any coordinate is wrapped around the torus first.
    pub fn get_wrapped(&self, row: i64, col: i64) -> bool {
        self.get(normalize(row, self.height), normalize(col, self.width))
    }

    /// Number of live cells among the 8 surrounding `(row, col)`.
    pub fn count_neighbours(&self, row: usize, col: usize) -> usize {
        let (row, col) = (row as i64, col as i64);
        let mut count = 0;
        for dr in -1..=1 {
            for dc in -1..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                count += self.get_wrapped(row + dr, col + dc) as usize;
            }
        }
        count
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks_exact(self.width)
    }

    /// Writes `height` lines of `width` markers, each followed by `\n`.
    pub fn write_rows(&self, out: &mut impl Write, markers: Markers) -> io::Result<()> {
        let mut line = String::with_capacity(self.width + 1);
        for row in self.rows() {
            line.clear();
            line.extend(row.iter().map(|&c| markers.of(c)));
            line.push('\n');
            out.write_all(line.as_bytes())?;
        }
        Ok(())
    }

    pub fn to_text(&self, markers: Markers) -> String {
        self.rows()
            .flat_map(|row| {
                row.iter()
                    .map(move |&c| markers.of(c))
                    .chain(std::iter::once('\n'))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_wraps_both_ends() {
        assert_eq!(normalize(-1, 25), 24);
        assert_eq!(normalize(25, 25), 0);
        assert_eq!(normalize(0, 25), 0);
        assert_eq!(normalize(24, 25), 24);
        assert_eq!(normalize(-1, 1), 0);
        assert_eq!(normalize(-81, 80), 79);
    }

    #[test]
    fn test_neighbours_across_corner() {
        let mut grid = Grid::blank(5, 4);
        grid.set(3, 4, true);
        grid.set(0, 4, true);
        grid.set(3, 0, true);
        assert_eq!(grid.count_neighbours(0, 0), 3);
        assert_eq!(grid.count_neighbours(3, 4), 2);
        assert_eq!(grid.count_neighbours(1, 2), 0);
    }

    #[test]
    fn test_neighbours_exclude_self() {
        let mut grid = Grid::blank(3, 3);
        for row in 0..3 {
            for col in 0..3 {
                grid.set(row, col, true);
            }
        }
        // On a 3x3 torus every other cell is a neighbour exactly once.
        assert_eq!(grid.count_neighbours(1, 1), 8);
        assert_eq!(grid.count_neighbours(0, 2), 8);
    }

    #[test]
    fn test_write_rows() {
        let mut grid = Grid::blank(3, 2);
        grid.set(0, 1, true);
        grid.set(1, 2, true);
        let mut out = Vec::new();
        grid.write_rows(&mut out, Markers::default()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), ".@.\n..@\n");
        assert_eq!(grid.to_text(Markers::default()), ".@.\n..@\n");
        assert_eq!(grid.population(), 2);
    }
}
