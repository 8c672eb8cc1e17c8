use ndarray::Array2;

/// Single coordinate axis used for board height, width, and positions.
pub type Coord = u8;

/// Count type used for total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Whether `a` and `b` touch horizontally, vertically or diagonally. A cell is not adjacent to itself.
pub const fn is_adjacent(a: Coord2, b: Coord2) -> bool {
    let row_diff = a.0.abs_diff(b.0);
    let col_diff = a.1.abs_diff(b.1);
    row_diff <= 1 && col_diff <= 1 && (row_diff | col_diff) != 0
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        let (rows, cols) = self.dim();
        NeighborIter::new(index, (rows as Coord, cols as Coord))
    }
}

const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (max_row, max_col) = bounds;

    let next_row = row.checked_add_signed(d_row.try_into().ok()?)?;
    if next_row >= max_row {
        return None;
    }

    let next_col = col.checked_add_signed(d_col.try_into().ok()?)?;
    if next_col >= max_col {
        return None;
    }

    Some((next_row, next_col))
}

#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn adjacency_covers_all_eight_directions() {
        let center = (3, 3);
        for (row, col) in [(2, 2), (2, 3), (2, 4), (3, 2), (3, 4), (4, 2), (4, 3), (4, 4)] {
            assert!(is_adjacent(center, (row, col)), "({row}, {col})");
        }
        assert!(!is_adjacent(center, center));
        assert!(!is_adjacent(center, (5, 3)));
        assert!(!is_adjacent(center, (1, 1)));
    }

    #[test]
    fn neighbors_are_clipped_at_the_corner() {
        let grid: Array2<u8> = Array2::default([3, 2]);

        let neighbors: Vec<_> = grid.iter_neighbors((0, 0)).collect();

        assert_eq!(neighbors, [(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn neighbors_of_interior_cell_are_all_adjacent() {
        let grid: Array2<u8> = Array2::default([4, 4]);

        let neighbors: Vec<_> = grid.iter_neighbors((1, 2)).collect();

        assert_eq!(neighbors.len(), 8);
        assert!(neighbors.iter().all(|&pos| is_adjacent((1, 2), pos)));
    }
}
