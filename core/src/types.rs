use ndarray::Array2;

/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for hazard counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional grid position `(row, column)`, row-major.
pub type Pos = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Pos {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Total cell count of a `rows x columns` grid, saturating at the
/// count type's maximum.
pub const fn cell_total(rows: Coord, columns: Coord) -> CellCount {
    let rows = rows as CellCount;
    let columns = columns as CellCount;
    rows.saturating_mul(columns)
}

/// All positions of a `rows x columns` grid in row-major order.
pub fn all_positions(rows: Coord, columns: Coord) -> impl Iterator<Item = Pos> {
    (0..rows).flat_map(move |row| (0..columns).map(move |column| (row, column)))
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Pos) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Pos) -> NeighborIter {
        let dim = self.dim();
        let size = (dim.0.try_into().unwrap(), dim.1.try_into().unwrap());
        NeighborIter::new(index, size)
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

/// Applies `delta` to `pos`, returning a value only when it remains in bounds.
fn apply_delta(pos: Pos, delta: (isize, isize), bounds: Pos) -> Option<Pos> {
    let (row, column) = pos;
    let (d_row, d_column) = delta;
    let (max_row, max_column) = bounds;

    let next_row = row.checked_add_signed(d_row.try_into().ok()?)?;
    if next_row >= max_row {
        return None;
    }

    let next_column = column.checked_add_signed(d_column.try_into().ok()?)?;
    if next_column >= max_column {
        return None;
    }

    Some((next_row, next_column))
}

/// Iterator over the up-to-8 in-bounds neighbors of a position.
#[derive(Debug)]
pub struct NeighborIter {
    center: Pos,
    bounds: Pos,
    index: u8,
}

impl NeighborIter {
    fn new(center: Pos, bounds: Pos) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Pos;

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

    fn neighbors_of(pos: Pos, rows: Coord, columns: Coord) -> Vec<Pos> {
        let grid: Array2<u8> = Array2::default((rows as usize, columns as usize));
        grid.iter_neighbors(pos).collect()
    }

    #[test]
    fn center_cell_has_eight_neighbors() {
        let neighbors = neighbors_of((1, 1), 3, 3);
        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&(1, 1)));
    }

    #[test]
    fn corner_cell_has_three_neighbors() {
        let mut neighbors = neighbors_of((0, 0), 3, 3);
        neighbors.sort();
        assert_eq!(neighbors, vec![(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn edge_cell_has_five_neighbors() {
        assert_eq!(neighbors_of((0, 1), 3, 3).len(), 5);
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        assert_eq!(neighbors_of((0, 0), 1, 1), Vec::<Pos>::new());
    }

    #[test]
    fn cell_total_saturates() {
        assert_eq!(cell_total(9, 9), 81);
        assert_eq!(cell_total(255, 255), 65025);
    }

    #[test]
    fn all_positions_is_row_major_and_complete() {
        let positions: Vec<Pos> = all_positions(2, 3).collect();
        assert_eq!(
            positions,
            vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]
        );
    }
}
