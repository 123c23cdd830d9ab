//! Sets of board cells backed by a 64-bit mask.
//!
//! Bit `row * 8 + col` represents the cell `(row, col)`. Iteration yields
//! cells in ascending index order, so results are deterministic.

use crate::Cell;
use std::fmt;

/// A set of on-board cells.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct CellSet(u64);

impl CellSet {
    /// The empty set.
    pub const EMPTY: CellSet = CellSet(0);

    /// Every cell on the board.
    pub const FULL: CellSet = CellSet(!0);

    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        CellSet(bits)
    }

    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of cells in the set.
    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true if the cell is in the set. Off-board cells never are.
    #[inline]
    pub const fn contains(self, cell: Cell) -> bool {
        match cell.index() {
            Some(i) => (self.0 >> i) & 1 == 1,
            None => false,
        }
    }

    /// Adds a cell. Off-board cells are ignored; returns whether the cell was added.
    #[inline]
    pub fn insert(&mut self, cell: Cell) -> bool {
        match cell.index() {
            Some(i) => {
                let had = (self.0 >> i) & 1 == 1;
                self.0 |= 1u64 << i;
                !had
            }
            None => false,
        }
    }

    #[inline]
    pub fn remove(&mut self, cell: Cell) {
        if let Some(i) = cell.index() {
            self.0 &= !(1u64 << i);
        }
    }

    #[inline]
    pub const fn union(self, other: CellSet) -> CellSet {
        CellSet(self.0 | other.0)
    }

    #[inline]
    pub const fn intersection(self, other: CellSet) -> CellSet {
        CellSet(self.0 & other.0)
    }

    /// Returns true if every cell of `self` is in `other`.
    #[inline]
    pub const fn is_subset(self, other: CellSet) -> bool {
        self.0 & !other.0 == 0
    }

    /// Pops and returns the cell with the lowest index.
    #[inline]
    pub fn pop_first(&mut self) -> Option<Cell> {
        if self.0 == 0 {
            None
        } else {
            let i = self.0.trailing_zeros() as u8;
            self.0 &= self.0 - 1;
            Cell::from_index(i)
        }
    }

    #[inline]
    pub fn iter(self) -> CellSetIter {
        CellSetIter(self)
    }
}

impl fmt::Debug for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the cells of a [`CellSet`].
pub struct CellSetIter(CellSet);

impl Iterator for CellSetIter {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_first()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.0.len();
        (count, Some(count))
    }
}

impl ExactSizeIterator for CellSetIter {}

impl IntoIterator for CellSet {
    type Item = Cell;
    type IntoIter = CellSetIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        CellSetIter(self)
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        let mut set = CellSet::EMPTY;
        for cell in iter {
            set.insert(cell);
        }
        set
    }
}

impl Extend<Cell> for CellSet {
    fn extend<I: IntoIterator<Item = Cell>>(&mut self, iter: I) {
        for cell in iter {
            self.insert(cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_ignores_off_board() {
        let mut set = CellSet::EMPTY;
        assert!(set.insert(Cell::new(0, 0)));
        assert!(!set.insert(Cell::new(0, 0)));
        assert!(!set.insert(Cell::new(-1, 3)));
        assert!(!set.insert(Cell::new(2, 8)));
        assert_eq!(set.len(), 1);
        assert!(set.contains(Cell::new(0, 0)));
        assert!(!set.contains(Cell::new(-1, 3)));
    }

    #[test]
    fn iteration_is_ascending() {
        let set: CellSet = [Cell::new(7, 7), Cell::new(0, 1), Cell::new(3, 2)]
            .into_iter()
            .collect();
        let cells: Vec<Cell> = set.into_iter().collect();
        assert_eq!(cells, vec![Cell::new(0, 1), Cell::new(3, 2), Cell::new(7, 7)]);
    }

    #[test]
    fn set_operations() {
        let a: CellSet = [Cell::new(0, 0), Cell::new(1, 1)].into_iter().collect();
        let b: CellSet = [Cell::new(1, 1), Cell::new(2, 2)].into_iter().collect();
        assert_eq!(a.union(b).len(), 3);
        assert_eq!(a.intersection(b).len(), 1);
        assert!(a.intersection(b).is_subset(a));
        assert!(!a.is_subset(b));
    }

    #[test]
    fn remove_and_full() {
        let mut set = CellSet::FULL;
        assert_eq!(set.len(), 64);
        set.remove(Cell::new(4, 4));
        assert_eq!(set.len(), 63);
        assert!(!set.contains(Cell::new(4, 4)));
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn collect_then_iterate_keeps_on_board_cells(
                coords in prop::collection::vec((-3i8..11, -3i8..11), 0..40)
            ) {
                let cells: Vec<Cell> = coords.iter().map(|&(r, c)| Cell::new(r, c)).collect();
                let set: CellSet = cells.iter().copied().collect();
                for cell in set {
                    prop_assert!(cell.is_on_board());
                    prop_assert!(cells.contains(&cell));
                }
                for cell in &cells {
                    prop_assert_eq!(set.contains(*cell), cell.is_on_board());
                }
            }
        }
    }
}
