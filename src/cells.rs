use crate::Pos2;
use std::collections::{HashSet, hash_set};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiveSet {
    cells: HashSet<Pos2>,
}

impl LiveSet {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn contains(&self, cell: Pos2) -> bool {
        self.cells.contains(&cell)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> hash_set::Iter<'_, Pos2> {
        self.cells.iter()
    }

    pub fn sorted(&self) -> Vec<Pos2> {
        let mut cells: Vec<Pos2> = self.cells.iter().copied().collect();
        cells.sort_unstable();
        cells
    }

    pub fn translate(&self, offset: Pos2) -> Self {
        self.cells.iter().map(|&cell| cell + offset).collect()
    }
}

#[inline]
pub fn contains(set: &LiveSet, cell: Pos2) -> bool {
    set.contains(cell)
}

impl FromIterator<Pos2> for LiveSet {
    fn from_iter<T: IntoIterator<Item = Pos2>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}
impl From<Vec<Pos2>> for LiveSet {
    #[inline]
    fn from(cells: Vec<Pos2>) -> Self {
        cells.into_iter().collect()
    }
}
impl<const N: usize> From<[(i64, i64); N]> for LiveSet {
    fn from(cells: [(i64, i64); N]) -> Self {
        cells.into_iter().map(Pos2::from).collect()
    }
}

impl IntoIterator for LiveSet {
    type Item = Pos2;
    type IntoIter = hash_set::IntoIter<Pos2>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}
impl<'a> IntoIterator for &'a LiveSet {
    type Item = &'a Pos2;
    type IntoIter = hash_set::Iter<'a, Pos2>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
