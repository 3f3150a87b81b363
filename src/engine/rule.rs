use crate::{LiveSet, Pos2};

// bottom row first, left to right
const NEIGHBOR_OFFSETS: [Pos2; 8] = [
    Pos2::new(-1, -1),
    Pos2::new(0, -1),
    Pos2::new(1, -1),
    Pos2::new(-1, 0),
    Pos2::new(1, 0),
    Pos2::new(-1, 1),
    Pos2::new(0, 1),
    Pos2::new(1, 1),
];

/// The 8 cells surrounding `cell`, always in the same order
#[inline]
pub fn neighbors_of(cell: Pos2) -> [Pos2; 8] {
    NEIGHBOR_OFFSETS.map(|offset| cell + offset)
}

#[inline]
pub fn living_neighbors(cell: Pos2, set: &LiveSet) -> usize {
    neighbors_of(cell)
        .into_iter()
        .filter(|&n| set.contains(n))
        .count()
}

pub fn will_be_alive(cell: Pos2, set: &LiveSet) -> bool {
    let neighbors = living_neighbors(cell, set);
    matches!((set.contains(cell), neighbors), (true, 2) | (_, 3))
}
