use crate::{LiveSet, Pos2};

// inclusive on both corners, bottom_left is never past top_right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub bottom_left: Pos2,
    pub top_right: Pos2,
}

impl Bounds {
    pub const ORIGIN: Self = Self {
        bottom_left: Pos2::zero(),
        top_right: Pos2::zero(),
    };

    #[inline]
    pub fn expand(self, by: i64) -> Self {
        let pad = Pos2 { x: by, y: by };
        Self {
            bottom_left: self.bottom_left - pad,
            top_right: self.top_right + pad,
        }
    }

    #[inline]
    pub fn width(&self) -> u64 {
        self.top_right.x.abs_diff(self.bottom_left.x) + 1
    }
    #[inline]
    pub fn height(&self) -> u64 {
        self.top_right.y.abs_diff(self.bottom_left.y) + 1
    }

    #[inline]
    pub fn contains(&self, cell: Pos2) -> bool {
        (self.bottom_left.x..=self.top_right.x).contains(&cell.x)
            && (self.bottom_left.y..=self.top_right.y).contains(&cell.y)
    }

    #[inline]
    pub fn rows_down(&self) -> impl DoubleEndedIterator<Item = i64> + use<> {
        (self.bottom_left.y..=self.top_right.y).rev()
    }

    #[inline]
    pub fn row(&self, y: i64) -> impl Iterator<Item = Pos2> + use<> {
        (self.bottom_left.x..=self.top_right.x).map(move |x| Pos2 { x, y })
    }

    // top row first, each row left to right
    pub fn cells(&self) -> impl Iterator<Item = Pos2> + use<> {
        let bounds = *self;
        self.rows_down().flat_map(move |y| bounds.row(y))
    }
}

/// Minimal bounding box of a live set, or [`Bounds::ORIGIN`] when it's empty
pub fn corners(set: &LiveSet) -> Bounds {
    let mut cells = set.iter();
    let Some(&first) = cells.next() else {
        return Bounds::ORIGIN;
    };

    cells.fold(
        Bounds {
            bottom_left: first,
            top_right: first,
        },
        |b, cell| Bounds {
            bottom_left: Pos2 {
                x: b.bottom_left.x.min(cell.x),
                y: b.bottom_left.y.min(cell.y),
            },
            top_right: Pos2 {
                x: b.top_right.x.max(cell.x),
                y: b.top_right.y.max(cell.y),
            },
        },
    )
}
