use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, Neg, Sub},
};

// y grows upwards, the top of a rendered board is its largest y
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos2 {
    pub x: i64,
    pub y: i64,
}
impl Pos2 {
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0, y: 0 }
    }
    #[inline]
    pub const fn one() -> Self {
        Self { x: 1, y: 1 }
    }

    #[inline]
    pub fn chebyshev(self, other: Self) -> u64 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}
impl Default for Pos2 {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}
impl From<(i64, i64)> for Pos2 {
    #[inline]
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}
impl fmt::Display for Pos2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
impl PartialOrd for Pos2 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Pos2 {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        // compare y coordinate first, then x coordinate
        // i.e. if y coordinate is equal, then compare x coordinate
        Ord::cmp(&self.y, &other.y).then(Ord::cmp(&self.x, &other.x))
    }
}
impl Neg for Pos2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}
impl Add for Pos2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl Sub for Pos2 {
    type Output = Pos2;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_row_major() {
        let mut cells = vec![Pos2::new(2, 1), Pos2::new(-1, 3), Pos2::new(0, 1)];
        cells.sort();

        assert_eq!(cells, vec![Pos2::new(0, 1), Pos2::new(2, 1), Pos2::new(-1, 3)]);
    }

    #[test]
    fn arithmetic_handles_negative_coordinates() {
        let a = Pos2::new(-3, 4);
        let b = Pos2::new(5, -7);

        assert_eq!(a + b, Pos2::new(2, -3));
        assert_eq!(a - b, Pos2::new(-8, 11));
        assert_eq!(-a, Pos2::new(3, -4));
        assert_eq!(a.chebyshev(b), 11);
    }
}
