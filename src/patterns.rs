use crate::{Error, LiveSet, Pos2};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    // a glider heading for (+x, -y), next to a block it never touches
    Glider,
    RPentomino,
    Square,
}

impl Pattern {
    pub const ALL: [Pattern; 3] = [Self::Glider, Self::RPentomino, Self::Square];

    pub fn name(self) -> &'static str {
        match self {
            Self::Glider => "glider",
            Self::RPentomino => "rpentomino",
            Self::Square => "square",
        }
    }

    pub fn cells(self) -> &'static [(i64, i64)] {
        match self {
            Self::Glider => &[
                (-2, -2),
                (-1, -2),
                (-2, -1),
                (-1, -1),
                (1, 1),
                (2, 1),
                (3, 1),
                (3, 2),
                (2, 3),
            ],
            Self::RPentomino => &[(3, 2), (2, 3), (3, 3), (3, 4), (4, 4)],
            Self::Square => &[(1, 1), (2, 1), (1, 2), (2, 2)],
        }
    }

    pub fn live_set(self) -> LiveSet {
        self.cells().iter().copied().map(Pos2::from).collect()
    }

    pub fn valid_names() -> String {
        Self::ALL.map(Self::name).join(", ")
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| Error::InvalidPattern {
                name: s.to_owned(),
                valid: Self::valid_names(),
            })
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
