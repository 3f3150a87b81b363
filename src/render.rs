use crate::{LiveSet, bounds::corners};
use std::fmt;

pub const ALIVE_GLYPH: char = '\u{25A3}';
pub const DEAD_GLYPH: char = '\u{25A2}';

pub struct Rendered<'a> {
    set: &'a LiveSet,
}
impl<'a> Rendered<'a> {
    #[inline]
    pub fn new(set: &'a LiveSet) -> Self {
        Self { set }
    }
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // the top line is the largest y
        let bounds = corners(self.set);
        for (line, y) in bounds.rows_down().enumerate() {
            if line > 0 {
                f.write_str("\n")?;
            }
            for (col, cell) in bounds.row(y).enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                let glyph = if self.set.contains(cell) {
                    ALIVE_GLYPH
                } else {
                    DEAD_GLYPH
                };
                write!(f, "{glyph}")?;
            }
        }
        Ok(())
    }
}

#[inline]
pub fn render(set: &LiveSet) -> String {
    Rendered::new(set).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::Pattern;

    #[test]
    fn single_cell() {
        assert_eq!(render(&LiveSet::from([(0, 0)])), "▣");
    }

    #[test]
    fn empty_set_is_one_dead_cell() {
        assert_eq!(render(&LiveSet::new()), "▢");
    }

    #[test]
    fn top_row_is_largest_y() {
        let glider = LiveSet::from([(1, 1), (2, 1), (3, 1), (3, 2), (2, 3)]);

        assert_eq!(render(&glider), "▢ ▣ ▢\n▢ ▢ ▣\n▣ ▣ ▣");
    }

    #[test]
    fn square_fills_its_box() {
        assert_eq!(render(&Pattern::Square.live_set()), "▣ ▣\n▣ ▣");
    }

    #[test]
    fn negative_coordinates() {
        let set = LiveSet::from([(-1, -1), (1, 0)]);

        assert_eq!(render(&set), "▢ ▢ ▣\n▣ ▢ ▢");
    }
}
