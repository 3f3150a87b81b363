use crate::{Error, LiveSet, Pos2, bounds::corners, error::Result};
use regex::Regex;
use std::sync::LazyLock;

pub trait PositionEncoder {
    fn encode(self, cells: &LiveSet) -> String;
    fn decode(self, value: &str) -> Result<LiveSet>;
}

// a run tag with its optional count, or any stray character
static RLE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d*)([bo$!])|(\S)").expect("valid RLE token regex"));

// longest single run accepted while decoding
const MAX_RUN: i64 = 1 << 24;

fn shifted(value: i64, by: i64) -> Result<i64> {
    value
        .checked_add(by)
        .ok_or_else(|| Error::InvalidRle("pattern extends past the coordinate range".into()))
}

struct RunEncoder {
    sequence: String,
    line_len: usize,
    max_line_len: usize,
    pending_lines: i64,
}
impl RunEncoder {
    fn new(max_line_len: usize) -> Self {
        Self {
            sequence: String::new(),
            line_len: 0,
            max_line_len,
            pending_lines: 0,
        }
    }

    fn push_run(&mut self, run: i64, c: char) {
        let append = match run {
            0 => return,
            1 => c.to_string(),
            n => format!("{}{}", n, c),
        };
        if self.line_len + append.len() > self.max_line_len {
            self.sequence.push('\n');
            self.line_len = 0;
        }
        self.line_len += append.len();
        self.sequence.push_str(&append);
    }

    // row breaks are held back until the next run of cells
    fn push_cells(&mut self, run: i64, c: char) {
        let lines = std::mem::take(&mut self.pending_lines);
        self.push_run(lines, '$');
        self.push_run(run, c);
    }

    fn end_line(&mut self) {
        self.pending_lines += 1;
    }

    pub fn end(mut self) -> String {
        // trailing row breaks carry no information
        self.pending_lines = 0;
        self.push_run(1, '!');
        self.sequence
    }
}

/// Life RLE, written from the top (largest y) row down
pub struct RunLengthEncoded {
    name: Option<String>,
    header: bool,
}
impl RunLengthEncoded {
    pub fn set_name<T: AsRef<str>>(mut self, name: T) -> Self {
        self.name = Some(name.as_ref().to_owned());
        self
    }

    pub fn without_header(mut self) -> Self {
        self.header = false;
        self
    }

    fn encode_header(&self, cells: &LiveSet) -> String {
        let mut header = String::new();
        if !self.header {
            return header;
        }
        if let Some(name) = &self.name {
            header.push_str(&format!("#N {}\n", name));
        }
        let (w, h) = if cells.is_empty() {
            (0, 0)
        } else {
            let bounds = corners(cells);
            (bounds.width(), bounds.height())
        };
        header.push_str(&format!("x = {}, y = {}, rule = B3/S23\n", w, h));
        header
    }
    fn encode_cells(&self, cells: &LiveSet) -> String {
        let bounds = corners(cells);
        let mut seq = RunEncoder::new(70);
        for y in bounds.rows_down() {
            let mut state = 'b';
            let mut run = 0;
            for cell in bounds.row(y) {
                let next = if cells.contains(cell) { 'o' } else { 'b' };
                if next == state {
                    run += 1;
                    continue;
                }
                seq.push_cells(run, state);
                state = next;
                run = 1;
            }
            // dead cells at the end of a row are implied
            if state == 'o' {
                seq.push_cells(run, state);
            }
            seq.end_line();
        }
        seq.end()
    }
}
impl Default for RunLengthEncoded {
    fn default() -> Self {
        Self {
            name: None,
            header: true,
        }
    }
}

impl PositionEncoder for RunLengthEncoded {
    fn encode(self, cells: &LiveSet) -> String {
        format!("{}{}\n", self.encode_header(cells), self.encode_cells(cells))
    }

    fn decode(self, value: &str) -> Result<LiveSet> {
        let mut alive = Vec::new();
        let mut cursor = Pos2 { x: 0, y: 0 };
        'lines_loop: for line in value.lines() {
            let line = line.trim();
            if line.starts_with('#') || line.starts_with('x') {
                continue;
            }

            for caps in RLE_TOKEN.captures_iter(line) {
                if let Some(stray) = caps.get(3) {
                    return Err(Error::InvalidRle(format!(
                        "unexpected character {:?}",
                        stray.as_str()
                    )));
                }
                let run = match &caps[1] {
                    "" => 1,
                    digits => digits
                        .parse::<i64>()
                        .ok()
                        .filter(|run| *run <= MAX_RUN)
                        .ok_or_else(|| Error::InvalidRle(format!("bad run length {digits}")))?,
                };
                match &caps[2] {
                    "!" => break 'lines_loop,
                    "o" => {
                        for _ in 0..run {
                            alive.push(cursor);
                            cursor.x = shifted(cursor.x, 1)?;
                        }
                    }
                    "b" => cursor.x = shifted(cursor.x, run)?,
                    "$" => {
                        cursor.x = 0;
                        cursor.y = shifted(cursor.y, -run)?;
                    }
                    _ => unreachable!(),
                }
            }
        }

        log::debug!("decoded {} alive cells", alive.len());
        Ok(alive.into())
    }
}
