use sparselife::{GameOfLife, corners};
use std::{
    fs,
    io::{self, Write},
    path::Path,
    time::{Duration, Instant},
};

const REPORT_INTERVAL: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub generation: usize,
    pub step: Duration,
    pub alive: usize,
    pub width: u64,
    pub height: u64,
}
impl Sample {
    fn of(game: &GameOfLife, step: Duration) -> Self {
        let (width, height) = if game.alive().is_empty() {
            (0, 0)
        } else {
            let bounds = corners(game.alive());
            (bounds.width(), bounds.height())
        };
        Self {
            generation: game.generation(),
            step,
            alive: game.alive_count(),
            width,
            height,
        }
    }
}

/// Step timings and board sizes over a run
///
/// Only the engine step is timed; printing, redraws and sleeping between
/// generations are not part of any sample.
pub struct RunStats {
    // per-generation samples, only kept when they'll be written out
    history: Option<Vec<Sample>>,
    latest: Sample,
    peak_alive: usize,
    total_step: Duration,
    window_steps: u32,
    window_step: Duration,
    last_report: Instant,
}

impl RunStats {
    pub fn new(game: &GameOfLife, keep_history: bool) -> Self {
        let initial = Sample::of(game, Duration::ZERO);
        Self {
            history: keep_history.then(|| vec![initial]),
            latest: initial,
            peak_alive: initial.alive,
            total_step: Duration::ZERO,
            window_steps: 0,
            window_step: Duration::ZERO,
            last_report: Instant::now(),
        }
    }

    /// Advances `game` by one generation and records how long that took
    pub fn step(&mut self, game: &mut GameOfLife, parallel: bool) {
        let start = Instant::now();
        if parallel {
            game.next_generation_parallel();
        } else {
            game.next_generation();
        }
        self.record(Sample::of(game, start.elapsed()));
    }

    fn record(&mut self, sample: Sample) {
        self.peak_alive = self.peak_alive.max(sample.alive);
        self.total_step += sample.step;
        self.window_steps += 1;
        self.window_step += sample.step;
        self.latest = sample;
        if let Some(history) = &mut self.history {
            history.push(sample);
        }
    }

    pub fn report_due(&self) -> bool {
        self.last_report.elapsed() >= REPORT_INTERVAL
    }

    // mean step time covers the steps since the previous report
    pub fn report(&mut self) -> String {
        let mean = match self.window_steps {
            0 => Duration::ZERO,
            n => self.window_step / n,
        };
        self.last_report = Instant::now();
        self.window_steps = 0;
        self.window_step = Duration::ZERO;

        let s = &self.latest;
        format!(
            "gen:{} alive:{} box:{}x{} step:{}us",
            s.generation,
            s.alive,
            s.width,
            s.height,
            mean.as_micros()
        )
    }

    pub fn summary(&self) -> String {
        format!(
            "{} generations in {:.3}ms of stepping, peak alive {}",
            self.latest.generation,
            self.total_step.as_secs_f64() * 1000.0,
            self.peak_alive
        )
    }

    pub fn write_csv<W: Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "gen,step_us,alive,width,height")?;
        for s in self.history.as_deref().unwrap_or_default() {
            writeln!(
                out,
                "{},{},{},{},{}",
                s.generation,
                s.step.as_micros(),
                s.alive,
                s.width,
                s.height
            )?;
        }
        out.flush()
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        if self.history.is_none() {
            log::warn!("per-generation samples were not kept, the stats file has no rows");
        }
        let file = fs::File::create(path)?;
        self.write_csv(io::BufWriter::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparselife::Pattern;

    fn sample(generation: usize, micros: u64, alive: usize) -> Sample {
        Sample {
            generation,
            step: Duration::from_micros(micros),
            alive,
            width: 3,
            height: 3,
        }
    }

    fn csv(stats: &RunStats) -> String {
        let mut out = Vec::new();
        stats.write_csv(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn initial_sample_describes_the_start() {
        let game = GameOfLife::from_alive(Pattern::Glider.live_set());

        let stats = RunStats::new(&game, true);

        assert_eq!(csv(&stats), "gen,step_us,alive,width,height\n0,0,9,6,6\n");
    }

    #[test]
    fn empty_board_has_no_box() {
        let game = GameOfLife::from_alive(sparselife::LiveSet::new());

        assert_eq!(Sample::of(&game, Duration::ZERO).width, 0);
        assert_eq!(Sample::of(&game, Duration::ZERO).height, 0);
    }

    #[test]
    fn only_step_time_is_recorded() {
        let game = GameOfLife::from_alive(Pattern::Square.live_set());
        let mut stats = RunStats::new(&game, true);
        stats.record(sample(1, 40, 4));
        stats.record(sample(2, 60, 4));

        let csv = csv(&stats);
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[1..], ["0,0,4,2,2", "1,40,4,3,3", "2,60,4,3,3"]);
        assert_eq!(stats.report(), "gen:2 alive:4 box:3x3 step:50us");
    }

    #[test]
    fn report_resets_the_window() {
        let game = GameOfLife::from_alive(Pattern::Square.live_set());
        let mut stats = RunStats::new(&game, false);
        stats.record(sample(1, 100, 7));
        stats.report();

        assert_eq!(stats.report(), "gen:1 alive:7 box:3x3 step:0us");
        assert!(stats.summary().ends_with("peak alive 7"));
    }

    #[test]
    fn stepping_advances_the_game() {
        let mut game = GameOfLife::from_alive(Pattern::RPentomino.live_set());
        let mut stats = RunStats::new(&game, true);
        stats.step(&mut game, false);
        stats.step(&mut game, true);

        assert_eq!(game.generation(), 2);
        let csv = csv(&stats);
        assert!(csv.lines().nth(3).unwrap().starts_with("2,"));
        assert!(csv.lines().nth(3).unwrap().ends_with(",7,4,4"));
    }
}
