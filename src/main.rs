use std::{
    io::{self, Write},
    process::ExitCode,
    thread,
};

use sparselife::{GameOfLife, LiveSet, PositionEncoder, Rendered, RunLengthEncoded};

mod console;
mod options;
mod stats;

use options::{Args, ArgsError, Source};

fn load_initial(source: &Source) -> sparselife::Result<LiveSet> {
    match source {
        Source::Named(pattern) => Ok(pattern.live_set()),
        Source::Rle(file_name) => {
            let encoded_str = std::fs::read_to_string(file_name)?;
            RunLengthEncoded::default().decode(&encoded_str)
        }
    }
}

fn simulate(args: &Args) -> sparselife::Result<()> {
    let alive = load_initial(args.source())?;
    log::info!(
        "starting from {:?} with {} alive cells, {} generations",
        args.source(),
        alive.len(),
        args.iterations()
    );

    let mut game = GameOfLife::from_alive(alive);
    let mut console = if args.animate() {
        Some(console::ConsoleRender::new()?)
    } else {
        None
    };
    let sleep = args.sleep();
    let threads = args.multithreading();
    let mut stats = stats::RunStats::new(&game, args.stats_file().is_some());
    let mut out = io::stdout().lock();

    // generation 0 is printed too, so there is one more board than steps
    'generations: for gen_idx in 0..=args.iterations() {
        if gen_idx > 0 {
            stats.step(&mut game, threads);
            log::debug!("generation {}: {} alive", game.generation(), game.alive_count());
        }

        if let Some(ref mut console) = console {
            while let Some(cmd) = console.poll_events()? {
                if let console::ConsoleCommand::Exit = cmd {
                    break 'generations;
                }
            }
            if stats.report_due() {
                console.set_footer(stats.report());
            }
            console.render(&Rendered::new(game.alive()).to_string())?;
        } else {
            writeln!(out, "{}\n", Rendered::new(game.alive()))?;
            if stats.report_due() {
                log::info!("{}", stats.report());
            }
        }

        if let Some(time) = sleep {
            thread::sleep(time);
        }
    }
    std::mem::drop(console);
    log::info!(
        "finished with {} alive cells: {}",
        game.alive_count(),
        stats.summary()
    );

    if let Some(file_name) = args.stats_file() {
        stats.save(&file_name)?;
        log::info!("wrote stats to {file_name}");
    }
    if let Some(file_name) = args.output_file() {
        let encoder = RunLengthEncoded::default().set_name("sparselife generated pattern");
        let encoded_game = encoder.encode(game.alive());
        std::fs::write(&file_name, encoded_game)?;
        log::info!("wrote generation {} to {file_name}", game.generation());
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match Args::from_env() {
        Ok(args) => args,
        Err(ArgsError::Help) => {
            println!("{}", Args::usage());
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}\n\n{}", Args::usage());
            return ExitCode::FAILURE;
        }
    };

    match simulate(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
