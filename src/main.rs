use std::{io, thread};

mod console;
mod options;
mod stats;

use console::{ConsoleCommand, ConsoleUi};
use lifegrid::{Grid, engine};

fn main() -> io::Result<()> {
    let Some(args) = options::Args::from_env() else {
        return Ok(());
    };

    let (width, height) = args.grid_size();
    let mut grid = args.fill_mode().create_grid(width, height, args.density());

    let mut console = if args.console() {
        Some(ConsoleUi::new(width, height)?)
    } else {
        None
    };
    // the console starts paused so cells can be seeded first; headless runs
    // have no way to unpause, so they start running
    let mut running = console.is_none();
    let sleep = args.sleep();
    let parallel = args.multithreading();

    let mut stats = stats::StatsRecorder::new(grid.alive_count(), args.stats_file().is_some());
    let mut gens = 0;
    'ticks: while gens < args.generations() {
        if let Some(ref mut console) = console {
            while let Some(cmd) = console.poll_events()? {
                match cmd {
                    ConsoleCommand::Exit => break 'ticks,
                    ConsoleCommand::PlayPause => running = !running,
                    ConsoleCommand::Clear => grid = Grid::empty(width, height),
                    ConsoleCommand::Randomize => {
                        grid = Grid::random(width, height, args.density(), &mut rand::rng());
                    }
                    ConsoleCommand::ToggleCell(pos) => grid = grid.toggled(pos),
                    ConsoleCommand::Handled => {}
                }
            }
            console.render(&grid, running)?;
        }

        if stats.has_report() {
            let report = stats.report();
            if let Some(ref mut console) = console {
                console.set_footer(report);
            } else {
                println!("{}", report);
            }
        }

        if running {
            // each generation reads only the previous grid and replaces it
            grid = if parallel {
                engine::advance_parallel(&grid)
            } else {
                engine::advance(&grid)
            };
            gens += 1;
            stats.record(grid.alive_count());
        }
        if let Some(time) = sleep {
            thread::sleep(time);
        }
    }
    drop(console);

    if let Some(file_name) = args.stats_file() {
        stats.save(file_name)?;
    }

    Ok(())
}
