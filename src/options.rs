use std::time::Duration;

use lifegrid::Grid;

/// Default grid dimensions, matching the classic 25x25 demo board.
const DEFAULT_SIZE: i32 = 25;
/// Default alive probability for the random fill.
const DEFAULT_DENSITY: f64 = 0.3;

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    fn new<T: AsRef<str>>(args: &[T]) -> Option<Self> {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optflag("c", "console", "run with the interactive terminal ui");
        opts.optflag("t", "threads", "compute generations on the rayon thread pool");
        opts.optopt("w", "width", "grid width in cells", "COLS");
        opts.optopt("h", "height", "grid height in cells", "ROWS");
        opts.optopt("f", "fill", "initial fill type", "TYPE");
        opts.optopt("d", "density", "alive probability for the random fill", "PROB");
        opts.optopt(
            "s",
            "sleep",
            "the amount of time to sleep between generations",
            "MILLIS",
        );
        opts.optopt("g", "gens", "max number of generations", "COUNT");
        opts.optopt("", "stats", "write stats csv to file", "FILE");

        let matches = opts.parse(args.iter().map(T::as_ref)).unwrap();
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: lifegrid [options]"));
            None
        } else {
            Some(Self { matches })
        }
    }
    pub fn from_env() -> Option<Self> {
        let env = std::env::args().collect::<Vec<_>>();
        Self::new(&env[1..])
    }

    pub fn console(&self) -> bool {
        self.matches.opt_present("console")
    }
    pub fn multithreading(&self) -> bool {
        self.matches.opt_present("threads")
    }

    pub fn grid_size(&self) -> (i32, i32) {
        (
            self.matches.opt_get("width").unwrap().unwrap_or(DEFAULT_SIZE),
            self.matches.opt_get("height").unwrap().unwrap_or(DEFAULT_SIZE),
        )
    }
    pub fn density(&self) -> f64 {
        self.matches
            .opt_get("density")
            .unwrap()
            .unwrap_or(DEFAULT_DENSITY)
    }

    pub fn generations(&self) -> usize {
        self.matches.opt_get("gens").unwrap().unwrap_or(usize::MAX) // kinda hacky way of saying "infinity"
    }
    pub fn sleep(&self) -> Option<Duration> {
        match self.matches.opt_get("sleep").unwrap() {
            Some(millis) => Some(Duration::from_millis(millis)),
            None if self.console() => Some(Duration::from_millis(100)),
            None => None,
        }
    }

    pub fn fill_mode(&self) -> FillMode {
        let mode_str = self.matches.opt_str("fill");
        FillMode::new(mode_str.as_deref().unwrap_or("random")).expect("valid fill mode string")
    }

    pub fn stats_file(&self) -> Option<String> {
        self.matches.opt_str("stats")
    }
}

pub enum FillMode {
    Random,
    Alternating,
    All,
    Empty,
}
impl FillMode {
    fn new<S: AsRef<str>>(s: S) -> Option<Self> {
        match s.as_ref() {
            "random" => Some(Self::Random),
            "alternating" => Some(Self::Alternating),
            "all" => Some(Self::All),
            "empty" => Some(Self::Empty),
            _ => None,
        }
    }

    pub fn create_grid(&self, width: i32, height: i32, density: f64) -> Grid {
        match self {
            Self::Random => Grid::random(width, height, density, &mut rand::rng()),
            Self::Alternating => Grid::from_fn(width, height, |pos| (pos.x + pos.y) % 2 == 0),
            Self::All => Grid::from_fn(width, height, |_| true),
            Self::Empty => Grid::empty(width, height),
        }
    }
}
