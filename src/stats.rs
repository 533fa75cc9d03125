use std::time::Instant;

/// Tracks generation throughput and population, and optionally accumulates
/// a per-generation csv log when a stats file was requested.
pub struct StatsRecorder {
    gens: usize,
    alive: usize,
    gens_in_report: usize,
    last_report: Instant,
    csv: Option<CsvLog>,
}

struct CsvLog {
    // (micros since previous generation, alive count)
    rows: Vec<(u128, usize)>,
    last: Instant,
}

impl StatsRecorder {
    pub fn new(alive: usize, with_csv: bool) -> Self {
        Self {
            gens: 0,
            alive,
            gens_in_report: 0,
            last_report: Instant::now(),
            csv: with_csv.then(|| CsvLog {
                rows: Vec::new(),
                last: Instant::now(),
            }),
        }
    }

    pub fn record(&mut self, alive: usize) {
        if let Some(csv) = &mut self.csv {
            let delta = csv.last.elapsed().as_micros();
            csv.last = Instant::now();
            csv.rows.push((delta, alive));
        }
        self.gens += 1;
        self.gens_in_report += 1;
        self.alive = alive;
    }

    pub fn has_report(&self) -> bool {
        self.last_report.elapsed().as_millis() >= 500
    }
    pub fn report(&mut self) -> String {
        let gens_per_sec = self.gens_in_report as f64 / self.last_report.elapsed().as_secs_f64();
        // reset stats for next report
        self.last_report = Instant::now();
        self.gens_in_report = 0;

        format!(
            "{:.02}gen/s gens:{} alive:{}",
            gens_per_sec, self.gens, self.alive
        )
    }

    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> std::io::Result<()> {
        use std::{
            fs,
            io::{self, Write},
        };

        let rows = match &self.csv {
            Some(csv) => &csv.rows,
            None => panic!("cannot save statistics without a csv log"),
        };

        let file = fs::File::create(path)?;
        let mut file = io::BufWriter::new(file);

        file.write_all(b"gen,delta_t,alive\n")?;
        for (i, (delta, alive)) in rows.iter().enumerate() {
            let line = format!("{},{},{}\n", i, delta, alive);
            file.write_all(line.as_bytes())?;
        }
        file.flush()
    }
}
