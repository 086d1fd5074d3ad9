use std::env;
use std::time::Instant;

use lev_dp::{EditDistance, MatrixDistance, MemoizedDistance};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

const SENTENCE_A: &str = "Mr. and Mrs. Dursley of number four, Privet Drive, were proud to say that they were perfectly normal, thank you very much.";
const SENTENCE_B: &str = "Mr. and Mrs. Potter of number five, Patriot Drive, were shy to say that they were imperfectly abnormal, thank you very much.";

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("distance_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("[1/2] Sample sentences ({} vs {} chars)...", SENTENCE_A.chars().count(), SENTENCE_B.chars().count());
    measurements.extend(run_sentences(&mut sys));
    eprintln!("[2/2] Synthetic ladder...");
    measurements.extend(run_ladder(&options, &mut sys));

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("distance_probe output error: {err}");
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    max_len: usize,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut max_len = 4096usize;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --format".to_string())?
                    .into();
                format = OutputFormat::from_str(&value)?;
            } else if let Some(value) = arg.strip_prefix("--max-len=") {
                max_len = value
                    .parse::<usize>()
                    .map_err(|_| "max length must be a positive integer".to_string())?;
            } else if arg == "--max-len" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --max-len".to_string())?
                    .into();
                max_len = value
                    .parse::<usize>()
                    .map_err(|_| "max length must be a positive integer".to_string())?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self { format, max_len })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin distance_probe [-- <options>]

Options:
  --format <csv|table>   Output format (default: csv)
  --max-len <N>          Largest synthetic input length (default: 4096)
  -h, --help             Print this help message

Runs the tabulating and memoized Levenshtein engines over the sample
sentences and a ladder of synthetic inputs, reporting wall time, memory
delta, and cross-engine agreement.
"
        );
    }
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
        }
    }
}

struct Measurement {
    engine: &'static str,
    scenario: String,
    distance: usize,
    wall_s: f64,
    rss_delta_kib: u64,
    agreed: bool,
}

fn run_sentences(sys: &mut System) -> Vec<Measurement> {
    let mut out = Vec::new();
    let (matrix_m, d_matrix) = measure("matrix", "sentences".to_string(), sys, || {
        MatrixDistance::new()
            .distance_str(SENTENCE_A, SENTENCE_B)
            .expect("unbudgeted engines accept the sample sentences")
    });
    let (memo_m, d_memo) = measure("memoized", "sentences".to_string(), sys, || {
        MemoizedDistance::new()
            .distance_str(SENTENCE_A, SENTENCE_B)
            .expect("unbudgeted engines accept the sample sentences")
    });
    let agreed = d_matrix == d_memo;
    eprintln!(
        "      matrix={d_matrix}, memoized={d_memo}, {}",
        if agreed { "agree" } else { "DISAGREE" }
    );
    out.push(Measurement { agreed, ..matrix_m });
    out.push(Measurement { agreed, ..memo_m });
    out
}

fn run_ladder(options: &Options, sys: &mut System) -> Vec<Measurement> {
    let mut out = Vec::new();
    let mut len = 64usize;
    while len <= options.max_len {
        let a = synthetic_text(len, 0);
        let b = synthetic_text(len, 3);
        eprint!("      len={len}... ");
        let (matrix_m, d_matrix) = measure("matrix", format!("len={len}"), sys, || {
            MatrixDistance::new()
                .distance(a.as_bytes(), b.as_bytes())
                .expect("unbudgeted engines accept the ladder inputs")
        });
        let (memo_m, d_memo) = measure("memoized", format!("len={len}"), sys, || {
            MemoizedDistance::new()
                .distance(a.as_bytes(), b.as_bytes())
                .expect("unbudgeted engines accept the ladder inputs")
        });
        let agreed = d_matrix == d_memo;
        eprintln!(
            "matrix {:.3}s, memoized {:.3}s, d={d_matrix}, {}",
            matrix_m.wall_s,
            memo_m.wall_s,
            if agreed { "agree" } else { "DISAGREE" }
        );
        out.push(Measurement { agreed, ..matrix_m });
        out.push(Measurement { agreed, ..memo_m });
        len *= 2;
    }
    out
}

fn measure<F>(
    engine: &'static str,
    scenario: String,
    sys: &mut System,
    compute: F,
) -> (Measurement, usize)
where
    F: FnOnce() -> usize,
{
    let before = rss_kib(sys);
    let start = Instant::now();
    let distance = compute();
    let duration = start.elapsed();
    let after = rss_kib(sys);

    (
        Measurement {
            engine,
            scenario,
            distance,
            wall_s: duration.as_secs_f64(),
            rss_delta_kib: after.saturating_sub(before),
            agreed: true,
        },
        distance,
    )
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("engine,scenario,distance,wall_s,rss_delta_kib,agreed");
    for m in measurements {
        println!(
            "{},{},{},{:.6},{},{}",
            m.engine, m.scenario, m.distance, m.wall_s, m.rss_delta_kib, m.agreed
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let mut col = "scenario".len();
    for m in measurements {
        col = col.max(m.scenario.len());
    }
    println!(
        "{:<10}  {:<col$}  {:>10}  {:>10}  {:>14}  {:>6}",
        "engine",
        "scenario",
        "distance",
        "wall_s",
        "rss_delta_kib",
        "agreed",
        col = col
    );
    for m in measurements {
        println!(
            "{:<10}  {:<col$}  {:>10}  {:>10.6}  {:>14}  {:>6}",
            m.engine,
            m.scenario,
            m.distance,
            m.wall_s,
            m.rss_delta_kib,
            m.agreed,
            col = col
        );
    }
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory()
    } else {
        0
    }
}

/// Deterministic pseudo-prose: letters and the occasional space, phase
/// shifted so the two ladder inputs differ without being unrelated.
fn synthetic_text(len: usize, offset: usize) -> String {
    const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz ";
    (0..len)
        .map(|i| ALPHABET[(i * 7 + offset) % ALPHABET.len()] as char)
        .collect()
}
