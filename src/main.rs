//! Game of Life demo runner.
//!
//! Seeds a pattern, starts the simulation clock, and polls snapshots on an
//! independent cadence the way a broadcaster would, printing each snapshot as
//! the JSON wire format to stdout. A stats line goes to stderr on exit:
//! `generations=N live=N elapsed_ms=N`
//!
//! # Exit Codes
//!
//! - `0`: Success
//! - `2`: Invalid arguments

use std::env;
use std::io::{self, Write};
use std::sync::Arc;
use std::time::{Duration, Instant};

use lifegrid::{wire, Coord, GridConfig, GridState, SimulationClock};

fn print_usage(exe: &std::ffi::OsStr) {
    eprintln!(
        "usage: {} [OPTIONS]

OPTIONS:
    --grid-size=<N>      Axis bound of the grid (default: 1000)
    --tick-ms=<N>        Simulation tick period in milliseconds (default: 500)
    --poll-ms=<N>        Snapshot poll cadence in milliseconds (default: 100)
    --generations=<N>    Stop after N generations (default: 10)
    --pattern=<NAME>     Seed pattern: blinker, block, glider, r-pentomino (default: glider)
    --help, -h           Show this help message",
        exe.to_string_lossy()
    );
}

fn parse_u64(flag: &str, value: &str) -> u64 {
    value.parse().unwrap_or_else(|_| {
        eprintln!("invalid {} value: {}", flag, value);
        std::process::exit(2);
    })
}

/// Seed patterns, offset into the grid interior.
fn pattern_cells(name: &str) -> Option<Vec<Coord>> {
    let cells: &[(i32, i32)] = match name {
        "blinker" => &[(1, 2), (2, 2), (3, 2)],
        "block" => &[(1, 1), (1, 2), (2, 1), (2, 2)],
        "glider" => &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
        "r-pentomino" => &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
        _ => return None,
    };
    let base = 10;
    Some(
        cells
            .iter()
            .map(|&(x, y)| Coord::new(base + x, base + y))
            .collect(),
    )
}

fn main() -> io::Result<()> {
    let mut args = env::args_os();
    let exe = args.next().unwrap_or_else(|| "lifegrid".into());
    let mut grid_size: i32 = 1000;
    let mut tick_ms: u64 = 500;
    let mut poll_ms: u64 = 100;
    let mut generations: u64 = 10;
    let mut pattern = String::from("glider");

    for arg in args {
        let Some(flag) = arg.to_str() else {
            print_usage(&exe);
            std::process::exit(2);
        };
        if let Some(value) = flag.strip_prefix("--grid-size=") {
            let n = parse_u64("--grid-size", value);
            if n == 0 || n > i32::MAX as u64 {
                eprintln!("--grid-size must be in 1..={}", i32::MAX);
                std::process::exit(2);
            }
            grid_size = n as i32;
            continue;
        }
        if let Some(value) = flag.strip_prefix("--tick-ms=") {
            tick_ms = parse_u64("--tick-ms", value).max(1);
            continue;
        }
        if let Some(value) = flag.strip_prefix("--poll-ms=") {
            poll_ms = parse_u64("--poll-ms", value).max(1);
            continue;
        }
        if let Some(value) = flag.strip_prefix("--generations=") {
            generations = parse_u64("--generations", value);
            continue;
        }
        if let Some(value) = flag.strip_prefix("--pattern=") {
            pattern = value.to_string();
            continue;
        }
        match flag {
            "--help" | "-h" => {
                print_usage(&exe);
                std::process::exit(0);
            }
            _ => {
                eprintln!("unknown flag: {}", flag);
                print_usage(&exe);
                std::process::exit(2);
            }
        }
    }

    let Some(seed) = pattern_cells(&pattern) else {
        eprintln!("unknown pattern: {}", pattern);
        print_usage(&exe);
        std::process::exit(2);
    };

    let config = GridConfig {
        grid_size,
        tick_period: Duration::from_millis(tick_ms),
    };
    let state = Arc::new(GridState::new(&config));
    let accepted = state.inject(&seed);
    eprintln!("{}", wire::receipt(accepted));

    let start = Instant::now();
    let clock = SimulationClock::start(Arc::clone(&state), config.tick_period);

    // Poll snapshots on the broadcast cadence, decoupled from the tick.
    let stdout = io::stdout();
    let mut out = stdout.lock();
    while clock.generations() < generations {
        std::thread::sleep(Duration::from_millis(poll_ms));
        let snapshot = state.snapshot();
        let json = wire::encode_snapshot(&snapshot)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        writeln!(out, "{}", json)?;
    }
    clock.stop();

    eprintln!(
        "generations={} live={} elapsed_ms={}",
        generations,
        state.len(),
        start.elapsed().as_millis()
    );
    Ok(())
}
