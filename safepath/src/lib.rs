//! safepath — terminal front end for the minimax path solver.
//!
//! Builds a radiation grid from a sample, random fill or explicit values,
//! solves it and prints a highlighted report.

pub mod cli;
pub mod error;
pub mod render;
pub mod source;

use std::io::Write;

use log::{info, warn};
use safepath_core::RadiationGrid;
use safepath_paths::{BottleneckPath, SolveError, solve};

pub use cli::{Cli, Config, Source};
pub use error::AppError;

/// Initialise `env_logger` at `level`, letting `RUST_LOG` override it.
pub fn init_logging(level: log::LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

/// Build, solve and report one grid.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<(), AppError> {
    let grid = source::build_grid(&config.source)?;
    info!("solving {}x{} grid", grid.rows(), grid.cols());

    report(out, &grid, &solve(&grid), config.color)
}

/// Log and print a solve outcome. Only an unreachable target is reported in
/// the output; any other failure is returned.
fn report<W: Write>(
    out: &mut W,
    grid: &RadiationGrid,
    outcome: &Result<BottleneckPath, SolveError>,
    color: bool,
) -> Result<(), AppError> {
    let result = match outcome {
        Ok(res) => {
            info!("bottleneck {} over {} cells", res.bottleneck, res.len());
            Some(res)
        }
        Err(e) if e.is_unreachable() => {
            warn!("{e}");
            None
        }
        Err(e) => return Err(e.clone().into()),
    };
    render::write_report(out, grid, result, color)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::LevelFilter;
    use safepath_core::GridError;

    fn config(source: Source) -> Config {
        Config {
            source,
            color: false,
            log_level: LevelFilter::Off,
        }
    }

    #[test]
    fn run_sample_two() {
        let mut buf = Vec::new();
        run(&config(Source::Sample { number: 2 }), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("10 10\n10 10\n"));
        assert!(text.contains("Minimum possible maximum radiation: 10\n"));
        assert!(text.contains("Path length: 3 cells\n"));
    }

    #[test]
    fn run_single_value() {
        let mut buf = Vec::new();
        let source = Source::Grid {
            rows: 1,
            cols: 1,
            values: vec![5],
        };
        run(&config(source), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Minimum possible maximum radiation: 5\n"));
        assert!(text.contains("Path coordinates (row, col): (0, 0)\n"));
    }

    #[test]
    fn run_rejects_bad_shape() {
        let mut buf = Vec::new();
        let source = Source::Grid {
            rows: 0,
            cols: 3,
            values: vec![1],
        };
        let err = run(&config(source), &mut buf).unwrap_err();
        assert!(matches!(err, AppError::Grid(_)));
        assert_eq!(err.exit_code(), 2);
        assert!(buf.is_empty());
    }

    #[test]
    fn unreachable_outcome_is_reported() {
        let grid = RadiationGrid::filled(1, 2, 0).unwrap();
        let outcome = Err(SolveError::Unreachable {
            origin: grid.origin(),
            target: grid.target(),
        });
        let mut buf = Vec::new();
        report(&mut buf, &grid, &outcome, false).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with("Minimum possible maximum radiation: -1\n"));
    }

    #[test]
    fn invalid_dimensions_are_not_reported_as_unreachable() {
        let grid = RadiationGrid::filled(1, 2, 0).unwrap();
        let outcome = Err(SolveError::InvalidDimensions(GridError::Empty { rows: 0, cols: 2 }));
        let mut buf = Vec::new();
        let err = report(&mut buf, &grid, &outcome, false).unwrap_err();
        assert!(matches!(err, AppError::Solve(SolveError::InvalidDimensions(_))));
        assert_eq!(err.exit_code(), 2);
        assert!(buf.is_empty());
    }
}
