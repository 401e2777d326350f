use crate::cell::Cell;
use clap::Parser;

/// Enough steps to get past the chaotic phase and onto the highway
pub const DEFAULT_STEPS: u64 = 11_000;

/// Steps applied between two snapshots
pub const DEFAULT_BATCH: u64 = 10;

/// CLI arguments for the Langton's Ant simulation
#[derive(Parser, Debug)]
#[command(name = "langtons_ant", about = "🐜 Langton's Ant on an unbounded grid")]
pub struct Args {
    /// Total number of steps
    #[arg(short = 'n', long = "steps", default_value_t = DEFAULT_STEPS)]
    pub steps: u64,

    /// Starting cell as x,y (y grows downward)
    #[arg(short = 'o', long = "origin", default_value_t = Cell::ORIGIN, allow_hyphen_values = true)]
    pub origin: Cell,

    /// Steps per batch (one snapshot per batch)
    #[arg(short = 'b', long = "batch", default_value_t = DEFAULT_BATCH,
          value_parser = clap::value_parser!(u64).range(1..))]
    pub batch: u64,

    /// Print every black cell after the run
    #[arg(long, default_value_t = false)]
    pub print_cells: bool,

    /// Suppress per-batch progress logs
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["langtons_ant"]).unwrap();

        assert_eq!(args.steps, DEFAULT_STEPS);
        assert_eq!(args.origin, Cell::ORIGIN);
        assert_eq!(args.batch, DEFAULT_BATCH);
        assert!(!args.print_cells);
        assert!(!args.quiet);
    }

    #[test]
    fn test_negative_origin() {
        let args = Args::try_parse_from(["langtons_ant", "-o", "-4,-9", "-n", "5"]).unwrap();

        assert_eq!(args.origin, Cell::new(-4, -9));
        assert_eq!(args.steps, 5);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(Args::try_parse_from(["langtons_ant", "--origin", "1;2"]).is_err());
        assert!(Args::try_parse_from(["langtons_ant", "--origin", "x,2"]).is_err());
        assert!(Args::try_parse_from(["langtons_ant", "--batch", "0"]).is_err());
        assert!(Args::try_parse_from(["langtons_ant", "--steps", "-1"]).is_err());
    }
}
