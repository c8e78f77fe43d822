use clap::Parser;

use crate::gol::patterns::{self, Pattern};

fn parse_pattern(name: &str) -> Result<&'static Pattern, String> {
    patterns::by_name(name).ok_or_else(|| {
        let known: Vec<_> = patterns::PATTERNS.iter().map(|p| p.name).collect();
        format!("unknown pattern {:?}, expected one of {}", name, known.join(", "))
    })
}

#[derive(Parser, Debug)]
#[command(about = "Conway's Game of Life on a fixed grid with a dead border")]
pub struct Args {
    #[arg(long, default_value_t = 500)]
    pub width: u32,
    #[arg(long, default_value_t = 400)]
    pub height: u32,
    /// Milliseconds between generations
    #[arg(short, long, default_value_t = 1000)]
    pub interval_ms: u64,
    #[arg(long, default_value_t = 30)]
    pub fps: u32,
    #[arg(short, long)]
    pub threads: Option<u16>,
    #[arg(short, long, default_value = "reference", value_parser = parse_pattern)]
    pub pattern: &'static Pattern,
    /// Run this many generations without a terminal UI, then print the grid
    #[arg(short, long)]
    pub generations: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["life-grid"]).unwrap();
        assert_eq!((args.width, args.height), (500, 400));
        assert_eq!(args.interval_ms, 1000);
        assert_eq!(args.fps, 30);
        assert_eq!(args.pattern.name, "reference");
        assert!(args.threads.is_none());
        assert!(args.generations.is_none());
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "life-grid",
            "--width",
            "40",
            "-p",
            "glider",
            "-g",
            "12",
            "-t",
            "2",
        ])
        .unwrap();
        assert_eq!(args.width, 40);
        assert_eq!(args.pattern.name, "glider");
        assert_eq!(args.generations, Some(12));
        assert_eq!(args.threads, Some(2));
    }

    #[test]
    fn test_unknown_pattern() {
        assert!(Args::try_parse_from(["life-grid", "--pattern", "spaceship"]).is_err());
    }
}
