use std::path::PathBuf;

use clap::Parser;
use dropwise::engine::DEFAULT_SEED_POINTS;
use dropwise::logging::init_logging;
use dropwise::{Config, Route, Site};

#[derive(Parser, Debug)]
#[command(version, about = "Water conservation quiz, challenges and community in your terminal", long_about = None)]
struct Args {
    /// JSON file to load the quiz questions from
    #[arg(long, env = "DROPWISE_QUESTIONS")]
    questions: Option<PathBuf>,

    /// JSON file to load the challenges from
    #[arg(long, env = "DROPWISE_CHALLENGES")]
    challenges: Option<PathBuf>,

    /// JSON file to load the community posts from
    #[arg(long, env = "DROPWISE_POSTS")]
    posts: Option<PathBuf>,

    /// Points the challenges page starts with
    #[arg(long, env = "DROPWISE_SEED_POINTS", default_value_t = DEFAULT_SEED_POINTS)]
    seed_points: u32,

    /// Page to open first, by path (/, /quiz, /games, /community, /dashboard)
    #[arg(short, long, env = "DROPWISE_ROUTE", default_value = "/")]
    route: Route,

    /// Append logs to this file (the UI owns the terminal)
    #[arg(long, env = "DROPWISE_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            start_route: args.route,
            seed_points: args.seed_points,
            questions: args.questions,
            challenges: args.challenges,
            posts: args.posts,
        }
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = init_logging(args.log_file.as_deref(), args.verbose) {
        eprintln!("Error opening log file: {}", e);
        std::process::exit(1);
    }

    let config = Config::from(args);
    let site = match Site::new(&config) {
        Ok(site) => site,
        Err(e) => {
            eprintln!("Error starting dropwise: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = site.run() {
        eprintln!("Error running dropwise: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["dropwise"]);
        let config = Config::from(args);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_route_and_seed() {
        let args = Args::parse_from(["dropwise", "--route", "/games", "--seed-points", "300", "-vv"]);
        assert_eq!(args.verbose, 2);
        let config = Config::from(args);
        assert_eq!(config.start_route, Route::Games);
        assert_eq!(config.seed_points, 300);
    }

    #[test]
    fn test_unknown_route_is_rejected() {
        assert!(Args::try_parse_from(["dropwise", "--route", "/leaderboard"]).is_err());
    }
}
