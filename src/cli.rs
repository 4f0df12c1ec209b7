use std::path::PathBuf;
use std::time::Duration;

use clap::builder::{styling::AnsiColor, Styles};
use clap::Parser;

use crate::config::Timings;

const ABOUT: &str = "ClearCast weather widget TUI";

const LONG_ABOUT: &str = "
Terminal weather widget showing simulated conditions.

Current conditions, the hourly strip and the precipitation bar drift by a small random amount on
every weather update. Alert banners rotate on their own timer and the accuracy slider plays a short
sweep on startup; use the left and right arrow keys to move it afterwards. Press q to quit.

Nothing is fetched or saved: every run starts from the same afternoon-rain dataset.
";

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default())
    .usage(AnsiColor::Green.on_default())
    .literal(AnsiColor::Green.on_default())
    .placeholder(AnsiColor::Green.on_default());

#[derive(Parser, Debug)]
#[command(version, styles=STYLES, about=ABOUT, long_about = LONG_ABOUT)]
pub struct Args {
    #[arg(long, help = "Seed for the weather jitter (random when omitted)")]
    pub seed: Option<u64>,

    #[arg(
        long,
        default_value_t = 300,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Seconds between weather updates"
    )]
    pub update_interval: u64,

    #[arg(
        long,
        default_value_t = 120,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Seconds between alert rotations"
    )]
    pub alert_interval: u64,

    #[arg(
        long,
        default_value_t = 60,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Seconds between \"Updated\" timestamp refreshes"
    )]
    pub clock_interval: u64,

    #[arg(long = "alert", value_name = "TEXT", help = "Alert message to rotate (repeatable)")]
    pub alerts: Vec<String>,

    #[arg(long, default_value = "clearcast.log", help = "File receiving log output")]
    pub log_file: PathBuf,

    #[arg(long, help = "Print the widget once to stdout instead of opening the TUI")]
    pub once: bool,

    #[arg(
        long,
        default_value_t = 0,
        help = "Weather updates to apply before printing with --once"
    )]
    pub ticks: u32,
}

impl Args {
    pub fn timings(&self) -> Timings {
        Timings {
            weather_update: Duration::from_secs(self.update_interval),
            alert_rotation: Duration::from_secs(self.alert_interval),
            timestamp_refresh: Duration::from_secs(self.clock_interval),
            ..Timings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_timings() {
        let args = Args::parse_from(["clearcast"]);
        assert_eq!(args.timings(), Timings::default());
        assert!(args.alerts.is_empty());
        assert!(!args.once);
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "clearcast",
            "--seed",
            "9",
            "--update-interval",
            "10",
            "--alert",
            "Fog advisory",
            "--alert",
            "Frost warning",
            "--once",
            "--ticks",
            "3",
        ]);
        assert_eq!(args.seed, Some(9));
        assert_eq!(args.timings().weather_update, Duration::from_secs(10));
        assert_eq!(args.alerts, vec!["Fog advisory", "Frost warning"]);
        assert_eq!(args.ticks, 3);
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        assert!(Args::try_parse_from(["clearcast", "--alert-interval", "0"]).is_err());
    }
}
