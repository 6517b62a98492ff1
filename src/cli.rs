use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

/// Computes your age from a birth date and renders it as themed SVG cards.
#[derive(Parser, Debug, Clone)]
#[command(name = "agecard", version, about)]
pub struct CliConfig {
    /// Birth date, YYYY-MM-DD
    #[arg(long, value_name = "DATE")]
    pub birthdate: NaiveDate,

    /// Directory the SVG cards are written to
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Include the vital statistics section on the card
    #[arg(long)]
    pub stats: bool,

    /// Print the calculation as JSON to stdout instead of writing cards
    #[arg(long)]
    pub json: bool,

    /// Accept a birth date later than today (elapsed time is then measured
    /// up to that date instead of from it)
    #[arg(long)]
    pub allow_future: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_birthdate_and_defaults() {
        let config =
            CliConfig::try_parse_from(["agecard", "--birthdate", "1992-06-14"]).unwrap();
        assert_eq!(
            config.birthdate,
            NaiveDate::from_ymd_opt(1992, 6, 14).unwrap()
        );
        assert_eq!(config.out_dir, PathBuf::from("."));
        assert!(!config.stats);
        assert!(!config.json);
        assert!(!config.allow_future);
    }

    #[test]
    fn test_rejects_malformed_birthdate() {
        assert!(CliConfig::try_parse_from(["agecard", "--birthdate", "June 1992"]).is_err());
        assert!(CliConfig::try_parse_from(["agecard", "--birthdate", "1992-02-31"]).is_err());
        assert!(CliConfig::try_parse_from(["agecard"]).is_err());
    }

    #[test]
    fn test_flags() {
        let config = CliConfig::try_parse_from([
            "agecard",
            "--birthdate",
            "1992-06-14",
            "--stats",
            "--json",
            "--out-dir",
            "/tmp/cards",
        ])
        .unwrap();
        assert!(config.stats);
        assert!(config.json);
        assert_eq!(config.out_dir, PathBuf::from("/tmp/cards"));
    }
}
