pub mod age;
pub mod cli;
pub mod logger;
pub mod stats;
pub mod svg;
pub mod zodiac;

pub use age::{AgeBreakdown, age_breakdown, decompose_ms, share_line};
pub use cli::CliConfig;
pub use stats::VitalStats;
pub use svg::Theme;
pub use zodiac::{ZodiacSign, sign_for};
