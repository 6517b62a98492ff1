use agecard::cli::CliConfig;
use agecard::{age, logger, stats, svg, zodiac};
use anyhow::{Context, Result, bail};
use chrono::Utc;
use clap::Parser;
use std::fs;

fn main() -> Result<()> {
    let config = CliConfig::parse();
    logger::init(config.verbose);

    // One read of the clock per calculation
    let now = Utc::now().naive_utc();
    if config.birthdate > now.date() && !config.allow_future {
        bail!(
            "birth date {} is in the future; pass --allow-future to measure the time until it",
            config.birthdate
        );
    }

    let age = age::age_breakdown(config.birthdate, now);
    let zodiac = zodiac::sign_for(config.birthdate);
    let vitals = stats::VitalStats::from_years(age.years);
    tracing::debug!("computed age: {}", age::age_string(&age));

    if config.json {
        let report = serde_json::json!({
            "age": age,
            "zodiac": zodiac,
            "vitals": vitals,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let card_vitals = config.stats.then_some(&vitals);
    let svg_dark = svg::generate_svg(&age, zodiac, card_vitals, svg::Theme::Dark);
    let svg_light = svg::generate_svg(&age, zodiac, card_vitals, svg::Theme::Light);

    fs::create_dir_all(&config.out_dir)
        .with_context(|| format!("creating output directory {}", config.out_dir.display()))?;
    fs::write(config.out_dir.join("dark_mode.svg"), svg_dark)
        .context("writing dark_mode.svg")?;
    fs::write(config.out_dir.join("light_mode.svg"), svg_light)
        .context("writing light_mode.svg")?;
    tracing::info!(
        "wrote dark_mode.svg and light_mode.svg to {}",
        config.out_dir.display()
    );

    println!("{}", age::share_line(&age));

    Ok(())
}
