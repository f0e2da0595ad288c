//! Test Recommendations
//!
//! Prints ranked crop recommendations for a few sample soils, with and without
//! the current weather, plus today's seasonal guide and price board.
//!
//! Run with: cargo run --bin test_recommendations [crop_table.json]

use anyhow::Context;
use crop_advisor::providers::{PriceBoard, StaticPriceFeed, StaticWeatherProvider, WeatherProvider};
use crop_advisor::scorer::score_all;
use crop_advisor::utils::{format_inr, format_percent_change};
use crop_advisor::{recommend_with, soil_advisory, CropTable, NitrogenLevel, SeasonalGuide, SoilSample};

/// Sample soils: (label, sample)
const SAMPLE_SOILS: &[(&str, SoilSample)] = &[
    (
        "Form defaults",
        SoilSample { ph: 7.0, moisture: 50.0, nitrogen: 20.0, phosphorus: 15.0, potassium: 25.0 },
    ),
    (
        "Wet, nitrogen-rich paddy",
        SoilSample { ph: 6.5, moisture: 65.0, nitrogen: 35.0, phosphorus: 15.0, potassium: 25.0 },
    ),
    (
        "Acidic, dry, depleted",
        SoilSample { ph: 4.8, moisture: 22.0, nitrogen: 8.0, phosphorus: 6.0, potassium: 12.0 },
    ),
];

fn main() -> anyhow::Result<()> {
    let table = match std::env::args().nth(1) {
        Some(path) => CropTable::from_json_file(&path)
            .with_context(|| format!("loading crop table from {}", path))?,
        None => CropTable::builtin().clone(),
    };

    let weather = StaticWeatherProvider::default().get_weather();

    println!("{}", "=".repeat(70));
    println!("CROP RECOMMENDATIONS ({} crops in table)", table.len());
    println!("{}", "=".repeat(70));

    for (label, soil) in SAMPLE_SOILS {
        println!("\n## {} {:?}", label, soil);
        println!("  nitrogen class: {}", NitrogenLevel::classify(soil.nitrogen).display_text());

        for (heading, w) in [("no weather", None), ("with weather", weather.as_ref())] {
            println!("\n  [{}]", heading);
            for (rank, rec) in recommend_with(&table, soil, w).iter().enumerate() {
                println!(
                    "  {}. {} {:<10} {:<6} {}",
                    rank + 1,
                    rec.icon,
                    rec.name,
                    rec.suitability.display_text(),
                    rec.reason
                );
            }
        }

        println!("\n  [all scores]");
        for score in score_all(&table, soil, weather.as_ref()) {
            println!("  {:<10} {:>2}", score.name, score.score());
        }

        println!("\n  [soil advisory]");
        for advisory in soil_advisory(soil) {
            println!(
                "  {:<45} {:?} by {:.1} ({})",
                advisory.detail, advisory.status, advisory.deviation, advisory.guidance
            );
        }
    }

    let guide = SeasonalGuide::current();
    println!("\n## {}", guide.title);
    println!("  Crops: {}", guide.crops.join(", "));
    for tip in guide.tips {
        println!("  - {}", tip);
    }

    let feed = StaticPriceFeed::default();
    let board = PriceBoard::fetch(&feed);
    println!("\n## Market prices ({})", board.fetched_at.format("%H:%M:%S"));
    for price in board.prices() {
        println!(
            "  {} {:<10} {:>10} {:>7}  {}",
            price.icon,
            price.name,
            format_inr(price.current_price),
            format_percent_change(price.change_percent()),
            price.market
        );
    }

    Ok(())
}
