// Plant care command line
//
// Thin presentation layer over the analysis library: loads the datasets,
// runs one analysis per invocation and prints text or JSON.
// Usage: cargo run --bin plant_care -- --data-dir data environment "Rose"

use anyhow::Context;
use clap::{Parser, Subcommand};
use plant_care_rust::catalog::{distinct_soil_types, distinct_watering};
use plant_care_rust::flowering::check_condition;
use plant_care_rust::growth::GrowthComparison;
use plant_care_rust::utils::LeafStatusKind;
use plant_care_rust::{
    aggregate_by_season_and_score, classify_flowering, compare_growth, filter_plants,
    growth_rate_points, resolve_flowering, resolve_plant, DataPaths, FloweringAnalysis,
    GrowthInput, LeafColor, PlantDatabase, PlantDetails, PlantFilters, ScoringConfig,
    SeasonalAnalysis, SoilType,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "plant_care", about = "Plant care analysis over reference datasets")]
struct Cli {
    /// Directory holding the CSV files and image folder (overrides DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Plant catalog CSV (overrides PLANT_DATA_CSV)
    #[arg(long, global = true)]
    plants_csv: Option<PathBuf>,

    /// Flowering calendar CSV (overrides FLOWERING_DATA_CSV)
    #[arg(long, global = true)]
    flowering_csv: Option<PathBuf>,

    /// Environment observations CSV (overrides ENVIRONMENT_DATA_CSV)
    #[arg(long, global = true)]
    environment_csv: Option<PathBuf>,

    /// Plant image folder (overrides PLANT_IMAGE_DIR)
    #[arg(long, global = true)]
    image_dir: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List catalog plants, optionally filtered
    List {
        /// Case-insensitive name substring
        #[arg(long)]
        search: Option<String>,
        /// Soil type filter (repeatable)
        #[arg(long = "soil")]
        soil: Vec<String>,
        /// Watering category filter (repeatable)
        #[arg(long = "watering")]
        watering: Vec<String>,
    },
    /// Sunlight hours vs growth rate points for every plant
    Chart,
    /// Show one plant's catalog details
    Show { name: String },
    /// Compare your growing conditions with the plant's ideal
    Growth {
        name: String,
        #[arg(long)]
        sunlight: String,
        #[arg(long)]
        soil: String,
        #[arg(long)]
        height: String,
    },
    /// Flowering and fruiting calendar analysis
    Flowering {
        name: String,
        /// Describe a flowering or fruiting problem
        #[arg(long)]
        issue: Option<String>,
        /// Leaf symptom for diagnosis (Yellow, Brown, Drooping, Dark Green, Purplish)
        #[arg(long)]
        leaf: Option<String>,
    },
    /// Best season from environmental observations
    Environment {
        name: String,
        /// JSON file overriding the scoring constants
        #[arg(long)]
        scoring_config: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "plant_care_rust=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut paths = match &cli.data_dir {
        Some(dir) => DataPaths::in_dir(dir),
        None => DataPaths::from_env(),
    };
    if let Some(p) = cli.plants_csv.clone() {
        paths.plants_csv = p;
    }
    if let Some(p) = cli.flowering_csv.clone() {
        paths.flowering_csv = p;
    }
    if let Some(p) = cli.environment_csv.clone() {
        paths.environment_csv = p;
    }
    if let Some(p) = cli.image_dir.clone() {
        paths.image_dir = p;
    }
    tracing::debug!("Data paths: {:?}", paths);

    let db = PlantDatabase::load(&paths)?;

    match cli.command {
        Command::List { search, soil, watering } => {
            let soil_types = soil
                .iter()
                .map(|s| SoilType::parse(s).with_context(|| format!("Unknown soil type '{}'", s)))
                .collect::<anyhow::Result<Vec<_>>>()?;
            let filters = PlantFilters { search, soil_types, watering };
            let plants = filter_plants(&db.plants, &filters);

            if cli.json {
                return print_json(&plants);
            }
            let soils: Vec<&str> = distinct_soil_types(&db.plants).iter().map(|s| s.label()).collect();
            println!("Soil types: {}", soils.join(", "));
            println!("Watering: {}", distinct_watering(&db.plants).join(", "));
            println!("\nPlant List ({} of {})", plants.len(), db.plants.len());
            for plant in plants {
                println!("  {}", plant.name);
            }
        }
        Command::Chart => {
            let points = growth_rate_points(&db.plants);
            if cli.json {
                return print_json(&points);
            }
            println!("Sunlight Hours vs Growth Rate (1=Slow, 2=Medium, 3=Fast)");
            for point in points {
                println!("  {:<24} {:>5} h  {}", point.name, point.sunlight_hours, point.growth_ordinal);
            }
        }
        Command::Show { name } => {
            let plant = resolve_plant(&db, &name)?;
            let details = PlantDetails::new(plant, &paths.image_dir);
            if cli.json {
                return print_json(&details);
            }
            print_details(&details);
        }
        Command::Growth { name, sunlight, soil, height } => {
            let plant = resolve_plant(&db, &name)?;
            let input = GrowthInput::parse(&sunlight, &soil, &height)?;
            let comparison = compare_growth(plant, &input)?;
            if cli.json {
                return print_json(&comparison);
            }
            print_growth(&comparison);
        }
        Command::Flowering { name, issue, leaf } => {
            let record = resolve_flowering(&db, &name)?;
            let analysis = classify_flowering(record);

            let symptom = match leaf.as_deref() {
                Some(raw) => Some(
                    LeafColor::parse(raw).with_context(|| format!("Unknown leaf symptom '{}'", raw))?,
                ),
                None => None,
            };
            let check = issue.as_deref().map(|report| check_condition(report, symptom));

            if cli.json {
                #[derive(Serialize)]
                struct Output<'a> {
                    analysis: &'a FloweringAnalysis,
                    condition: Option<plant_care_rust::flowering::ConditionCheck>,
                }
                return print_json(&Output { analysis: &analysis, condition: check });
            }
            print_flowering(&analysis);
            if let Some(check) = check {
                println!("\nPlant Condition Check");
                if !check.issue_detected {
                    println!("  Your plant appears to be growing well!");
                } else {
                    println!("  Your plant may have a growth issue. Consider checking soil nutrients, watering, and sunlight!");
                    if let Some(d) = check.diagnosis {
                        println!("  Issue Analysis: {} Leaves", d.symptom.label());
                        println!("    Cause: {}", d.cause);
                        println!("    Effect: {}", d.effect);
                        println!("    Solution: {}", d.solution);
                    }
                }
            }
        }
        Command::Environment { name, scoring_config } => {
            let config = match scoring_config {
                Some(path) => ScoringConfig::load(&path)?,
                None => ScoringConfig::default(),
            };
            let analysis = aggregate_by_season_and_score(&db.observations, &name, &config)?;
            if cli.json {
                return print_json(&analysis);
            }
            print_environment(&analysis);
        }
    }

    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn or_na<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "n/a".to_string())
}

fn print_details(details: &PlantDetails) {
    println!("{} - Plant Details", details.name);
    println!("  Soil Type:          {}", or_na(details.soil_type));
    println!("  Watering Needs:     {}", or_na(details.watering.as_deref()));
    println!("  Temperature Range:  {}", or_na(details.temperature.as_ref()));
    println!("  Sunlight Hours:     {} hours/day", or_na(details.sunlight_hours));
    println!("  Growth Rate:        {}", or_na(details.growth_rate));
    println!("  Height (cm):        {}", or_na(details.height_cm));
    match &details.image {
        Some(path) => println!("  Image:              {}", path.display()),
        None => println!("  Image not available"),
    }
}

fn print_growth(comparison: &GrowthComparison) {
    println!("Your Growth Condition vs. Ideal Conditions ({})", comparison.plant);
    for bar in &comparison.chart {
        println!("  {:<18} yours {:>6}  ideal {:>6}", bar.factor, bar.user, bar.ideal);
    }
    println!("\nTotal deviation: {}", comparison.total_deviation);
    println!("Growth Rate: {}", comparison.outlook.label());
    println!("\nRecommendations");
    for line in comparison.recommendations.messages() {
        println!("  {}", line);
    }
}

fn print_flowering(analysis: &FloweringAnalysis) {
    println!("Flowering & Fruiting Stages: {}", analysis.plant);
    println!("  This plant is categorized as: {}", analysis.kind.label());
    if let Some(season) = &analysis.flowering_season {
        println!("  Flowering Season: {}", season);
    }
    if let Some(season) = &analysis.fruiting_season {
        println!("  Fruiting Season: {}", season);
    }
    if let Some(nutrient) = &analysis.soil_nutrient {
        println!("  Soil Nutrient Requirements: {}", nutrient);
    }
    if let Some(color) = &analysis.leaf_color {
        println!("  Leaf Color: {}", color);
    }
    if let Some(status) = &analysis.leaf_status {
        let marker = match status.kind {
            LeafStatusKind::Healthy => "ok",
            LeafStatusKind::Warning => "warning",
        };
        println!("    [{}] {}", marker, status.message);
    }

    println!("\nTrends Over the Year (flowering / fruiting)");
    let fruiting = analysis.fruiting_by_month.by_month();
    for ((month, fl), (_, fr)) in analysis.flowering_by_month.by_month().into_iter().zip(fruiting) {
        println!("  {:<10} {} / {}", month, fl, fr);
    }

    if let Some(season) = analysis.best_flowering_season {
        println!("\nBest Season for Flowering: {}", season);
    }
    if let Some(season) = analysis.best_fruiting_season {
        println!("Best Season for Fruiting: {}", season);
    }

    if !analysis.height_by_season.is_empty() {
        println!("\nHeight by Season (cm)");
        for h in &analysis.height_by_season {
            println!("  {:<10} {}-{}", h.season, h.min_cm, h.max_cm);
        }
    }
}

fn print_environment(analysis: &SeasonalAnalysis) {
    println!("Environmental Impact Analysis: {}", analysis.plant);
    println!("  {:<10} {:>8} {:>10} {:>8}", "Season", "Temp °C", "Humidity %", "AQI");
    for agg in &analysis.aggregates {
        let flag = if agg.recognized { "" } else { "  (unrecognised season)" };
        println!(
            "  {:<10} {:>8.1} {:>10.1} {:>8.1}{}",
            agg.season, agg.mean_temperature_c, agg.mean_humidity_pct, agg.mean_aqi, flag
        );
    }
    for skipped in &analysis.incomplete {
        println!(
            "  {:<10} not scored: no usable {}",
            skipped.season,
            skipped.missing_columns.join(", ")
        );
    }

    println!(
        "\nBased on environmental factors, {} is best suited for {} season!",
        analysis.plant, analysis.best_season
    );
    println!("\nScoring Breakdown:");
    for score in &analysis.scores {
        println!("  {} -> Score: {:.1}", score.season, score.score);
    }
}
