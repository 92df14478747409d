//! Subcommand implementations

use super::{Cli, Command};
use anyhow::{bail, Context, Result};
use cleanup_cost_core::map::{heat_points, marker_features};
use cleanup_cost_core::report::format::money;
use cleanup_cost_core::report::{point_report, search_country, summarize, verify};
use cleanup_cost_core::table::default_output_path;
use cleanup_cost_core::{
    analysis_rows, analysis_rows_from, enrich, generate, group_by_country, relocate, AnalysisRow,
    CleanupEvent, CostModel, CostRates, CostSource, GeneratorConfig, RngManager, Table,
    COST_COLUMNS,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Event used by `sample`: 25 people, 150.5 lb, 2.3 miles, 8 bags
const SAMPLE_EVENT: CleanupEvent = CleanupEvent {
    people: 25,
    pounds: 150.5,
    miles: 2.3,
    bags: 8,
};

/// Cost model plus where report rows take their costs from
struct Costing {
    model: CostModel,
    source: CostSource,
}

pub fn run(cli: Cli) -> Result<()> {
    let costing = load_costing(cli.rates.as_deref())?;
    let model = &costing.model;

    match cli.command {
        Command::Sample { json } => sample(model, json),
        Command::Generate {
            output,
            config,
            seed,
            reference_date,
            countries,
            with_costs,
        } => {
            let mut generator: GeneratorConfig = match config {
                Some(path) => {
                    let text = fs::read_to_string(&path)
                        .with_context(|| format!("failed to read {}", path.display()))?;
                    serde_json::from_str(&text)
                        .with_context(|| format!("invalid generator config {}", path.display()))?
                }
                None => GeneratorConfig::default(),
            };
            if let Some(seed) = seed {
                generator.seed = seed;
            }
            if reference_date.is_some() {
                generator.reference_date = reference_date;
            }
            if !countries.is_empty() {
                generator.countries = countries;
            }
            generate_dataset(model, &generator, &output, with_costs)
        }
        Command::Annotate { input, output } => annotate(model, &input, output),
        Command::Report { input, top, export } => {
            report(&costing, &input, top, export.as_deref())
        }
        Command::Points {
            input,
            limit,
            search,
        } => points(&costing, &input, limit, search.as_deref()),
        Command::Verify { input } => {
            let table = Table::read_csv(&input)?;
            print!("{}", verify(&table));
            Ok(())
        }
        Command::Map {
            input,
            output,
            heat,
        } => map(&costing, &input, &output, heat.as_deref()),
        Command::Relocate {
            input,
            output,
            seed,
        } => {
            let mut table = Table::read_csv(&input)?;
            let moved = relocate(&mut table, &mut RngManager::new(seed))?;
            write_table(&table, &output)?;
            println!("Relocated {} cleanup points -> {}", moved, output.display());
            Ok(())
        }
    }
}

/// Explicit rates always win over cost columns stored in an input file
fn load_costing(rates: Option<&Path>) -> Result<Costing> {
    let Some(path) = rates else {
        return Ok(Costing {
            model: CostModel::default(),
            source: CostSource::Stored,
        });
    };

    let rates = CostRates::load(path)
        .with_context(|| format!("failed to load rates from {}", path.display()))?;
    info!(path = %path.display(), "loaded cost rates, stored cost columns will be recomputed");
    Ok(Costing {
        model: CostModel::new(rates),
        source: CostSource::Model,
    })
}

fn load_rows(costing: &Costing, input: &Path) -> Result<Vec<AnalysisRow>> {
    let table = Table::read_csv(input)?;
    let rows = analysis_rows_from(&table, &costing.model, costing.source)
        .with_context(|| format!("failed to read cleanup rows from {}", input.display()))?;
    info!(rows = rows.len(), "loaded cleanup records");
    Ok(rows)
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    Ok(())
}

fn write_table(table: &Table, path: &Path) -> Result<()> {
    create_parent(path)?;
    table.write_csv(path)?;
    Ok(())
}

fn write_json(value: &impl serde::Serialize, path: &Path) -> Result<()> {
    create_parent(path)?;
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

fn sample(model: &CostModel, json: bool) -> Result<()> {
    let costs = model.compute(&SAMPLE_EVENT);
    if json {
        println!("{}", serde_json::to_string_pretty(&costs)?);
        return Ok(());
    }

    println!(
        "Sample cleanup: {} people, {} lb, {} miles, {} bags",
        SAMPLE_EVENT.people, SAMPLE_EVENT.pounds, SAMPLE_EVENT.miles, SAMPLE_EVENT.bags
    );
    for (name, value) in COST_COLUMNS.iter().zip(costs.values()) {
        println!("   {:<24} {:>12.2}", name, value);
    }
    Ok(())
}

fn generate_dataset(
    model: &CostModel,
    config: &GeneratorConfig,
    output: &Path,
    with_costs: bool,
) -> Result<()> {
    let dataset = generate(config)?;
    let table = dataset.to_table();
    write_table(&table, output)?;
    println!(
        "Generated {} cleanup records -> {}",
        dataset.records.len(),
        output.display()
    );
    println!("Config fingerprint: {}", dataset.config_hash);

    if with_costs {
        let enriched = enrich(table, model)?;
        let costs_path = default_output_path(output);
        write_table(&enriched.table, &costs_path)?;
        println!("Data with costs -> {}", costs_path.display());

        let rows = analysis_rows(&enriched.table, model)?;
        print!("{}", summarize(&rows, 10));
    }
    Ok(())
}

fn annotate(model: &CostModel, input: &Path, output: Option<PathBuf>) -> Result<()> {
    let table = Table::read_csv(input)?;
    let enriched = enrich(table, model)?;
    if !enriched.defaulted_columns.is_empty() {
        warn!(
            "added missing columns with defaults: {}",
            enriched.defaulted_columns.join(", ")
        );
    }

    let output = output.unwrap_or_else(|| default_output_path(input));
    write_table(&enriched.table, &output)?;

    let rows = analysis_rows(&enriched.table, model)?;
    let totals = group_by_country(&rows).overall();
    println!(
        "Annotated {} cleanup points -> {}",
        enriched.table.len(),
        output.display()
    );
    println!("   Total cost: {}", money(totals.total_cost));
    println!("   Average cost per event: {}", money(totals.cost_per_event()));
    if enriched.suspicious_rows > 0 {
        println!(
            "   {} rows have negative or non-finite quantities",
            enriched.suspicious_rows
        );
    }
    Ok(())
}

fn report(costing: &Costing, input: &Path, top: usize, export: Option<&Path>) -> Result<()> {
    let rows = load_rows(costing, input)?;
    if rows.is_empty() {
        bail!("{} has no cleanup rows", input.display());
    }
    print!("{}", summarize(&rows, top));

    if let Some(path) = export {
        let analysis = group_by_country(&rows).to_table("Country")?;
        write_table(&analysis, path)?;
        println!("\nDetailed country analysis saved to: {}", path.display());
    }
    Ok(())
}

fn points(costing: &Costing, input: &Path, limit: usize, search: Option<&str>) -> Result<()> {
    let rows = load_rows(costing, input)?;
    match search {
        Some(query) => print!("{}", search_country(&rows, query)),
        None => print!("{}", point_report(&rows, limit)),
    }
    Ok(())
}

fn map(costing: &Costing, input: &Path, output: &Path, heat: Option<&Path>) -> Result<()> {
    let rows = load_rows(costing, input)?;

    let markers = marker_features(&rows);
    write_json(&markers, output)?;
    let count = markers["features"].as_array().map_or(0, Vec::len);
    println!("Wrote {} map markers -> {}", count, output.display());

    if let Some(path) = heat {
        let points = heat_points(&rows);
        write_json(&points, path)?;
        println!("Wrote {} heat points -> {}", points.len(), path.display());
    }
    Ok(())
}
