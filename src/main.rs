use clap::{Parser, Subcommand};
use core_types::TabularResult;
use database::DbRepository;
use dashboard::DashboardView;
use filters::FilterState;
use tracing_subscriber::EnvFilter;

/// The main entry point for the Courtside dashboard application.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from a .env file, if one exists.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Parse command-line arguments.
    let cli = Cli::parse();

    // Execute the appropriate command.
    match cli.command {
        Commands::Show(args) => handle_show(args).await,
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A terminal front-end for the tennis competitor analytics dashboard.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one render cycle and print the dashboard.
    Show(ShowArgs),
}

#[derive(Parser)]
struct ShowArgs {
    /// Restrict the rankings panel to this country (exact match).
    #[arg(long)]
    country: Option<String>,

    /// Restrict the competitions panel to this category (exact match).
    #[arg(long)]
    category: Option<String>,

    /// Dump the assembled view as JSON instead of rendering tables.
    #[arg(long)]
    json: bool,
}

// ==============================================================================
// Show Command Logic
// ==============================================================================

/// Handles one full render cycle: connect (or degrade), apply the submitted
/// filters, assemble the view, and print it.
async fn handle_show(args: ShowArgs) -> anyhow::Result<()> {
    let settings = configuration::load_config()?;

    // A failed connection degrades to an empty dashboard with a warning; the
    // command itself still succeeds.
    let repo = match database::connect(&settings.database).await {
        Ok(pool) => DbRepository::new(pool),
        Err(e) => {
            tracing::error!(error = %e, "database connection failed");
            DbRepository::disconnected()
        }
    };

    // The submitted flags play the role of the "Apply Filters" action; no
    // flags means the cleared state.
    let mut state = FilterState::default();
    if args.country.is_some() || args.category.is_some() {
        state.apply(args.country, args.category);
    }

    let view = dashboard::render(&repo, &state).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }
    print_dashboard(&view);
    Ok(())
}

fn print_dashboard(view: &DashboardView) {
    for warning in &view.diagnostics {
        eprintln!("warning: {warning}");
    }

    println!(
        "Displaying data for Country: {}, Category: {}",
        view.active_country, view.active_category
    );

    print_table("Competitor Rankings", &view.rankings);
    print_table("Top 10 Players (Overall)", &view.top_players);
    print_table("Venues & Complexes", &view.venues);
    print_table("Competitions", &view.competitions);

    println!("\n{}", view.country_histogram.title);
    for bucket in &view.country_histogram.buckets {
        println!("  {:<24} {}", bucket.label, bucket.count);
    }

    println!("\n{}", view.points_bar.title);
    for bar in &view.points_bar.bars {
        println!("  {:<24} {}", bar.label, bar.value);
    }
}

fn print_table(title: &str, table: &TabularResult) {
    println!("\n== {title} ==");
    if table.is_empty() {
        println!("(no data)");
        return;
    }
    let mut out = comfy_table::Table::new();
    out.set_header(table.columns());
    for row in table.rows() {
        out.add_row(row.iter().map(|cell| cell.to_string()));
    }
    println!("{out}");
}
