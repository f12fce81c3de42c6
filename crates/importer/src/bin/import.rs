use std::path::PathBuf;

use clap::{Parser, Subcommand};
use importer::{
    ImportContext, SeedOutcome, WorkoutCsvImporter, force_seed, seed_if_empty,
    sources::workout_csv::AggregationReport,
};
use storage::Database;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "import")]
#[command(about = "Workout history CSV importer", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://fitness.db?mode=rwc")]
    database_url: String,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a workout log export into the workout history
    Seed {
        file: PathBuf,

        /// Parse and summarize without writing
        #[arg(long)]
        dry_run: bool,

        /// Import even when the history already has rows
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("import={},importer={},storage={}", log_level, log_level, log_level)
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Seed {
            file,
            dry_run,
            force,
        } => {
            handle_seed(file, dry_run, force, &cli.database_url).await?;
        }
    }

    Ok(())
}

async fn handle_seed(
    file: PathBuf,
    dry_run: bool,
    force: bool,
    database_url: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let importer = WorkoutCsvImporter::new(file);

    if dry_run {
        tracing::info!("Reading {} (dry run)", importer.path().display());
        let report = importer.read().await?;
        print_report(&report);
        return Ok(());
    }

    tracing::info!("Connecting to database...");
    let db = Database::new(database_url).await?;
    db.run_migrations().await?;

    let context = ImportContext {
        pool: db.pool().clone(),
    };
    let outcome = if force {
        force_seed(&importer, &context).await?
    } else {
        seed_if_empty(&importer, &context).await?
    };

    match outcome {
        SeedOutcome::Seeded(summary) => {
            tracing::info!(
                "✓ Seeded {} workouts ({} sets, {} rows skipped)",
                summary.workouts,
                summary.sets,
                summary.rows_skipped
            );
        }
        SeedOutcome::AlreadySeeded { existing } => {
            tracing::warn!(
                "History already has {} workouts; rerun with --force to import anyway",
                existing
            );
        }
        SeedOutcome::SourceMissing(path) => {
            return Err(format!("File not found: {}", path.display()).into());
        }
    }

    Ok(())
}

fn print_report(report: &AggregationReport) {
    tracing::info!(
        "Rows: {} read, {} skipped",
        report.rows_read,
        report.rows_skipped
    );
    tracing::info!(
        "Would import {} workouts with {} sets",
        report.workouts.len(),
        report.set_count()
    );
    for workout in &report.workouts {
        tracing::debug!(
            "  {} {} ({} sets, {:.1} kg, {} min)",
            workout.workout_date,
            workout.title,
            workout.sets,
            workout.volume_kg,
            workout.duration_minutes
        );
    }
}
