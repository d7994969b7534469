use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use wardsync_lib::config;
use wardsync_lib::db;
use wardsync_lib::pipeline::{report, Importer, MigrationError, MigrationReport, Snapshot};

#[derive(Parser)]
#[command(name = config::APP_NAME, version, about = "Dependency-ordered hospital record migration with deterministic repair")]
struct Args {
    /// Path to the snapshot JSON artifact exported from the source store
    snapshot: PathBuf,

    /// SQLite database receiving the records
    #[arg(short, long, default_value = config::DEFAULT_DATABASE)]
    database: PathBuf,

    /// Write the reconciliation report here instead of stdout
    #[arg(short, long)]
    report: Option<PathBuf>,

    /// Validate, repair and classify without writing to the store
    #[arg(long)]
    dry_run: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = if args.quiet {
        EnvFilter::new("warn")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter()))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("{} v{} starting", config::APP_NAME, config::APP_VERSION);

    match run(&args) {
        Ok(report) if report.complete => ExitCode::SUCCESS,
        Ok(_) => {
            tracing::error!("Migration incomplete — see report for per-entity rejections");
            ExitCode::FAILURE
        }
        Err(e) => {
            tracing::error!(error = %e, "Migration aborted");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<MigrationReport, MigrationError> {
    let snapshot = Snapshot::load(&args.snapshot)?;
    tracing::info!(
        snapshot = %args.snapshot.display(),
        records = snapshot.total_records(),
        "Snapshot loaded"
    );

    let conn = db::open_database(&args.database)?;
    let importer = Importer::new(&conn, args.dry_run)?;
    let migration_report = importer.run(&snapshot)?;

    report::log_summary(&migration_report);

    if !args.dry_run {
        record_run(&conn, &migration_report);
    }

    report::write_report(&migration_report, args.report.as_deref())?;
    Ok(migration_report)
}

/// Best effort — a run that finished its report should not fail because the
/// audit row could not be written.
fn record_run(conn: &rusqlite::Connection, migration_report: &MigrationReport) {
    let entry = db::RunLogEntry {
        run_id: migration_report.run_id.to_string(),
        started_at: migration_report.started_at.to_string(),
        finished_at: migration_report
            .finished_at
            .map(|t| t.to_string())
            .unwrap_or_default(),
        dry_run: migration_report.dry_run,
        complete: migration_report.complete,
        report_json: migration_report.to_json().unwrap_or_default(),
    };
    if let Err(e) = db::insert_run_log(conn, &entry) {
        tracing::warn!(error = %e, "Could not record run audit row");
    }
}
