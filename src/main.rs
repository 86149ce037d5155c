// ==========================================
// Invoicing Platform - Import CLI
// ==========================================
// Usage:
//   invoicing-import <customers|products> <file> [--db <path>] [--org <id>]
// Prints the JSON import response to stdout; structural/commit errors
// print { "error": ... } and exit non-zero.
// ==========================================

use invoicing_import::{logging, EntityKind, ImportService, SqliteImportRepository};
use std::path::Path;
use std::process::ExitCode;

const DEFAULT_DB_PATH: &str = "invoicing.db";
const DEFAULT_ORG_ID: &str = "default";

struct CliArgs {
    kind: EntityKind,
    file_path: String,
    db_path: String,
    organization_id: String,
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);

    let kind_raw = args.next().ok_or_else(usage)?;
    let kind = EntityKind::parse(&kind_raw)
        .ok_or_else(|| format!("unknown entity kind: {} ({})", kind_raw, usage()))?;
    let file_path = args.next().ok_or_else(usage)?;

    let mut db_path = DEFAULT_DB_PATH.to_string();
    let mut organization_id = DEFAULT_ORG_ID.to_string();
    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--db" => db_path = args.next().ok_or("--db requires a value")?,
            "--org" => organization_id = args.next().ok_or("--org requires a value")?,
            other => return Err(format!("unknown argument: {} ({})", other, usage())),
        }
    }

    Ok(CliArgs {
        kind,
        file_path,
        db_path,
        organization_id,
    })
}

fn usage() -> String {
    "usage: invoicing-import <customers|products> <file> [--db <path>] [--org <id>]".to_string()
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}", message);
            return ExitCode::from(2);
        }
    };

    tracing::info!(
        version = invoicing_import::VERSION,
        kind = %args.kind,
        file = %args.file_path,
        "starting import"
    );

    let bytes = match std::fs::read(&args.file_path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("cannot read {}: {}", args.file_path, e);
            return ExitCode::FAILURE;
        }
    };

    let file_name = Path::new(&args.file_path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(args.file_path.as_str());

    let repo = match SqliteImportRepository::new(&args.db_path) {
        Ok(repo) => repo,
        Err(e) => {
            eprintln!("cannot open database {}: {}", args.db_path, e);
            return ExitCode::FAILURE;
        }
    };

    let service = ImportService::new(repo);
    match service
        .import(args.kind, file_name, &bytes, &args.organization_id)
        .await
    {
        Ok(response) => {
            // both success and validation-failure payloads go to stdout
            match serde_json::to_string_pretty(&response) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("cannot serialize response: {}", e);
                    return ExitCode::FAILURE;
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "import failed");
            println!("{}", serde_json::json!({ "error": e.to_string() }));
            ExitCode::FAILURE
        }
    }
}
