//! Command-line entry point for Stockroom store files.
//!
//! # Responsibility
//! - Provide a quick probe of `stockroom_core` linkage.
//! - Export and import backup archives of a store file.
//!
//! User-facing output goes to stdout/stderr; diagnostics go to the log
//! directory named by `STOCKROOM_LOG_DIR` when it is set.

use chrono::Utc;
use log::info;
use std::error::Error;
use std::path::Path;
use std::process::ExitCode;
use std::{env, fs};
use stockroom_core::db::open_db;
use stockroom_core::{
    export_storage, import_storage, init_logging, CompanyRepository, LoggingConfig,
    SqliteKeyValueStore, StoreCompanyRepository, DEFAULT_EXPORT_KEYS,
};

type CliResult = Result<(), Box<dyn Error>>;

fn main() -> ExitCode {
    if let Err(err) = setup_logging() {
        eprintln!("Logging disabled: {err}");
    }

    let args: Vec<String> = env::args().skip(1).collect();
    let result = match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["ping"] => {
            println!("stockroom_core ping={}", stockroom_core::ping());
            Ok(())
        }
        ["version"] => {
            println!("stockroom_core version={}", stockroom_core::core_version());
            Ok(())
        }
        ["export", db, out_dir] => run_export(Path::new(db), Path::new(out_dir)),
        ["import", db, archive] => run_import(Path::new(db), Path::new(archive)),
        ["companies", db] => run_list_companies(Path::new(db)),
        ["help"] | [] => {
            print_help();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {}", other.join(" "));
            eprintln!();
            print_help();
            Err("unknown command".into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Command failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn setup_logging() -> Result<(), Box<dyn Error>> {
    if let Some(config) = LoggingConfig::from_env()? {
        init_logging(&config)?;
    }
    Ok(())
}

fn print_help() {
    println!("Stockroom store tool");
    println!();
    println!("USAGE:");
    println!("    stockroom_cli <COMMAND>");
    println!();
    println!("COMMANDS:");
    println!("    ping                       Check core linkage");
    println!("    version                    Print core version");
    println!("    export <db> <out-dir>      Write a backup archive of <db> into <out-dir>");
    println!("    import <db> <archive>      Restore a backup archive into <db>");
    println!("    companies <db>             List companies, marking the active one");
    println!("    help                       Show this message");
}

fn run_export(db: &Path, out_dir: &Path) -> CliResult {
    let conn = open_db(db)?;
    let store = SqliteKeyValueStore::try_new(&conn)?;
    let archive = export_storage(&store, &DEFAULT_EXPORT_KEYS, Utc::now())?;

    fs::create_dir_all(out_dir)?;
    let target = out_dir.join(&archive.file_name);
    fs::write(&target, &archive.bytes)?;
    info!(
        "event=cli_export module=cli status=ok bytes={}",
        archive.bytes.len()
    );
    println!("{}", target.display());
    Ok(())
}

fn run_import(db: &Path, archive: &Path) -> CliResult {
    let bytes = fs::read(archive)?;
    let conn = open_db(db)?;
    let store = SqliteKeyValueStore::try_new(&conn)?;
    let summary = import_storage(&store, &bytes)?;

    for key in &summary.restored_keys {
        println!("restored {key}");
    }
    Ok(())
}

fn run_list_companies(db: &Path) -> CliResult {
    let conn = open_db(db)?;
    let store = SqliteKeyValueStore::try_new(&conn)?;
    let repo = StoreCompanyRepository::new(&store);
    let active_id = repo.get_active_company()?.map(|company| company.id);

    for company in repo.list_companies()? {
        let marker = if active_id.as_deref() == Some(company.id.as_str()) {
            "*"
        } else {
            " "
        };
        println!("{marker} {} {}", company.id, company.name);
    }
    Ok(())
}
