use std::io;
use std::path::PathBuf;

use clap::Parser;
use record_lookup::{load, query, ReaderOptions, RecordError, Shell};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "record-lookup")]
#[command(about = "Validate a record file and look up values by id", long_about = None)]
struct Args {
    /// Path to the record file
    file: PathBuf,

    /// Encoding label used when the file has no byte order mark (default: utf-8)
    #[arg(long, env = "RECORD_LOOKUP_ENCODING")]
    encoding: Option<String>,

    /// Answer this comma-separated id list and exit instead of prompting
    #[arg(long)]
    ids: Option<String>,

    /// Log filter directive, e.g. "debug" or "record_lookup=trace"
    #[arg(long, env = "RECORD_LOOKUP_LOG", default_value = "warn")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    let filter = EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&args) {
        if let RecordError::Open { path, .. } = &e {
            eprintln!("Could not open file! Please enter a valid file: {}", path.display());
        }
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> record_lookup::records::Result<()> {
    let options = ReaderOptions {
        encoding: args.encoding.clone(),
    };
    let (index, report) = load(&args.file, &options)?;
    println!("Number of invalid rows in the file: {}", report.invalid_rows);

    if let Some(ids) = &args.ids {
        println!("Requested ids: {}", ids);
        for line in query::run_query(&index, ids).lines {
            println!("{}", line);
        }
        return Ok(());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(&index, stdin.lock(), stdout.lock()).run()
}
