use clap::Parser;
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{Level, error};

use mif_client::{decode_container, read_bounded, sink::DumpSink};

#[derive(Parser)]
#[command(
    name = "mifdump",
    about = "Decode Symbian OS v9.x multi-image (MIF) files",
    version,
    long_about = "Validates a MIF container, lists the assets it holds, and extracts \
                  each asset to a dump directory with an extension matching its \
                  sniffed content (svg, svgb, or dat)."
)]
struct Cli {
    /// Set the logging level
    #[arg(short, long, value_enum, default_value = "info")]
    log_level: LogLevel,

    /// Directory for dumped files (a unique one is created when omitted)
    #[arg(short = 't', long)]
    dump_dir: Option<PathBuf>,

    /// MIF files to decode (stdin when omitted or "-")
    files: Vec<PathBuf>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(Level::from(cli.log_level))
        .with_target(false)
        .init();

    let files = if cli.files.is_empty() {
        vec![PathBuf::from("-")]
    } else {
        cli.files
    };

    // One sink per run: the naming counter spans all containers.
    let mut sink = DumpSink::new(cli.dump_dir);
    let mut failed = false;

    for file in &files {
        let name = file.display().to_string();

        // A bad container aborts this file only; later files still run.
        if let Err(err) = decode_one(file, &name, &mut sink) {
            error!("{name}: {err:#}");
            failed = true;
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn decode_one(file: &PathBuf, name: &str, sink: &mut DumpSink) -> anyhow::Result<()> {
    let data = if file.as_os_str() == "-" {
        read_bounded(std::io::stdin().lock())?
    } else {
        read_bounded(File::open(file)?)?
    };

    decode_container(&data, name, sink)?;
    Ok(())
}
