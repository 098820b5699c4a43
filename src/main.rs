use clap::Parser;
use std::path::PathBuf;

use idx_reader::{
    decode_file,
    io_utils::idx_cli_error,
    Config, ConsoleProgress,
};

/// Decode an IDX file and print its shape.
#[derive(Parser)]
#[command(name = "idx-reader")]
struct Args {
    /// Input IDX file
    input: PathBuf,
    /// Print a JSON summary instead of the bare shape
    #[arg(long)]
    json: bool,
    /// Do not draw the progress bar
    #[arg(short, long)]
    quiet: bool,
    /// Accept files whose payload ends before the declared element count
    #[arg(long)]
    allow_truncated: bool,
    /// Label shown next to the progress bar
    #[arg(long)]
    label: Option<String>,
}

impl Args {
    fn config(&self) -> Config {
        let mut config = Config {
            allow_truncated: self.allow_truncated,
            show_progress: !self.quiet,
            ..Config::default()
        };
        if let Some(label) = &self.label {
            config.label = label.clone();
        }
        config
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = args.config();
    let progress = if config.show_progress {
        ConsoleProgress::new()
    } else {
        ConsoleProgress::hidden()
    };

    let idx = decode_file(&args.input, &config, progress)
        .map_err(|e| idx_cli_error("decoding", &args.input, e))?;

    if idx.is_truncated() {
        eprintln!(
            "warning: decoded {} of {} declared elements",
            idx.len(),
            idx.element_count()
        );
    }

    if args.json {
        let summary = serde_json::json!({
            "type": idx.data_type().name(),
            "shape": idx.shape(),
            "elements": idx.len(),
            "truncated": idx.is_truncated(),
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{:?}", idx.shape());
    }
    Ok(())
}
