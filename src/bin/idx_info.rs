//! Prints the header of an IDX file without decoding its payload.

use clap::Parser;
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use idx_reader::io_utils::{idx_cli_error, io_cli_error, simple_cli_error};
use idx_reader::parse_header;

/// Show type, shape and payload size of an IDX file.
#[derive(Parser)]
struct Args {
    /// Input IDX file
    input: PathBuf,
    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct HeaderSummary {
    #[serde(rename = "type")]
    data_type: &'static str,
    tag: u8,
    shape: Vec<usize>,
    elements: usize,
    payload_bytes: usize,
    header_bytes: usize,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    if args.input.is_dir() {
        return Err(simple_cli_error(&format!(
            "'{}' is a directory, not an IDX file",
            args.input.display()
        ))
        .into());
    }
    let file = File::open(&args.input).map_err(|e| io_cli_error("opening", &args.input, e))?;
    let mut reader = BufReader::new(file);

    let read_err = |e| idx_cli_error("reading header of", &args.input, e);
    let header = parse_header(&mut reader).map_err(read_err)?;
    let data_type = header.data_type().map_err(read_err)?;
    let summary = HeaderSummary {
        data_type: data_type.name(),
        tag: header.type_tag,
        shape: header.shape(),
        elements: header.element_count().map_err(read_err)?,
        payload_bytes: header.payload_len().map_err(read_err)?,
        header_bytes: header.encoded_len(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("type:     {} (0x{:02X})", summary.data_type, summary.tag);
        println!("shape:    {:?}", summary.shape);
        println!("elements: {}", summary.elements);
        println!("payload:  {} bytes", summary.payload_bytes);
        println!("header:   {} bytes", summary.header_bytes);
    }
    Ok(())
}
