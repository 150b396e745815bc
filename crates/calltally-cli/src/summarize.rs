use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::process::ExitCode;

use calltally_core::{DayAggregator, TARGET_CATEGORY, match_record, parse_call_date};
use tracing::debug;

use crate::cli::Cli;
use crate::error::{CliError, CliResult, EXIT_SUCCESS};
use crate::report::{format_grand_total, format_header, format_row};

/// Scan the call log and print the per-day summary table.
///
/// Lines that do not match the record shape, do not carry the target
/// category, or carry an unparseable date are skipped without affecting
/// any count. I/O failures abort with a runtime error; rows already
/// printed before a mid-file read error stay on stdout.
pub fn run_summarize(args: &Cli) -> CliResult<ExitCode> {
    let reader: Box<dyn BufRead> = if args.file == "-" {
        Box::new(io::stdin().lock())
    } else {
        let file = File::open(&args.file)
            .map_err(|e| CliError::runtime(format!("Failed to open file '{}': {}", args.file, e)))?;
        Box::new(BufReader::new(file))
    };

    let mut agg = DayAggregator::new();

    println!("{}", format_header());

    for line in reader.lines() {
        let line = line.map_err(|e| CliError::runtime(format!("Failed to read line: {}", e)))?;

        let Some(record) = match_record(&line) else {
            debug!("line does not match record shape, skipping");
            continue;
        };
        if !record.accepts(TARGET_CATEGORY) {
            continue;
        }

        let ts = match parse_call_date(record.date_text) {
            Ok(ts) => ts,
            Err(e) => {
                debug!("unparseable call date, skipping: {}", e);
                continue;
            }
        };

        if let Some(row) = agg.ingest(&ts) {
            println!("{}", format_row(&row));
        }
    }

    let (last, grand_total) = agg.finalize();
    if let Some(row) = last {
        println!("{}", format_row(&row));
    }
    println!("{}", format_grand_total(grand_total));

    Ok(ExitCode::from(EXIT_SUCCESS))
}
