// src/bin/sarp.rs

//! Driver program _sarp_.
//!
//! Processes user-passed command-line arguments.
//! Then parses each `sar` ASCII file and prints the result.
//!
//! Uses [`SarProcessor`] from _sarlib_.
//!
//! [`SarProcessor`]: sarlib::readers::sarprocessor::SarProcessor

#![allow(non_camel_case_types)]

use std::path::Path;
use std::process::ExitCode;

use ::anyhow::{Context, Result};
use ::clap::Parser;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

use ::sarlib::common::{FPath, FPaths};
use ::sarlib::debug::printers::{e_err, e_wrn};
use ::sarlib::printer::printers::{
    OutputFormat,
    format_bundle_text,
    format_parsedlog_text,
    format_summary,
    to_json,
    write_stderr,
    write_stdout,
};
use ::sarlib::readers::sarprocessor::SarProcessor;
use ::sarlib::readers::summary::SummarySarProcessor;

const CLI_HELP_AFTER: &str = "\
Each PATH is the ASCII output of sar, e.g. from `sar -A -f /var/log/sa/sa04 > sar04`.
Both 24-hour and 12-hour (AM/PM) timestamps are read. All timestamps are
printed as 24-hour HH:MM:SS.

A combined multi-day file is several days of sar output concatenated,
e.g. `cat sar03 sar04 > sar03-04`. Pass --multiday to split it at each
`Linux …` report header line.

Exit code is 0 if every PATH was read, else 1.";

/// clap command-line arguments build-time definitions.
//
// Note:
// * the `about` is taken from `Cargo.toml:[package]:description`.
#[derive(Parser, Debug)]
#[clap(
    about = env!("CARGO_PKG_DESCRIPTION"),
    author = env!("CARGO_PKG_AUTHORS"),
    name = "sarp",
    version = env!("CARGO_PKG_VERSION"),
    after_help = CLI_HELP_AFTER,
    verbatim_doc_comment,
)]
struct CLI_Args {
    /// Path(s) of sar ASCII output files.
    #[clap(
        required = true,
        verbatim_doc_comment,
    )]
    paths: Vec<String>,

    /// Treat each file as several days of sar output concatenated.
    /// Results are keyed by date, YYYY-MM-DD.
    #[clap(
        short = 'm',
        long,
        verbatim_doc_comment,
    )]
    multiday: bool,

    /// Output format.
    #[clap(
        required = false,
        short = 'f',
        long = "format",
        verbatim_doc_comment,
        value_enum,
        default_value_t = OutputFormat::Json,
    )]
    format: OutputFormat,

    /// Indent JSON output.
    #[clap(
        short = 'p',
        long,
        verbatim_doc_comment,
    )]
    pretty: bool,

    /// Print parse statistics for each file to stderr.
    #[clap(
        short = 's',
        long,
        verbatim_doc_comment,
    )]
    summary: bool,
}

/// Parse the file at `path` and print the result to stdout.
fn process_path(
    path: &FPath,
    args: &CLI_Args,
) -> Result<()> {
    defn!("({:?})", path);
    let mut processor = SarProcessor::new(Path::new(path))
        .with_context(|| format!("cannot read sar file {:?}", path))?;
    let output: String;
    let summary: SummarySarProcessor;
    if args.multiday {
        let bundle = processor.multiday();
        output = match args.format {
            OutputFormat::Json => to_json(bundle, args.pretty)
                .with_context(|| format!("cannot serialize {:?}", path))?,
            OutputFormat::Text => format_bundle_text(path, bundle),
        };
        summary = processor.summary_multiday().clone();
    } else {
        let parsedlog = processor.parsed();
        if parsedlog.is_empty() {
            e_wrn!("no sar sections found in {:?}", path);
        }
        output = match args.format {
            OutputFormat::Json => to_json(parsedlog, args.pretty)
                .with_context(|| format!("cannot serialize {:?}", path))?,
            OutputFormat::Text => format_parsedlog_text(path, parsedlog),
        };
        summary = processor.summary().clone();
    }
    write_stdout(output.as_bytes());
    if args.format == OutputFormat::Json {
        write_stdout(b"\n");
    }
    if args.summary {
        write_stderr(format_summary(path, &summary).as_bytes());
    }
    defx!();

    Ok(())
}

/// Process the user-passed command-line arguments.
/// Process each path.
/// Determine a process return code.
pub fn main() -> ExitCode {
    defn!();
    let args = CLI_Args::parse();
    defo!("args {:?}", args);

    let paths: FPaths = args.paths.clone();
    let mut ret: bool = true;
    for path in paths.iter() {
        if let Err(err) = process_path(path, &args) {
            e_err!("{:#}", err);
            ret = false;
        }
    }

    let exitcode = if ret { ExitCode::SUCCESS } else { ExitCode::FAILURE };
    defx!("exitcode {:?}", exitcode);

    exitcode
}
