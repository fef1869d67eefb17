#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # gradepoint
//! ## Introduction
//!
//! Work out your SGPA from subject credits and marks (or letter grades), or
//! your CGPA from the SGPA of each semester.
//!
//! ## Usage
//!
//! - `gradepoint sgpa 4:95 3:65` prints the SGPA of two subjects carrying 4
//!   and 3 credits.
//! - `gradepoint sgpa 4:O 3:B+` does the same with letter grades.
//! - `gradepoint cgpa 7.5 9.0` prints the CGPA of two semesters.
//! - `gradepoint scale` prints the grade scale.
//! - `gradepoint` alone starts the interactive calculator.

use std::process::ExitCode;

use anyhow::Result;
use bpaf::*;
use dotenvy::dotenv;
use gradepoint::{
    GpaError, GpaReport, GradeScale, cli,
    config::{self, OutputFormat},
    notify::Notification,
    report,
    session::Session,
};
use tracing::metadata::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// SGPA from `credits:score` pairs, optionally as JSON
    Sgpa(bool, Vec<String>),
    /// CGPA from SGPA values, optionally as JSON
    Cgpa(bool, Vec<String>),
    /// Print the grade scale
    Scale,
    /// Start the interactive calculator
    Interactive,
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    /// parses subject specs
    fn s() -> impl Parser<Vec<String>> {
        positional("CREDITS:SCORE")
            .help("Subject credits and marks (0-100) or grade (O, A+, A, B+, B, C, F), eg. 4:95")
            .some("Give at least one subject")
    }

    /// parses SGPA values
    fn g() -> impl Parser<Vec<String>> {
        positional("SGPA")
            .help("SGPA of a semester (0-10), separated by spaces or commas")
            .some("Give at least one semester SGPA")
    }

    /// parses the json switch
    fn j() -> impl Parser<bool> {
        long("json").help("Print the result as JSON").switch()
    }

    let sgpa = construct!(Cmd::Sgpa(j(), s()))
        .to_options()
        .command("sgpa")
        .help("Calculate a Semester Grade Point Average");

    let cgpa = construct!(Cmd::Cgpa(j(), g()))
        .to_options()
        .command("cgpa")
        .help("Calculate a Cumulative Grade Point Average");

    let scale = pure(Cmd::Scale)
        .to_options()
        .command("scale")
        .help("Print the marks and letter grade scale");

    let interactive = pure(Cmd::Interactive)
        .to_options()
        .command("interactive")
        .help("Start the interactive calculator (default)");

    let cmd = construct!([sgpa, cgpa, scale, interactive]).fallback(Cmd::Interactive);

    cmd.to_options()
        .descr("SGPA and CGPA calculator")
        .run()
}

/// Prints a computed report, or the notification for a rejected input.
fn finish(outcome: std::result::Result<GpaReport, GpaError>) -> Result<ExitCode> {
    match outcome {
        Ok(report) => {
            let format = config::output();
            if format != OutputFormat::Json {
                eprintln!("{}", Notification::from(&report));
            }
            println!("{}", report::render(&report, format)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::warn!(kind = ?e.kind(), "{e}");
            eprintln!("{}", Notification::from(&e));
            Ok(ExitCode::FAILURE)
        }
    }
}

fn main() -> Result<ExitCode> {
    dotenv().ok();

    let cfg = config::get();
    cfg.apply_color();

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);
    let filter_layer = LevelFilter::from_level(cfg.log_level());
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();
    for warning in cfg.warnings() {
        tracing::warn!("{warning}");
    }

    let cmd = options();
    tracing::debug!(?cmd, "parsed command line");

    match cmd {
        Cmd::Sgpa(json, specs) => {
            if json {
                config::set_output(OutputFormat::Json);
            }
            finish(cli::evaluate_sgpa(&specs, &GradeScale::standard()))
        }
        Cmd::Cgpa(json, values) => {
            if json {
                config::set_output(OutputFormat::Json);
            }
            finish(cli::evaluate_cgpa(&values))
        }
        Cmd::Scale => {
            println!("{}", report::scale_table(&GradeScale::standard()));
            Ok(ExitCode::SUCCESS)
        }
        Cmd::Interactive => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            Session::new(stdin.lock(), stdout.lock()).run()?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
