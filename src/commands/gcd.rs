//! GCD reduction command
//!
//! `trazo gcd <N>...` reduces the numbers pairwise and renders each
//! process as the classic quotients / numbers / remainders table plus the
//! division log. With `--replay` the division steps are paced one by one.

use crate::cli::Cli;
use crate::commands::helpers;
use trazo_core::config::TrazoConfig;
use trazo_core::error::Result;
use trazo_core::format::OutputFormat;
use trazo_core::gcd::{reduced_gcd, GcdProcess, ReducedGcdRun};

pub fn execute(
    cli: &Cli,
    config: &TrazoConfig,
    format: OutputFormat,
    numbers: &[u64],
    replay: bool,
    speed: Option<u64>,
) -> Result<()> {
    let run = reduced_gcd(numbers)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&run)?);
        }
        OutputFormat::Human => print_human(cli, config, &run, replay, speed)?,
        OutputFormat::Records => print_records(&run),
    }

    Ok(())
}

fn print_human(
    cli: &Cli,
    config: &TrazoConfig,
    run: &ReducedGcdRun,
    replay: bool,
    speed: Option<u64>,
) -> Result<()> {
    if replay {
        let lines = replay_lines(run);
        helpers::replay_ticker(config, speed).play(&lines, |line| println!("{line}"))?;
    } else {
        for process in &run.processes {
            print_process(cli, process);
        }
    }

    println!(
        "gcd({}) = {}",
        helpers::join_numbers(&run.original_numbers, ", "),
        run.final_mcd
    );

    Ok(())
}

fn print_process(cli: &Cli, process: &GcdProcess) {
    println!(
        "process {}: gcd({}, {})",
        process.process_number, process.input_numbers.0, process.input_numbers.1
    );
    if !process.remaining_numbers.is_empty() {
        println!(
            "  pending: {}",
            helpers::join_numbers(&process.remaining_numbers, ", ")
        );
    }

    if !cli.quiet {
        // The classic layout: quotients above the number line, remainders below
        println!(
            "  quotients:  {}",
            helpers::join_numbers(&process.quotients, "  ")
        );
        println!("  numbers:    {}", number_row(process).join("  "));
        println!(
            "  remainders: {}",
            helpers::join_numbers(&process.remainders, "  ")
        );
    }

    for step in process.steps.iter().skip(1) {
        println!("  {step}");
    }
    println!(
        "  gcd({}, {}) = {}",
        process.larger, process.smaller, process.mcd
    );
}

/// The number line of the table: the larger operand followed by each
/// division's divisor (the divisor chain ends in the pair's gcd).
fn number_row(process: &GcdProcess) -> Vec<String> {
    let mut row = vec![process.larger.to_string()];
    row.extend(process.steps.iter().skip(1).map(|s| s.divisor.to_string()));
    row
}

fn replay_lines(run: &ReducedGcdRun) -> Vec<String> {
    let mut lines = Vec::new();
    for process in &run.processes {
        lines.push(format!(
            "process {}: gcd({}, {})",
            process.process_number, process.input_numbers.0, process.input_numbers.1
        ));
        for step in &process.steps {
            lines.push(format!("  {step}"));
        }
        lines.push(format!(
            "  gcd({}, {}) = {}",
            process.larger, process.smaller, process.mcd
        ));
    }
    lines
}

fn print_records(run: &ReducedGcdRun) {
    println!(
        "H trazo=1 records=1 mode=gcd numbers={}",
        helpers::join_numbers(&run.original_numbers, ",")
    );
    for process in &run.processes {
        println!(
            "P {} a={} b={} mcd={} pending={}",
            process.process_number,
            process.input_numbers.0,
            process.input_numbers.1,
            process.mcd,
            helpers::join_numbers(&process.remaining_numbers, ",")
        );
        for step in process.steps.iter().skip(1) {
            if let (Some(quotient), Some(remainder)) = (step.quotient, step.remainder) {
                println!(
                    "D {} {} {} {} {}",
                    process.process_number, step.dividend, step.divisor, quotient, remainder
                );
            }
        }
    }
    println!("R mcd={}", run.final_mcd);
}
