//! # Solution Verifier
//! this program should
//! - be run through the command line
//! - take in a path to an executable algorithm
//! - take in a glob of csv files with test data (`input,expected`)
//!
//! and then:
//! - open a reader for the data
//! - for each case:
//!     - run the algorithm twice, feeding the input on stdin
//!     - assert both outputs match the expected outcomes
//!
//! exit:
//! - code 0: the cases ran (failures are listed, not turned into exit codes)
//! - anything else: reading the data or running the algorithm failed

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use clap_derive::Parser;
use indicatif::ParallelProgressIterator;
use lib::progress_bar;
use lib::read_glob_csv;
use lib::run_solver_on;
use rayon::iter::IntoParallelRefIterator;
use rayon::iter::ParallelIterator;
use verifier::TestCase;
use verifier::TestResult;
use verifier::parsing::parse_entry;
use verifier::parsing::pretty_print;
use verifier::verify::verify_result;

#[derive(Parser, Debug)]
#[command(version)]
pub struct Cli {
    pub exec: PathBuf,
    pub data: String,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let start = Instant::now();

    let rows = read_glob_csv(&args.data, vec!["input", "expected"])?;

    let num_tests = rows.len();

    println!("running {num_tests} tests...");

    let inputs = rows
        .par_iter()
        .map(parse_entry)
        .collect::<Result<Vec<TestCase>>>()?;

    println!("parsed input in {}s", start.elapsed().as_secs_f32());

    let pb = progress_bar(num_tests as u64)?;

    let results = inputs
        .par_iter()
        .map(|i| -> Result<((String, String), TestCase)> {
            let first = run_solver_on(&args.exec, i)?;
            let second = run_solver_on(&args.exec, i)?;
            Ok(((first, second), i.clone()))
        })
        .progress_with(pb.clone())
        .map(verify_result)
        .collect::<Result<Vec<_>>>()?;

    let failures = results
        .iter()
        .filter_map(|x| match x {
            TestResult::Pass => None,
            TestResult::Fail(i, t) => Some((i, t)),
        })
        .collect::<Vec<_>>();

    println!(
        "{}/{num_tests} test cases passed.",
        num_tests - failures.len()
    );
    println!("total time: {}s", start.elapsed().as_secs_f32());

    if !failures.is_empty() {
        println!(
            "{}/{num_tests} cases failed, showing up to 5",
            failures.len()
        );
    }
    for (f, t) in failures.iter().take(5) {
        println!("reason: {t:?},\n{}\n", pretty_print(&f.0, &f.1));
    }

    Ok(())
}
