use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use anyhow::anyhow;
use clap::Parser;
use clap_derive::Parser;
use csv::Writer;
use indicatif::ParallelProgressIterator;
use lib::CHUNK_SIZE;
use lib::InstanceCsvRow;
use lib::parse_row;
use lib::progress_bar;
use lib::read_glob_csv;
use rayon::iter::IntoParallelRefIterator;
use rayon::iter::ParallelIterator;
use solutions::ref_solver::run_solver;

#[derive(Parser, Debug)]
#[command(version)]
pub struct Cli {
    pub input: String,
    pub output: PathBuf,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let start = Instant::now();

    let rows = read_glob_csv(&args.input, vec!["input"])?;

    let mut cases = rows
        .par_iter()
        .map(parse_row)
        .collect::<Result<Vec<InstanceCsvRow>>>()?;
    cases.sort_by(|a, b| {
        a.input
            .len()
            .cmp(&b.input.len())
            .then_with(|| a.input.cmp(&b.input))
    });
    cases.dedup();

    let num_cases = cases.len();

    let pb = progress_bar(num_cases as u64)?;
    let mut writer = Writer::from_path(&args.output)?;

    for group in cases.chunks(CHUNK_SIZE) {
        let outputs = group
            .par_iter()
            .map(run_solver)
            .progress_with(pb.clone())
            .collect::<Result<Vec<_>>>()
            .map_err(|e| anyhow!("runner err: {e:?}"))?;
        for o in outputs {
            writer.serialize(o)?;
        }
    }
    writer.flush()?;

    println!(
        "wrote {num_cases} cases to {} in {}s",
        args.output.display(),
        start.elapsed().as_secs_f32()
    );

    Ok(())
}
