//! Data generation (instance simulation)
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use clap_derive::Parser;
use csv::Writer;
use lib::InstanceCsvRow;
use lib::def::Coord;
use lib::def::instance_to_string;
use lib::progress_bar;
use solutions::sim::Limits;
use solutions::sim::random_instance;

#[derive(Parser, Debug)]
#[command(version)]
pub struct Cli {
    pub count: usize,
    pub length_max: Coord,
    pub points_max: usize,
    pub radius_max: Coord,
    pub output: PathBuf,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let start = Instant::now();

    let limits = Limits {
        length_max: args.length_max,
        points_max: args.points_max,
        radius_max: args.radius_max,
    };
    limits.check()?;

    let mut rng = rand::rng();
    let mut writer = Writer::from_path(&args.output)?;
    let pb = progress_bar(args.count as u64)?;

    for _ in 0..args.count {
        let inst = random_instance(&mut rng, &limits)?;
        writer.serialize(InstanceCsvRow {
            input: instance_to_string(&inst),
        })?;
        pb.inc(1);
    }
    writer.flush()?;
    pb.finish();

    println!(
        "generated {} instances in {}s",
        args.count,
        start.elapsed().as_secs_f32()
    );

    Ok(())
}
