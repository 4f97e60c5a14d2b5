//! read blocks until the input runs out, print one outcome per block
use std::fs::File;
use std::io;
use std::io::BufRead;
use std::io::BufReader;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use anyhow::anyhow;
use clap::Parser;
use clap_derive::Parser;
use lib::def::Instance;
use lib::def::InstanceReader;

use crate::bounds::Solution;
use crate::bounds::explain;

#[derive(Parser, Debug)]
#[command(version)]
pub struct Cli {
    /// read blocks from this file instead of stdin
    pub input: Option<PathBuf>,
    /// say on stderr which term (or which pair) decided each block
    #[arg(long)]
    pub explain: bool,
}

pub fn compute<Algo>(algo: Algo) -> Result<()>
where
    Algo: Fn(&Instance) -> Result<Solution>,
{
    let args = Cli::parse();

    let input: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).map_err(|e| anyhow!("cannot read {}: {e}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    // stdout is line buffered, every answer shows up once its block is read
    let mut out = io::stdout().lock();
    let res = solve_all(input, &algo, args.explain, &mut out);
    out.flush()?;
    res
}

pub fn solve_all<R, Algo, W>(input: R, algo: &Algo, verbose: bool, out: &mut W) -> Result<()>
where
    R: BufRead,
    Algo: Fn(&Instance) -> Result<Solution>,
    W: Write,
{
    for (i, inst) in InstanceReader::new(input).enumerate() {
        let inst = inst?;

        #[cfg(debug_assertions)]
        eprintln!(
            "block {}: length {}, sorted {:?}",
            i + 1,
            inst.length,
            inst.sorted_points()
        );

        let sol = algo(&inst)?;
        writeln!(out, "{}", sol.outcome)?;

        if verbose {
            eprintln!("block {}: {}", i + 1, explain(&sol));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use super::*;
    use crate::bounds::find_bound;

    fn run<R: BufRead>(input: R) -> (Result<()>, String) {
        let mut out = Vec::new();
        let res = solve_all(input, &find_bound, false, &mut out);
        (res, String::from_utf8_lossy(&out).to_string())
    }

    /// a stream whose reader fails instead of ever reaching end of input
    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("stream broke"))
        }
    }

    #[test]
    fn one_line_per_block() {
        let (res, out) = run("5 1\n3 1\n10 2\n1 0\n2 5\n10 2\n1 0\n10 0\n".as_bytes());
        assert!(res.is_ok());
        assert_eq!(out, "3\nIMPOSSIBLE\n4\n");
    }

    #[test]
    fn nothing_in_nothing_out() {
        let (res, out) = run("".as_bytes());
        assert!(res.is_ok());
        assert!(out.is_empty());
    }

    #[test]
    fn malformed_block_keeps_earlier_answers() {
        let (res, out) = run("5 1 3 1\n10 2 1 0 x 5\n".as_bytes());
        assert!(res.is_err());
        assert_eq!(out, "3\n");
    }

    #[test]
    fn answers_before_the_stream_ends() {
        let (res, out) = run(BufReader::new("5 1\n3 1\n".as_bytes().chain(Broken)));
        assert_eq!(out, "3\n");
        assert!(res.is_err());
    }

    #[test]
    fn same_input_same_output() {
        let text = "7 3 2 1 4 1 7 0\n";
        let (_, first) = run(text.as_bytes());
        let (_, second) = run(text.as_bytes());
        assert_eq!(first, second);
    }
}
