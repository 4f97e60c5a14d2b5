use std::io::Write;
use std::path::PathBuf;
use std::process::Command;
use std::process::Stdio;
use std::thread;

use anyhow::Result;
use anyhow::anyhow;
use anyhow::bail;
use csv::ReaderBuilder;
use csv::StringRecord;
use glob::glob;
use indicatif::ProgressBar;
use indicatif::ProgressStyle;
use itertools::Itertools;

pub mod def;

pub const CHUNK_SIZE: usize = 256;

/// one instance per row, in the single line block format
#[derive(Debug, Clone, serde_derive::Deserialize, serde_derive::Serialize, PartialEq, Eq)]
pub struct InstanceCsvRow {
    pub input: String,
}

/// input text and the `|` separated outcomes expected for its blocks
#[derive(Debug, Clone, serde_derive::Deserialize, serde_derive::Serialize, PartialEq, Eq)]
pub struct CaseCsvRow {
    pub input: String,
    pub expected: String,
}

pub fn parse_row(row: &StringRecord) -> Result<InstanceCsvRow> {
    let p: InstanceCsvRow = row.deserialize(None)?;
    Ok(p)
}

pub fn read_glob_csv(g: &str, header: Vec<&str>) -> Result<Vec<StringRecord>> {
    let mut rows = vec![];

    for src in glob(g)? {
        let path = src?;
        let mut csv_read = ReaderBuilder::new().has_headers(true).from_path(&path)?;

        // check header
        if !header.is_empty() && csv_read.headers()? != header {
            bail!(
                "Incompatible CSV data ({}): expected header {header:?}, got {:?}",
                path.display(),
                csv_read.headers()?.iter().collect_vec()
            );
        }

        rows.append(&mut csv_read.records().collect::<Result<Vec<_>, csv::Error>>()?);
    }

    rows.dedup();

    Ok(rows)
}

pub fn progress_bar(n: u64) -> Result<ProgressBar> {
    Ok(
        ProgressBar::new(n).with_style(ProgressStyle::default_bar().template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
        )?),
    )
}

pub trait Case {
    fn algo_args(&self) -> Vec<String> {
        Vec::new()
    }
    fn stdin(&self) -> String;
}

/// run `algo` with the case's arguments, feed it the case's stdin and return
/// whatever it printed to stdout
pub fn run_solver_on<C: Case>(algo: &PathBuf, inp: &C) -> Result<String> {
    let mut cmd = Command::new(algo);

    for arg in inp.algo_args() {
        cmd.arg(arg);
    }

    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    let mut stdin = child
        .stdin
        .take()
        .ok_or(anyhow!("no stdin handle for {}", algo.display()))?;
    let text = inp.stdin();
    // fed from its own thread: the child may fill stdout before it drains stdin
    let writer = thread::spawn(move || stdin.write_all(text.as_bytes()));

    let out = child.wait_with_output()?;
    let written = writer
        .join()
        .map_err(|_| anyhow!("stdin writer for {} panicked", algo.display()))?;

    if !out.status.success() {
        bail!(
            "process failed: {}. stderr: {}",
            out.status,
            String::from_utf8_lossy(&out.stderr)
        )
    }

    written?;

    Ok(String::from_utf8(out.stdout)?)
}

impl Case for InstanceCsvRow {
    fn stdin(&self) -> String {
        self.input.clone()
    }
}

impl Case for CaseCsvRow {
    fn stdin(&self) -> String {
        self.input.clone()
    }
}
