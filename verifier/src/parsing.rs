use anyhow::Result;
use anyhow::bail;
use csv::StringRecord;
use lib::CaseCsvRow;
use lib::def::Outcome;
use lib::def::outcomes_from_string;
use lib::def::outcomes_to_string;

use crate::TestCase;

/// get the input & expected outcomes from csv row
pub fn parse_entry(row: &StringRecord) -> Result<TestCase> {
    if row.len() != 2 {
        bail!("improper row length ({}): {row:?}", row.len());
    }

    let parsed_row: CaseCsvRow = row.deserialize(None)?;
    let expected = outcomes_from_string(&parsed_row.expected)?;

    Ok(TestCase {
        input: parsed_row.input,
        expected,
    })
}

pub fn pretty_print(tc: &TestCase, actual: &[Outcome]) -> String {
    format!(
        "test case:\n\
         > input: {}\n\
         outcomes\n \
         | sol: {}\n \
         | alg: {}\n \
        ",
        tc.input,
        outcomes_to_string(&tc.expected),
        outcomes_to_string(actual),
    )
}
