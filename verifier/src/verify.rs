use anyhow::Result;
use lib::def::Outcome;

use crate::FailType;
use crate::TestCase;
use crate::TestResult;

/// one outcome per non-empty output line
pub fn parse_algo_sol(output: &str) -> Result<Vec<Outcome>> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.parse::<Outcome>())
        .collect()
}

/// compare two runs of the algorithm on the same case against the expected
/// outcomes
pub fn verify_result(case: Result<((String, String), TestCase)>) -> Result<TestResult> {
    let ((first, second), input) = case?;
    let algo_sol = parse_algo_sol(&first)?;

    if algo_sol.len() != input.expected.len() {
        let (ta, ts) = (algo_sol.len(), input.expected.len());
        return Ok(TestResult::Fail((input, algo_sol), FailType::Count(ta, ts)));
    }

    let mismatch = algo_sol
        .iter()
        .zip(input.expected.iter())
        .enumerate()
        .find(|(_, (a, e))| a != e)
        .map(|(i, (a, e))| FailType::Value {
            block: i + 1,
            actual: *a,
            expected: *e,
        });
    if let Some(ft) = mismatch {
        return Ok(TestResult::Fail((input, algo_sol), ft));
    }

    if parse_algo_sol(&second)? != algo_sol {
        return Ok(TestResult::Fail((input, algo_sol), FailType::Unstable));
    }

    Ok(TestResult::Pass)
}
