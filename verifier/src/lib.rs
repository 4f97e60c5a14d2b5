use lib::Case;
use lib::def::Outcome;

pub mod parsing;
pub mod verify;

#[derive(Debug, Clone)]
pub struct TestCase {
    pub input: String,
    pub expected: Vec<Outcome>,
}

/// failure types. values are (actual, expected)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailType {
    /// number of output lines differs from the number of blocks
    Count(usize, usize),
    /// block is 1-based
    Value {
        block: usize,
        actual: Outcome,
        expected: Outcome,
    },
    /// two runs on the same input disagreed
    Unstable,
}

type FailInfo = (TestCase, Vec<Outcome>);

#[allow(clippy::large_enum_variant)]
#[derive(Debug)]
pub enum TestResult {
    Pass,
    Fail(FailInfo, FailType),
}

impl Case for TestCase {
    fn stdin(&self) -> String {
        self.input.clone()
    }
}
