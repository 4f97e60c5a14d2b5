use anyhow::Result;
use lib::CaseCsvRow;
use lib::InstanceCsvRow;
use lib::def::instances_from_str;
use lib::def::outcomes_to_string;
use solver::bounds::find_bound;

/// solve every block of the row in-process and pair it with the outcomes
pub fn run_solver(inp: &InstanceCsvRow) -> Result<CaseCsvRow> {
    let outcomes = instances_from_str(&inp.input)?
        .iter()
        .map(|inst| find_bound(inst).map(|sol| sol.outcome))
        .collect::<Result<Vec<_>>>()?;

    Ok(CaseCsvRow {
        input: inp.input.clone(),
        expected: outcomes_to_string(&outcomes),
    })
}
