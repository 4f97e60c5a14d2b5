//! bound (or IMPOSSIBLE) for every block on the input
use anyhow::Result;
use solver::bounds::find_bound;
use solver::cli::compute;

fn main() -> Result<()> {
    compute(find_bound)
}
