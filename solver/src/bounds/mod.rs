//! feasibility check followed by the bound computation
pub mod algo;

use algo::Term;
use algo::first_violation;
use algo::max_bound;
use anyhow::Result;
use lib::def::Instance;
use lib::def::Outcome;
use lib::def::Point;

/// why an instance got the outcome it got
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Witness {
    /// sorted points `index - 1` and `index` are too close for their radii
    Violation { index: usize },
    Attained(Term),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub outcome: Outcome,
    pub witness: Option<Witness>,
    pub sorted: Vec<Point>,
}

pub fn find_bound(inst: &Instance) -> Result<Solution> {
    let sorted = inst.sorted_points();

    if let Some(index) = first_violation(&sorted)? {
        return Ok(Solution {
            outcome: Outcome::Impossible,
            witness: Some(Witness::Violation { index }),
            sorted,
        });
    }

    let (value, term) = max_bound(&sorted, inst.length)?;
    Ok(Solution {
        outcome: Outcome::Bound(value),
        witness: term.map(Witness::Attained),
        sorted,
    })
}

pub fn explain(sol: &Solution) -> String {
    let at = |i: usize| {
        sol.sorted
            .get(i - 1)
            .map_or("<nf>".to_string(), |p| format!("({}, {})", p.position, p.radius))
    };
    match sol.witness {
        None => format!("{}: no terms", sol.outcome),
        Some(Witness::Violation { index }) => format!(
            "{}: points {} {} and {} {} are closer than their radius difference",
            sol.outcome,
            index - 1,
            at(index - 1),
            index,
            at(index)
        ),
        Some(Witness::Attained(Term::LeftEdge)) => {
            format!("{}: left edge at point 1 {}", sol.outcome, at(1))
        }
        Some(Witness::Attained(Term::RightEdge)) => format!(
            "{}: right edge at point {} {}",
            sol.outcome,
            sol.sorted.len(),
            at(sol.sorted.len())
        ),
        Some(Witness::Attained(Term::Gap(i))) => format!(
            "{}: gap between points {} {} and {} {}",
            sol.outcome,
            i - 1,
            at(i - 1),
            i,
            at(i)
        ),
        Some(Witness::Attained(Term::Radius(i))) => {
            format!("{}: radius of point {i} {}", sol.outcome, at(i))
        }
    }
}

#[cfg(test)]
mod tests {
    use lib::def::instances_from_str;

    use super::*;

    fn solve_str(s: &str) -> Result<Vec<Outcome>> {
        instances_from_str(s)?
            .iter()
            .map(|i| find_bound(i).map(|s| s.outcome))
            .collect()
    }

    #[test]
    fn single_point_in_the_middle() -> Result<()> {
        assert_eq!(solve_str("5 1 3 1")?, vec![Outcome::Bound(3)]);
        Ok(())
    }

    #[test]
    fn violating_pair_is_impossible() -> Result<()> {
        assert_eq!(solve_str("10 2 1 0 2 5")?, vec![Outcome::Impossible]);
        Ok(())
    }

    #[test]
    fn both_ends_marked() -> Result<()> {
        // left 0, right 0, gap (9 - 0) / 2 = 4, radius 0
        assert_eq!(solve_str("10 2 1 0 10 0")?, vec![Outcome::Bound(4)]);
        Ok(())
    }

    #[test]
    fn input_order_does_not_matter() -> Result<()> {
        let a = solve_str("12 3 9 2 1 0 5 4")?;
        let b = solve_str("12 3 1 0 5 4 9 2")?;
        assert_eq!(a, b);
        // left 0, right 2 + 3 = 5, gaps 0 and 1, radii 4 and 2
        assert_eq!(a, vec![Outcome::Bound(5)]);
        Ok(())
    }

    #[test]
    fn repeated_runs_agree() -> Result<()> {
        let text = "5 1 3 1\n10 2 1 0 2 5\n10 2 1 0 10 0\n";
        let first = solve_str(text)?;
        let second = solve_str(text)?;
        assert_eq!(first, second);
        assert_eq!(
            first,
            vec![Outcome::Bound(3), Outcome::Impossible, Outcome::Bound(4)]
        );
        Ok(())
    }

    #[test]
    fn witness_names_the_violation() -> Result<()> {
        let insts = instances_from_str("10 3 7 0 1 0 2 5")?;
        let sol = find_bound(&insts[0])?;
        assert_eq!(sol.witness, Some(Witness::Violation { index: 2 }));
        assert_eq!(
            explain(&sol),
            "IMPOSSIBLE: points 1 (1, 0) and 2 (2, 5) are closer than their radius difference"
        );
        Ok(())
    }

    #[test]
    fn witness_names_the_term() -> Result<()> {
        let insts = instances_from_str("10 2 1 0 10 0")?;
        let sol = find_bound(&insts[0])?;
        assert_eq!(sol.witness, Some(Witness::Attained(Term::Gap(2))));
        assert_eq!(explain(&sol), "4: gap between points 1 (1, 0) and 2 (10, 0)");
        Ok(())
    }
}
