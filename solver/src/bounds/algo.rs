//! feasibility of sorted points and the running maximum over edge, gap and
//! radius terms

use anyhow::Result;
use anyhow::anyhow;
use itertools::Itertools;
use lib::def::Coord;
use lib::def::Point;

/// which term of the running maximum produced the bound.
/// indices are 1-based positions in sorted order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
    LeftEdge,
    RightEdge,
    /// half the slack between points `i - 1` and `i`
    Gap(usize),
    Radius(usize),
}

/// `position[i] - position[i-1] - |radius[i] - radius[i-1]|`.
/// negative exactly when the pair is infeasible.
pub fn slack(prev: &Point, next: &Point) -> Result<Coord> {
    let dist = next
        .position
        .checked_sub(prev.position)
        .ok_or(anyhow!("distance between {prev:?} and {next:?} overflows"))?;
    let diff = next
        .radius
        .checked_sub(prev.radius)
        .and_then(Coord::checked_abs)
        .ok_or(anyhow!("radius difference of {prev:?} and {next:?} overflows"))?;
    dist.checked_sub(diff)
        .ok_or(anyhow!("slack between {prev:?} and {next:?} overflows"))
}

/// first adjacent pair violating the distance/radius inequality, given as
/// the 1-based sorted index of its second point
pub fn first_violation(sorted: &[Point]) -> Result<Option<usize>> {
    for (i, (prev, next)) in sorted.iter().tuple_windows().enumerate() {
        if slack(prev, next)? < 0 {
            return Ok(Some(i + 2));
        }
    }
    Ok(None)
}

pub fn is_feasible(sorted: &[Point]) -> Result<bool> {
    Ok(first_violation(sorted)?.is_none())
}

pub fn left_edge(first: &Point) -> Result<Coord> {
    if first.position != 1 {
        first
            .radius
            .checked_add(first.position - 1)
            .ok_or(anyhow!("left edge term of {first:?} overflows"))
    } else {
        Ok(first.radius)
    }
}

pub fn right_edge(last: &Point, length: Coord) -> Result<Coord> {
    if last.position != length {
        last.radius
            .checked_add(length - last.position)
            .ok_or(anyhow!("right edge term of {last:?} overflows"))
    } else {
        Ok(last.radius)
    }
}

/// running maximum over all terms, starting from 0. only meaningful for
/// feasible points: every gap term then divides a non-negative slack, so
/// truncating division is floor division.
pub fn max_bound(sorted: &[Point], length: Coord) -> Result<(Coord, Option<Term>)> {
    let (Some(first), Some(last)) = (sorted.first(), sorted.last()) else {
        return Ok((0, None));
    };

    let mut best: (Coord, Option<Term>) = (0, None);
    let mut offer = |value: Coord, term: Term| {
        if (best.1.is_none() && value >= best.0) || value > best.0 {
            best = (value, Some(term));
        }
    };

    offer(left_edge(first)?, Term::LeftEdge);
    offer(right_edge(last, length)?, Term::RightEdge);

    for (i, (prev, next)) in sorted.iter().tuple_windows().enumerate() {
        let s = slack(prev, next)?;
        debug_assert!(s >= 0, "gap term on infeasible pair {prev:?} {next:?}");
        offer(s / 2, Term::Gap(i + 2));
        offer(next.radius, Term::Radius(i + 2));
    }

    Ok(best)
}
