//! definition of instances, points and outcomes

use std::collections::VecDeque;
use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

use anyhow::Result;
use anyhow::anyhow;
use anyhow::bail;

pub type Coord = i64;

pub const IMPOSSIBLE: &str = "IMPOSSIBLE";

/// a marked point on the line. field order matters: the derived `Ord`
/// compares by position first, then by radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub position: Coord,
    pub radius: Coord,
}

impl Point {
    pub fn new(position: Coord, radius: Coord) -> Point {
        Point { position, radius }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub length: Coord,
    pub points: Vec<Point>,
}

impl Instance {
    pub fn new(length: Coord, points: Vec<Point>) -> Result<Instance> {
        if length < 1 {
            bail!("line length must be at least 1, got {length}");
        }
        if points.is_empty() {
            bail!("instance on a line of length {length} has no points");
        }
        for (i, p) in points.iter().enumerate() {
            if !(1..=length).contains(&p.position) {
                bail!(
                    "point {} lies at {}, outside of [1, {length}]",
                    i + 1,
                    p.position
                );
            }
            if p.radius < 0 {
                bail!("point {} has negative radius {}", i + 1, p.radius);
            }
        }
        Ok(Instance { length, points })
    }

    /// points in ascending (position, radius) order
    pub fn sorted_points(&self) -> Vec<Point> {
        let mut points = self.points.clone();
        points.sort_unstable();
        points
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Impossible,
    Bound(Coord),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Impossible => write!(f, "{IMPOSSIBLE}"),
            Outcome::Bound(v) => write!(f, "{v}"),
        }
    }
}

impl FromStr for Outcome {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Outcome> {
        let s = s.trim();
        if s == IMPOSSIBLE {
            return Ok(Outcome::Impossible);
        }
        s.parse::<Coord>()
            .map(Outcome::Bound)
            .map_err(|e| anyhow!("not an outcome: {s:?} ({e})"))
    }
}

/// reads `N M (a b){M}` blocks from whitespace separated text, one line at a
/// time, until the input runs out. running out between blocks ends the
/// iteration, running out inside a block is an error.
pub struct InstanceReader<R> {
    input: R,
    tokens: VecDeque<String>,
    block: usize,
}

impl<R: BufRead> InstanceReader<R> {
    pub fn new(input: R) -> InstanceReader<R> {
        InstanceReader {
            input,
            tokens: VecDeque::new(),
            block: 0,
        }
    }

    /// pulls lines only when the current one is used up, so a block is
    /// answerable as soon as its last line arrives
    fn next_token(&mut self) -> Result<Option<String>> {
        while self.tokens.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.tokens.extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.tokens.pop_front())
    }

    fn next_num<T: FromStr>(&mut self, what: &str) -> Result<T>
    where
        T::Err: fmt::Display,
    {
        let tok = self
            .next_token()?
            .ok_or(anyhow!("block {}: input ended before {what}", self.block))?;
        tok.parse::<T>()
            .map_err(|e| anyhow!("block {}: bad {what} {tok:?} ({e})", self.block))
    }

    fn read_block(&mut self, first: &str) -> Result<Instance> {
        let length = first
            .parse::<Coord>()
            .map_err(|e| anyhow!("block {}: bad line length {first:?} ({e})", self.block))?;
        let count = self.next_num::<usize>("point count")?;

        // the count is untrusted, the points themselves bound the allocation
        let mut points = Vec::new();
        for _ in 0..count {
            let position = self.next_num::<Coord>("point position")?;
            let radius = self.next_num::<Coord>("point radius")?;
            points.push(Point::new(position, radius));
        }

        Instance::new(length, points).map_err(|e| anyhow!("block {}: {e}", self.block))
    }
}

impl<R: BufRead> Iterator for InstanceReader<R> {
    type Item = Result<Instance>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(None) => None,
            Err(e) => Some(Err(e)),
            Ok(Some(first)) => {
                self.block += 1;
                Some(self.read_block(&first))
            }
        }
    }
}

pub fn instances_from_str(s: &str) -> Result<Vec<Instance>> {
    InstanceReader::new(s.as_bytes()).collect()
}

/// single line `N M a1 b1 a2 b2 ...`, readable by [`InstanceReader`]
pub fn instance_to_string(inst: &Instance) -> String {
    let mut parts = vec![inst.length.to_string(), inst.points.len().to_string()];
    for p in &inst.points {
        parts.push(p.position.to_string());
        parts.push(p.radius.to_string());
    }
    parts.join(" ")
}

pub fn outcomes_to_string(outs: &[Outcome]) -> String {
    outs.iter()
        .map(|o| o.to_string())
        .collect::<Vec<String>>()
        .join("|")
}

pub fn outcomes_from_string(s: &str) -> Result<Vec<Outcome>> {
    s.split('|')
        .filter(|x| !x.trim().is_empty())
        .map(Outcome::from_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_until_end_of_input() -> Result<()> {
        let insts = instances_from_str("5 1\n3 1\n10 2\n1 0\n2 5\n")?;
        assert_eq!(insts.len(), 2);
        assert_eq!(insts[0].length, 5);
        assert_eq!(insts[0].points, vec![Point::new(3, 1)]);
        assert_eq!(insts[1].points, vec![Point::new(1, 0), Point::new(2, 5)]);
        Ok(())
    }

    #[test]
    fn empty_input_has_no_blocks() -> Result<()> {
        assert!(instances_from_str("")?.is_empty());
        assert!(instances_from_str("  \n\t ")?.is_empty());
        Ok(())
    }

    #[test]
    fn truncated_block_is_an_error() {
        assert!(instances_from_str("5 2\n3 1\n").is_err());
        assert!(instances_from_str("5").is_err());
        assert!(instances_from_str("5 1 3").is_err());
    }

    #[test]
    fn huge_point_count_runs_out_of_tokens() {
        assert!(instances_from_str("5 1000000000000000000").is_err());
        assert!(instances_from_str("5 1000000000 3 1").is_err());
    }

    #[test]
    fn block_is_ready_before_the_input_ends() -> Result<()> {
        let mut reader = InstanceReader::new("5 1\n3 1\n10 2\n1 0\n".as_bytes());
        let first = reader.next().transpose()?;
        assert_eq!(first.map(|i| i.points), Some(vec![Point::new(3, 1)]));
        // the rest of the second block is only looked at now
        assert!(matches!(reader.next(), Some(Err(_))));
        Ok(())
    }

    #[test]
    fn rejects_malformed_numbers() {
        assert!(instances_from_str("5 x 3 1").is_err());
        assert!(instances_from_str("5 -1").is_err());
        assert!(instances_from_str("five 1 3 1").is_err());
    }

    #[test]
    fn rejects_out_of_range_points() {
        assert!(instances_from_str("5 1 0 1").is_err());
        assert!(instances_from_str("5 1 6 1").is_err());
        assert!(instances_from_str("5 1 3 -2").is_err());
        assert!(instances_from_str("5 0").is_err());
        assert!(instances_from_str("0 1 1 1").is_err());
    }

    #[test]
    fn sorting_is_lexicographic_and_idempotent() -> Result<()> {
        let inst = Instance::new(
            10,
            vec![Point::new(4, 2), Point::new(1, 3), Point::new(4, 1)],
        )?;
        let sorted = inst.sorted_points();
        assert_eq!(
            sorted,
            vec![Point::new(1, 3), Point::new(4, 1), Point::new(4, 2)]
        );
        let again = Instance::new(10, sorted.clone())?.sorted_points();
        assert_eq!(sorted, again);
        Ok(())
    }

    #[test]
    fn instance_string_reads_back() -> Result<()> {
        let inst = Instance::new(7, vec![Point::new(2, 0), Point::new(7, 3)])?;
        let s = instance_to_string(&inst);
        assert_eq!(s, "7 2 2 0 7 3");
        assert_eq!(instances_from_str(&s)?, vec![inst]);
        Ok(())
    }

    #[test]
    fn outcome_text() -> Result<()> {
        assert_eq!(Outcome::Impossible.to_string(), "IMPOSSIBLE");
        assert_eq!(Outcome::Bound(42).to_string(), "42");
        assert_eq!(" IMPOSSIBLE\n".parse::<Outcome>()?, Outcome::Impossible);
        assert_eq!("17".parse::<Outcome>()?, Outcome::Bound(17));
        assert!("impossible".parse::<Outcome>().is_err());

        let outs = outcomes_from_string("3|IMPOSSIBLE|0")?;
        assert_eq!(
            outs,
            vec![Outcome::Bound(3), Outcome::Impossible, Outcome::Bound(0)]
        );
        assert_eq!(outcomes_to_string(&outs), "3|IMPOSSIBLE|0");
        assert!(outcomes_from_string("")?.is_empty());
        Ok(())
    }
}
