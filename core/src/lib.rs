//! Shared logic for the advent-runner page, worker and CLI: the
//! page/worker message contract, problem addressing, and the puzzle
//! solvers themselves.

pub mod protocol;

mod year2015;
mod year2016;
mod year2019;

use std::fmt;

pub use protocol::{SolveRequest, SolveResponse, StatusNotice};

pub const FIRST_YEAR: u16 = 2015;
pub const LAST_YEAR: u16 = 2024;
pub const LAST_DAY: u8 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    One,
    Two,
}

impl Part {
    pub fn parse(value: &str) -> Result<Self, ProblemError> {
        match value.trim() {
            "1" => Ok(Part::One),
            "2" => Ok(Part::Two),
            other => Err(ProblemError::InvalidPart {
                found: other.to_string(),
            }),
        }
    }
}

/// One puzzle input paired with the part being solved. Solvers read
/// `text` and branch on the part via the helpers below.
pub struct Input<'a> {
    pub part: Part,
    pub text: &'a str,
}

impl Input<'_> {
    pub fn is_part_one(&self) -> bool {
        self.part == Part::One
    }

    /// Picks `one` for part one and `two` for part two.
    pub fn part_values<T>(&self, one: T, two: T) -> T {
        match self.part {
            Part::One => one,
            Part::Two => two,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Problem {
    pub year: u16,
    pub day: u8,
    pub part: Part,
}

impl Problem {
    pub fn parse(year: &str, day: &str, part: &str) -> Result<Self, ProblemError> {
        let year = year
            .trim()
            .parse::<u16>()
            .ok()
            .filter(|year| (FIRST_YEAR..=LAST_YEAR).contains(year))
            .ok_or_else(|| ProblemError::InvalidYear {
                found: year.trim().to_string(),
            })?;
        let day = day
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|day| (1..=LAST_DAY).contains(day))
            .ok_or_else(|| ProblemError::InvalidDay {
                found: day.trim().to_string(),
            })?;
        let part = Part::parse(part)?;
        Ok(Self { year, day, part })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProblemError {
    InvalidYear { found: String },
    InvalidDay { found: String },
    InvalidPart { found: String },
}

impl fmt::Display for ProblemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProblemError::InvalidYear { found } => {
                write!(f, "year must be {FIRST_YEAR}-{LAST_YEAR}, got '{found}'")
            }
            ProblemError::InvalidDay { found } => {
                write!(f, "day must be 1-{LAST_DAY}, got '{found}'")
            }
            ProblemError::InvalidPart { found } => {
                write!(f, "part must be 1 or 2, got '{found}'")
            }
        }
    }
}

impl std::error::Error for ProblemError {}

/// Runs the solver for `problem` over `text`. Unimplemented days
/// report through the normal error channel so callers can surface
/// them like any other solver failure.
pub fn solve(problem: &Problem, text: &str) -> Result<String, String> {
    let input = Input {
        part: problem.part,
        text,
    };
    let answer = match (problem.year, problem.day) {
        (2015, 4) => year2015::day04::solve(&input)?.to_string(),
        (2016, 20) => year2016::day20::solve(&input)?.to_string(),
        (2019, 6) => year2019::day06::solve(&input)?.to_string(),
        (year, day) => {
            return Err(format!("Solution for year {year} day {day} not implemented"));
        }
    };
    Ok(answer)
}

/// String front door used by the worker and the CLI: parses the
/// problem address and dispatches, folding parse failures into the
/// same error channel as solver failures.
pub fn solve_raw(year: &str, day: &str, part: &str, text: &str) -> Result<String, String> {
    let problem = Problem::parse(year, day, part).map_err(|err| err.to_string())?;
    solve(&problem, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_surrounding_whitespace() {
        let problem = Problem::parse(" 2019 ", "6", "2").unwrap();
        assert_eq!(problem.year, 2019);
        assert_eq!(problem.day, 6);
        assert_eq!(problem.part, Part::Two);
    }

    #[test]
    fn parse_rejects_out_of_range_fields() {
        assert!(matches!(
            Problem::parse("2014", "1", "1"),
            Err(ProblemError::InvalidYear { .. })
        ));
        assert!(matches!(
            Problem::parse("2015", "26", "1"),
            Err(ProblemError::InvalidDay { .. })
        ));
        assert!(matches!(
            Problem::parse("2015", "0", "1"),
            Err(ProblemError::InvalidDay { .. })
        ));
        assert!(matches!(
            Problem::parse("2015", "1", "3"),
            Err(ProblemError::InvalidPart { .. })
        ));
    }

    #[test]
    fn unimplemented_day_reports_address() {
        let err = solve_raw("2020", "1", "1", "").unwrap_err();
        assert_eq!(err, "Solution for year 2020 day 1 not implemented");
    }

    #[test]
    fn parse_errors_surface_as_strings() {
        let err = solve_raw("abc", "1", "1", "").unwrap_err();
        assert!(err.contains("year"), "got: {err}");
    }
}
