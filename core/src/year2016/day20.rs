use crate::Input;

/// The input is a blocklist of inclusive IP ranges over the full u32
/// space. Part one asks for the lowest unblocked address, part two
/// for how many addresses are unblocked in total.
pub fn solve(input: &Input) -> Result<u64, String> {
    let mut ranges = input
        .text
        .lines()
        .map(|line| {
            let (from, to) = line
                .split_once('-')
                .ok_or_else(|| format!("Line without '-' separator: '{line}'"))?;
            let from = from
                .parse::<u32>()
                .map_err(|_| format!("Invalid range start: '{from}'"))?;
            let to = to
                .parse::<u32>()
                .map_err(|_| format!("Invalid range end: '{to}'"))?;
            if from > to {
                return Err(format!("Range start after end: '{line}'"));
            }
            Ok((from, to))
        })
        .collect::<Result<Vec<_>, String>>()?;

    if ranges.is_empty() {
        return Err("Empty blocklist".to_string());
    }

    ranges.sort_unstable();

    if input.is_part_one() {
        let mut lowest_allowed: u64 = 0;
        for &(from, to) in &ranges {
            if u64::from(from) <= lowest_allowed && u64::from(to) >= lowest_allowed {
                lowest_allowed = u64::from(to) + 1;
            }
        }
        return Ok(lowest_allowed);
    }

    // Walk the sorted ranges counting the gaps between them, then add
    // whatever remains above the highest blocked address.
    let mut allowed: u64 = u64::from(ranges[0].0);
    let mut highest_blocked = u64::from(ranges[0].1);
    for &(from, to) in &ranges[1..] {
        let from = u64::from(from);
        let to = u64::from(to);
        if from > highest_blocked + 1 {
            allowed += from - highest_blocked - 1;
        }
        highest_blocked = highest_blocked.max(to);
    }
    allowed += u64::from(u32::MAX) - highest_blocked;
    Ok(allowed)
}

#[cfg(test)]
mod tests {
    use super::solve;
    use crate::{Input, Part};

    const EXAMPLE: &str = "5-8\n0-2\n4-7";

    #[test]
    fn example() {
        let input = Input {
            part: Part::One,
            text: EXAMPLE,
        };
        assert_eq!(solve(&input), Ok(3));

        let input = Input {
            part: Part::Two,
            text: EXAMPLE,
        };
        assert_eq!(solve(&input), Ok(4_294_967_288));
    }

    #[test]
    fn malformed_line_is_reported() {
        let input = Input {
            part: Part::One,
            text: "5..8",
        };
        assert_eq!(
            solve(&input),
            Err("Line without '-' separator: '5..8'".to_string())
        );
    }
}
