use std::collections::{HashMap, VecDeque};

use crate::Input;

/// The input is an orbit map, one `CENTER)SATELLITE` pair per line.
/// Part one counts direct and indirect orbits over the whole map,
/// part two counts the orbital transfers needed to move YOU next to
/// SAN.
pub fn solve(input: &Input) -> Result<u32, String> {
    let mut orbits: HashMap<&str, Vec<&str>> = HashMap::new();
    let mut neighbors: HashMap<&str, Vec<&str>> = HashMap::new();

    for line in input.text.lines() {
        let (center, satellite) = line
            .split_once(')')
            .ok_or_else(|| format!("Line without ')' separator: '{line}'"))?;
        orbits.entry(center).or_default().push(satellite);
        neighbors.entry(center).or_default().push(satellite);
        neighbors.entry(satellite).or_default().push(center);
    }

    if input.is_part_one() {
        let mut total = 0;
        let mut stack = vec![("COM", 0u32)];
        while let Some((body, depth)) = stack.pop() {
            total += depth;
            if let Some(satellites) = orbits.get(body) {
                for &satellite in satellites {
                    stack.push((satellite, depth + 1));
                }
            }
        }
        return Ok(total);
    }

    // BFS from the body YOU orbits to the body SAN orbits; hops
    // between those two are the transfers.
    let mut distances: HashMap<&str, u32> = HashMap::new();
    let mut queue = VecDeque::new();
    distances.insert("YOU", 0);
    queue.push_back("YOU");
    while let Some(body) = queue.pop_front() {
        let distance = distances[body];
        if body == "SAN" {
            // Neither endpoint hop counts as a transfer.
            return distance
                .checked_sub(2)
                .ok_or_else(|| "YOU and SAN orbit each other directly".to_string());
        }
        if let Some(adjacent) = neighbors.get(body) {
            for &next in adjacent {
                if !distances.contains_key(next) {
                    distances.insert(next, distance + 1);
                    queue.push_back(next);
                }
            }
        }
    }

    Err("No path between YOU and SAN".to_string())
}

#[cfg(test)]
mod tests {
    use super::solve;
    use crate::{Input, Part};

    #[test]
    fn part_one_example() {
        let input = Input {
            part: Part::One,
            text: "COM)B\nB)C\nC)D\nD)E\nE)F\nB)G\nG)H\nD)I\nE)J\nJ)K\nK)L",
        };
        assert_eq!(solve(&input), Ok(42));
    }

    #[test]
    fn part_two_example() {
        let input = Input {
            part: Part::Two,
            text: "COM)B\nB)C\nC)D\nD)E\nE)F\nB)G\nG)H\nD)I\nE)J\nJ)K\nK)L\nK)YOU\nI)SAN",
        };
        assert_eq!(solve(&input), Ok(4));
    }

    #[test]
    fn directly_adjacent_san_is_reported() {
        let input = Input {
            part: Part::Two,
            text: "COM)YOU\nYOU)SAN",
        };
        assert_eq!(
            solve(&input),
            Err("YOU and SAN orbit each other directly".to_string())
        );
    }

    #[test]
    fn disconnected_map_is_reported() {
        let input = Input {
            part: Part::Two,
            text: "COM)YOU\nX)SAN",
        };
        assert_eq!(solve(&input), Err("No path between YOU and SAN".to_string()));
    }
}
