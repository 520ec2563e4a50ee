use md5::{Digest, Md5};

use crate::Input;

const MAX_INDEX: u32 = 100_000_000;

/// Finds the lowest positive number whose MD5 digest, appended to the
/// secret key, starts with five (part one) or six (part two) zero
/// hex digits.
pub fn solve(input: &Input) -> Result<u32, String> {
    let key = input.text.trim();

    for index in 1..MAX_INDEX {
        let mut hasher = Md5::new();
        hasher.update(key.as_bytes());
        hasher.update(index.to_string().as_bytes());
        let output = hasher.finalize();

        // Five zero digits leave the low nibble of the third byte
        // free; six require the whole byte to be zero.
        if output[..2] == [0, 0] && output[2] <= input.part_values(0x0F, 0) {
            return Ok(index);
        }
    }

    Err(format!("Aborting search after {MAX_INDEX} iterations"))
}

#[cfg(test)]
mod tests {
    use super::solve;
    use crate::{Input, Part};

    #[test]
    fn part_one_examples() {
        let input = Input {
            part: Part::One,
            text: "abcdef",
        };
        assert_eq!(solve(&input), Ok(609_043));

        let input = Input {
            part: Part::One,
            text: "pqrstuv",
        };
        assert_eq!(solve(&input), Ok(1_048_970));
    }

    #[test]
    fn key_is_trimmed() {
        let input = Input {
            part: Part::One,
            text: "abcdef\n",
        };
        assert_eq!(solve(&input), Ok(609_043));
    }
}
