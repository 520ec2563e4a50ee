pub mod day04;
