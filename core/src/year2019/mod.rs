pub mod day06;
