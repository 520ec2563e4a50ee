pub mod day20;
