fn main() {
    advent_runner::run();
}
