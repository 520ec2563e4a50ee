use advent_runner_core::solve_raw;

#[test]
fn dispatches_to_the_right_solver() {
    let answer = solve_raw(
        "2019",
        "6",
        "1",
        "COM)B\nB)C\nC)D\nD)E\nE)F\nB)G\nG)H\nD)I\nE)J\nJ)K\nK)L",
    );
    assert_eq!(answer, Ok("42".to_string()));

    let answer = solve_raw("2016", "20", "2", "5-8\n0-2\n4-7");
    assert_eq!(answer, Ok("4294967288".to_string()));
}

#[test]
fn bad_address_and_bad_input_use_the_same_channel() {
    let err = solve_raw("1999", "6", "1", "").unwrap_err();
    assert!(err.contains("year"), "got: {err}");

    let err = solve_raw("2019", "6", "1", "no separator here").unwrap_err();
    assert!(err.contains("')'"), "got: {err}");
}

#[test]
fn unimplemented_days_are_regular_errors() {
    let err = solve_raw("2024", "25", "1", "").unwrap_err();
    assert_eq!(err, "Solution for year 2024 day 25 not implemented");
}
