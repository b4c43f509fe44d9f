use std::{
    io::Write,
    process::{Command, Stdio},
};

fn play(args: &[&str], script: &str) -> String {
    let mut child = Command::new(env!("CARGO_BIN_EXE_word-search"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to launch word-search binary");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(script.as_bytes())
        .expect("failed to write the input script");

    let output = child.wait_with_output().expect("binary should exit");
    assert!(output.status.success(), "word-search should exit cleanly");
    String::from_utf8(output.stdout).expect("utf-8 output")
}

#[test]
fn seeded_session_reports_rounds_and_bad_input() {
    let stdout = play(
        &["--seed", "7", "--difficulty", "easy"],
        "99,99\nbanana\nnew hard\nquit\n",
    );

    assert!(
        stdout.contains("in a 8x8 grid, 160s on the clock"),
        "first round uses the chosen preset:\n{stdout}"
    );
    assert!(
        stdout.contains("cell (99, 99) lies outside the 8x8 grid"),
        "out-of-bounds drags are reported:\n{stdout}"
    );
    assert!(
        stdout.contains("could not parse cell 'banana'"),
        "malformed cells are reported:\n{stdout}"
    );
    assert!(
        stdout.contains("in a 12x12 grid, 160s on the clock"),
        "`new hard` switches preset:\n{stdout}"
    );
}

#[test]
fn identical_seeds_print_identical_boards() {
    let first = play(&["--seed", "42"], "quit\n");
    let second = play(&["--seed", "42"], "quit\n");
    assert_eq!(first, second, "a seed fully determines the board");
}
