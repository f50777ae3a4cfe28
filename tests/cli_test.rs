use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_game(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_tictactoe"))
        .args(args)
        .env_remove("TICTACTOE_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start tictactoe binary");
    child
        .stdin
        .take()
        .expect("stdin not piped")
        .write_all(stdin.as_bytes())
        .expect("failed to write stdin");
    child.wait_with_output().expect("failed to wait for binary")
}

#[test]
fn binary_plays_one_game_and_quits() {
    // Whoever starts takes row 0 on their third move.
    let output = run_game(
        &["--plain", "--seed", "7"],
        "0 0\n1 0\n0 1\n1 1\n0 2\nn\n",
    );
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    assert!(stdout.starts_with("Welcome to Tic-Tac-Toe!\n"));
    assert!(stdout.contains(" wins!"));
    assert!(stdout.contains("Score: X=1 | O=0") || stdout.contains("Score: X=0 | O=1"));
    assert!(stdout.ends_with("Thanks for playing.\n"));
    assert!(!stdout.contains('\x1b'));
}

#[test]
fn binary_survives_garbage_input() {
    let output = run_game(&["--plain"], "abc\n9 9\nhello world\n");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    assert_eq!(stdout.matches("Invalid input. Enter two numbers.").count(), 2);
    assert_eq!(stdout.matches("Invalid coordinates. Try again.").count(), 1);
    assert!(stdout.ends_with("Thanks for playing.\n"));
}

#[test]
fn same_seed_same_starting_player() {
    let first = run_game(&["--plain", "--seed", "12345"], "");
    let second = run_game(&["--plain", "--seed", "12345"], "");
    let starter = |out: &Output| {
        String::from_utf8_lossy(&out.stdout)
            .lines()
            .find(|l| l.starts_with("Starting player:"))
            .map(str::to_owned)
    };
    assert!(starter(&first).is_some());
    assert_eq!(starter(&first), starter(&second));
}
