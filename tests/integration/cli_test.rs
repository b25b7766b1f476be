use std::process::{Command, Output};

fn run_backtracker(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_backtracker"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute backtracker")
}

fn assert_success(output: &Output) -> String {
    if !output.status.success() {
        panic!(
            "Command failed with status: {:?}\nstderr: {}\nstdout: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr),
            String::from_utf8_lossy(&output.stdout)
        );
    }
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_nqueens_default_iterative() {
    let output = run_backtracker(&["nqueens", "-n", "6"]);
    let stdout = assert_success(&output);

    assert!(
        stdout.contains("Solving 6-queens with iterative search"),
        "Should announce the search"
    );
    assert!(stdout.contains("Found 4 solutions"), "6-queens has 4 solutions");
    assert!(stdout.contains("Algorithm: iterative"), "Should print statistics");
}

#[test]
fn test_nqueens_each_algorithm() {
    for algorithm in ["recursive", "iterative", "parallel"] {
        let output = run_backtracker(&["nqueens", "-n", "5", "--algorithm", algorithm, "-j", "2"]);
        let stdout = assert_success(&output);
        assert!(
            stdout.contains("Found 10 solutions"),
            "{} should find all 5-queens solutions",
            algorithm
        );
    }
}

#[test]
fn test_nqueens_max_solutions() {
    let output = run_backtracker(&["nqueens", "-n", "8", "--order", "bfs", "--max-solutions", "3"]);
    let stdout = assert_success(&output);

    assert!(stdout.contains("Found 3 solutions"));
    assert!(stdout.contains("Stopped early"));
}

#[test]
fn test_nqueens_print_boards() {
    let output = run_backtracker(&["nqueens", "-n", "4", "--print-boards"]);
    let stdout = assert_success(&output);

    assert!(stdout.contains(".Q..\n...Q\nQ...\n..Q.\n"));
    assert!(stdout.contains("..Q.\nQ...\n...Q\n.Q..\n"));
}

#[test]
fn test_invalid_max_solutions_fails() {
    let output = run_backtracker(&["nqueens", "-n", "4", "--max-solutions", "0"]);

    assert!(!output.status.success(), "Zero solution limit must be rejected");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("max_solutions"), "stderr: {}", stderr);
}

#[test]
fn test_zero_workers_rejected() {
    let output = run_backtracker(&["nqueens", "-n", "4", "--algorithm", "parallel", "-j", "0"]);

    assert!(!output.status.success(), "Zero workers must be rejected");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--workers"), "stderr: {}", stderr);
}

#[test]
fn test_max_depth_outside_iterative_rejected() {
    for algorithm in ["recursive", "parallel"] {
        let output = run_backtracker(&[
            "nqueens",
            "-n",
            "4",
            "--algorithm",
            algorithm,
            "--max-depth",
            "2",
        ]);

        assert!(
            !output.status.success(),
            "{} must reject --max-depth",
            algorithm
        );
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("--max-depth"), "stderr: {}", stderr);
    }
}

#[test]
fn test_max_solutions_with_recursive_rejected() {
    let output = run_backtracker(&[
        "nqueens",
        "-n",
        "4",
        "--algorithm",
        "recursive",
        "--max-solutions",
        "1",
    ]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--max-solutions"), "stderr: {}", stderr);
}

#[test]
fn test_parallel_max_solutions_accepted() {
    let output = run_backtracker(&[
        "nqueens",
        "-n",
        "8",
        "--algorithm",
        "parallel",
        "-j",
        "2",
        "--max-solutions",
        "4",
    ]);
    let stdout = assert_success(&output);
    assert!(stdout.contains("Found 4 solutions"));
}
