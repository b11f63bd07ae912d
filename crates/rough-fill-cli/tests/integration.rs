//! Integration tests for rough-fill CLI commands.
//!
//! These tests run the actual binary and verify end-to-end behavior.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use serde_json::Value;

const SQUARE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
    <rect id="square" x="10" y="10" width="80" height="80"/>
    <circle cx="50" cy="50" r="20"/>
</svg>"#;

/// Path to the rough-fill binary built for this test run.
fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_rough-fill"))
}

/// A scratch directory unique to one test.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("rough-fill-{}-{}", name, std::process::id()));
    fs::create_dir_all(&dir).expect("Failed to create scratch dir");
    dir
}

/// Run a command with `input` piped to stdin.
fn run_with_stdin(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(binary_path())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");

    // The command may exit before reading stdin (bad options), so a broken
    // pipe here is not a failure
    let _ = child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes());

    child.wait_with_output().expect("Failed to wait for command")
}

fn parse_json(output: &Output) -> Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("Output should be valid JSON")
}

#[test]
fn styles_command_lists_all_styles() {
    let output = Command::new(binary_path())
        .arg("styles")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("hachure"), "Should list 'hachure' style");
    assert!(stdout.contains("dots"), "Should list 'dots' style");
}

#[test]
fn fill_from_stdin_produces_json() {
    let output = run_with_stdin(&["fill", "-", "-s", "dots", "-g", "5", "--seed", "3"], SQUARE_SVG);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let json = parse_json(&output);
    let shapes = json["shapes"].as_array().expect("Should have shapes array");
    assert_eq!(shapes.len(), 2, "rect and circle should both be filled");

    assert_eq!(shapes[0]["id"], "square");
    assert_eq!(shapes[0]["index"], 0);
    assert_eq!(shapes[1]["index"], 1);

    for shape in shapes {
        assert_eq!(shape["type"], "fillSketch");
        let ops = shape["ops"].as_array().expect("Should have ops array");
        assert!(!ops.is_empty(), "Fill should produce ops");
        assert_eq!(ops[0]["op"], "move", "Every dot starts with a move");
    }
}

#[test]
fn fill_from_file_with_output_file() {
    let dir = scratch_dir("fill-file");
    let svg_path = dir.join("square.svg");
    let out_path = dir.join("fill.json");
    fs::write(&svg_path, SQUARE_SVG).unwrap();

    let output = Command::new(binary_path())
        .args(["fill", svg_path.to_str().unwrap(), "--seed", "11", "-o", out_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let written = fs::read_to_string(&out_path).expect("Output file should exist");
    let json: Value = serde_json::from_str(&written).unwrap();
    assert_eq!(json["shapes"].as_array().unwrap().len(), 2);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn seeded_fills_are_reproducible() {
    let args = ["fill", "-", "-s", "dots", "-g", "4", "--seed", "42"];
    let first = run_with_stdin(&args, SQUARE_SVG);
    let second = run_with_stdin(&args, SQUARE_SVG);

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn config_file_matches_equivalent_flags() {
    let dir = scratch_dir("config");
    let config_path = dir.join("fill.yaml");
    fs::write(&config_path, "style: dots\nhachure_gap: 5\nseed: 9\n").unwrap();

    let from_config = run_with_stdin(&["fill", "-", "-c", config_path.to_str().unwrap()], SQUARE_SVG);
    let from_flags = run_with_stdin(&["fill", "-", "-s", "dots", "-g", "5", "--seed", "9"], SQUARE_SVG);

    assert!(from_config.status.success(), "stderr: {}", String::from_utf8_lossy(&from_config.stderr));
    assert_eq!(from_config.stdout, from_flags.stdout);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn ellipse_command_produces_one_shape() {
    let output = Command::new(binary_path())
        .args(["ellipse", "50", "50", "40", "20", "-s", "dots", "-g", "4", "--seed", "1"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let json = parse_json(&output);
    let shapes = json["shapes"].as_array().unwrap();
    assert_eq!(shapes.len(), 1);
    assert_eq!(shapes[0]["type"], "fillSketch");
    assert!(!shapes[0]["ops"].as_array().unwrap().is_empty());
}

#[test]
fn unknown_style_fails() {
    let output = run_with_stdin(&["fill", "-", "-s", "zigzag"], SQUARE_SVG);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("zigzag"), "Error should name the bad style: {}", stderr);
}

#[test]
fn missing_input_fails() {
    let output = Command::new(binary_path())
        .args(["fill", "/nonexistent/shape.svg"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn svg_without_shapes_fails() {
    let empty = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10"></svg>"#;
    let output = run_with_stdin(&["fill", "-"], empty);

    assert_eq!(output.status.code(), Some(1));
}
