//! End-to-end tests for the `wallseason` binary.
//!
//! These run the compiled binary against temporary directories. The desktop is
//! never touched: `set-wallpaper` is always run with `--dry-run`.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

const SEASONS: [&str; 4] = ["Spring", "Summer", "Fall", "Winter"];

fn wallseason() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_wallseason"));
    cmd.env_remove("WALLSEASON_LOG").env_remove("WALLSEASON_PICTURES_DIR");
    cmd
}

fn run(args: &[&str]) -> Output {
    wallseason().args(args).output().expect("failed to run wallseason")
}

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = wallseason()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn wallseason");

    child.stdin.take().unwrap().write_all(stdin.as_bytes()).unwrap();
    child.wait_with_output().expect("failed to wait for wallseason")
}

fn stdout(output: &Output) -> String { String::from_utf8_lossy(&output.stdout).into_owned() }

fn stderr(output: &Output) -> String { String::from_utf8_lossy(&output.stderr).into_owned() }

fn path_str(path: &Path) -> String { path.display().to_string() }

// ============================================================================
// get-season
// ============================================================================

#[test]
fn test_get_season_for_each_quarter() {
    for (month, season) in [("1", "Winter"), ("4", "Spring"), ("7", "Summer"), ("10", "Fall")] {
        let output = run(&["get-season", "--month", month]);
        assert!(output.status.success());
        assert_eq!(stdout(&output), format!("{season}\n"), "month {month}");
    }
}

#[test]
fn test_get_season_today_is_a_season() {
    let output = run(&["get-season"]);
    assert!(output.status.success());
    assert!(SEASONS.contains(&stdout(&output).trim()));
}

#[test]
fn test_get_season_verbose_logs_to_stderr_only() {
    let output = run(&["-v", "get-season"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).lines().count(), 1);
    assert!(stderr(&output).contains("current season"));
}

#[test]
fn test_log_env_enables_diagnostics_without_verbose() {
    let output = wallseason().env("WALLSEASON_LOG", "info").arg("get-season").output().unwrap();

    assert!(output.status.success());
    assert!(stderr(&output).contains("current season"));
}

#[test]
fn test_log_env_overrides_verbose_flag() {
    let output =
        wallseason().env("WALLSEASON_LOG", "warn").args(["-vv", "get-season"]).output().unwrap();

    assert!(output.status.success());
    assert!(!stderr(&output).contains("current season"));
}

// ============================================================================
// new-wallpaper-folder
// ============================================================================

#[test]
fn test_new_wallpaper_folder_plain_output() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("Pictures");

    let output = run(&["new-wallpaper-folder", "--pictures-dir", &path_str(&root)]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let lines: Vec<String> = stdout(&output).lines().map(str::to_string).collect();
    let mut expected = vec![path_str(&root)];
    expected.extend(SEASONS.iter().map(|s| path_str(&root.join(s))));
    assert_eq!(lines, expected);
    assert!(SEASONS.iter().all(|s| root.join(s).is_dir()));
}

#[test]
fn test_new_wallpaper_folder_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let root = path_str(&temp.path().join("Pictures"));
    let args = ["new-wallpaper-folder", "--pictures-dir", root.as_str(), "--format", "json"];

    let first = run(&args);
    let second = run(&args);
    assert!(first.status.success());
    assert!(second.status.success());

    let first: serde_json::Value = serde_json::from_slice(&first.stdout).unwrap();
    let second: serde_json::Value = serde_json::from_slice(&second.stdout).unwrap();
    let paths = |v: &serde_json::Value| -> Vec<String> {
        v.as_array()
            .unwrap()
            .iter()
            .map(|f| f["path"].as_str().unwrap().to_string())
            .collect()
    };

    assert_eq!(paths(&first).len(), 5);
    assert_eq!(paths(&first), paths(&second));
    assert!(first.as_array().unwrap().iter().all(|f| f["created"] == true));
    assert!(second.as_array().unwrap().iter().all(|f| f["created"] == false));
    assert!(first[0]["season"].is_null());
    assert_eq!(first[1]["season"], "Spring");
}

#[test]
fn test_new_wallpaper_folder_reads_env_override() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("FromEnv");

    let output = wallseason()
        .env("WALLSEASON_PICTURES_DIR", &root)
        .arg("new-wallpaper-folder")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(root.join("Winter").is_dir());
}

#[test]
fn test_new_wallpaper_folder_partial_failure_exits_non_zero() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("Fall"), b"not a directory").unwrap();

    let output = run(&["new-wallpaper-folder", "--pictures-dir", &path_str(temp.path())]);

    assert!(!output.status.success());
    assert_eq!(stdout(&output).lines().count(), 4);
    assert!(stderr(&output).contains("Folder error"));
    assert!(temp.path().join("Winter").is_dir());
}

#[test]
fn test_new_wallpaper_folder_table_output() {
    let temp = TempDir::new().unwrap();
    let output = run(&[
        "new-wallpaper-folder",
        "--pictures-dir",
        &path_str(temp.path()),
        "--format",
        "table",
    ]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Season"));
    assert!(out.contains("Winter"));
}

// ============================================================================
// get-random-wallpaper
// ============================================================================

#[test]
fn test_get_random_wallpaper_single_file() {
    let temp = TempDir::new().unwrap();
    let image = temp.path().join("x.png");
    fs::write(&image, b"png").unwrap();

    let output = run(&["get-random-wallpaper", &path_str(temp.path())]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), format!("{}\n", path_str(&image)));
}

#[test]
fn test_get_random_wallpaper_picks_existing_file() {
    let temp = TempDir::new().unwrap();
    for name in ["a.jpg", "b.jpg", "c.jpg"] {
        fs::write(temp.path().join(name), b"jpg").unwrap();
    }
    fs::create_dir(temp.path().join("nested")).unwrap();

    let output = run(&["get-random-wallpaper", &path_str(temp.path())]);

    let picked = stdout(&output);
    let name = Path::new(picked.trim()).file_name().unwrap().to_str().unwrap().to_string();
    assert!(["a.jpg", "b.jpg", "c.jpg"].contains(&name.as_str()));
}

#[test]
fn test_get_random_wallpaper_seed_is_reproducible() {
    let temp = TempDir::new().unwrap();
    for i in 0..20 {
        fs::write(temp.path().join(format!("{i}.jpg")), b"jpg").unwrap();
    }
    let dir = path_str(temp.path());

    let first = run(&["get-random-wallpaper", &dir, "--seed", "1234"]);
    let second = run(&["get-random-wallpaper", &dir, "--seed", "1234"]);

    assert!(first.status.success());
    assert_eq!(stdout(&first), stdout(&second));
}

#[test]
fn test_get_random_wallpaper_missing_directory_prints_nothing() {
    let temp = TempDir::new().unwrap();
    let output = run(&["get-random-wallpaper", &path_str(&temp.path().join("missing"))]);

    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_get_random_wallpaper_empty_directory_prints_nothing() {
    let temp = TempDir::new().unwrap();
    let output = run(&["get-random-wallpaper", &path_str(temp.path())]);

    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_get_random_wallpaper_reads_directories_from_stdin() {
    let winter = TempDir::new().unwrap();
    let summer = TempDir::new().unwrap();
    fs::write(winter.path().join("snow.jpg"), b"jpg").unwrap();
    fs::write(summer.path().join("beach.jpg"), b"jpg").unwrap();

    let input = format!("{}\n\n{}\n", path_str(winter.path()), path_str(summer.path()));
    let output = run_with_stdin(&["get-random-wallpaper"], &input);

    assert!(output.status.success());
    let lines: Vec<String> = stdout(&output).lines().map(str::to_string).collect();
    assert_eq!(
        lines,
        vec![
            path_str(&winter.path().join("snow.jpg")),
            path_str(&summer.path().join("beach.jpg"))
        ]
    );
}

// ============================================================================
// set-wallpaper
// ============================================================================

#[test]
fn test_set_wallpaper_missing_file_is_a_no_op() {
    let temp = TempDir::new().unwrap();
    let missing = path_str(&temp.path().join("missing.jpg"));

    let output = run(&["-v", "set-wallpaper", "--dry-run", &missing]);

    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
    let err = stderr(&output);
    assert!(err.contains("file does not exist"));
    assert!(!err.contains("setting wallpaper"));
}

#[test]
fn test_pick_then_set_pipeline() {
    let temp = TempDir::new().unwrap();
    let image = temp.path().join("x.png");
    fs::write(&image, b"png").unwrap();

    let picked = run(&["get-random-wallpaper", &path_str(temp.path())]);
    assert!(picked.status.success());

    let output = run_with_stdin(&["-v", "set-wallpaper", "--dry-run"], &stdout(&picked));

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let err = stderr(&output);
    assert!(err.contains(&format!("setting wallpaper to '{}'", path_str(&image))));
    assert!(err.contains("dry run"));
}
