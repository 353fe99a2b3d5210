//! CLI tests: exit codes and output files of the built binary

use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_insilicut-frags"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to launch insilicut-frags")
}

fn exit_code(args: &[&str]) -> Option<i32> {
    run_cli(args).status.code()
}

fn write_gz(path: &Path, content: &str) -> std::io::Result<()> {
    let mut encoder = GzEncoder::new(File::create(path)?, Compression::default());
    encoder.write_all(content.as_bytes())?;
    encoder.finish()?;
    Ok(())
}

fn read_gz(path: &Path) -> std::io::Result<String> {
    let mut content = String::new();
    MultiGzDecoder::new(File::open(path)?).read_to_string(&mut content)?;
    Ok(content)
}

#[test]
fn test_help_and_version_exit_zero() {
    let help = run_cli(&["-h"]);
    assert_eq!(help.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&help.stdout).contains("-i <FILE>"));

    assert_eq!(exit_code(&["--help"]), Some(0));
    assert_eq!(exit_code(&["-V"]), Some(0));
    assert_eq!(exit_code(&["--version"]), Some(0));
}

#[test]
fn test_missing_input_exits_one_with_usage() {
    let out = run_cli(&[]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("missing compulsory option -i"));
    assert!(stderr.contains("Usage"));
}

#[test]
fn test_nonexistent_input_exits_one() {
    assert_eq!(exit_code(&["-i", "/nonexistent/dir/sites.bed.gz"]), Some(1));
}

#[test]
fn test_inverted_size_range_exits_one() -> std::io::Result<()> {
    let dir = TempDir::new()?;
    let input = dir.path().join("sites.bed.gz");
    write_gz(&input, "1\t0\t4\tA\n1\t10\t14\tB\n")?;

    let input = input.to_string_lossy();
    assert_eq!(exit_code(&["-i", &input, "-s", "600", "-S", "500"]), Some(1));
    assert!(!dir.path().join("sites_frags.bed.gz").exists());
    Ok(())
}

#[test]
fn test_malformed_options_exit_two() {
    assert_eq!(exit_code(&["-x"]), Some(2));
    assert_eq!(exit_code(&["-v", "5"]), Some(2));
    assert_eq!(exit_code(&["-s", "abc"]), Some(2));
    assert_eq!(exit_code(&["-i"]), Some(2));
}

#[test]
fn test_bad_coordinate_exits_one() -> std::io::Result<()> {
    let dir = TempDir::new()?;
    let input = dir.path().join("bad.bed.gz");
    write_gz(&input, "1\t0\t4\tA\n1\tx\t14\tB\n")?;

    assert_eq!(exit_code(&["-v", "0", "-i", &input.to_string_lossy()]), Some(1));
    Ok(())
}

#[test]
fn test_successful_run_writes_both_outputs() -> std::io::Result<()> {
    let dir = TempDir::new()?;
    let input = dir.path().join("ApeKI.bed.gz");
    write_gz(
        &input,
        "track name=ApeKI\ntrack1\t0\t4\tA\ntrack1\t10\t14\tB\n1\t0\t4\tC\n1\t20\t24\tD\n",
    )?;

    let out = run_cli(&["-v", "0", "-i", &input.to_string_lossy(), "-s", "1", "-S", "10"]);
    assert_eq!(out.status.code(), Some(0));

    assert_eq!(
        read_gz(&dir.path().join("ApeKI_frags.bed.gz"))?,
        "1\t4\t20\tC_D\ntrack1\t4\t10\tA_B\n"
    );
    assert_eq!(
        read_gz(&dir.path().join("ApeKI_frags_s-1_S-10.bed.gz"))?,
        "track1\t4\t10\tA_B\n"
    );
    Ok(())
}
