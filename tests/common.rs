#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn lgs() -> Command {
    cargo_bin_cmd!("logsight")
}

/// Write a test CSV under the system temp dir and return its path
pub fn temp_csv(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_logsight.csv", name));
    fs::write(&path, content).expect("write test csv");
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path and ensure it does not exist yet
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Small dataset useful for many tests: a Monday with one tagged entry,
/// a Tuesday with two tags, a Wednesday without tags.
pub const SAMPLE_LOG: &str = "Date,Hours,Description,SubTeam\n\
2024-01-01,4,[Design] wrote spec,Core\n\
2024-01-02,6,[Build] impl [Test] qa,Core\n\
2024-01-03,2,no tags here,Infra\n";
