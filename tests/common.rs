#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sd() -> Command {
    cargo_bin_cmd!("shiftdesk")
}

/// Create a unique test config path inside the system temp dir and
/// remove any existing file
pub fn temp_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftdesk.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a config file with the given YAML body and return its path
pub fn write_config(name: &str, yaml: &str) -> String {
    let p = temp_config(name);
    fs::write(&p, yaml).unwrap();
    p
}
