//! Test harness for dirtree integration tests

use std::path::Path;
use std::process::Command;

pub use dirtree::test_utils::TestDir;

/// Output of one binary run: (stdout, stderr, success)
pub type RunOutput = (String, String, bool);

fn run(binary: &str, dir: &Path, args: &[&str]) -> RunOutput {
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to run binary");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[allow(dead_code)]
pub fn run_dirtree(dir: &Path, args: &[&str]) -> RunOutput {
    run(env!("CARGO_BIN_EXE_dirtree"), dir, args)
}

#[allow(dead_code)]
pub fn run_fix_imports(dir: &Path, args: &[&str]) -> RunOutput {
    run(env!("CARGO_BIN_EXE_fix-imports"), dir, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let dir = TestDir::new();
        assert!(dir.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let dir = TestDir::new();
        let file_path = dir.add_file("nested/test.js", "export {}");
        assert!(file_path.exists());
        assert_eq!(dir.read("nested/test.js"), "export {}");
    }
}
