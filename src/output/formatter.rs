//! ReportFormatter - accumulates report lines during a walk

use std::path::{Path, PathBuf};

use crate::report::Report;
use crate::tree::TreeVisitor;

use super::lines::{
    NO_FILES_LINE, SUMMARY_HEADER, dir_line, file_line, header_line, root_marker, total_line,
};

/// Builds report text from walk callbacks.
///
/// Lines are only ever appended, in visit order. File paths are recorded in
/// the same callback that renders their line, so the found-file list and the
/// file lines always agree.
pub struct ReportFormatter {
    lines: Vec<String>,
    found_files: Vec<PathBuf>,
}

impl ReportFormatter {
    pub fn new(absolute_root: &Path) -> Self {
        Self {
            lines: vec![header_line(absolute_root)],
            found_files: Vec::new(),
        }
    }

    pub fn found_files(&self) -> &[PathBuf] {
        &self.found_files
    }

    /// Append the summary block (or the no-files line) and join everything.
    pub fn finish(mut self) -> Report {
        if self.found_files.is_empty() {
            self.lines.push(NO_FILES_LINE.to_string());
        } else {
            self.lines.push(SUMMARY_HEADER.to_string());
            self.lines
                .extend(self.found_files.iter().map(|p| p.display().to_string()));
            self.lines.push(total_line(self.found_files.len()));
        }

        Report {
            text: self.lines.join("\n"),
            found_files: self.found_files,
        }
    }
}

impl TreeVisitor for ReportFormatter {
    fn visit_dir(&mut self, _path: &Path, name: &str, depth: usize) {
        if depth == 0 {
            self.lines.push(root_marker());
        } else {
            self.lines.push(dir_line(name, depth));
        }
    }

    fn visit_file(&mut self, path: &Path, name: &str, depth: usize) {
        self.found_files.push(path.to_path_buf());
        self.lines.push(file_line(name, depth));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_walk_reports_no_files() {
        let formatter = ReportFormatter::new(Path::new("/tmp/x"));
        let report = formatter.finish();
        assert_eq!(
            report.text,
            "Scanning directory tree from: /tmp/x\n\nNo files found or an error occurred during scanning."
        );
        assert!(report.found_files.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_visits_render_in_order() {
        let mut formatter = ReportFormatter::new(Path::new("/tmp/x"));
        formatter.visit_dir(Path::new("/tmp/x"), "x", 0);
        formatter.visit_file(Path::new("/tmp/x/a.txt"), "a.txt", 0);
        formatter.visit_dir(Path::new("/tmp/x/sub"), "sub", 1);
        formatter.visit_file(Path::new("/tmp/x/sub/b.txt"), "b.txt", 1);
        assert_eq!(formatter.found_files().len(), 2);

        let report = formatter.finish();
        let expected = [
            "Scanning directory tree from: /tmp/x\n",
            "./",
            "│   ├── a.txt",
            "│   ├── sub/",
            "│   │   ├── b.txt",
            "\n--- Summary: All Files Found (Full Paths) ---",
            "/tmp/x/a.txt",
            "/tmp/x/sub/b.txt",
            "\nTotal files found: 2",
        ]
        .join("\n");
        assert_eq!(report.text, expected);
        assert_eq!(
            report.found_files,
            vec![PathBuf::from("/tmp/x/a.txt"), PathBuf::from("/tmp/x/sub/b.txt")]
        );
    }
}
