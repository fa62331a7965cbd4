//! Line rendering for directory reports

use std::path::{MAIN_SEPARATOR, Path};

/// Indent glyph, repeated once per depth level.
pub const INDENT: &str = "│   ";
/// Branch glyph placed before every directory and file name.
pub const BRANCH: &str = "├── ";

pub const SUMMARY_HEADER: &str = "\n--- Summary: All Files Found (Full Paths) ---";
pub const NO_FILES_LINE: &str = "No files found or an error occurred during scanning.";

/// Report text for a root that does not exist.
pub fn missing_root_text(root: &Path) -> String {
    format!(
        "Error: The specified path does not exist: '{}'\n",
        root.display()
    )
}

/// Header naming the absolute scan root. Carries its own trailing newline,
/// which leaves a blank line below it once lines are joined.
pub fn header_line(absolute_root: &Path) -> String {
    format!(
        "Scanning directory tree from: {}\n",
        absolute_root.display()
    )
}

/// Marker line for the walk root itself.
pub fn root_marker() -> String {
    format!(".{}", MAIN_SEPARATOR)
}

/// Line for a directory `depth` components below the root.
pub fn dir_line(name: &str, depth: usize) -> String {
    format!("{}{}{}{}", INDENT.repeat(depth), BRANCH, name, MAIN_SEPARATOR)
}

/// Line for a file inside a directory at `dir_depth`.
pub fn file_line(name: &str, dir_depth: usize) -> String {
    format!("{}{}{}", INDENT.repeat(dir_depth + 1), BRANCH, name)
}

/// Trailing count line of the summary block.
pub fn total_line(count: usize) -> String {
    format!("\nTotal files found: {}", count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_marker() {
        assert_eq!(root_marker(), format!(".{}", MAIN_SEPARATOR));
    }

    #[cfg(unix)]
    #[test]
    fn test_dir_line_indents_by_depth() {
        assert_eq!(dir_line("sub", 1), "│   ├── sub/");
        assert_eq!(dir_line("deep", 2), "│   │   ├── deep/");
    }

    #[test]
    fn test_file_line_is_one_deeper_than_its_directory() {
        assert_eq!(file_line("a.txt", 0), "│   ├── a.txt");
        assert_eq!(file_line("file.txt", 2), "│   │   │   ├── file.txt");
    }

    #[test]
    fn test_missing_root_text_quotes_literal_root() {
        assert_eq!(
            missing_root_text(Path::new("no/such/dir")),
            "Error: The specified path does not exist: 'no/such/dir'\n"
        );
    }

    #[test]
    fn test_header_line() {
        assert_eq!(
            header_line(Path::new("/tmp/x")),
            "Scanning directory tree from: /tmp/x\n"
        );
    }
}
