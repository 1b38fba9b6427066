//! uberfind: recursive keyword hunting for sensitive data in file trees.
//!
//! This crate provides the search engine used by the uberfind binary, but it
//! can also be embedded as a library. The public API lets you:
//! - Configure a run via Config (root, keywords, extensions, context radius).
//! - Scan readers or files for keyword matches (scan_reader, scan_file).
//! - Run a whole tree search that writes the plain-text report (run).
//!
//! Keywords are case-insensitive *regular expressions*, not literals. The
//! default keywords contain no metacharacters, but a keyword like `secret.`
//! matches `secrets`, `secret:` and so on — quote metacharacters with `\`
//! when you mean them literally.
//!
//! Quick example: scan a string buffer
//!
//! ```no_run
//! use uberfind::{build_matchers, scan_reader};
//! let matchers = build_matchers(&["password".into()]).unwrap();
//! let found = scan_reader("the password is hunter2\n".as_bytes(), &matchers, 20).unwrap();
//! assert_eq!(found.len(), 1);
//! ```
//!
//! Quick example: search a tree and write results.txt
//!
//! ```no_run
//! use uberfind::{Config, run};
//! let mut cfg = Config::default();
//! cfg.root = "./conf".into();
//! cfg.keywords = vec!["api[_-]?key".into()];
//! let summary = run(&cfg).unwrap();
//! println!("{} of {} files matched", summary.files_matched, summary.files_searched);
//! ```

pub mod config;
pub mod error;
pub mod fs_utils;
pub mod io_utils;
pub mod output;
pub mod regex_utils;
pub mod search;

pub use config::{Config, RunSummary};
pub use error::{Error, Result};
pub use regex_utils::{KeywordMatcher, build_matchers};
pub use search::{
    FileMatch, FileReport, context_snippet, run, run_to_writer, scan_file, scan_reader,
};

// -----------------------
// Tests
// -----------------------
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;

    fn matchers(keywords: &[&str]) -> Vec<KeywordMatcher> {
        let kws: Vec<String> = keywords.iter().map(|s| s.to_string()).collect();
        build_matchers(&kws).unwrap()
    }

    #[test]
    fn basic_match() {
        let data = "nothing\nthe password is hunter2\n";
        let found = scan_reader(Cursor::new(data), &matchers(&["password"]), 20).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].line_number, 2);
        assert_eq!(found[0].keyword, "password");
    }

    #[test]
    fn case_insensitive_matching() {
        let data = "PASSWORD=x\nPassWord=y\n";
        let found = scan_reader(Cursor::new(data), &matchers(&["password"]), 5).unwrap();
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn multiple_occurrences_on_one_line() {
        let data = "username=admin username=root\n";
        let found = scan_reader(Cursor::new(data), &matchers(&["username"]), 20).unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].line_number, 1);
        assert_eq!(found[1].line_number, 1);
    }

    #[test]
    fn keyword_order_preserved_within_a_line() {
        // "username" appears before "password" in the line, but "password"
        // was supplied first, so its record comes first.
        let data = "username=admin password=hunter2\n";
        let found = scan_reader(Cursor::new(data), &matchers(&["password", "username"]), 5).unwrap();
        assert_eq!(found[0].keyword, "password");
        assert_eq!(found[1].keyword, "username");
    }

    #[test]
    fn snippet_windows_are_clamped_to_the_line() {
        // Interior match: one char shaved off the left, window ends at EOL.
        let line = "the password is hunter2";
        assert_eq!(context_snippet(line, 4, 12, 3), "he password is");
        // Match at offset 0 keeps the full trailing radius.
        assert_eq!(context_snippet("password!", 0, 8, 3), "password!");
    }

    #[test]
    fn keywords_are_regexes() {
        let data = "secrets here\n";
        let found = scan_reader(Cursor::new(data), &matchers(&["secret."]), 5).unwrap();
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn undecodable_reader_is_an_error() {
        let bad = [0xffu8, 0xfe, 0x41];
        let res = scan_reader(Cursor::new(bad), &matchers(&["A"]), 5);
        assert!(res.is_err());
    }

    #[test]
    fn run_writes_report_and_counts() {
        let td = tempfile::tempdir().unwrap();
        let root = td.path().join("tree");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("a.txt"), b"password=1\n").unwrap();
        fs::write(root.join("b.txt"), b"nothing\n").unwrap();

        let mut cfg = Config::default();
        cfg.root = root.clone();
        cfg.report_path = td.path().join("results.txt");

        let summary = run(&cfg).unwrap();
        assert_eq!(summary.files_searched, 2);
        assert_eq!(summary.files_matched, 1);
        let report = fs::read_to_string(&cfg.report_path).unwrap();
        assert!(report.contains("=== FILE ====>>>"));
        assert!(report.contains("--> Found \"password\": Line 1"));
    }
}
