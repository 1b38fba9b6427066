use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,           // -p
    pub keywords: Vec<String>,   // -k (regex patterns, searched in order)
    pub extensions: Vec<String>, // -e (lowercase, leading dot)
    pub report_path: PathBuf,    // -r
    pub context_radius: usize,   // -n
    pub all_files: bool,         // -a
    pub verbose: bool,           // -v/--verbose
    pub compat: bool,            // --compat
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            keywords: vec!["password".to_string(), "username".to_string()],
            extensions: [
                ".dll", ".xml", ".db", ".conf", ".ini", ".txt", ".dat", ".vbs", ".bat",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            report_path: PathBuf::from("results.txt"),
            context_radius: 20,
            all_files: false,
            verbose: false,
            compat: false,
        }
    }
}

/// Aggregate counts for one run, accumulated by the driving loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Files that survived the extension filter, readable or not.
    pub files_searched: usize,
    /// Files that contained at least one match; each file counts once.
    pub files_matched: usize,
}
