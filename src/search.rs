use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::config::{Config, RunSummary};
use crate::error::{Error, Result};
use crate::fs_utils::{filter_by_extension, list_files};
use crate::io_utils::read_to_lines;
use crate::output::ReportWriter;
use crate::regex_utils::{KeywordMatcher, build_matchers};

/// One match of one keyword on one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMatch {
    /// The keyword pattern as supplied, not the matched text.
    pub keyword: String,
    /// 1-based line number.
    pub line_number: usize,
    /// Context window around the match.
    pub snippet: String,
}

/// All matches for a single file, in line order then keyword order.
#[derive(Debug, Clone)]
pub struct FileReport {
    /// Resolved (canonical) path when resolvable, the given path otherwise.
    pub path: PathBuf,
    pub matches: Vec<FileMatch>,
}

impl FileReport {
    /// Whether this file contributes (exactly 1) to the files-matched count.
    pub fn found(&self) -> bool {
        !self.matches.is_empty()
    }
}

/// Extract the context window around a match.
///
/// `start`/`end` are character offsets of the match within `line`, `n` the
/// configured radius. When the match sits closer than `n` to the line start,
/// the window is `[0, end+n)` rather than a symmetric clamp, so the right
/// side keeps its full `n` characters of context. The upper bound clamps to
/// the line length. This asymmetry is part of the report contract; do not
/// "fix" it to a centered window.
pub fn context_snippet(line: &str, start: usize, end: usize, n: usize) -> String {
    let lo = if start < n { 0 } else { start - n };
    line.chars().skip(lo).take(end + n - lo).collect()
}

/// Scan a reader line by line, collecting every keyword match.
///
/// Lines are numbered from 1 and stripped of trailing whitespace before
/// matching. Keywords are tried in supplied order on each line; each
/// non-overlapping occurrence yields its own record. Invalid UTF-8 input
/// surfaces as an `io::Error` (the caller skips the file).
pub fn scan_reader<R: Read>(
    reader: R,
    matchers: &[KeywordMatcher],
    radius: usize,
) -> io::Result<Vec<FileMatch>> {
    let lines = read_to_lines(reader)?;

    let mut matches = Vec::new();
    for (idx, raw_line) in lines.iter().enumerate() {
        let line = raw_line.trim_end();
        for m in matchers {
            for found in m.regex.find_iter(line) {
                // The regex reports byte offsets; the context window is
                // measured in characters.
                let start = line[..found.start()].chars().count();
                let end = start + line[found.start()..found.end()].chars().count();
                matches.push(FileMatch {
                    keyword: m.keyword.clone(),
                    line_number: idx + 1,
                    snippet: context_snippet(line, start, end, radius),
                });
            }
        }
    }
    Ok(matches)
}

/// Scan a single file. Open and decode failures are per-file errors; the
/// driver skips the file and keeps going.
pub fn scan_file(
    path: &Path,
    matchers: &[KeywordMatcher],
    radius: usize,
) -> io::Result<FileReport> {
    let file = File::open(path)?;
    let matches = scan_reader(file, matchers, radius)?;
    let resolved = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    Ok(FileReport {
        path: resolved,
        matches,
    })
}

/// Enumerate and filter the files one run will look at.
pub fn collect_targets(cfg: &Config) -> Result<Vec<PathBuf>> {
    let files = list_files(&cfg.root)?;
    if cfg.all_files {
        Ok(files)
    } else {
        Ok(filter_by_extension(files, &cfg.extensions))
    }
}

/// Run a full search, writing the report to `cfg.report_path` (truncated).
///
/// Keyword compilation and enumeration happen before the report file is
/// touched, so a bad pattern or missing root never clobbers an existing
/// report.
pub fn run(cfg: &Config) -> Result<RunSummary> {
    let matchers = build_matchers(&cfg.keywords)?;
    let files = collect_targets(cfg)?;

    let file = File::create(&cfg.report_path).map_err(|source| Error::ReportCreate {
        path: cfg.report_path.clone(),
        source,
    })?;
    let mut out = BufWriter::new(file);
    let summary = scan_into(cfg, &files, &matchers, &mut out)?;
    out.flush()?;
    Ok(summary)
}

/// Like `run`, but the report goes to a caller-supplied writer.
pub fn run_to_writer<W: Write>(cfg: &Config, out: &mut W) -> Result<RunSummary> {
    let matchers = build_matchers(&cfg.keywords)?;
    let files = collect_targets(cfg)?;
    scan_into(cfg, &files, &matchers, out)
}

fn scan_into<W: Write>(
    cfg: &Config,
    files: &[PathBuf],
    matchers: &[KeywordMatcher],
    out: &mut W,
) -> Result<RunSummary> {
    let mut writer = ReportWriter::new(out, cfg.compat);
    let mut summary = RunSummary {
        files_searched: files.len(),
        files_matched: 0,
    };

    for path in files {
        // Unreadable or undecodable file: skip it, the run continues. It
        // stays counted in files_searched.
        let Ok(report) = scan_file(path, matchers, cfg.context_radius) else {
            continue;
        };
        if report.found() {
            if cfg.verbose {
                println!("{}", report.path.display());
            }
            writer.write_file_block(&report)?;
            summary.files_matched += 1;
        }
    }
    Ok(summary)
}
