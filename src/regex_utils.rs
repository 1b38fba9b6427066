//! Keyword matcher compilation.
//!
//! Keywords are compiled verbatim as case-insensitive regular expressions,
//! in the order they were supplied. That order is the search order on every
//! line, so it is preserved all the way into the report.

use regex::{Regex, RegexBuilder};

use crate::error::{Error, Result};

/// One keyword and its compiled pattern. The original string is kept for
/// the report's `Found "<keyword>"` lines.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    pub keyword: String,
    pub regex: Regex,
}

/// Compile all keywords, failing fast on the first invalid pattern.
///
/// Keywords are regexes, not literals: metacharacters like `.` or `(` change
/// matching behavior, and an unbalanced `(` is a startup error rather than a
/// silently skipped keyword.
pub fn build_matchers(keywords: &[String]) -> Result<Vec<KeywordMatcher>> {
    let mut matchers = Vec::with_capacity(keywords.len());
    for kw in keywords {
        let mut builder = RegexBuilder::new(kw);
        builder.multi_line(true);
        builder.case_insensitive(true);
        let regex = builder.build().map_err(|source| Error::InvalidPattern {
            pattern: kw.clone(),
            source,
        })?;
        matchers.push(KeywordMatcher {
            keyword: kw.clone(),
            regex,
        });
    }
    Ok(matchers)
}
