//! Path filters applied to the status snapshot.
//!
//! Substring and regex include/exclude rules, all optional. A path must
//! satisfy every configured rule to stay in the snapshot.

use regex::Regex;

use crate::error::{Result, StashlyError};

#[derive(Debug, Default)]
pub struct FileFilter {
    include: Option<String>,
    exclude: Option<String>,
    include_pattern: Option<Regex>,
    exclude_pattern: Option<Regex>,
}

impl FileFilter {
    pub fn new(
        include: Option<String>,
        exclude: Option<String>,
        include_pattern: Option<&str>,
        exclude_pattern: Option<&str>,
    ) -> Result<Self> {
        let include_pattern = include_pattern.map(compile_pattern).transpose()?;
        let exclude_pattern = exclude_pattern.map(compile_pattern).transpose()?;

        Ok(Self {
            include: include.filter(|s| !s.is_empty()),
            exclude: exclude.filter(|s| !s.is_empty()),
            include_pattern,
            exclude_pattern,
        })
    }

    pub fn matches(&self, path: &str) -> bool {
        if let Some(sub) = &self.include
            && !path.contains(sub.as_str())
        {
            return false;
        }
        if let Some(sub) = &self.exclude
            && path.contains(sub.as_str())
        {
            return false;
        }
        if let Some(re) = &self.include_pattern
            && !re.is_match(path)
        {
            return false;
        }
        if let Some(re) = &self.exclude_pattern
            && re.is_match(path)
        {
            return false;
        }
        true
    }
}

fn compile_pattern(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| StashlyError::Validation(format!("invalid filter pattern '{pattern}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_matches_everything() {
        let filter = FileFilter::default();
        assert!(filter.matches("src/main.rs"));
        assert!(filter.matches(""));
    }

    #[test]
    fn include_substring_limits_matches() {
        let filter = FileFilter::new(Some("src/".to_string()), None, None, None)
            .expect("filter should build");
        assert!(filter.matches("src/main.rs"));
        assert!(!filter.matches("README.md"));
    }

    #[test]
    fn exclude_substring_removes_matches() {
        let filter = FileFilter::new(None, Some("target/".to_string()), None, None)
            .expect("filter should build");
        assert!(filter.matches("src/main.rs"));
        assert!(!filter.matches("target/debug/out"));
    }

    #[test]
    fn regex_rules_apply_on_top_of_substrings() {
        let filter = FileFilter::new(None, None, Some(r"\.rs$"), Some(r"^tests/"))
            .expect("filter should build");
        assert!(filter.matches("src/app.rs"));
        assert!(!filter.matches("src/app.go"));
        assert!(!filter.matches("tests/app.rs"));
    }

    #[test]
    fn invalid_regex_is_a_validation_error() {
        let result = FileFilter::new(None, None, Some("("), None);
        assert!(matches!(result, Err(StashlyError::Validation(_))));
    }

    #[test]
    fn empty_substrings_are_ignored() {
        let filter = FileFilter::new(Some(String::new()), Some(String::new()), None, None)
            .expect("filter should build");
        assert!(filter.matches("anything"));
    }
}
