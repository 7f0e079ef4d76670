//! Parsing of `git status --porcelain` output into file records.
//!
//! Each well-formed line carries a two-character code pair (index state,
//! worktree state) followed by a space and the path. The index code is
//! authoritative; the worktree code only applies when the index column is
//! blank. Malformed lines are skipped so a single odd line never aborts a
//! whole snapshot load.

use crate::model::{FileKind, FileRecord};

/// Minimum length of a well-formed porcelain line: "XY p".
const MIN_LINE_LEN: usize = 4;

/// Parse raw porcelain output into records, preserving line order.
pub fn parse_porcelain(output: &str) -> Vec<FileRecord> {
    output.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<FileRecord> {
    if line.len() < MIN_LINE_LEN || !line.is_char_boundary(3) {
        return None;
    }

    let index_code = line.as_bytes()[0] as char;
    let worktree_code = line.as_bytes()[1] as char;
    let path = line[3..].trim();
    if path.is_empty() {
        return None;
    }

    // Renames are reported as "old -> new"; the new path is the one that
    // exists in the worktree.
    let path = match path.split_once(" -> ") {
        Some((_, new_path)) => new_path.trim(),
        None => path,
    };

    Some(FileRecord {
        path: path.to_string(),
        kind: effective_kind(index_code, worktree_code),
    })
}

/// Index changes take precedence over unindexed ones.
pub fn effective_kind(index_code: char, worktree_code: char) -> FileKind {
    let code = if index_code == ' ' {
        worktree_code
    } else {
        index_code
    };

    match code {
        'A' => FileKind::New,
        'M' => FileKind::Modified,
        'D' => FileKind::Deleted,
        'R' => FileKind::Renamed,
        'C' => FileKind::Copied,
        '?' => FileKind::Untracked,
        '!' => FileKind::Ignored,
        _ => FileKind::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_code_takes_precedence_over_worktree_code() {
        // Staged-modified with a later worktree deletion stays Modified.
        assert_eq!(effective_kind('M', 'D'), FileKind::Modified);
        assert_eq!(effective_kind('A', 'M'), FileKind::New);
        assert_eq!(effective_kind('D', ' '), FileKind::Deleted);
    }

    #[test]
    fn blank_index_falls_back_to_worktree_code() {
        assert_eq!(effective_kind(' ', 'M'), FileKind::Modified);
        assert_eq!(effective_kind(' ', 'D'), FileKind::Deleted);
    }

    #[test]
    fn untracked_and_ignored_codes_map_directly() {
        assert_eq!(effective_kind('?', '?'), FileKind::Untracked);
        assert_eq!(effective_kind('!', '!'), FileKind::Ignored);
    }

    #[test]
    fn unknown_codes_never_fail() {
        assert_eq!(effective_kind('U', 'U'), FileKind::Unknown);
        assert_eq!(effective_kind('x', ' '), FileKind::Unknown);
    }

    #[test]
    fn parses_typical_status_output_in_order() {
        let out = "M  src/main.rs\n A src/new.rs\n?? notes.txt\n";
        let records = parse_porcelain(out);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].path, "src/main.rs");
        assert_eq!(records[0].kind, FileKind::Modified);
        assert_eq!(records[1].path, "src/new.rs");
        assert_eq!(records[1].kind, FileKind::New);
        assert_eq!(records[2].path, "notes.txt");
        assert_eq!(records[2].kind, FileKind::Untracked);
    }

    #[test]
    fn short_or_empty_lines_are_skipped_not_errors() {
        let out = "M\n\nXY\nM  ok.rs\n";
        let records = parse_porcelain(out);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].path, "ok.rs");
    }

    #[test]
    fn line_with_codes_but_blank_path_is_skipped() {
        let records = parse_porcelain("M    \n");
        assert!(records.is_empty());
    }

    #[test]
    fn rename_records_the_new_path() {
        let records = parse_porcelain("R  old_name.rs -> new_name.rs\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].path, "new_name.rs");
        assert_eq!(records[0].kind, FileKind::Renamed);
    }

    #[test]
    fn non_ascii_paths_parse() {
        let records = parse_porcelain("M  docs/notas-revisão.md\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].path, "docs/notas-revisão.md");
    }
}
