//! Core records derived from the repository: files, commits, branches.

/// Effective state of a file in one status snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    New,
    Modified,
    Deleted,
    Renamed,
    Copied,
    Untracked,
    Ignored,
    Unknown,
}

impl FileKind {
    /// Whether this kind is part of the reviewable set. Untracked and
    /// ignored files are excluded from staging by policy.
    pub fn is_reviewable(self) -> bool {
        matches!(
            self,
            FileKind::New
                | FileKind::Modified
                | FileKind::Deleted
                | FileKind::Renamed
                | FileKind::Copied
        )
    }

    /// One-letter marker shown next to the path in the files panel.
    pub fn as_char(self) -> char {
        match self {
            FileKind::New => 'A',
            FileKind::Modified => 'M',
            FileKind::Deleted => 'D',
            FileKind::Renamed => 'R',
            FileKind::Copied => 'C',
            FileKind::Untracked => '?',
            FileKind::Ignored => '!',
            FileKind::Unknown => ' ',
        }
    }
}

/// One file in the current snapshot. Immutable until the next snapshot load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: String,
    pub kind: FileKind,
}

/// One entry of the bounded history walk, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub short_hash: String,
    pub message: String,
}

/// One local branch; `is_current` marks the checked-out branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchRecord {
    pub name: String,
    pub is_current: bool,
}
