//! Revision addressing

use std::fmt;

/// What a content query is made against
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Revision {
    /// Uncommitted state of the repository
    WorkingCopy,
    /// A commit hash or symbolic reference
    Commit(String),
}

impl Revision {
    pub fn commit(hash: impl Into<String>) -> Self {
        Self::Commit(hash.into())
    }

    /// Commit hash, if this is not the working copy
    pub fn hash(&self) -> Option<&str> {
        match self {
            Self::WorkingCopy => None,
            Self::Commit(hash) => Some(hash),
        }
    }

    pub fn is_working_copy(&self) -> bool {
        matches!(self, Self::WorkingCopy)
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WorkingCopy => f.write_str("working copy"),
            Self::Commit(hash) => f.write_str(hash),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_hash_or_working_copy_label() {
        assert_eq!(Revision::commit("abc1234").to_string(), "abc1234");
        assert_eq!(Revision::WorkingCopy.to_string(), "working copy");
    }

    #[test]
    fn hash_is_none_for_working_copy() {
        assert_eq!(Revision::WorkingCopy.hash(), None);
        assert_eq!(Revision::commit("f00").hash(), Some("f00"));
    }
}
