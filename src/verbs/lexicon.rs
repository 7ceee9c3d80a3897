// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The set of verbs a subject may start with.

use crate::error::{ConfigError, OcmError, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::builtin::FREQUENT_VERBS;

/// Accepted imperative verbs, stored lowercase.
#[derive(Debug, Clone, Default)]
pub struct VerbLexicon {
    verbs: HashSet<String>,
    /// How many verbs came from the inline list.
    inline_count: usize,
    /// File the extra verbs were read from, if any.
    path: Option<PathBuf>,
}

impl VerbLexicon {
    /// Lexicon with the built-in verbs only.
    pub fn builtin() -> Self {
        let mut lexicon = Self::default();
        lexicon.extend(FREQUENT_VERBS.iter().map(|v| v.to_string()));
        lexicon
    }

    /// Assemble the lexicon from the built-in list, an inline delimited
    /// string and a file in the same format.
    ///
    /// An empty path is treated as absent. A path that cannot be read is a
    /// configuration error.
    pub fn assemble(inline: Option<&str>, path: Option<&Path>) -> Result<Self> {
        let mut lexicon = Self::builtin();

        if let Some(text) = inline {
            let verbs = parse_verbs(text);
            tracing::debug!("{} additional verb(s) given inline", verbs.len());
            lexicon.inline_count = verbs.len();
            lexicon.extend(verbs);
        }

        if let Some(path) = path.filter(|p| !p.as_os_str().is_empty()) {
            let verbs = read_verbs_file(path)?;
            tracing::debug!("{} additional verb(s) read from {:?}", verbs.len(), path);
            lexicon.extend(verbs);
            lexicon.path = Some(path.to_path_buf());
        }

        Ok(lexicon)
    }

    /// Whether `word` is an accepted verb, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        self.verbs.contains(&word.to_lowercase())
    }

    /// All verbs, sorted.
    pub fn sorted(&self) -> Vec<&str> {
        let mut verbs: Vec<&str> = self.verbs.iter().map(String::as_str).collect();
        verbs.sort_unstable();
        verbs
    }

    /// Number of verbs that were given inline.
    pub fn inline_count(&self) -> usize {
        self.inline_count
    }

    /// The verbs file, if one was used.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Iterate over the stored keys.
    pub(crate) fn keys(&self) -> impl Iterator<Item = &str> {
        self.verbs.iter().map(String::as_str)
    }

    fn extend(&mut self, verbs: impl IntoIterator<Item = String>) {
        self.verbs.extend(
            verbs
                .into_iter()
                .map(|v| v.to_lowercase())
                .filter(|v| !v.is_empty()),
        );
    }
}

/// Parse a list of verbs delimited by newlines, commas or semicolons.
///
/// Segments are trimmed and lowercased; empty ones are dropped.
pub fn parse_verbs(text: &str) -> Vec<String> {
    text.lines()
        .flat_map(|line| line.split([',', ';']))
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn read_verbs_file(path: &Path) -> Result<Vec<String>> {
    if !path.is_file() {
        return Err(OcmError::Config(ConfigError::VerbsFileUnreadable {
            path: path.to_path_buf(),
            message: "no such file".to_string(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        OcmError::Config(ConfigError::VerbsFileUnreadable {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    })?;

    Ok(parse_verbs(&content))
}
