//! Dictionary Spell Corrector
//!
//! SymSpell-style correction over a word-frequency dictionary. Every word is
//! indexed under all of its deletions up to the maximum edit distance, so a
//! lookup only needs the deletions of the input token.

use super::SpellCorrector;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// English word frequencies (`word<TAB>count`), most frequent first
const ENGLISH_FREQUENCIES: &str = include_str!("frequency_en.txt");

/// Frequency given to domain vocabulary so it wins ties against English words
pub const DOMAIN_FREQUENCY: u32 = u32::MAX;

/// Tokens longer than this are never corrected
const MAX_TOKEN_CHARS: usize = 32;

/// Hard ceiling on edit distance; the delete index grows quickly past it
pub const MAX_EDIT_DISTANCE_LIMIT: usize = 3;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Frequency dictionary with a precomputed delete index
#[derive(Debug, Clone)]
pub struct DictionaryCorrector {
    /// word -> index into `entries`
    index: HashMap<String, u32>,
    /// (word, frequency), in insertion order
    entries: Vec<(String, u32)>,
    /// deletion variant (including the word itself) -> entry indices
    deletes: HashMap<String, Vec<u32>>,
    max_edit_distance: usize,
}

impl DictionaryCorrector {
    /// Empty dictionary
    pub fn empty(max_edit_distance: usize) -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
            deletes: HashMap::new(),
            max_edit_distance: max_edit_distance.min(MAX_EDIT_DISTANCE_LIMIT),
        }
    }

    /// Dictionary seeded with the embedded English frequency list
    pub fn new(max_edit_distance: usize) -> Self {
        let mut corrector = Self::empty(max_edit_distance);
        let added = corrector.add_word_list(ENGLISH_FREQUENCIES);
        tracing::debug!(
            words = added,
            max_edit_distance = corrector.max_edit_distance,
            "english dictionary indexed"
        );
        corrector
    }

    /// Add domain words at [`DOMAIN_FREQUENCY`]
    pub fn with_vocabulary<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.add_word(word.as_ref(), DOMAIN_FREQUENCY);
        }
        self
    }

    /// Load a word list file in the same format as the embedded list.
    /// Returns the number of entries read.
    pub fn load_words_file(&mut self, path: &Path) -> Result<usize, DictionaryError> {
        let raw = std::fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.add_word_list(&raw))
    }

    /// One word per line, optionally followed by a tab and a count (default 1).
    /// Blank lines and `#` comments are skipped.
    fn add_word_list(&mut self, raw: &str) -> usize {
        let mut count = 0;
        for line in raw.lines() {
            let mut parts = line.split('\t');
            let word = parts.next().unwrap_or("").trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            let freq = parts
                .next()
                .and_then(|f| f.trim().parse::<u32>().ok())
                .unwrap_or(1);
            self.add_word(word, freq);
            count += 1;
        }
        count
    }

    /// Add a word, keeping the higher frequency if it is already known
    pub fn add_word(&mut self, word: &str, freq: u32) {
        let word = word.trim().to_lowercase();
        if word.is_empty() || word.chars().count() > MAX_TOKEN_CHARS {
            return;
        }

        if let Some(&id) = self.index.get(&word) {
            let existing = &mut self.entries[id as usize].1;
            *existing = (*existing).max(freq);
            return;
        }

        let id = self.entries.len() as u32;
        for variant in deletes_within(&word, self.max_edit_distance) {
            self.deletes.entry(variant).or_default().push(id);
        }
        self.index.insert(word.clone(), id);
        self.entries.push((word, freq));
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(&word.to_lowercase())
    }

    /// Frequency of a known word
    pub fn frequency(&self, word: &str) -> Option<u32> {
        self.index
            .get(&word.to_lowercase())
            .map(|&id| self.entries[id as usize].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_edit_distance(&self) -> usize {
        self.max_edit_distance
    }

    /// Best dictionary word within `max_distance` of `word` (already lowercased)
    fn lookup(&self, word: &str, max_distance: usize) -> Option<&str> {
        let mut best: Option<(&str, usize, u32)> = None;
        let mut checked = HashSet::new();

        for variant in deletes_within(word, max_distance) {
            let Some(ids) = self.deletes.get(&variant) else {
                continue;
            };
            for &id in ids {
                if !checked.insert(id) {
                    continue;
                }
                let (candidate, freq) = &self.entries[id as usize];
                let distance = edit_distance(word, candidate);
                if distance > max_distance {
                    continue;
                }
                let better = match best {
                    None => true,
                    Some((best_word, best_dist, best_freq)) => {
                        distance < best_dist
                            || (distance == best_dist && *freq > best_freq)
                            || (distance == best_dist
                                && *freq == best_freq
                                && candidate.as_str() < best_word)
                    }
                };
                if better {
                    best = Some((candidate.as_str(), distance, *freq));
                }
            }
        }

        best.map(|(w, _, _)| w)
    }
}

impl SpellCorrector for DictionaryCorrector {
    fn correct(&self, token: &str) -> String {
        let (prefix, core, suffix) = split_affixes(token);

        if core.is_empty() || !core.chars().all(char::is_alphabetic) {
            return token.to_string();
        }

        let len = core.chars().count();
        if len <= 2 || len > MAX_TOKEN_CHARS {
            return token.to_string();
        }

        let lower = core.to_lowercase();
        if self.index.contains_key(&lower) {
            return token.to_string();
        }

        let max_distance = if len <= 4 {
            self.max_edit_distance.min(1)
        } else {
            self.max_edit_distance
        };
        if max_distance == 0 {
            return token.to_string();
        }

        match self.lookup(&lower, max_distance) {
            Some(corrected) => {
                tracing::trace!(token, corrected, "spelling corrected");
                format!("{prefix}{corrected}{suffix}")
            }
            None => token.to_string(),
        }
    }
}

/// Split a token into (leading punctuation, alphanumeric core, trailing punctuation)
fn split_affixes(token: &str) -> (&str, &str, &str) {
    let start = token
        .find(|c: char| c.is_alphanumeric())
        .unwrap_or(token.len());
    let end = token
        .rfind(|c: char| c.is_alphanumeric())
        .map(|i| i + token[i..].chars().next().map_or(1, char::len_utf8))
        .unwrap_or(start);
    let end = end.max(start);
    (&token[..start], &token[start..end], &token[end..])
}

/// The word itself plus every string reachable by deleting up to `max_distance` chars
fn deletes_within(word: &str, max_distance: usize) -> HashSet<String> {
    let mut result = HashSet::new();
    result.insert(word.to_string());

    let mut frontier = vec![word.to_string()];
    for _ in 0..max_distance {
        let mut next = Vec::new();
        for current in &frontier {
            let chars: Vec<char> = current.chars().collect();
            for skip in 0..chars.len() {
                let deleted: String = chars
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != skip)
                    .map(|(_, c)| c)
                    .collect();
                if result.insert(deleted.clone()) {
                    next.push(deleted);
                }
            }
        }
        frontier = next;
    }

    result
}

/// Optimal string alignment distance (Damerau-Levenshtein without repeated edits)
fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut d = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in d.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        d[0][j] = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            d[i][j] = (d[i - 1][j] + 1)
                .min(d[i][j - 1] + 1)
                .min(d[i - 1][j - 1] + cost);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                d[i][j] = d[i][j].min(d[i - 2][j - 2] + 1);
            }
        }
    }

    d[a.len()][b.len()]
}
