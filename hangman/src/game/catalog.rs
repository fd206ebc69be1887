//! Word catalog: the fixed, ordered list of playable words and their hints.

use serde::{Deserialize, Serialize};
use std::{
    collections::HashSet,
    fs, io,
    path::{Path, PathBuf},
    slice,
    sync::Arc,
};
use thiserror::Error;

/// Errors that can occur while building a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog has no words")]
    Empty,
    #[error("word at index {index} is empty")]
    EmptyWord { index: usize },
    #[error("word at index {index} ({word:?}) must only contain letters A-Z")]
    NonAlphabeticWord { index: usize, word: String },
    #[error("word {word:?} appears more than once")]
    DuplicateWord { word: String },
    #[error("failed to read catalog from {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// An immutable catalog record.
///
/// The word is compared case-insensitively; the hints are display strings
/// revealed one at a time.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct WordEntry {
    pub word: String,
    pub hint1: String,
    pub hint2: String,
}

impl WordEntry {
    #[must_use]
    pub fn new(word: &str, hint1: &str, hint2: &str) -> Self {
        Self {
            word: word.to_string(),
            hint1: hint1.to_string(),
            hint2: hint2.to_string(),
        }
    }

    /// Number of letters in the word.
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// The word with every letter uppercased.
    #[must_use]
    pub fn normalized(&self) -> String {
        self.word.to_ascii_uppercase()
    }

    /// Hint text by its 1-based rank.
    #[must_use]
    pub fn hint(&self, rank: u8) -> Option<&str> {
        match rank {
            1 => Some(&self.hint1),
            2 => Some(&self.hint2),
            _ => None,
        }
    }
}

/// A non-empty, ordered, read-only list of words.
#[derive(Clone, Debug)]
pub struct Catalog {
    entries: Vec<Arc<WordEntry>>,
}

impl Catalog {
    /// Build a catalog, rejecting empty lists, empty or non-alphabetic
    /// words, and case-insensitive duplicates.
    pub fn new(entries: Vec<WordEntry>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            if entry.is_empty() {
                return Err(CatalogError::EmptyWord { index });
            }
            if !entry.word.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(CatalogError::NonAlphabeticWord {
                    index,
                    word: entry.word.clone(),
                });
            }
            if !seen.insert(entry.normalized()) {
                return Err(CatalogError::DuplicateWord {
                    word: entry.word.clone(),
                });
            }
        }

        Ok(Self {
            entries: entries.into_iter().map(Arc::new).collect(),
        })
    }

    /// Parse a JSON array of `{"word", "hint1", "hint2"}` objects.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<WordEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// The compiled-in ten tech words with their Arabic hints.
    #[must_use]
    pub fn tech_words() -> Self {
        let entries = TECH_WORDS
            .iter()
            .map(|(word, hint1, hint2)| Arc::new(WordEntry::new(word, hint1, hint2)))
            .collect();
        Self { entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept alongside `len` for clippy.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Arc<WordEntry>> {
        self.entries.get(index).cloned()
    }

    pub fn iter(&self) -> slice::Iter<'_, Arc<WordEntry>> {
        self.entries.iter()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::tech_words()
    }
}

const TECH_WORDS: [(&str, &str, &str); 10] = [
    (
        "React",
        "JavaScript مكتبة  لبناء واجهات المستخدم",
        " Facebook تم تطويرها من قبل",
    ),
    (
        "JavaScript",
        "لغة برمجة تستخدم في تطوير الويب",
        "تعمل في المتصفح والخادم",
    ),
    (
        "Web",
        "شبكة عالمية من المواقع والصفحات",
        "World Wide Web اختصار لـ",
    ),
    (
        "Mobile",
        "تطبيقات تعمل على الهواتف الذكية",
        " iOS يمكن أن تكون أندرويد أو",
    ),
    (
        "Frontend",
        "الجزء المرئي من الموقع للمستخدم",
        " HTML و CSS و JavaScript يتضمن",
    ),
    (
        "Backend",
        "الجزء الخفي من الموقع الذي يعمل على الخادم",
        "يتعامل مع قواعد البيانات والمنطق",
    ),
    (
        "Database",
        "مخزن منظم للبيانات والمعلومات",
        " MySQL أو MongoDB مثل",
    ),
    (
        "AI",
        "الذكاء الاصطناعي - محاكاة الذكاء البشري",
        " Artificial Intelligence اختصار لـ",
    ),
    (
        "UI",
        "واجهة المستخدم - التصميم المرئي للتطبيق",
        " User Interface اختصار لـ ",
    ),
    (
        "JAVA",
        "لغة برمجة شائعة ومتعددة المنصات",
        "Android  تستخدم في تطبيقات",
    ),
];
