use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::canon::Book;

/// Read flags keyed by `(book name, chapter number)`. Absence of a key is
/// equivalent to unread. The map is owned by the container; cards only read
/// it and emit mutation intents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, bool>", into = "BTreeMap<String, bool>")]
pub struct ProgressMap {
    read: BTreeMap<(String, u32), bool>,
}

impl ProgressMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_read(&self, book: &str, chapter: u32) -> bool {
        self.read
            .get(&(book.to_owned(), chapter))
            .copied()
            .unwrap_or(false)
    }

    /// Flip the read flag for one chapter. Two toggles restore the flag.
    pub fn toggle(&mut self, book: &str, chapter: u32) {
        let flag = !self.is_read(book, chapter);
        self.read.insert((book.to_owned(), chapter), flag);
    }

    /// Set every chapter of a book in `[1, total_chapters]` to `read` in one
    /// logical action (select all / clear all).
    pub fn set_book(&mut self, book: &str, total_chapters: u32, read: bool) {
        for chapter in 1..=total_chapters {
            self.read.insert((book.to_owned(), chapter), read);
        }
    }

    /// Count read chapters of a book within `[1, total_chapters]`. Stray
    /// entries outside that range are ignored, so the result is always in
    /// `[0, total_chapters]`.
    pub fn completed_in(&self, book: &str, total_chapters: u32) -> u32 {
        (1..=total_chapters)
            .filter(|chapter| self.is_read(book, *chapter))
            .count() as u32
    }

    pub fn book_progress(&self, book: &Book) -> BookProgress {
        BookProgress {
            completed: self.completed_in(book.name, book.chapters),
            total: book.chapters,
        }
    }

    /// Aggregate progress across a set of books, for the page-level bar.
    pub fn overall<'a>(&self, books: impl IntoIterator<Item = &'a Book>) -> BookProgress {
        let mut completed = 0;
        let mut total = 0;
        for book in books {
            completed += self.completed_in(book.name, book.chapters);
            total += book.chapters;
        }
        BookProgress { completed, total }
    }
}

/// Derived completion figures for one book. Recomputed from the map on every
/// render; never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookProgress {
    pub completed: u32,
    pub total: u32,
}

impl BookProgress {
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }

    pub fn has_started(&self) -> bool {
        self.completed > 0 && !self.is_complete()
    }
}

impl From<ProgressMap> for BTreeMap<String, bool> {
    fn from(map: ProgressMap) -> Self {
        map.read
            .into_iter()
            .map(|((book, chapter), flag)| (format!("{book}-{chapter}"), flag))
            .collect()
    }
}

impl TryFrom<BTreeMap<String, bool>> for ProgressMap {
    type Error = String;

    fn try_from(raw: BTreeMap<String, bool>) -> Result<Self, Self::Error> {
        let mut read = BTreeMap::new();
        for (key, flag) in raw {
            let Some((book, chapter)) = key.rsplit_once('-') else {
                return Err(format!("progress key missing chapter suffix: {key:?}"));
            };
            let chapter: u32 = chapter
                .parse()
                .map_err(|_| format!("progress key has non-numeric chapter: {key:?}"))?;
            read.insert((book.to_owned(), chapter), flag);
        }
        Ok(Self { read })
    }
}
