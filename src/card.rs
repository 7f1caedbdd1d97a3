use crate::canon::Book;
use crate::insight::{Insight, InsightSource};
use crate::progress::ProgressMap;

/// Per-card insight lifecycle as one tagged state instead of independent
/// loading/present/visible flags, so ambiguous combinations cannot exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsightState {
    Absent,
    Loading,
    Ready { insight: Insight, visible: bool },
}

/// Mutation intents a card reports upward. Cards never write the progress
/// map or the expansion set themselves; the container applies these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    ToggleChapter {
        book: String,
        chapter: u32,
    },
    ToggleBook {
        book: String,
        total_chapters: u32,
        read: bool,
    },
    ToggleExpand {
        book: String,
    },
}

/// The composite interactive unit for one book: header, select-all /
/// clear-all, chapter grid, and the on-demand insight panel. Completion
/// figures are derived from the externally owned progress map on every
/// render.
pub struct BookCard {
    book: &'static Book,
    insight: InsightState,
}

impl BookCard {
    pub fn new(book: &'static Book) -> Self {
        Self {
            book,
            insight: InsightState::Absent,
        }
    }

    pub fn book(&self) -> &'static Book {
        self.book
    }

    pub fn insight_state(&self) -> &InsightState {
        &self.insight
    }

    pub fn toggle_chapter(&self, chapter: u32) -> anyhow::Result<CardAction> {
        if chapter == 0 || chapter > self.book.chapters {
            anyhow::bail!(
                "chapter {chapter} is out of range for {} (1..={})",
                self.book.name,
                self.book.chapters
            );
        }
        Ok(CardAction::ToggleChapter {
            book: self.book.name.to_owned(),
            chapter,
        })
    }

    pub fn toggle_all(&self, read: bool) -> CardAction {
        CardAction::ToggleBook {
            book: self.book.name.to_owned(),
            total_chapters: self.book.chapters,
            read,
        }
    }

    pub fn toggle_expand(&self) -> CardAction {
        CardAction::ToggleExpand {
            book: self.book.name.to_owned(),
        }
    }

    /// Drive the insight state machine. A held record only flips visibility;
    /// a missing record starts one fetch, whose failure returns the card to
    /// `Absent` so a later request retries.
    pub async fn request_insight(&mut self, source: &dyn InsightSource) {
        match &mut self.insight {
            InsightState::Ready { visible, .. } => {
                *visible = !*visible;
            }
            InsightState::Loading => {}
            InsightState::Absent => {
                self.insight = InsightState::Loading;
                self.insight = match source.fetch_insight(self.book.name).await {
                    Some(insight) => InsightState::Ready {
                        insight,
                        visible: true,
                    },
                    None => InsightState::Absent,
                };
            }
        }
    }

    pub fn render(&self, progress: &ProgressMap, is_expanded: bool) -> String {
        let figures = progress.book_progress(self.book);
        let marker = if figures.is_complete() {
            '✓'
        } else if figures.has_started() {
            '◐'
        } else {
            '·'
        };

        let mut out = format!("{marker} {} 共 {} 章", self.book.zh_name, self.book.chapters);
        if !is_expanded {
            return out;
        }

        out.push_str(&format!(
            "\n  {} • 已讀 {}/{}",
            self.book.name, figures.completed, figures.total
        ));

        if let InsightState::Ready { insight, visible } = &self.insight
            && *visible
        {
            out.push_str(&format!("\n  AI 簡介: {}", insight.summary));
            out.push_str(&format!("\n  金句: 「{}」", insight.key_verse));
        }

        out.push_str(&render_chapter_grid(self.book, progress));
        out
    }
}

fn render_chapter_grid(book: &Book, progress: &ProgressMap) -> String {
    const PER_ROW: u32 = 10;

    let mut out = String::new();
    for chapter in 1..=book.chapters {
        if (chapter - 1) % PER_ROW == 0 {
            out.push_str("\n  ");
        }
        let mark = if progress.is_read(book.name, chapter) {
            '✓'
        } else {
            '·'
        };
        out.push_str(&format!("{chapter:>3}{mark} "));
    }
    out
}
