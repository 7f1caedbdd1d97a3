use std::collections::BTreeSet;
use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::Path;

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::card::CardAction;
use crate::progress::ProgressMap;

/// The container: sole owner of the progress map and of which cards are
/// expanded. Cards report [`CardAction`]s; `apply` is the only place they
/// take effect. Persistence is this container's choice, not the cards'.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tracker {
    pub progress: ProgressMap,
    #[serde(default)]
    pub expanded: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Tracker {
    pub fn apply(&mut self, action: CardAction) {
        match action {
            CardAction::ToggleChapter { book, chapter } => {
                self.progress.toggle(&book, chapter);
            }
            CardAction::ToggleBook {
                book,
                total_chapters,
                read,
            } => {
                self.progress.set_book(&book, total_chapters, read);
            }
            CardAction::ToggleExpand { book } => {
                if !self.expanded.remove(&book) {
                    self.expanded.insert(book);
                }
            }
        }
    }

    pub fn is_expanded(&self, book: &str) -> bool {
        self.expanded.contains(book)
    }

    /// Load the state file; a missing file is an empty tracker.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read state file: {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parse state file: {}", path.display()))
    }

    pub fn save(&mut self, path: &Path) -> anyhow::Result<()> {
        self.updated_at = Some(Utc::now());

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create state dir: {}", parent.display()))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .with_context(|| format!("open state file: {}", path.display()))?;
        serde_json::to_writer_pretty(&mut file, self).context("serialize state")?;
        file.write_all(b"\n").context("write state newline")?;
        file.flush().context("flush state file")?;
        Ok(())
    }
}
