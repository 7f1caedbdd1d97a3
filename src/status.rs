use std::path::Path;

use crate::canon::{self, Book, Testament};
use crate::card::BookCard;
use crate::cli::StatusArgs;
use crate::render;
use crate::tracker::Tracker;

pub fn run(args: StatusArgs, state_path: &Path) -> anyhow::Result<()> {
    let tracker = Tracker::load(state_path)?;

    let filter = match args.testament.as_deref() {
        Some(raw) => Some(parse_testament(raw)?),
        None => None,
    };
    let books: Vec<&'static Book> = canon::all()
        .iter()
        .filter(|book| filter.is_none_or(|t| book.testament == t))
        .collect();

    let overall = tracker.progress.overall(books.iter().copied());
    println!(
        "{}",
        render::progress_bar(overall.completed, overall.total, "總進度")
    );
    println!();

    for book in books {
        let card = BookCard::new(book);
        println!("{}", card.render(&tracker.progress, tracker.is_expanded(book.name)));
    }

    Ok(())
}

fn parse_testament(raw: &str) -> anyhow::Result<Testament> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "old" | "ot" => Ok(Testament::Old),
        "new" | "nt" => Ok(Testament::New),
        other => anyhow::bail!("unsupported testament: {other} (expected old or new)"),
    }
}
