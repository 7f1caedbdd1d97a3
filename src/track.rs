use std::path::Path;

use crate::canon::{self, Book};
use crate::card::BookCard;
use crate::cli::{ExpandArgs, MarkArgs, ToggleArgs};
use crate::render;
use crate::tracker::Tracker;

pub fn toggle(args: ToggleArgs, state_path: &Path) -> anyhow::Result<()> {
    let book = require_book(&args.book)?;
    let mut tracker = Tracker::load(state_path)?;

    let card = BookCard::new(book);
    tracker.apply(card.toggle_chapter(args.chapter)?);
    tracker.save(state_path)?;

    tracing::info!(
        book = book.name,
        chapter = args.chapter,
        read = tracker.progress.is_read(book.name, args.chapter),
        "toggled chapter"
    );
    print_book_bar(book, &tracker);
    Ok(())
}

pub fn mark(args: MarkArgs, state_path: &Path) -> anyhow::Result<()> {
    let book = require_book(&args.book)?;
    let mut tracker = Tracker::load(state_path)?;

    let card = BookCard::new(book);
    tracker.apply(card.toggle_all(!args.clear));
    tracker.save(state_path)?;

    tracing::info!(book = book.name, read = !args.clear, "marked whole book");
    print_book_bar(book, &tracker);
    Ok(())
}

pub fn expand(args: ExpandArgs, state_path: &Path) -> anyhow::Result<()> {
    let book = require_book(&args.book)?;
    let mut tracker = Tracker::load(state_path)?;

    let card = BookCard::new(book);
    tracker.apply(card.toggle_expand());
    tracker.save(state_path)?;

    if tracker.is_expanded(book.name) {
        println!("{} expanded", book.name);
    } else {
        println!("{} collapsed", book.name);
    }
    Ok(())
}

fn require_book(name: &str) -> anyhow::Result<&'static Book> {
    canon::find(name).ok_or_else(|| anyhow::anyhow!("unknown book: {name}"))
}

fn print_book_bar(book: &Book, tracker: &Tracker) {
    let figures = tracker.progress.book_progress(book);
    println!(
        "{}",
        render::progress_bar(figures.completed, figures.total, book.zh_name)
    );
}
