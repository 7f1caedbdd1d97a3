use crate::canon;
use crate::card::{BookCard, InsightState};
use crate::cli::InsightArgs;
use crate::insight::{InsightClient, InsightConfig};

/// Run one card's insight request against the real adapter and print the
/// panel. On failure nothing is printed beyond the adapter's error log; the
/// card simply ends up without a record, as in the UI.
pub async fn run(args: InsightArgs) -> anyhow::Result<()> {
    let book =
        canon::find(&args.book).ok_or_else(|| anyhow::anyhow!("unknown book: {}", args.book))?;

    let mut config = InsightConfig::from_env();
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }
    if let Some(model) = args.model {
        config.model = model;
    }

    tracing::info!(book = book.name, model = %config.model, "request book insight");
    let client = InsightClient::new(config)?;

    let mut card = BookCard::new(book);
    card.request_insight(&client).await;

    if let InsightState::Ready {
        insight,
        visible: true,
    } = card.insight_state()
    {
        println!("{} ({})", book.zh_name, book.name);
        println!("AI 簡介: {}", insight.summary);
        println!("金句: 「{}」", insight.key_verse);
    }

    Ok(())
}
