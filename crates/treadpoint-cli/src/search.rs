//! `treadpoint search` — the directory filter, same path the site takes.
//!
//! One-shot by default; `--watch` reads query edits from stdin and refilters
//! after the configured quiet period, like the page's search box.

use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};

use treadpoint_core::AppConfig;
use treadpoint_directory::{debounce_channel, filter, normalize_search_text, Location};

pub(crate) async fn run(config: &AppConfig, query: &str, watch: bool) -> anyhow::Result<()> {
    let locations = treadpoint_store::load_locations(&config.locations_path).await?;

    if watch {
        return watch_stdin(config, &locations).await;
    }

    print_matches(&locations, &normalize_search_text(query));
    Ok(())
}

async fn watch_stdin(config: &AppConfig, locations: &[Location]) -> anyhow::Result<()> {
    let (input, mut debouncer) =
        debounce_channel(Duration::from_millis(config.search_debounce_ms));

    let reader = tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            input.submit(&line);
        }
        // Dropping the input here closes the channel and flushes the
        // debouncer.
    });

    while let Some(query) = debouncer.next_query().await {
        print_matches(locations, &query);
    }

    reader.await?;
    Ok(())
}

fn print_matches(locations: &[Location], normalized_query: &str) {
    let matches = filter(locations, normalized_query);

    println!("{} of {} locations match", matches.len(), locations.len());
    for location in matches {
        let mut line = location.name.clone();
        if !location.area.is_empty() {
            line.push_str(&format!(" ({})", location.area));
        }
        if !location.address.is_empty() {
            line.push_str(&format!(", {}", location.address));
        }
        if !location.phone.display.is_empty() {
            line.push_str(&format!(", {}", location.phone.display));
        }
        println!("  {line}");
        println!("    маршрут: {}", location.route);
    }
}
