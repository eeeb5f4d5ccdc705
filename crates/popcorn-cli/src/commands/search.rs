use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::{Cell, Table};
use popcorn_omdb::{MovieSource, SourceError};
use serde_json::json;

use crate::output::{Output, OutputFormat};

/// One-shot search without a session: query in, result table (or JSON) out.
pub async fn run_search(query: &str, limit: Option<usize>, output: &Output) -> Result<()> {
    let (config, client) = super::load_client(output)?;
    let limit = limit.unwrap_or(config.browse.result_limit);

    let spinner = super::lookup_spinner(output, "Searching...");
    let outcome = client.search(query).await;
    spinner.finish_and_clear();

    let results = match outcome {
        Ok(results) => results,
        Err(SourceError::NotFound) => {
            output.warn("no movie found");
            return Ok(());
        }
        Err(e) => return Err(eyre!("Search failed: {}", e)),
    };

    let shown: Vec<_> = results.iter().take(limit).collect();

    match output.format() {
        OutputFormat::Human => {
            if output.is_quiet() {
                return Ok(());
            }
            let mut table = Table::new();
            table.set_header(vec![
                Cell::new("IMDb id").add_attribute(comfy_table::Attribute::Bold),
                Cell::new("Title").add_attribute(comfy_table::Attribute::Bold),
                Cell::new("Year"),
            ]);
            table.load_preset(comfy_table::presets::UTF8_FULL);
            table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
            for movie in &shown {
                table.add_row(vec![
                    movie.imdb_id.clone(),
                    movie.title.clone(),
                    movie.year.clone(),
                ]);
            }
            println!("{table}");
            output.info(format!("Found {} results", results.len()));
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&json!({
                "query": query,
                "total": results.len(),
                "results": shown,
            }));
        }
    }

    Ok(())
}
