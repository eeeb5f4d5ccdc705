use color_eyre::eyre::eyre;
use color_eyre::Result;
use owo_colors::OwoColorize;
use popcorn_omdb::{MovieSource, SourceError};

use crate::output::{Output, OutputFormat};

/// One-shot detail fetch for a movie id.
pub async fn run_detail(imdb_id: &str, output: &Output) -> Result<()> {
    let (config, client) = super::load_client(output)?;

    let spinner = super::lookup_spinner(output, "Loading details...");
    let outcome = client.detail(imdb_id).await;
    spinner.finish_and_clear();

    let detail = match outcome {
        Ok(detail) => detail,
        Err(SourceError::NotFound) => {
            output.warn(format!("No movie found for id {}", imdb_id));
            return Ok(());
        }
        Err(e) => return Err(eyre!("Detail fetch failed: {}", e)),
    };

    match output.format() {
        OutputFormat::Human => {
            if output.is_quiet() {
                return Ok(());
            }
            println!("{} ({})", detail.title.bold(), detail.year);
            let runtime = detail
                .runtime_minutes
                .map(|m| format!("{} min", m))
                .unwrap_or_else(|| "unknown runtime".to_string());
            println!("{} • {}", detail.released, runtime);
            if !detail.genre.is_empty() {
                println!("{}", detail.genre);
            }
            if let Some(rating) = detail.imdb_rating {
                println!("⭐ {} IMDb rating", rating);
            }
            if !detail.plot.is_empty() {
                println!("\n{}", detail.plot.italic());
            }
            if !detail.actors.is_empty() {
                println!("Starring {}", detail.actors);
            }
            if !detail.director.is_empty() {
                println!("Directed by {}", detail.director);
            }
            if config.browse.show_posters && !detail.poster_url.is_empty() {
                println!("Poster: {}", detail.poster_url);
            }
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&serde_json::to_value(&detail)?);
        }
    }

    Ok(())
}
