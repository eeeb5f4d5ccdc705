use std::sync::Arc;

use color_eyre::Result;
use comfy_table::{Cell, Table};
use owo_colors::OwoColorize;
use popcorn_config::Config;
use popcorn_models::MovieDetail;
use popcorn_session::Session;

use super::prompts;
use crate::output::Output;

/// Interactive browsing session. All state (results, selection, watched
/// list) lives in the [`Session`] and is gone when the process exits.
pub async fn run_browse(output: &Output) -> Result<()> {
    let (config, client) = super::load_client(output)?;
    let session = Session::new(Arc::new(client));

    output.println(format!("{} popcorn", "🍿".bold()));

    loop {
        let watched_len = session.snapshot().await.watched.len();
        let items = vec![
            "Search movies".to_string(),
            format!("Watched list ({})", watched_len),
            "Quit".to_string(),
        ];
        match prompts::prompt_select("What next?", &items)? {
            0 => search_flow(&session, &config, output).await?,
            1 => watched_flow(&session, output).await?,
            _ => break,
        }
    }

    Ok(())
}

async fn search_flow(session: &Session, config: &Config, output: &Output) -> Result<()> {
    let query = prompts::prompt_string("Search movies", None)?;
    session.set_query(query.trim()).await;
    if query.trim().is_empty() {
        return Ok(());
    }

    let spinner = super::lookup_spinner(output, "Searching...");
    session.wait_for_lookup().await;
    spinner.finish_and_clear();

    loop {
        let state = session.snapshot().await;
        if let Some(message) = &state.error {
            output.warn(message);
            return Ok(());
        }
        if state.results.is_empty() {
            output.info("No results.");
            return Ok(());
        }

        output.info(format!("Found {} results", state.results.len()));
        let shown = state.results.len().min(config.browse.result_limit);
        let mut items: Vec<String> = state.results[..shown]
            .iter()
            .map(|m| format!("{} ({})", m.title, m.year))
            .collect();
        items.push("Back".to_string());

        let picked = prompts::prompt_select("Open a movie", &items)?;
        if picked >= shown {
            return Ok(());
        }
        let imdb_id = state.results[picked].imdb_id.clone();
        detail_flow(session, &imdb_id, config, output).await?;
    }
}

async fn detail_flow(
    session: &Session,
    imdb_id: &str,
    config: &Config,
    output: &Output,
) -> Result<()> {
    session.select_movie(imdb_id).await;

    let spinner = super::lookup_spinner(output, "Loading details...");
    session.wait_for_detail().await;
    spinner.finish_and_clear();

    let state = session.snapshot().await;
    if !state.is_open(imdb_id) {
        // Selecting the already-open movie toggles it closed.
        return Ok(());
    }
    let detail = match &state.detail {
        Some(detail) => detail.clone(),
        None => {
            output.warn("Could not load movie details.");
            session.close_detail().await;
            return Ok(());
        }
    };

    let existing = session.existing_rating(imdb_id).await;
    render_detail(&detail, existing, config, output);

    let items = vec![
        "Rate and add to watched list".to_string(),
        "Close".to_string(),
    ];
    match prompts::prompt_select("Movie is open", &items)? {
        0 => {
            let rating = prompts::prompt_rating("Your rating (1-10)", existing)?;
            if let Err(e) = session.set_rating(rating).await {
                output.error(format!("{}", e));
                session.close_detail().await;
                return Ok(());
            }
            match session.add_watched().await {
                Ok(entry) => {
                    output.success(format!(
                        "Added {} with rating {}/10",
                        entry.title, entry.user_rating
                    ));
                }
                Err(e) => output.error(format!("{}", e)),
            }
        }
        _ => session.close_detail().await,
    }

    Ok(())
}

fn render_detail(detail: &MovieDetail, existing: Option<u8>, config: &Config, output: &Output) {
    if output.is_quiet() {
        return;
    }

    println!();
    println!("{}", detail.title.bold());
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
    if let Some(stars) = existing {
        println!(
            "{}",
            format!("* you have already rated this movie with {} stars", stars).italic()
        );
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
    println!();
}

async fn watched_flow(session: &Session, output: &Output) -> Result<()> {
    loop {
        let state = session.snapshot().await;
        if state.watched.is_empty() {
            output.info("Nothing on the watched list yet.");
            return Ok(());
        }

        if !output.is_quiet() {
            let mut table = Table::new();
            table.set_header(vec![
                Cell::new("Title").add_attribute(comfy_table::Attribute::Bold),
                Cell::new("Year"),
                Cell::new("⭐ IMDb"),
                Cell::new("🌟 Yours"),
                Cell::new("⏳ Runtime"),
            ]);
            table.load_preset(comfy_table::presets::UTF8_FULL);
            table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
            for movie in state.watched.entries() {
                table.add_row(vec![
                    movie.title.clone(),
                    movie.year.clone(),
                    movie
                        .imdb_rating
                        .map(|r| r.to_string())
                        .unwrap_or_else(|| "-".to_string()),
                    movie.user_rating.to_string(),
                    format!("{} min", movie.runtime_minutes),
                ]);
            }
            println!("{table}");

            let stats = state.watched.stats();
            output.info(format!(
                "{} movies watched • avg ⭐ {:.2} • avg 🌟 {:.2} • avg ⏳ {:.2} min",
                stats.count,
                stats.avg_imdb_rating,
                stats.avg_user_rating,
                stats.avg_runtime_minutes
            ));
        }

        let items = vec!["Delete an entry".to_string(), "Back".to_string()];
        match prompts::prompt_select("Watched list", &items)? {
            0 => {
                let mut entries: Vec<String> = state
                    .watched
                    .entries()
                    .iter()
                    .map(|m| format!("{} ({})", m.title, m.year))
                    .collect();
                entries.push("Cancel".to_string());
                let picked = prompts::prompt_select("Delete which entry?", &entries)?;
                if picked < state.watched.len() {
                    let imdb_id = state.watched.entries()[picked].imdb_id.clone();
                    if session.delete_watched(&imdb_id).await {
                        output.success("Removed from watched list");
                    }
                }
            }
            _ => return Ok(()),
        }
    }
}
