use clap::{ArgAction, Parser, Subcommand};
use commands::{browse, config, detail, search};

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "popcorn")]
#[command(about = "popcorn - search movies and keep a rated watched list")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive browsing session (default)
    #[command(long_about = "Start an interactive session: search movies, open details, rate them, and maintain a watched list. The watched list lives for the session only; nothing is written to disk.")]
    Browse,

    /// One-shot title search
    Search {
        /// Free-text query
        query: String,

        /// Maximum number of results to show
        #[arg(long)]
        limit: Option<usize>,
    },

    /// One-shot detail fetch for a movie id
    Detail {
        /// IMDb id, e.g. tt1375666
        imdb_id: String,
    },

    /// View or change configuration
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration (masks the API key)
    Show {
        /// Show the full API key instead of a masked value
        #[arg(long, action = ArgAction::SetTrue)]
        full: bool,
    },

    /// Store the OMDb API key
    #[command(long_about = "Store the OMDb API key in the credentials file. Get a free key at https://www.omdbapi.com/apikey.aspx. The POPCORN_OMDB_API_KEY environment variable overrides the stored key.")]
    Key {
        /// API key (if not provided, will prompt)
        key: Option<String>,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet)?;

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command.unwrap_or(Commands::Browse) {
        Commands::Browse => browse::run_browse(&output).await,
        Commands::Search { query, limit } => search::run_search(&query, limit, &output).await,
        Commands::Detail { imdb_id } => detail::run_detail(&imdb_id, &output).await,
        Commands::Config { cmd } => {
            let cmd = cmd.unwrap_or(ConfigCommands::Show { full: false });
            config::run_config(cmd, &output).await
        }
    }
}
