use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "biolit")]
#[command(about = "BioLit - terminal research assistant for biomaterials literature work", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single mode invocation and print the result
    Ask {
        /// Mode tag, e.g. QUERY_BUILDER or abstract_screener
        mode: String,
        /// Input text; read from stdin when omitted
        input: Option<String>,
        /// Screening criteria (abstract screener)
        #[arg(long)]
        criteria: Option<String>,
        /// Study-type restriction, repeatable (query builder)
        #[arg(long = "study-type")]
        study_types: Vec<String>,
        /// Image file to attach (image analyzer)
        #[arg(long)]
        image: Option<PathBuf>,
        /// Do not record the result in history
        #[arg(long)]
        no_save: bool,
    },
    /// List all modes and their status
    Modes,
    /// Inspect or clear the result history
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
    /// Manage bookmarked results
    Bookmarks {
        #[command(subcommand)]
        action: BookmarkAction,
    },
    /// Manage the researcher profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// Start the interactive shell
    Shell,
}

#[derive(Subcommand)]
enum HistoryAction {
    /// List archived results, newest first
    List {
        /// Restrict to one mode tag
        #[arg(long)]
        mode: Option<String>,
    },
    /// Print one archived result in full
    Show { id: String },
    /// Delete all history (bookmarks survive)
    Clear,
}

#[derive(Subcommand)]
enum BookmarkAction {
    /// List bookmarked results
    List,
    /// Bookmark or un-bookmark a result by id
    Toggle { id: String },
    /// Remove a bookmark by id
    Remove { id: String },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Print the stored profile
    Show,
    /// Replace the profile
    Set {
        #[arg(long)]
        email: String,
        #[arg(long = "field")]
        field_of_study: String,
        #[arg(long)]
        institution: String,
        #[arg(long)]
        level: String,
        #[arg(long)]
        interests: String,
    },
    /// Delete the stored profile
    Clear,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Ask {
            mode,
            input,
            criteria,
            study_types,
            image,
            no_save,
        } => {
            commands::ask::run(&mode, input, criteria, study_types, image, no_save).await?;
        }
        Commands::Modes => commands::modes::run(),
        Commands::History { action } => match action {
            HistoryAction::List { mode } => commands::history::list(mode.as_deref())?,
            HistoryAction::Show { id } => commands::history::show(&id)?,
            HistoryAction::Clear => commands::history::clear()?,
        },
        Commands::Bookmarks { action } => match action {
            BookmarkAction::List => commands::bookmarks::list()?,
            BookmarkAction::Toggle { id } => commands::bookmarks::toggle(&id)?,
            BookmarkAction::Remove { id } => commands::bookmarks::remove(&id)?,
        },
        Commands::Profile { action } => match action {
            ProfileAction::Show => commands::profile::show()?,
            ProfileAction::Set {
                email,
                field_of_study,
                institution,
                level,
                interests,
            } => commands::profile::set(email, field_of_study, institution, level, interests)?,
            ProfileAction::Clear => commands::profile::clear()?,
        },
        Commands::Shell => commands::repl::run().await?,
    }

    Ok(())
}
