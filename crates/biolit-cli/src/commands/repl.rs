//! Interactive shell.
//!
//! A rustyline REPL over the application shell: free text submits to
//! the current mode, slash commands switch modes, follow the continue
//! chain, and manage history and bookmarks in place.

use std::borrow::Cow::{self, Borrowed, Owned};

use anyhow::Result;
use biolit_application::{render, AppShell};
use biolit_core::repository::ProfileRepository;
use biolit_core::{AppMode, UserProfile};
use biolit_infrastructure::JsonProfileRepository;
use biolit_interaction::ModeRequest;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use strum::IntoEnumIterator;

const COMMANDS: &[&str] = &[
    "/mode", "/modes", "/save", "/continue", "/history", "/bookmarks", "/profile", "/help",
    "/quit",
];

/// Rustyline helper providing slash-command completion, highlighting,
/// and inline hints.
#[derive(Clone)]
struct ReplHelper {
    commands: Vec<String>,
}

impl ReplHelper {
    fn new() -> Self {
        Self {
            commands: COMMANDS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Helper for ReplHelper {}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if let Some(partial) = line.strip_prefix("/mode ") {
            let candidates: Vec<Pair> = AppMode::iter()
                .map(|m| m.to_string())
                .filter(|tag| tag.starts_with(&partial.to_uppercase()))
                .map(|tag| Pair {
                    display: tag.clone(),
                    replacement: tag,
                })
                .collect();
            return Ok((6, candidates));
        }

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for ReplHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for ReplHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for ReplHelper {}

pub async fn run() -> Result<()> {
    let config = super::load_config();
    let gateway = super::build_gateway(&config)?;
    let store = super::open_store(&config)?;
    let mut shell = AppShell::new(gateway, store, config.default_mode);

    let mut rl: Editor<ReplHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(ReplHelper::new()));

    println!("{}", "=== BioLit ===".bright_magenta().bold());
    println!(
        "{}",
        "Free text runs the current mode. /mode switches, /help lists commands.".bright_black()
    );

    let profile_repository = JsonProfileRepository::new()?;
    match profile_repository.load() {
        Some(profile) => {
            println!(
                "{}",
                format!("Welcome back, {} ({})", profile.email, profile.field_of_study)
                    .bright_black()
            );
        }
        None => offer_onboarding(&mut rl, &profile_repository)?,
    }
    println!();

    loop {
        let prompt = format!("[{}] >> ", shell.mode());
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim().to_string();

                if trimmed == "quit" || trimmed == "exit" || trimmed == "/quit" {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }
                if trimmed.is_empty() {
                    // An empty line submits a pending continuation seed
                    if let Some(seed) = shell.take_input_seed() {
                        submit(&mut shell, seed).await;
                    }
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                if let Some(rest) = trimmed.strip_prefix('/') {
                    handle_command(&mut shell, rest);
                } else {
                    shell.take_input_seed();
                    submit(&mut shell, trimmed).await;
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type '/quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "Goodbye!".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}

async fn submit(shell: &mut AppShell, input: String) {
    eprintln!(
        "{}",
        format!("Querying {}...", shell.mode().spec().label).dimmed()
    );
    match shell.submit(ModeRequest::text(input)).await {
        Ok(record) => println!("{}", render::render(&record)),
        Err(err) => eprintln!("{}", format!("Error: {err}").red()),
    }
}

fn handle_command(shell: &mut AppShell, command: &str) {
    let (name, arg) = match command.split_once(' ') {
        Some((name, arg)) => (name, arg.trim()),
        None => (command, ""),
    };

    match name {
        "mode" => match super::parse_mode(arg) {
            Ok(mode) => {
                shell.switch_mode(mode);
                println!("{}", format!("Switched to {}", mode.spec().label).green());
            }
            Err(err) => eprintln!("{}", format!("{err}").red()),
        },
        "modes" => super::modes::run(),
        "save" => match shell.current_result().cloned() {
            Some(record) => {
                if shell.store_mut().toggle_bookmark_record(&record) {
                    println!("{}", "Bookmarked.".yellow());
                } else {
                    println!("Bookmark removed.");
                }
            }
            None => eprintln!("{}", "No result to bookmark.".red()),
        },
        "continue" => match shell.continue_to_next() {
            Some(mode) => {
                println!(
                    "{}",
                    format!(
                        "Switched to {}. Press enter to submit the carried input, or type new input.",
                        mode.spec().label
                    )
                    .green()
                );
            }
            None => eprintln!("{}", "Nothing to continue from here.".red()),
        },
        "history" => {
            let records = shell.store().filter_by_mode(None);
            if records.is_empty() {
                println!("{}", "No history yet.".dimmed());
            }
            for record in records {
                super::history::print_line(record, shell.store().is_bookmarked(record.id));
            }
        }
        "bookmarks" => {
            if shell.store().bookmarks().is_empty() {
                println!("{}", "No bookmarks yet.".dimmed());
            }
            for record in shell.store().bookmarks() {
                super::history::print_line(record, true);
            }
        }
        "profile" => match JsonProfileRepository::new().map(|r| r.load()) {
            Ok(Some(profile)) => super::profile::print_profile(&profile),
            Ok(None) => println!("{}", "No profile stored.".dimmed()),
            Err(err) => eprintln!("{}", format!("Error: {err}").red()),
        },
        "help" => {
            println!("  /mode <TAG>   switch mode");
            println!("  /modes        list all modes");
            println!("  /save         bookmark or un-bookmark the current result");
            println!("  /continue     carry the current result into the next mode");
            println!("  /history      list archived results");
            println!("  /bookmarks    list bookmarked results");
            println!("  /profile      show the stored profile");
            println!("  /quit         exit");
        }
        _ => println!("{}", "Unknown command, try /help".bright_black()),
    }
}

/// First-run onboarding: capture the researcher profile inline.
fn offer_onboarding(
    rl: &mut Editor<ReplHelper, DefaultHistory>,
    repository: &JsonProfileRepository,
) -> Result<()> {
    println!(
        "{}",
        "No profile yet. Set one up now? (y/N)".bright_yellow()
    );
    let answer = rl.readline("> ")?;
    if !answer.trim().eq_ignore_ascii_case("y") {
        return Ok(());
    }

    let profile = UserProfile {
        email: rl.readline("Email: ")?.trim().to_string(),
        field_of_study: rl.readline("Field of study: ")?.trim().to_string(),
        institution: rl.readline("Institution: ")?.trim().to_string(),
        level: rl.readline("Career level: ")?.trim().to_string(),
        research_interests: rl.readline("Research interests: ")?.trim().to_string(),
    };
    repository.save(&profile)?;
    println!("{}", "Profile saved.".green());
    Ok(())
}
