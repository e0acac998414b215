use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::Parser;
use recipe_core::{
    db::InMemoryRecipeRepository,
    form::{CancelOutcome, WriteOutcome},
};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{debug, info, warn};

use recipe_app::{
    app::App,
    config::AppConfig,
    console::{Command, HELP, render_home},
    logging,
    login::Credentials,
    notify::TracingNotifier,
};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Headless lab recipe entry.
///
/// Reads commands from stdin, one per line, and prints the form after each
/// one. Type `help` for the command list.
#[derive(Debug, Parser)]
struct Cli {
    /// TOML config file. Missing file means defaults.
    #[arg(long, default_value = "recipe.toml")]
    config: PathBuf,

    /// Log filter directive, overriding the config file.
    #[arg(long)]
    log_level: Option<String>,

    /// Width the sidebar treats as the current viewport, in pixels.
    #[arg(long, default_value = "1280")]
    viewport_width: u32,
}

type Input = Lines<BufReader<Stdin>>;

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(&cli.config).context("loading configuration")?;
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    logging::init_logging(&config.log_level);
    if let Some(path) = &config.log_file {
        logging::enable_file_logging(path).context("enabling file logging")?;
    }
    debug!(?config, "configuration loaded");

    let mut app = App::new(
        &config,
        Arc::new(InMemoryRecipeRepository::new()),
        Arc::new(TracingNotifier),
    );
    let mut input: Input = BufReader::new(tokio::io::stdin()).lines();

    println!("{HELP}");
    loop {
        let saving = app.is_saving();
        tokio::select! {
            line = input.next_line() => {
                let Some(line) = line.context("reading stdin")? else {
                    break;
                };
                let command = match Command::parse(&line) {
                    Ok(Some(command)) => command,
                    Ok(None) => continue,
                    Err(e) => {
                        println!("{e}");
                        continue;
                    }
                };
                if command == Command::Quit {
                    break;
                }
                run(&mut app, command, cli.viewport_width, &mut input).await?;
                // A timer may have fired while a cancel prompt was waiting.
                if let Some(session) = app.home_mut().and_then(|home| home.recipe_mut()) {
                    session.process_due().await;
                }
                render(&app);
            }
            Some(_) = app.finish_pending_save(), if saving => render(&app),
        }
    }

    info!("bye");
    Ok(())
}

// ─── commands ────────────────────────────────────────────────────────────────

async fn run(
    app: &mut App,
    command: Command,
    viewport_width: u32,
    input: &mut Input,
) -> anyhow::Result<()> {
    match command {
        Command::Login { username, password } => {
            if app.is_logged_in() {
                println!("already signed in");
            } else if let Err(e) = app.login(Credentials::new(username, password)).await {
                println!("{e}");
            }
            return Ok(());
        }
        Command::Help => {
            println!("{HELP}");
            return Ok(());
        }
        Command::Logout => {
            app.logout();
            return Ok(());
        }
        _ => {}
    }

    let Some(home) = app.home_mut() else {
        println!("please log in first");
        return Ok(());
    };

    match command {
        Command::Menu(item) => home.select(item, viewport_width),
        Command::Toggle => home.toggle_sidebar(),
        Command::Show => {}
        other => {
            let Some(session) = home.recipe_mut() else {
                println!("open Lab Recipe first");
                return Ok(());
            };
            match other {
                Command::Set { field, value } => match session.edit_field_by_name(&field, &value) {
                    Ok(WriteOutcome::Stored) => {}
                    Ok(WriteOutcome::Rejected) => println!("'{value}' is not a valid percentage"),
                    Err(e) => println!("{e}"),
                },
                Command::Section(section) => session.select_section(section),
                Command::Submit => {
                    session.submit();
                }
                Command::Cancel => {
                    let form = session.form();
                    let confirmed = if form.draft().is_empty() || form.is_submitting() {
                        false
                    } else {
                        println!("Are you sure you want to cancel? All entered data will be lost. [y/N]");
                        let answer = input
                            .next_line()
                            .await
                            .context("reading confirmation")?
                            .unwrap_or_default();
                        matches!(answer.trim(), "y" | "Y" | "yes")
                    };
                    match session.cancel(|_| confirmed) {
                        CancelOutcome::Ignored => println!("a save is in progress"),
                        CancelOutcome::Declined | CancelOutcome::Reset => {}
                    }
                }
                Command::Wait => {
                    if session.wait_for_save().await.is_none() {
                        warn!("nothing to wait for");
                    }
                }
                _ => {}
            }
        }
    }
    Ok(())
}

fn render(app: &App) {
    match app.home() {
        Some(home) => println!("{}", render_home(home)),
        None => println!("Signed out. Use: login <user> <password>"),
    }
}
