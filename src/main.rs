//! Pomodoro Clock - a terminal study timer
//!
//! This tool helps you stay focused using the Pomodoro Technique:
//! - 25 minutes of focused work
//! - 5 minutes of short break
//! - 15 minutes of long break after every 4 pomodoros

use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tokio::sync::mpsc;

use pomodoro_clock::cli::{parse_line, Cli, Commands, Display, OutputFormat, RunArgs};
use pomodoro_clock::{
    try_create_player, Collaborators, DesktopNotifier, InputEvent, JsonRenderer, Renderer,
    Session, TerminalRenderer,
};

/// Capacity of the input channel.
const INPUT_BUFFER: usize = 16;

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Execute command
    if let Err(e) = execute(cli).await {
        Display::show_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
///
/// Logs go to stderr so they do not overwrite the clock line.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Executes the CLI command.
async fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Run(args)) => run(args).await?,
        Some(Commands::Completions { shell }) => {
            generate_completions(shell);
        }
        None => {
            // No command provided, show help
            Cli::command().print_help()?;
        }
    }

    Ok(())
}

/// Runs an interactive session until the user quits.
async fn run(args: RunArgs) -> Result<()> {
    let config = args.to_config();
    config.validate().context("invalid timer configuration")?;
    tracing::debug!(?config, "Starting session");

    let renderer: Box<dyn Renderer> = match args.output {
        OutputFormat::Text => {
            Display::show_welcome();
            Box::new(TerminalRenderer::new())
        }
        OutputFormat::Json => Box::new(JsonRenderer::new()),
    };
    let collaborators = Collaborators {
        renderer,
        notifier: Box::new(DesktopNotifier::new(args.no_notify)),
        sound: try_create_player(args.no_sound),
    };

    let (input_tx, input_rx) = mpsc::channel(INPUT_BUFFER);
    spawn_stdin_reader(input_tx.clone());
    spawn_ctrl_c_handler(input_tx);

    let state = Session::new(config, collaborators).run(input_rx).await;
    if args.output == OutputFormat::Text {
        println!();
        println!("Pomodoros started: {}", state.sessions_completed);
    }
    Ok(())
}

/// Feeds parsed stdin lines into the session.
///
/// Reads on a plain thread so a pending read never holds up runtime shutdown.
fn spawn_stdin_reader(tx: mpsc::Sender<InputEvent>) {
    std::thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    tracing::warn!("Failed to read input: {}", e);
                    break;
                }
            };
            match parse_line(&line) {
                Some(event) => {
                    if tx.blocking_send(event).is_err() {
                        break;
                    }
                }
                None => tracing::debug!(line, "Ignoring unrecognized input"),
            }
        }
        // The Ctrl-C task holds another sender, so end of input must quit explicitly.
        let _ = tx.blocking_send(InputEvent::Quit);
    });
}

/// Turns Ctrl-C into a quit request.
fn spawn_ctrl_c_handler(tx: mpsc::Sender<InputEvent>) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = tx.send(InputEvent::Quit).await;
        }
    });
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// ============================================================================
// Tests
// ============================================================================
