use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use finboard_core::{Config, Page, Resolver, QUICK_PROMPTS};

mod app;
mod handler;
mod logging;
mod tui;
mod ui;

use app::App;
use tui::{EventHandler, TICK_RATE};

#[derive(Parser)]
#[command(name = "finboard")]
#[command(version, about = "Personal-finance dashboard with a scripted assistant")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Milliseconds before an assistant reply appears (overrides config)
    #[arg(long, global = true)]
    delay_ms: Option<u64>,

    /// Page to open on launch, by name or route (e.g. "assistant", "/income")
    #[arg(long, global = true)]
    page: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the assistant's reply to a question and exit
    Ask {
        /// Your question
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// List the quick prompts
    Prompts,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if logging::init(cli.command.is_none())? {
        tracing::info!(version = env!("CARGO_PKG_VERSION"), "finboard starting");
    }

    let mut config = Config::load().context("Failed to load config")?;
    if let Some(ms) = cli.delay_ms {
        config.reply_delay_ms = Some(ms);
    }
    if let Some(page) = cli.page.as_deref() {
        if Page::parse(page).is_none() {
            anyhow::bail!("Unknown page '{}'", page);
        }
        config.start_page = Some(page.to_string());
    }

    match cli.command {
        Some(Commands::Ask { text }) => {
            let question = text.join(" ");
            println!("{}", Resolver::default().resolve(&question));
        }
        Some(Commands::Prompts) => {
            for (i, prompt) in QUICK_PROMPTS.iter().enumerate() {
                println!("F{}  {} {}", i + 1, prompt.icon, prompt.text);
            }
        }
        None => run_tui(&config).await?,
    }

    Ok(())
}

async fn run_tui(config: &Config) -> Result<()> {
    tui::install_panic_hook();
    let mut terminal = tui::init()?;
    let mut app = App::new(config);
    let mut events = EventHandler::new(TICK_RATE);

    tracing::info!(
        page = app.page.route(),
        reply_delay_ms = app.assistant.reply_delay().as_millis() as u64,
        "session started"
    );

    let result = async {
        while !app.should_quit {
            terminal.draw(|frame| ui::render(&mut app, frame))?;

            match events.next().await {
                Some(event) => handler::handle_event(&mut app, event).await?,
                None => break,
            }
        }
        Ok::<(), anyhow::Error>(())
    }
    .await;

    tui::restore()?;
    tracing::info!(messages = app.session.messages().len(), "session ended");
    result
}
