use akex::app::{App, RequestId};
use akex::config::Config;
use akex::error::ExplorerError;
use akex::poller::{PolledHead, Poller};
use akex::rpc::{QueryResult, RpcClient};
use akex::search::SearchQuery;
use akex::ui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ratatui::{
    crossterm::{
        event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
        ExecutableCommand,
    },
    prelude::*,
};
use std::io::stdout;
use std::sync::Mutex;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tui_input::backend::crossterm::EventHandler;

#[derive(Parser)]
#[command(name = "akex", version, about = "Terminal block explorer for the Alkebuleum chain")]
struct Cli {
    /// JSON-RPC endpoint for this session (overrides the config file)
    #[arg(long)]
    rpc_url: Option<String>,

    /// Open a transaction by hash
    #[arg(long)]
    tx: Option<String>,

    /// Open a block by number
    #[arg(long)]
    block: Option<String>,

    /// Open an account balance
    #[arg(long)]
    address: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Save the JSON-RPC endpoint to the config file
    SetRpc { url: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load()?;

    if let Some(Command::SetRpc { url }) = cli.command {
        RpcClient::new(&url).context("Refusing to save RPC URL")?;
        config.set_rpc(url.clone())?;
        println!("RPC endpoint set to {url}");
        return Ok(());
    }

    init_logging()?;

    if let Some(url) = cli.rpc_url {
        config.rpc_url = url;
    }

    let launch = SearchQuery::from_launch_params(
        cli.tx.as_deref(),
        cli.block.as_deref(),
        cli.address.as_deref(),
    );

    run_tui(config, launch).await?;

    Ok(())
}

/// The terminal belongs to the UI, so logs go to a file
fn init_logging() -> Result<()> {
    let path = Config::log_path()?;
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {dir:?}"))?;
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {path:?}"))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("akex=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

/// Messages from async tasks back to the main loop
enum AsyncMessage {
    Query(RequestId, Result<QueryResult, ExplorerError>),
    ChainHead(PolledHead),
}

impl From<PolledHead> for AsyncMessage {
    fn from(update: PolledHead) -> Self {
        Self::ChainHead(update)
    }
}

async fn run_tui(
    config: Config,
    launch: Option<Result<SearchQuery, ExplorerError>>,
) -> Result<()> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = App::new(config);
    info!(rpc = %app.config.rpc_url, "explorer started");

    let (tx, mut rx) = mpsc::channel::<AsyncMessage>(32);

    // Polling lives exactly as long as the UI loop
    let poller = app
        .rpc_client
        .clone()
        .map(|client| Poller::spawn(client, app.config.poll_interval(), tx.clone()));

    match launch {
        Some(Ok(query)) => spawn_query(&mut app, query, tx.clone()),
        Some(Err(e)) => app.report(e),
        None => {}
    }

    let result = run_event_loop(&mut terminal, &mut app, tx, &mut rx).await;

    if let Some(poller) = &poller {
        poller.stop();
    }

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    tx: mpsc::Sender<AsyncMessage>,
    rx: &mut mpsc::Receiver<AsyncMessage>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Check for async results
        while let Ok(msg) = rx.try_recv() {
            match msg {
                AsyncMessage::Query(id, outcome) => {
                    app.apply_query(id, outcome);
                }
                AsyncMessage::ChainHead(update) => {
                    app.apply_chain_head(update);
                }
            }
        }

        // Poll for input events
        if event::poll(std::time::Duration::from_millis(50))? {
            let ev = event::read()?;

            if let Event::Key(key) = &ev {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match key.code {
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Enter => {
                        let text = app.submit_search();
                        execute_search(app, &text, tx.clone());
                    }
                    _ => {
                        app.search_input.handle_event(&ev);
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn execute_search(app: &mut App, text: &str, tx: mpsc::Sender<AsyncMessage>) {
    match SearchQuery::resolve(text) {
        Ok(query) => spawn_query(app, query, tx),
        Err(e) => app.report(e),
    }
}

fn spawn_query(app: &mut App, query: SearchQuery, tx: mpsc::Sender<AsyncMessage>) {
    let Some(client) = app.rpc_client.clone() else {
        app.report(ExplorerError::Rpc(
            "No usable RPC endpoint. Use 'akex set-rpc <url>' first.".into(),
        ));
        return;
    };

    let id = app.begin_query(&query);
    tokio::spawn(async move {
        let outcome = client.execute(&query).await;
        let _ = tx.send(AsyncMessage::Query(id, outcome)).await;
    });
}
