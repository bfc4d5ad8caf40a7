use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod api;
mod commands;
mod config;
mod models;
mod services;
mod utils;


use api::transactions::TransactionsClient;
use commands::{Flow, Session};
use config::Config;

fn print_lines(lines: &mut Vec<String>) {
    for line in lines.drain(..) {
        println!("{}", line);
    }
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env()
            .add_directive("expense_tracker=debug".parse().expect("valid directive"))
            .add_directive("reqwest=warn".parse().expect("valid directive")))
        .with_target(true)
        .with_thread_ids(true)
        .with_writer(std::io::stderr)
        .init();

    info!("💸 Starting expense tracker...");

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return;
        }
    };
    let client = TransactionsClient::with_base_url(config.api_url);
    let mut session = Session::new(client);
    info!("Using transaction store at {}", session.view_model.store().base_url());

    // Start with whatever the store has; keep going with an empty list if it is down
    if let Err(e) = session.view_model.refresh().await {
        warn!("Starting without transactions: {}", e);
    }

    let mut out = Vec::new();
    commands::help::execute(&mut out).ok();
    commands::list::execute(&session, &mut out).ok();
    print_lines(&mut out);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt();
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                error!("Failed to read input: {}", e);
                break;
            }
        };

        let flow = commands::handle_line(&mut session, &line, &mut out).await;
        print_lines(&mut out);

        if flow == Flow::Quit {
            break;
        }
    }

    info!("Goodbye!");
}
