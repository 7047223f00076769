use anyhow::{Context, Result};
use kit_assistant::{Catalog, IntentMatcher, Settings};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const WELCOME: &str = "Hello! I'm your KITCOEK Assistant. How can I help you today?";

fn run() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let intents_file = match std::env::args().nth(1) {
        Some(path) => PathBuf::from(path),
        None => Settings::load()?.intents_file,
    };
    let catalog = Catalog::load_from_file(&intents_file)?;
    catalog
        .validate()
        .with_context(|| format!("Invalid intent catalog {:?}", intents_file))?;
    log::info!("Loaded {} intents from {:?}", catalog.len(), intents_file);

    let matcher = IntentMatcher::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("bot> {}", WELCOME);
    loop {
        print!("you> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim_end_matches(['\r', '\n']);
        if matches!(input.trim(), "quit" | "exit") {
            break;
        }

        let reply = matcher.resolve(input, &catalog.intents)?;
        println!("bot> {}", reply);
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error during chat session: {:?}", e);
        std::process::exit(1);
    }
}
