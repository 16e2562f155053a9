use clap::Parser;
use colored::*;
use diataxis::api::DiataxisApi;
use diataxis::commands::{CmdMessage, MessageLevel};
use diataxis::error::{DiataxisError, Result};
use diataxis::kind::Kind;
use std::path::PathBuf;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init { directory } => handle_init(directory),
        Commands::Howto { title } => handle_create(Kind::HowTo, title),
        Commands::Tutorial { title } => handle_create(Kind::Tutorial, title),
        Commands::Explanation { title } => handle_create(Kind::Explanation, title),
        Commands::Adr { title } => handle_create(Kind::DecisionRecord, title),
        Commands::Handover { title } => handle_create(Kind::Handover, title),
        Commands::Fivewhy { title } => handle_create(Kind::FiveWhyAnalysis, title),
        Commands::Note { title } => handle_create(Kind::Note, title),
        Commands::Project { title } => handle_create(Kind::Project, title),
        Commands::Update { directory } => handle_update(directory),
    }
}

fn working_dir(directory: Option<PathBuf>) -> Result<PathBuf> {
    let dir = match directory {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    if !dir.is_dir() {
        return Err(DiataxisError::NotADirectory(dir));
    }
    Ok(dir)
}

fn handle_init(directory: Option<PathBuf>) -> Result<()> {
    let dir = working_dir(directory)?;
    let result = DiataxisApi::init(&dir)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_create(kind: Kind, title: Vec<String>) -> Result<()> {
    let dir = working_dir(None)?;
    let api = DiataxisApi::load(&dir)?;
    let result = api.create_document(kind, &title.join(" "))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(directory: Option<PathBuf>) -> Result<()> {
    let dir = working_dir(directory)?;
    let api = DiataxisApi::load(&dir)?;
    let result = api.update_all()?;
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for msg in messages {
        match msg.level {
            MessageLevel::Info => println!("{}", msg.content),
            MessageLevel::Success => println!("{}", msg.content.green()),
            MessageLevel::Warning => println!("{}", msg.content.yellow()),
            MessageLevel::Error => eprintln!("{}", msg.content.red()),
        }
    }
}
