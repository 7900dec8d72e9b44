use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use staffdb::error::Result;
use staffdb::manager::DataManager;
use staffdb::store::fs::JsonFileStore;
use std::path::PathBuf;

mod args;
use args::Cli;

fn main() {
    let cli = Cli::parse();

    let store = JsonFileStore::new(collection_path(&cli));
    let mut manager = DataManager::new(store);

    print_outcome(manager.run(&cli.request));

    // Default run mode: echo the whole collection after the operation.
    if !cli.quiet {
        print_outcome(manager.run(&["-getall"]));
    }
}

fn collection_path(cli: &Cli) -> PathBuf {
    if let Some(file) = &cli.file {
        return file.clone();
    }
    ProjectDirs::from("com", "staffdb", "staffdb")
        .map(|dirs| dirs.data_dir().join("employees.json"))
        .unwrap_or_else(|| PathBuf::from("employees.json"))
}

fn print_outcome(outcome: Result<String>) {
    match outcome {
        Ok(message) => println!("{}", message),
        Err(err) => println!("{}", err.to_string().red()),
    }
}
