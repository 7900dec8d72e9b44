use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "staffdb")]
#[command(about = "Manage employee records kept in a JSON file", long_about = None)]
pub struct Cli {
    /// Path to the collection file (defaults to the platform data dir)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Only print the result of the requested operation, without the
    /// listing that normally follows
    #[arg(short, long)]
    pub quiet: bool,

    /// Operation keyword followed by Name:Value arguments, e.g.
    /// `-add FirstName:James LastName:Smith SalaryPerHour:105,4`.
    /// The tokens are passed through to the manager untouched; the
    /// hyphenated keywords are its grammar, not clap flags.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub request: Vec<String>,
}
