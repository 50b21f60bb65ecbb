use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Debug, Parser)]
#[command(
    name = "docanswer",
    about = "Answer questions about a single document"
)]
pub struct Cli {
    /// Engine config file (JSON); overrides DOCANSWER_CONFIG
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Answer a question from a document
    Ask(AskArgs),
    /// Show how every window of a document scores against a question
    Explain(ExplainArgs),
    /// Print the answer type a question asks for
    Classify(ClassifyArgs),
    /// Generate shell completions
    #[command(hide = true)]
    Completions(CompletionsArgs),
}

// -- Ask --

#[derive(Debug, Parser)]
pub struct AskArgs {
    /// The question to answer
    pub question: String,

    /// Document file to read ("-" or omitted reads stdin)
    #[arg(short = 'd', long)]
    pub document: Option<PathBuf>,

    /// Output the answer as JSON
    #[arg(long)]
    pub json: bool,
}

// -- Explain --

#[derive(Debug, Parser)]
pub struct ExplainArgs {
    /// The question to score windows against
    pub question: String,

    /// Document file to read ("-" or omitted reads stdin)
    #[arg(short = 'd', long)]
    pub document: Option<PathBuf>,

    /// Number of windows to show
    #[arg(short = 'n', long, default_value = "5")]
    pub top: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// -- Classify --

#[derive(Debug, Parser)]
pub struct ClassifyArgs {
    /// The question to classify
    pub question: String,
}

// -- Completions --

#[derive(Debug, Parser)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsArgs {
    /// Generate shell completions and print to stdout.
    pub fn generate(&self) {
        let mut cmd = Cli::command();
        clap_complete::generate(
            self.shell,
            &mut cmd,
            "docanswer",
            &mut std::io::stdout(),
        );
    }
}
