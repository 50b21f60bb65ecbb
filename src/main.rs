use std::{
    io::Read,
    path::{Path, PathBuf},
};

use clap::Parser;
use docanswer::{
    Engine,
    EngineConfig,
    classify::classify,
    cli::{Cli, Command},
    error, output,
};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if let Ok(env) = std::env::var("DOCANSWER_LOG") {
        EnvFilter::new(env)
    } else if quiet {
        EnvFilter::new("warn")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

/// Read the document from a file, or stdin when the path is absent or "-".
fn read_document(path: Option<&Path>) -> error::Result<String> {
    match path {
        Some(p) if p != Path::new("-") => {
            tracing::debug!(path = %p.display(), "reading document");
            Ok(std::fs::read_to_string(p)?)
        }
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn build_engine(config: Option<&PathBuf>) -> error::Result<Engine> {
    let config = EngineConfig::resolve(config.map(PathBuf::as_path))?;
    Engine::new(config)
}

fn main() -> error::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        Command::Ask(args) => {
            let engine = build_engine(cli.config.as_ref())?;
            let document = read_document(args.document.as_deref())?;
            let answer = engine.answer(&document, &args.question);
            if !answer.is_found() {
                tracing::info!("no answer found");
            }
            output::print_answer(&answer, args.json)?;
        }
        Command::Explain(args) => {
            let engine = build_engine(cli.config.as_ref())?;
            let document = read_document(args.document.as_deref())?;
            let explanation = engine.explain(&document, &args.question);
            output::print_explanation(&explanation, args.top, args.json)?;
        }
        Command::Classify(args) => {
            output::print_question_type(classify(&args.question))?;
        }
        Command::Completions(args) => {
            args.generate();
        }
    }

    Ok(())
}
