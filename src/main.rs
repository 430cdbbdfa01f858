// Blueprint: lexer and parser driver

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser as CliParser;
use crossterm::style::Stylize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use blueprint::parser::lexer::Lexer;
use blueprint::parser::options::ParserOptions;
use blueprint::parser::parse::Parser;

#[derive(CliParser, Debug)]
#[command(name = "blueprint", version, about = "Lex and parse Blueprint source files")]
struct Cli {
    /// Source file to parse
    file: PathBuf,

    /// Print the token stream before parsing
    #[arg(short, long)]
    tokens: bool,

    /// Print the parsed AST
    #[arg(long)]
    ast: bool,

    /// Allow an additional blueprint name after ':' (repeatable)
    #[arg(short, long = "blueprint", value_name = "NAME")]
    blueprints: Vec<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// RUST_LOG wins over the -v flags when set.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let source = fs::read_to_string(&cli.file)
        .with_context(|| format!("could not read '{}'", cli.file.display()))?;

    if cli.tokens {
        print_tokens(&source)?;
    }

    let options = cli
        .blueprints
        .iter()
        .fold(ParserOptions::default(), |options, name| options.with_blueprint(name.as_str()));

    info!(file = %cli.file.display(), "parsing");
    let mut parser = Parser::with_options(&source, options)
        .with_context(|| format!("failed to parse '{}'", cli.file.display()))?;
    let program = parser
        .parse()
        .with_context(|| format!("failed to parse '{}'", cli.file.display()))?;

    eprintln!(
        "{} {} ({} top-level items)",
        "Parsed".green().bold(),
        cli.file.display(),
        program.items.len()
    );

    if cli.ast {
        println!("{}", program);
    }

    Ok(())
}

fn print_tokens(source: &str) -> anyhow::Result<()> {
    let tokens = Lexer::new(source).tokenize().context("failed to tokenize")?;

    println!("Tokens:");
    for token in &tokens {
        println!(
            "\t{:>4}:{:<4} {}",
            token.location.line, token.location.column, token
        );
    }

    Ok(())
}
