//! Application run modes: logger init, single transformation, all transformations, completions.

use std::io::{self, Write};

use clap::CommandFactory;

use crate::cli::{self, Args, Commands, Input};
use crate::core;
use crate::core::config::Config;
use crate::core::item::Items;
use crate::core::transform::{Operation, Options};

/// Initialize env_logger on stderr so stdout carries only the result.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .target(env_logger::Target::Stderr)
        .try_init();
}

fn read_input(input: &Input) -> Result<String, core::input::InputError> {
    core::input::read_text(input.text.as_deref(), io::stdin().lock())
}

/// Run one transformation and print its text, or its item with `--json`.
///
/// Returns `false` when the transformation failed in plain-text mode, where
/// the empty output alone would not show it.
pub fn run_transform(
    operation: Operation,
    options: &Options,
    input: &Input,
    json: bool,
    config: &Config,
) -> Result<bool, Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    log::debug!(
        "{}: {} chars of input",
        operation.uid(),
        text.chars().count()
    );
    let transformed = operation.run(&text, options);

    let mut stdout = io::stdout().lock();
    if json {
        let items = Items::from(vec![transformed.to_item(Some(config.icon_path.as_str()))]);
        writeln!(stdout, "{}", items.to_json()?)?;
        return Ok(true);
    }

    let ok = match transformed.result() {
        Ok(_) => true,
        Err(e) => {
            eprintln!("Error: {}: {}", operation.uid(), e);
            false
        }
    };
    stdout.write_all(transformed.into_text().as_bytes())?;
    stdout.flush()?;
    Ok(ok)
}

/// Print one launcher item per transformation, each with default options.
pub fn run_all(input: &Input, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let options = Options {
        underline_char: config.underline_char,
        ..Options::default()
    };
    log::debug!(
        "all: {} transformations on {} chars",
        Operation::ALL.len(),
        text.chars().count()
    );
    let items: Items = Operation::ALL
        .into_iter()
        .map(|op| op.run(&text, &options).to_item(Some(config.icon_path.as_str())))
        .collect();
    println!("{}", items.to_json()?);
    Ok(())
}

/// Write the completion script for `shell` to stdout.
pub fn print_completions(shell: clap_complete::Shell) {
    let mut cmd = Args::command();
    cli::generate(shell, &mut cmd, core::app::NAME, &mut io::stdout());
}

/// Dispatch a parsed command. Returns `false` if a transformation failed.
pub fn dispatch(args: &Args, config: &Config) -> Result<bool, Box<dyn std::error::Error>> {
    match &args.command {
        Commands::Completions { shell } => {
            print_completions(*shell);
            Ok(true)
        }
        Commands::All { input } => run_all(input, config).map(|_| true),
        command => match command.operation() {
            Some((operation, input)) => run_transform(
                operation,
                &command.options(config),
                input,
                args.json,
                config,
            ),
            None => Ok(true),
        },
    }
}
