mod cli;
mod commands;
mod source;

use clap::Parser;

use cli::Command;

fn main() {
    env_logger::init();
    let cli = cli::Cli::parse();

    match cli.command {
        Command::Check { source, color, strict } => {
            commands::check::run(commands::check::CheckArgs { source, color, strict });
        }
        Command::Highlight { source, json } => {
            commands::highlight::run(commands::highlight::HighlightArgs { source, json });
        }
        Command::Suggest { source, line, column } => {
            commands::suggest::run(commands::suggest::SuggestArgs { source, line, column });
        }
    }
}
