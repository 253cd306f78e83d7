use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn should_colorize(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => std::io::IsTerminal::is_terminal(&std::io::stderr()),
        }
    }
}

#[derive(Parser)]
#[command(name = "mccmd", bin_name = "mccmd")]
#[command(about = "Parser, syntax highlighter and autocompleter for Minecraft Bedrock command lines")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args)]
#[group(id = "source_input", multiple = false, required = true)]
pub struct SourceArgs {
    /// .mcfunction file to read (use "-" for stdin)
    pub path: Option<PathBuf>,

    /// A single line of source text, instead of a file
    #[arg(long = "text", value_name = "TEXT")]
    pub text: Option<String>,

    /// Target game version, e.g. 1.19.80
    #[arg(long, value_name = "MAJOR.MINOR.PATCH")]
    pub game_version: Option<String>,

    /// JSON id catalogue to resolve block/entity/game-rule ids against
    #[arg(long, value_name = "FILE")]
    pub id_table: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check every line of a .mcfunction file and report diagnostics
    #[command(after_help = r#"EXAMPLES:
  mccmd check world/functions/tick.mcfunction
  mccmd check --game-version 1.19.50 tick.mcfunction
  mccmd check --strict tick.mcfunction"#)]
    Check {
        #[command(flatten)]
        source: SourceArgs,

        /// Colorize diagnostic output (auto-detected by default)
        #[arg(long, default_value = "auto", value_name = "WHEN")]
        color: ColorChoice,

        /// Exit non-zero on any diagnostic, not only errors
        #[arg(long)]
        strict: bool,
    },

    /// Print the font span for every token on each line
    #[command(after_help = r#"EXAMPLES:
  mccmd highlight tick.mcfunction
  mccmd highlight --json tick.mcfunction"#)]
    Highlight {
        #[command(flatten)]
        source: SourceArgs,

        /// Emit one JSON object per line instead of a text table
        #[arg(long)]
        json: bool,
    },

    /// List ranked completions at a cursor position in one line
    #[command(after_help = r#"EXAMPLES:
  mccmd suggest tick.mcfunction --line 3 --column 12
  mccmd suggest --text "execute as @a at @s " --column 20"#)]
    Suggest {
        #[command(flatten)]
        source: SourceArgs,

        /// 1-based line number to suggest on (ignored with --text)
        #[arg(long, default_value_t = 1)]
        line: u32,

        /// Char index of the cursor within the line
        #[arg(long)]
        column: usize,
    },
}
