use std::path::Path;

use clap::{Parser, Subcommand};

use roman_cli::commands::{config_ops, numeral_ops, store_ops};
use roman_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "romantool", about = "Roman numeral converter")]
struct Cli {
    /// Custom settings TOML (see `settings-export`)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Write JSON trace logs to this directory (requires the `trace` feature)
    #[arg(long, global = true)]
    log_dir: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a decimal number (1-3999) to a Roman numeral
    ToRoman {
        /// Decimal number
        #[arg(allow_negative_numbers = true)]
        number: i64,
        /// Append the conversion to the CSV file
        #[arg(long)]
        save: bool,
        /// CSV file (default: store.file_name from settings)
        #[arg(long)]
        file: Option<String>,
    },
    /// Convert a Roman numeral to a decimal number
    FromRoman {
        /// Roman numeral (uppercase)
        numeral: String,
        /// Reject malformed numerals instead of returning a partial value
        #[arg(long)]
        strict: bool,
        /// Append the conversion to the CSV file
        #[arg(long)]
        save: bool,
        /// CSV file (default: store.file_name from settings)
        #[arg(long)]
        file: Option<String>,
    },
    /// Print every saved conversion
    History {
        /// CSV file (default: store.file_name from settings)
        #[arg(long)]
        file: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the default settings TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate {
        /// Settings file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.log_dir.as_deref().map(Path::new));
    if let Some(settings) = &cli.settings {
        config_ops::load_custom(settings);
    }

    match cli.command {
        Command::ToRoman { number, save, file } => {
            numeral_ops::to_roman_cmd(number, save, file.as_deref())
        }
        Command::FromRoman {
            numeral,
            strict,
            save,
            file,
        } => numeral_ops::from_roman_cmd(&numeral, strict, save, file.as_deref()),
        Command::History { file, json } => store_ops::history_cmd(file.as_deref(), json),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
