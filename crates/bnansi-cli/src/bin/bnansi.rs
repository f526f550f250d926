use clap::{Parser, Subcommand};

use bnansi_cli::commands::config_ops;
use bnansi_cli::commands::convert_ops::{self, ConvertOptions};

#[derive(Parser)]
#[command(
    name = "bnansi",
    about = "Convert Bengali Unicode text to legacy ANSI glyph encoding"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert text (argument, --input file, or stdin)
    Convert {
        /// Text to convert
        text: Option<String>,
        /// Read input from file
        #[arg(long, conflicts_with = "text")]
        input: Option<String>,
        /// Write output to file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
        /// Write Windows-1252 bytes for legacy fonts
        #[arg(long)]
        bytes: bool,
        /// Apply the normalization table before conversion
        #[arg(long)]
        normalize: bool,
        /// Custom tables TOML file
        #[arg(long)]
        tables: Option<String>,
    },
    /// Show every match and reorder step of a conversion
    Explain {
        /// Text to convert
        text: String,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
        /// Apply the normalization table before conversion
        #[arg(long)]
        normalize: bool,
        /// Custom tables TOML file
        #[arg(long)]
        tables: Option<String>,
    },
    /// Print a legacy byte file as the glyph characters it addresses
    Decode {
        /// Path to the legacy byte file
        input: String,
    },
    /// Export default mapping tables as TOML
    TablesExport,
    /// Validate a custom mapping tables TOML file
    TablesValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Convert {
            text,
            input,
            output,
            bytes,
            normalize,
            tables,
        } => {
            let opts = ConvertOptions {
                tables,
                normalize,
                bytes,
            };
            convert_ops::convert_cmd(
                text.as_deref(),
                input.as_deref(),
                output.as_deref(),
                &opts,
            );
        }
        Command::Explain {
            text,
            json,
            normalize,
            tables,
        } => {
            let opts = ConvertOptions {
                tables,
                normalize,
                bytes: false,
            };
            convert_ops::explain_cmd(&text, json, &opts);
        }
        Command::Decode { input } => convert_ops::decode_cmd(&input),
        Command::TablesExport => config_ops::tables_export(),
        Command::TablesValidate { file } => config_ops::tables_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
