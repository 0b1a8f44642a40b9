mod commands;
mod logging;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use muhandis_validation::{Locale, ValidationConfig};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "muhandis")]
#[command(about = "Validate and format Muhandis form fields")]
struct Cli {
    /// Log level when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a single value
    Validate {
        /// Rule identifier (see `muhandis kinds`)
        kind: String,

        /// Raw input
        value: String,

        /// Message locale (en or ar)
        #[arg(long, short)]
        locale: Option<Locale>,

        /// Label used in the "required" message
        #[arg(long)]
        field_name: Option<String>,

        /// Minimum name length
        #[arg(long)]
        min_length: Option<usize>,

        /// Expected SMS code length
        #[arg(long)]
        expected_length: Option<usize>,

        /// Minimum age in years
        #[arg(long)]
        min_age: Option<u32>,

        /// Compute ages as of this date (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Normalize a value for display or storage
    Format {
        #[command(subcommand)]
        format_command: FormatCommands,
    },

    /// List supported rule identifiers
    Kinds,

    /// Validate a JSON object of string fields
    Form {
        /// JSON file with the form values
        input: PathBuf,

        /// FIELD=KIND pairs, repeatable
        #[arg(long = "rule", short, required = true)]
        rules: Vec<String>,

        /// Message locale (en or ar)
        #[arg(long, short)]
        locale: Option<Locale>,
    },
}

#[derive(Subcommand, Debug)]
enum FormatCommands {
    /// Canonical +966 form of a Saudi mobile number
    Phone { value: String },

    /// Group a National ID as D DDDD DDDD D
    NationalId { value: String },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    logging::init_logging(&logging::LoggingConfig::new(&cli.log_level, cli.json_logs))
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to initialize logging")?;

    let config = ValidationConfig::from_env().context("Invalid MUHANDIS_* configuration")?;

    let output = match cli.command {
        Commands::Validate {
            kind,
            value,
            locale,
            field_name,
            min_length,
            expected_length,
            min_age,
            today,
            json,
        } => commands::validate::run(
            &config,
            commands::validate::ValidateArgs {
                kind,
                value,
                locale,
                field_name,
                min_length,
                expected_length,
                min_age,
                today,
                json,
            },
        )?,
        Commands::Format { format_command } => match format_command {
            FormatCommands::Phone { value } => commands::format::phone(&value),
            FormatCommands::NationalId { value } => commands::format::national_id(&value),
        },
        Commands::Kinds => commands::kinds::run(),
        Commands::Form {
            input,
            rules,
            locale,
        } => commands::form::run(&config, &input, &rules, locale)?,
    };

    println!("{}", output.text);
    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
