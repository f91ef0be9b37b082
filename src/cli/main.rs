//! json-ddl command line entry point

use std::path::PathBuf;

use clap::Parser;

use json_ddl_sdk::cli::commands::{GenerateArgs, handle_generate};

/// Generate CREATE TABLE DDL from a JSON document
#[derive(Parser)]
#[command(name = "json-ddl", version, about)]
struct Cli {
    /// Input JSON file, or "-" for stdin
    input: String,

    /// Table name (defaults to the input file stem)
    #[arg(long)]
    table_name: Option<String>,

    /// Table type label: hive, mysql, oracle, postgresql, phoenix, ...
    #[arg(long, default_value = "standard")]
    table_type: String,

    /// Write output to a file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the inferred field list instead of DDL
    #[arg(long)]
    fields: bool,

    /// Output format for --fields (json, yaml)
    #[arg(long, default_value = "json")]
    format: String,

    /// Padding added to inferred VARCHAR widths
    #[arg(long, default_value_t = 12)]
    padding_factor: usize,

    /// VARCHAR width used for null values
    #[arg(long, default_value_t = 50)]
    null_width: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let args = GenerateArgs {
        input: cli.input,
        table_name: cli.table_name,
        table_type: cli.table_type,
        output: cli.output,
        fields: cli.fields,
        format: cli.format,
        padding_factor: cli.padding_factor,
        null_width: cli.null_width,
    };

    handle_generate(&args)?;
    Ok(())
}
