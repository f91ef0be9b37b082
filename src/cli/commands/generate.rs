//! Generate command implementation
//!
//! Reads a JSON document from a file or stdin, infers the schema, and writes
//! either the CREATE TABLE statement or the inferred field list. On parse
//! failure the command fails without producing any DDL; the caller decides
//! routing from the exit status.

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::cli::error::CliError;
use crate::export::DdlExporter;
use crate::inference::{InferenceConfig, infer_fields};
use crate::validation::validate_table_label;

/// Arguments for the `generate` command
pub struct GenerateArgs {
    /// Input path, or "-" for stdin
    pub input: String,
    /// Table name; defaults to the input file stem
    pub table_name: Option<String>,
    /// Table type label (hive, mysql, oracle, postgresql, phoenix, ...)
    pub table_type: String,
    /// Output file path (stdout if not provided)
    pub output: Option<PathBuf>,
    /// Print the inferred field list instead of DDL
    pub fields: bool,
    /// Output format for the field list (json, yaml)
    pub format: String,
    /// Padding added to inferred VARCHAR widths
    pub padding_factor: usize,
    /// VARCHAR width used for null values
    pub null_width: usize,
}

/// Load input content from file or stdin
fn load_input(input: &str) -> Result<String, CliError> {
    if input == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| CliError::InvalidArgument(format!("Failed to read stdin: {}", e)))?;
        Ok(content)
    } else {
        let path = PathBuf::from(input);
        std::fs::read_to_string(&path).map_err(|e| CliError::FileReadError(path, e.to_string()))
    }
}

/// Table name fallback: the input file stem, mirroring hosts that name the
/// table after the incoming file
fn default_table_name(input: &str) -> Option<String> {
    if input == "-" {
        return None;
    }
    Path::new(input)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
}

/// Handle the `generate` command
pub fn handle_generate(args: &GenerateArgs) -> Result<(), CliError> {
    let table_name = match args.table_name.clone().or_else(|| default_table_name(&args.input)) {
        Some(name) => name.trim().to_string(),
        None => {
            return Err(CliError::InvalidArgument(
                "--table-name is required when reading from stdin".to_string(),
            ));
        }
    };

    validate_table_label(&table_name)?;
    validate_table_label(&args.table_type)?;

    let config = InferenceConfig::builder()
        .padding_factor(args.padding_factor)
        .null_width(args.null_width)
        .build();

    let content = load_input(&args.input)?;

    let output_str = if args.fields {
        let fields = infer_fields(&content, &config)?;
        match args.format.as_str() {
            "yaml" => serde_yaml::to_string(&fields)
                .map_err(|e| CliError::SerializationError(e.to_string()))?,
            "json" => serde_json::to_string_pretty(&fields)
                .map_err(|e| CliError::SerializationError(e.to_string()))?,
            other => {
                return Err(CliError::InvalidArgument(format!(
                    "Unknown format: {}",
                    other
                )));
            }
        }
    } else {
        DdlExporter::assemble(&table_name, &content, &args.table_type, &config)?
    };

    if let Some(ref output_path) = args.output {
        std::fs::write(output_path, &output_str)
            .map_err(|e| CliError::FileWriteError(output_path.clone(), e.to_string()))?;
        eprintln!("Output written to: {}", output_path.display());
    } else {
        println!("{}", output_str);
    }

    Ok(())
}
