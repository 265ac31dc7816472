use std::process;
use std::str::FromStr;

/// Output format for records printed by get-style commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON (the default).
    #[default]
    Json,
    /// YAML.
    Yaml,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// Error returned when an output format string is not recognized.
#[derive(Debug, PartialEq, Eq)]
pub struct OutputFormatParseError {
    input: String,
}

impl std::fmt::Display for OutputFormatParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invalid output format '{}': expected 'json' or 'yaml'",
            self.input
        )
    }
}

impl std::error::Error for OutputFormatParseError {}

impl FromStr for OutputFormat {
    type Err = OutputFormatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => Err(OutputFormatParseError {
                input: s.to_string(),
            }),
        }
    }
}

/// Exits the program with an error message
pub fn exit_with_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

/// Exits the program with an error message and usage information
pub fn exit_with_usage_error(message: &str, usage: &str) -> ! {
    eprintln!("Error: {}", message);
    eprintln!("{}", usage);
    process::exit(1);
}

/// Prints a formatted success message
pub fn print_success(message: &str) {
    println!("{}", message);
}

/// Renders a value in the requested output format.
pub fn format_value<T>(value: &T, format: OutputFormat) -> Result<String, String>
where
    T: serde::Serialize,
{
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(value).map_err(|e| e.to_string()),
        OutputFormat::Yaml => serde_yml::to_string(value).map_err(|e| e.to_string()),
    }
}

/// Prints a value in the requested output format or exits with error
pub fn print_formatted_or_exit<T>(value: &T, format: OutputFormat, context: &str)
where
    T: serde::Serialize,
{
    match format_value(value, format) {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => exit_with_error(&format!("Failed to format {}: {}", context, e)),
    }
}
