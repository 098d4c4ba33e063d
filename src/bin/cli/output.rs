//! Output formatting for CLI operations.

use serde_json::json;
use std::path::Path;

use crate::OutputFormat;

/// Trait for output formatting
pub trait OutputFormatter {
    /// Formats a list of entry names
    fn format_list(&self, archive: &Path, names: &[String]) -> String;
}

/// Human-readable output formatter
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_list(&self, _archive: &Path, names: &[String]) -> String {
        let mut output = String::new();
        for name in names {
            output.push_str(name);
            output.push('\n');
        }
        output.push_str(&"-".repeat(40));
        output.push('\n');
        output.push_str(&format!("{} file(s)\n", names.len()));
        output
    }
}

/// JSON output formatter
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_list(&self, archive: &Path, names: &[String]) -> String {
        let value = json!({
            "archive": archive.display().to_string(),
            "count": names.len(),
            "entries": names,
        });
        format!("{}\n", value)
    }
}

/// Creates the formatter for the requested output format
pub fn create_formatter(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Human => Box::new(HumanFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
