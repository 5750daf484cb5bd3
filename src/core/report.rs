use crate::core::{BatchSummary, OutputFormat};
use crate::utils::error::AppResult;

/// Renders a batch summary for stdout. Text is one `input -> result` line
/// per conversion; JSON is the whole summary.
pub fn render(summary: &BatchSummary, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
        OutputFormat::Text => {
            let lines: Vec<String> = summary
                .conversions
                .iter()
                .map(|c| match (&c.output, &c.error) {
                    (Some(output), _) => format!("{} -> {}", c.input, output),
                    (None, Some(error)) => format!("{} -> error: {}", c.input, error),
                    (None, None) => format!("{} -> (no result)", c.input),
                })
                .collect();
            Ok(lines.join("\n"))
        }
    }
}
