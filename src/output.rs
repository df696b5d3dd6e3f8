use clap::ValueEnum;
use shortpath_core::Path;

/// How a query result is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `0, 1, 2 (cost 5)` or `No path exists.`
    #[default]
    Text,
    /// `{"status":"valid","nodes":[0,1,2],"cost":5}`
    Json,
}

pub fn render(path: &Path, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(path.to_string()),
        OutputFormat::Json => serde_json::to_string(path),
    }
}
