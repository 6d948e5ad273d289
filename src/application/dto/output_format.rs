/// Output format enumeration for the rendered exclusion set
///
/// Belongs in the application layer as both the CLI (inbound adapter) and
/// the formatters (outbound adapters) need to understand it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Comma-joined patterns (default)
    #[default]
    Plain,
    /// A single `property=value` line for the shade plugin
    Properties,
    /// JSON document with the property name and the pattern list
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" | "text" => Ok(OutputFormat::Plain),
            "properties" | "props" => Ok(OutputFormat::Properties),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'plain', 'properties' or 'json'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Properties => write!(f, "properties"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
