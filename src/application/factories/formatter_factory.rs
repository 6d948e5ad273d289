use crate::adapters::outbound::formatters::{JsonFormatter, PlainFormatter, PropertiesFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ExclusionFormatter;

/// Property the shade plugin reads additional excludes from
pub const DEFAULT_EXCLUDES_PROPERTY: &str = "maven.shade.plugin.additionalExcludes";

/// Factory for creating exclusion formatters
///
/// Belongs in the application layer as it selects infrastructure adapters
/// based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Arguments
    /// * `format` - The output format to create a formatter for
    /// * `property` - Property name used by the `properties` and `json` formats
    ///
    /// # Examples
    /// ```
    /// use shade_diff::application::dto::OutputFormat;
    /// use shade_diff::application::factories::{FormatterFactory, DEFAULT_EXCLUDES_PROPERTY};
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Properties, DEFAULT_EXCLUDES_PROPERTY);
    /// ```
    pub fn create(format: OutputFormat, property: &str) -> Box<dyn ExclusionFormatter> {
        match format {
            OutputFormat::Plain => Box::new(PlainFormatter::new()),
            OutputFormat::Properties => Box::new(PropertiesFormatter::new(property)),
            OutputFormat::Json => Box::new(JsonFormatter::new(property)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shade_diff::domain::{Coordinate, ExclusionSet};

    fn excludes() -> ExclusionSet {
        let mut set = ExclusionSet::new();
        set.insert(&Coordinate::new("org.foo", "bar", "jar", None).unwrap());
        set
    }

    #[test]
    fn test_create_plain_formatter() {
        let formatter = FormatterFactory::create(OutputFormat::Plain, DEFAULT_EXCLUDES_PROPERTY);
        assert_eq!(formatter.format(&excludes()).unwrap(), "org.foo:bar:*\n");
    }

    #[test]
    fn test_create_properties_formatter() {
        let formatter =
            FormatterFactory::create(OutputFormat::Properties, DEFAULT_EXCLUDES_PROPERTY);
        assert_eq!(
            formatter.format(&excludes()).unwrap(),
            "maven.shade.plugin.additionalExcludes=org.foo:bar:*\n"
        );
    }

    #[test]
    fn test_create_json_formatter() {
        let formatter = FormatterFactory::create(OutputFormat::Json, "custom.excludes");
        let output = formatter.format(&excludes()).unwrap();
        assert!(output.contains("\"custom.excludes\""));
    }
}
