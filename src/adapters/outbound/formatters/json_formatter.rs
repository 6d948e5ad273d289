use crate::ports::outbound::ExclusionFormatter;
use crate::shade_diff::domain::ExclusionSet;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ExclusionDocument<'a> {
    property: &'a str,
    value: String,
    excludes: Vec<&'a str>,
}

/// Renders the exclusion set as a pretty-printed JSON document
pub struct JsonFormatter {
    property: String,
}

impl JsonFormatter {
    pub fn new(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
        }
    }
}

impl ExclusionFormatter for JsonFormatter {
    fn format(&self, excludes: &ExclusionSet) -> Result<String> {
        let document = ExclusionDocument {
            property: &self.property,
            value: excludes.render(),
            excludes: excludes.patterns().collect(),
        };
        let mut output = serde_json::to_string_pretty(&document)
            .map_err(|e| anyhow::anyhow!("Failed to serialize exclusions to JSON: {}", e))?;
        output.push('\n');
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shade_diff::domain::Coordinate;

    #[test]
    fn test_json_format() {
        let mut excludes = ExclusionSet::new();
        excludes.insert(&Coordinate::new("org.foo", "baz", "jar", None).unwrap());
        excludes.insert(&Coordinate::new("org.foo", "bar", "jar", None).unwrap());

        let output = JsonFormatter::new("maven.shade.plugin.additionalExcludes")
            .format(&excludes)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["property"], "maven.shade.plugin.additionalExcludes");
        assert_eq!(value["value"], "org.foo:bar:*,org.foo:baz:*");
        assert_eq!(value["excludes"][0], "org.foo:bar:*");
        assert_eq!(value["excludes"][1], "org.foo:baz:*");
    }

    #[test]
    fn test_json_format_empty() {
        let output = JsonFormatter::new("excludes")
            .format(&ExclusionSet::new())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["excludes"].as_array().unwrap().len(), 0);
        assert_eq!(value["value"], "");
    }
}
