use crate::ports::outbound::ExclusionFormatter;
use crate::shade_diff::domain::ExclusionSet;
use crate::shared::Result;

/// Renders the exclusion set as a `property=patterns` line
///
/// Nothing is emitted for an empty set, so an existing property value
/// is never overridden with an empty one.
pub struct PropertiesFormatter {
    property: String,
}

impl PropertiesFormatter {
    pub fn new(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
        }
    }
}

impl ExclusionFormatter for PropertiesFormatter {
    fn format(&self, excludes: &ExclusionSet) -> Result<String> {
        if excludes.is_empty() {
            return Ok(String::new());
        }
        Ok(format!("{}={}\n", self.property, excludes.render()))
    }
}
