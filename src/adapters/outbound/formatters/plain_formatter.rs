use crate::ports::outbound::ExclusionFormatter;
use crate::shade_diff::domain::ExclusionSet;
use crate::shared::Result;

/// Renders the exclusion set as a single comma-joined line
pub struct PlainFormatter;

impl PlainFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlainFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ExclusionFormatter for PlainFormatter {
    fn format(&self, excludes: &ExclusionSet) -> Result<String> {
        Ok(format!("{}\n", excludes.render()))
    }
}
