use crate::shade_diff::domain::ExclusionSet;
use crate::shared::Result;

/// ExclusionFormatter port for rendering the final exclusion set
pub trait ExclusionFormatter {
    /// Formats the exclusion set for the packaging step
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, excludes: &ExclusionSet) -> Result<String>;
}
