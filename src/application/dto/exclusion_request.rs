use crate::shade_diff::domain::BundleReference;

/// ExclusionRequest - Internal request DTO for the exclusion use case
#[derive(Debug, Clone, Default)]
pub struct ExclusionRequest {
    /// Shaded jars to consult, in declaration order
    pub references: Vec<BundleReference>,
}

impl ExclusionRequest {
    pub fn new(references: Vec<BundleReference>) -> Self {
        Self { references }
    }
}
