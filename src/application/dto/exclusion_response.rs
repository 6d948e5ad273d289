use crate::shade_diff::domain::{BundleReference, ExclusionSet, ManifestFormat};

/// Summary of one shaded jar consulted during resolution
#[derive(Debug, Clone)]
pub struct ConsultedBundle {
    pub reference: BundleReference,
    /// Location of the resolved archive
    pub archive: String,
    pub format: ManifestFormat,
    pub component_count: usize,
    /// Patterns this bundle contributed that no earlier bundle had
    pub added: Vec<String>,
    /// Number of shared coordinates kept because versions differ
    pub mismatched: usize,
}

/// ExclusionResponse - Internal response DTO from the exclusion use case
#[derive(Debug, Clone, Default)]
pub struct ExclusionResponse {
    /// Final, sorted exclusion set
    pub excludes: ExclusionSet,
    /// Shaded jars in the order they were consulted
    pub bundles: Vec<ConsultedBundle>,
}

impl ExclusionResponse {
    pub fn new(excludes: ExclusionSet, bundles: Vec<ConsultedBundle>) -> Self {
        Self { excludes, bundles }
    }
}
