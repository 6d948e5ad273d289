mod exclusion_resolver;
mod manifest_parser;
mod manifest_reader;

pub use exclusion_resolver::{ExclusionResolver, ManifestDiff, VersionMismatch};
pub use manifest_parser::ManifestParser;
pub use manifest_reader::ManifestReader;
