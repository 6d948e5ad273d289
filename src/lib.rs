//! shade-diff - exclusion calculator for shaded (uber) jars
//!
//! Given a project's resolved dependencies and a set of already-shaded jars,
//! this library computes the `group:name:*` patterns that a new shaded jar
//! must exclude because their exact versions are already bundled elsewhere.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`shade_diff`): Coordinates, manifests and the exclusion fold
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use shade_diff::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let dependency_provider = DependencyListReader::new(PathBuf::from("target/dependencies.txt"));
//! let repository = LocalRepositoryResolver::default_root().unwrap_or_else(|| PathBuf::from("repository"));
//! let archive_resolver = LocalRepositoryResolver::new(repository);
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case =
//!     ResolveExclusionsUseCase::new(dependency_provider, archive_resolver, progress_reporter);
//!
//! // Execute
//! let reference: BundleReference = "org.example:platform-bundle:1.4.0".parse()?;
//! let response = use_case.execute(ExclusionRequest::new(vec![reference]))?;
//!
//! // Format output
//! let formatter = FormatterFactory::create(OutputFormat::Properties, DEFAULT_EXCLUDES_PROPERTY);
//! print!("{}", formatter.format(&response.excludes)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod shade_diff;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::archive::ZipBundleArchive;
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        DependencyListReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        JsonFormatter, PlainFormatter, PropertiesFormatter,
    };
    pub use crate::adapters::outbound::repository::LocalRepositoryResolver;
    pub use crate::application::dto::{
        ConsultedBundle, ExclusionRequest, ExclusionResponse, OutputFormat,
    };
    pub use crate::application::factories::{
        FormatterFactory, PresenterFactory, PresenterType, DEFAULT_EXCLUDES_PROPERTY,
    };
    pub use crate::application::use_cases::ResolveExclusionsUseCase;
    pub use crate::ports::outbound::{
        ArchiveResolver, BundleArchive, DependencyProvider, ExclusionFormatter, OutputPresenter,
        ProgressReporter,
    };
    pub use crate::shade_diff::domain::{
        BundleManifest, BundleReference, Coordinate, ExclusionSet, ManifestFormat,
        ProjectDependencySet, VersionedComponent,
    };
    pub use crate::shade_diff::services::{ExclusionResolver, ManifestReader};
    pub use crate::shared::error::{ExitCode, ShadeDiffError};
    pub use crate::shared::Result;
}
