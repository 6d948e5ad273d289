/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (archives, repositories, console, etc.).
pub mod archive_resolver;
pub mod bundle_archive;
pub mod dependency_provider;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;

pub use archive_resolver::ArchiveResolver;
pub use bundle_archive::BundleArchive;
pub use dependency_provider::DependencyProvider;
pub use formatter::ExclusionFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
