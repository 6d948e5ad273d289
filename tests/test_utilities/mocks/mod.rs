/// Mock implementations for testing
mod memory_archive;
mod mock_archive_resolver;
mod mock_dependency_provider;
mod mock_progress_reporter;

pub use memory_archive::MemoryArchive;
pub use mock_archive_resolver::MockArchiveResolver;
pub use mock_dependency_provider::MockDependencyProvider;
pub use mock_progress_reporter::MockProgressReporter;
