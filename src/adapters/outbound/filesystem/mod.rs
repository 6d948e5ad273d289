/// Filesystem adapters for file I/O operations
mod dependency_list_reader;
mod file_writer;

pub use dependency_list_reader::{DependencyListReader, RUNTIME_SCOPES};
pub use file_writer::{FileSystemWriter, StdoutPresenter};
