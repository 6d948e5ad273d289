pub mod archive;
pub mod console;
pub mod filesystem;
pub mod formatters;
pub mod repository;
