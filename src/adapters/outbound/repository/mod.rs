/// Repository adapters resolving shaded jar references to archives
mod local_repository;

pub use local_repository::LocalRepositoryResolver;
