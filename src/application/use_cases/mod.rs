/// Use cases module containing application business logic orchestration
mod resolve_exclusions;

pub use resolve_exclusions::ResolveExclusionsUseCase;
