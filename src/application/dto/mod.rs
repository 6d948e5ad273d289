/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod exclusion_request;
mod exclusion_response;
mod output_format;

pub use exclusion_request::ExclusionRequest;
pub use exclusion_response::{ConsultedBundle, ExclusionResponse};
pub use output_format::OutputFormat;
