/// Formatter adapters for the supported exclusion output formats
mod json_formatter;
mod plain_formatter;
mod properties_formatter;

pub use json_formatter::JsonFormatter;
pub use plain_formatter::PlainFormatter;
pub use properties_formatter::PropertiesFormatter;
