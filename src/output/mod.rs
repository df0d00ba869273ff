/// Builds a Markdown catalogue of loaded statements.
pub mod report;
