/// Top-level statement block parsing: header, description, body.
pub mod entry;
/// Line fragments of buildable statements, keyed by the parameters they reference.
pub mod fragments;
/// `%(name)s` parameter extraction for a single line.
pub mod params;
