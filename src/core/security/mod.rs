// Security module for export path validation
//
// Markdown exports may only be written into existing directories that lie
// within the configured root, if any.

pub mod path_validator;

pub use path_validator::{PathSecurityError, validate_export_dir};
