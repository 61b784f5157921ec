//! Configuration constants and validation functions for path extraction.

use std::path::Path;

use roxmltree::ParsingOptions;

use crate::error::{Result, XpathError};

/// Maximum input size in bytes (100 MB).
///
/// Applies to files and streams alike. Reading stops one byte past the
/// limit so oversized input is rejected without buffering all of it.
pub const MAX_INPUT_SIZE: u64 = 100 * 1024 * 1024;

/// Maximum number of nodes in a parsed document.
///
/// Bounds the memory held by the tree. It does not bound nesting depth:
/// both the parser and the collector recurse once per nesting level, so a
/// document nested tens of thousands of levels deep can exhaust the stack
/// before this limit is reached.
pub const NODES_LIMIT: u32 = 10_000_000;

/// Parser options used for every document.
///
/// Internal DTD subsets are accepted. roxmltree never fetches external DTDs
/// or resolves external entities, so no network or filesystem access can be
/// triggered by the document itself.
///
/// # Examples
/// ```
/// use xpathset::config::{parsing_options, NODES_LIMIT};
///
/// let options = parsing_options();
/// assert!(options.allow_dtd);
/// assert_eq!(options.nodes_limit, NODES_LIMIT);
/// ```
#[must_use]
pub fn parsing_options<'input>() -> ParsingOptions<'input> {
    ParsingOptions {
        allow_dtd: true,
        nodes_limit: NODES_LIMIT,
        ..ParsingOptions::default()
    }
}

/// Validate that an input path names an existing regular file.
///
/// # Arguments
/// * `path` - Path to validate
///
/// # Returns
/// * `Ok(())` if the path is a regular file
/// * `Err(XpathError::NotAFile)` if it is missing or not a file
pub fn validate_input_path(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(XpathError::NotAFile(path.to_path_buf()))
    }
}

/// Check a byte count against [`MAX_INPUT_SIZE`].
///
/// # Examples
/// ```
/// use xpathset::config::{check_input_size, MAX_INPUT_SIZE};
///
/// assert!(check_input_size(1024).is_ok());
/// assert!(check_input_size(MAX_INPUT_SIZE + 1).is_err());
/// ```
pub fn check_input_size(size: u64) -> Result<()> {
    if size > MAX_INPUT_SIZE {
        return Err(XpathError::InputTooLarge {
            size,
            limit: MAX_INPUT_SIZE,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_are_reasonable() {
        assert!(MAX_INPUT_SIZE >= 1024 * 1024, "Should allow at least 1MB");
        assert!(NODES_LIMIT >= 100_000, "Should allow realistic documents");
    }

    #[test]
    fn test_parsing_options_accept_internal_dtd() {
        let xml = r#"<!DOCTYPE root [<!ENTITY who "world">]><root>&who;</root>"#;
        let doc = roxmltree::Document::parse_with_options(xml, parsing_options()).unwrap();
        assert_eq!(doc.root_element().text(), Some("world"));
    }

    #[test]
    fn test_parsing_options_do_not_resolve_external_entities() {
        let xml = r#"<!DOCTYPE root [<!ENTITY ext SYSTEM "file:///etc/passwd">]><root>&ext;</root>"#;
        let parsed = roxmltree::Document::parse_with_options(xml, parsing_options());
        if let Ok(doc) = parsed {
            let text = doc.root_element().text().unwrap_or_default();
            assert!(!text.contains("root:"));
        }
    }

    #[test]
    fn test_check_input_size() {
        assert!(check_input_size(0).is_ok());
        assert!(check_input_size(MAX_INPUT_SIZE).is_ok());
        assert!(matches!(
            check_input_size(MAX_INPUT_SIZE + 1),
            Err(XpathError::InputTooLarge { .. })
        ));
    }

    #[test]
    fn test_validate_input_path() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("doc.xml");
        std::fs::write(&file, "<xml/>").unwrap();

        assert!(validate_input_path(&file).is_ok());
        assert!(validate_input_path(dir.path()).is_err());
        assert!(validate_input_path(&dir.path().join("missing.xml")).is_err());
    }
}
