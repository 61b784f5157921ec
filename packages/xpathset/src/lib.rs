//! XPath set - Enumerate the leaf element and attribute paths of an XML document.
//!
//! Every attribute yields a path ending in `/@name`, and every element
//! with neither attributes nor child elements yields its own path. The
//! result is an immutable, duplicate-free [`PathSet`], handy for schema
//! discovery, structural diffs and test-fixture generation.
//!
//! # Example
//!
//! ```
//! use xpathset::{xpaths_from_str, PathOrder};
//!
//! let xml = "<xml><with><an attribute='foo'><element/></an></with></xml>";
//! let set = xpaths_from_str(xml, PathOrder::Sorted).unwrap();
//!
//! assert_eq!(
//!     set.to_vec(),
//!     vec!["/xml/with/an/@attribute", "/xml/with/an/element"]
//! );
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Limits and parser options
//! - [`error`]: Error types and Result alias
//! - [`xml`]: XML naming and navigation helpers
//! - [`collector`]: The tree walk that emits paths
//! - [`path_set`]: The immutable result set
//! - [`extract`]: Parse-and-collect entry points
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod collector;
pub mod config;
pub mod error;
pub mod extract;
pub mod path_set;
pub mod xml;

// Re-export main functions
pub use extract::{
    print_xpaths, write_xpaths, xpaths_from_file, xpaths_from_reader, xpaths_from_str,
};

// Re-export commonly used items
pub use error::{Result, XpathError};
pub use path_set::{PathOrder, PathSet};
