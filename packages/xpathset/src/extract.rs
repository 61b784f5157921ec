//! Entry points that tie parsing, collection and output together.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use roxmltree::Document;

use crate::config::{check_input_size, parsing_options, validate_input_path, MAX_INPUT_SIZE};
use crate::error::{Result, XpathError};
use crate::path_set::{PathOrder, PathSet};

/// Parse XML text into a document using the crate's parser options.
///
/// # Errors
/// Returns `XmlParse` with the parser's diagnostic for malformed input.
pub fn parse_document(xml: &str) -> Result<Document<'_>> {
    let doc = Document::parse_with_options(xml, parsing_options())?;
    Ok(doc)
}

/// Read a whole stream into a string, bounded by [`MAX_INPUT_SIZE`].
///
/// # Errors
/// Returns `InputTooLarge` past the limit, `InvalidUtf8` for non-UTF-8
/// bytes and `Io` when the stream fails.
pub fn read_input<R: Read>(reader: R) -> Result<String> {
    let mut bytes = Vec::new();
    reader.take(MAX_INPUT_SIZE + 1).read_to_end(&mut bytes)?;

    check_input_size(u64::try_from(bytes.len()).unwrap_or(u64::MAX))?;
    tracing::debug!(bytes = bytes.len(), "Read input");

    String::from_utf8(bytes).map_err(|source| XpathError::InvalidUtf8 { source })
}

/// Collect the paths of an XML string.
///
/// # Examples
/// ```
/// use xpathset::{xpaths_from_str, PathOrder};
///
/// let set = xpaths_from_str("<a><b x='1'/><c/></a>", PathOrder::Sorted).unwrap();
/// assert_eq!(set.to_vec(), vec!["/a/b/@x", "/a/c"]);
/// ```
pub fn xpaths_from_str(xml: &str, order: PathOrder) -> Result<PathSet> {
    let doc = parse_document(xml)?;
    Ok(PathSet::from_document(&doc, order))
}

/// Collect the paths of an XML stream.
pub fn xpaths_from_reader<R: Read>(reader: R, order: PathOrder) -> Result<PathSet> {
    let xml = read_input(reader)?;
    xpaths_from_str(&xml, order)
}

/// Collect the paths of an XML file.
///
/// # Errors
/// Returns `NotAFile` when `path` is missing or a directory, otherwise the
/// errors of [`xpaths_from_reader`].
pub fn xpaths_from_file(path: &Path, order: PathOrder) -> Result<PathSet> {
    validate_input_path(path)?;
    tracing::debug!(path = %path.display(), "Reading XML file");

    let file = File::open(path)?;
    xpaths_from_reader(file, order)
}

/// Write every path of `set` to `output`, one per line.
pub fn write_xpaths<W: Write>(set: &PathSet, output: W) -> Result<()> {
    let mut writer = BufWriter::new(output);
    for path in set {
        writeln!(writer, "{path}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Parse `input` and write its sorted paths to `output`, one per line.
///
/// Nothing is written unless the whole input parses.
pub fn print_xpaths<R: Read, W: Write>(input: R, output: W) -> Result<()> {
    let set = xpaths_from_reader(input, PathOrder::Sorted)?;
    write_xpaths(&set, output)
}
