//! Command-line interface for xpathset.

use std::io;
use std::path::PathBuf;

use clap::Parser;

use crate::error::{Result, XpathError};
use crate::extract::{write_xpaths, xpaths_from_file};
use crate::path_set::PathOrder;

/// Print the leaf element and attribute XPaths of an XML document, sorted.
#[derive(Parser)]
#[command(name = "xpathset")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// XML document to read
    pub file: PathBuf,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    print_command(&cli.file)
}

/// Print the sorted paths of `file` to standard output.
fn print_command(file: &std::path::Path) -> Result<()> {
    let set = xpaths_from_file(file, PathOrder::Sorted)?;
    tracing::debug!(paths = set.len(), "Writing paths");
    ignore_broken_pipe(write_xpaths(&set, io::stdout().lock()))
}

/// Treat a closed stdout (e.g. `xpathset doc.xml | head -1`) as success.
fn ignore_broken_pipe(result: Result<()>) -> Result<()> {
    match result {
        Err(XpathError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => {
            tracing::debug!("Output closed early");
            Ok(())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_file() {
        let cli = Cli::parse_from(["xpathset", "document.xml"]);
        assert_eq!(cli.file, PathBuf::from("document.xml"));
    }

    #[test]
    fn test_cli_requires_file() {
        assert!(Cli::try_parse_from(["xpathset"]).is_err());
    }

    #[test]
    fn test_cli_rejects_extra_arguments() {
        assert!(Cli::try_parse_from(["xpathset", "a.xml", "b.xml"]).is_err());
    }

    /// Writer whose reader has gone away.
    struct ClosedPipe;

    impl io::Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn test_broken_pipe_on_output_is_success() {
        let set = crate::xpaths_from_str("<a><b/><c/></a>", PathOrder::Sorted).unwrap();

        let written = write_xpaths(&set, ClosedPipe);
        assert!(matches!(&written, Err(XpathError::Io(_))));
        assert!(ignore_broken_pipe(written).is_ok());
    }

    #[test]
    fn test_other_output_errors_are_kept() {
        let denied = Err(XpathError::Io(io::Error::from(
            io::ErrorKind::PermissionDenied,
        )));
        assert!(ignore_broken_pipe(denied).is_err());
        assert!(ignore_broken_pipe(Ok(())).is_ok());
    }
}
