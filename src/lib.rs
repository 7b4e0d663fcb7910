//! Convert ASCII legacy VTK files into binary VTK files.
//!
//! Eight fixed conversions are supported, one per combination of dataset
//! kind (image data, polydata, structured grid, unstructured grid) and
//! binary target (the binary flavor of the legacy `.vtk` container, or the
//! XML container with base64 encoded data arrays). Parsing and
//! serialization are delegated to [`vtkio`]; this crate contributes the
//! mode table, the pipelines and the CLI contract.
//!
//! # Examples
//!
//! Convert an ASCII polydata file to a binary `.vtp` file (mode 4):
//!
//! ```no_run
//! use std::path::Path;
//! use vtk2binary::{convert, BinaryFormat, DatasetKind, Mode};
//!
//! let mode = Mode::new(DatasetKind::PolyData, BinaryFormat::Xml);
//! convert(mode, Path::new("mesh.vtk"), Path::new("mesh.vtp"))?;
//! # Ok::<(), vtk2binary::Error>(())
//! ```

pub mod mode;
pub mod pipeline;
pub mod summary;

use std::fmt;
use std::path::{Path, PathBuf};

pub use mode::{BinaryFormat, DatasetKind, Mode};
pub use summary::{summarize, Summary};

use pipeline::{BinaryWriter, LegacyReader};

/// Error type for conversion operations.
#[derive(Debug)]
pub enum Error {
    /// The mode code is not one of the eight defined conversions.
    InvalidMode(u8),
    /// The input file is missing, unreadable or not a legacy VTK file.
    Read {
        path: PathBuf,
        kind: DatasetKind,
        source: vtkio::Error,
    },
    /// The input parsed, but holds a different kind of dataset.
    KindMismatch {
        path: PathBuf,
        expected: DatasetKind,
        found: &'static str,
    },
    /// The output file name contradicts the XML container selected by the
    /// mode.
    ExtensionMismatch {
        path: PathBuf,
        expected: &'static str,
    },
    /// The output could not be serialized or written.
    Write {
        path: PathBuf,
        format: BinaryFormat,
        source: vtkio::Error,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidMode(code) => {
                write!(f, "invalid mode code {} (expected 1-8)", code)
            }
            Error::Read { path, kind, .. } => {
                write!(f, "failed to read {} as ASCII {}", path.display(), kind)
            }
            Error::KindMismatch {
                path,
                expected,
                found,
            } => write!(
                f,
                "{} holds a {} dataset, expected {}",
                path.display(),
                found,
                expected
            ),
            Error::ExtensionMismatch { path, expected } => write!(
                f,
                "output {} must use the .{} extension for this XML output",
                path.display(),
                expected
            ),
            Error::Write { path, format, .. } => {
                write!(f, "failed to write {} output to {}", format, path.display())
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Read { source, .. } | Error::Write { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Run the conversion selected by `mode` on the file at `input`, writing
/// the result to `output`.
///
/// Reads with the legacy ASCII reader and writes with the binary writer
/// selected by the mode. Either fully succeeds or reports exactly one
/// failure; no output file is created when the read fails.
pub fn convert(mode: Mode, input: &Path, output: &Path) -> Result<(), Error> {
    pipeline::run(&LegacyReader, &BinaryWriter, mode, input, output)
}

/// Look up the conversion for `code` and run it.
///
/// Fails with [`Error::InvalidMode`] before any file I/O when the code is
/// outside `1..=8`. See [`Mode::from_code`] for the code table.
pub fn convert_code(code: u8, input: &Path, output: &Path) -> Result<(), Error> {
    pipeline::dispatch(&LegacyReader, &BinaryWriter, code, input, output)
}
