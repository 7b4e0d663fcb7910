//! Conversion mode selection.
//!
//! Each mode pairs one dataset kind with one binary target format. The
//! numeric codes accepted on the command line are part of the CLI contract
//! and are stable:
//!
//! | code | kind             | output            |
//! |------|------------------|-------------------|
//! | 1    | ImageData        | binary `.vtk`     |
//! | 2    | ImageData        | binary `.vti`     |
//! | 3    | PolyData         | binary `.vtk`     |
//! | 4    | PolyData         | binary `.vtp`     |
//! | 5    | StructuredGrid   | binary `.vtk`     |
//! | 6    | StructuredGrid   | binary `.vts`     |
//! | 7    | UnstructuredGrid | binary `.vtk`     |
//! | 8    | UnstructuredGrid | binary `.vtu`     |

use std::fmt;

/// The kind of dataset stored in a legacy VTK file.
///
/// Legacy files declare their kind in the `DATASET` line. Each conversion
/// mode commits to one kind up front and rejects files of any other kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    /// A regular lattice with implicit point positions (`STRUCTURED_POINTS`).
    ImageData,
    /// Explicit points with vertex, line, polygon and strip cells.
    PolyData,
    /// A logically structured grid with explicit point positions.
    StructuredGrid,
    /// Explicit points with explicit cell connectivity.
    UnstructuredGrid,
}

impl DatasetKind {
    /// The file extension used by the XML format for this kind.
    pub fn xml_extension(&self) -> &'static str {
        match self {
            DatasetKind::ImageData => "vti",
            DatasetKind::PolyData => "vtp",
            DatasetKind::StructuredGrid => "vts",
            DatasetKind::UnstructuredGrid => "vtu",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            DatasetKind::ImageData => "ImageData",
            DatasetKind::PolyData => "PolyData",
            DatasetKind::StructuredGrid => "StructuredGrid",
            DatasetKind::UnstructuredGrid => "UnstructuredGrid",
        };
        write!(f, "{}", name)
    }
}

/// The binary container a conversion writes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryFormat {
    /// Binary flavor of the single-file legacy `.vtk` container.
    Legacy,
    /// The XML container with base64 encoded binary data arrays.
    Xml,
}

impl fmt::Display for BinaryFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BinaryFormat::Legacy => write!(f, "legacy"),
            BinaryFormat::Xml => write!(f, "XML"),
        }
    }
}

/// One of the eight supported conversions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Mode {
    pub kind: DatasetKind,
    pub format: BinaryFormat,
}

impl Mode {
    /// All conversions in code order. Codes start at 1.
    pub const ALL: [Mode; 8] = [
        Mode::new(DatasetKind::ImageData, BinaryFormat::Legacy),
        Mode::new(DatasetKind::ImageData, BinaryFormat::Xml),
        Mode::new(DatasetKind::PolyData, BinaryFormat::Legacy),
        Mode::new(DatasetKind::PolyData, BinaryFormat::Xml),
        Mode::new(DatasetKind::StructuredGrid, BinaryFormat::Legacy),
        Mode::new(DatasetKind::StructuredGrid, BinaryFormat::Xml),
        Mode::new(DatasetKind::UnstructuredGrid, BinaryFormat::Legacy),
        Mode::new(DatasetKind::UnstructuredGrid, BinaryFormat::Xml),
    ];

    pub const fn new(kind: DatasetKind, format: BinaryFormat) -> Mode {
        Mode { kind, format }
    }

    /// Look up a conversion by its CLI code.
    pub fn from_code(code: u8) -> Option<Mode> {
        match code {
            1..=8 => Some(Mode::ALL[(code - 1) as usize]),
            _ => None,
        }
    }

    /// The CLI code of this conversion. Inverse of [`Mode::from_code`].
    pub fn code(&self) -> u8 {
        let kind = match self.kind {
            DatasetKind::ImageData => 0,
            DatasetKind::PolyData => 1,
            DatasetKind::StructuredGrid => 2,
            DatasetKind::UnstructuredGrid => 3,
        };
        let format = match self.format {
            BinaryFormat::Legacy => 0,
            BinaryFormat::Xml => 1,
        };
        kind * 2 + format + 1
    }

    /// Conventional extension of the output file.
    pub fn output_extension(&self) -> &'static str {
        match self.format {
            BinaryFormat::Legacy => "vtk",
            BinaryFormat::Xml => self.kind.xml_extension(),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} to binary .{}", self.kind, self.output_extension())
    }
}

/// Parse the CLI mode argument.
///
/// Anything that does not parse as a number becomes 0, which is not a
/// valid code and is rejected downstream as an invalid mode rather than
/// as a separate parse error.
pub fn parse_code(arg: &str) -> u8 {
    arg.trim().parse().unwrap_or(0)
}
