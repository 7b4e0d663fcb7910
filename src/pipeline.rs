//! The eight read/write pipelines and their dispatcher.
//!
//! Every pipeline has the same shape: fully materialize a dataset of the
//! mode's kind from an ASCII legacy file, then serialize it once into the
//! mode's binary container. Reading and writing are small capability traits
//! so the dispatch logic can be exercised without touching the filesystem.

use std::path::Path;

use log::debug;
use vtkio::model::{DataSet, Vtk};

use crate::mode::{BinaryFormat, DatasetKind, Mode};
use crate::summary::summarize;
use crate::Error;

/// Reads a text encoded dataset of a known kind into memory.
pub trait ReadDataset {
    type Dataset;

    fn read_dataset(&self, kind: DatasetKind, path: &Path) -> Result<Self::Dataset, Error>;
}

/// Serializes an in-memory dataset into a binary container.
pub trait WriteDataset<D> {
    fn write_dataset(&self, data: D, format: BinaryFormat, path: &Path) -> Result<(), Error>;
}

/// Look up the pipeline for `code` and run it.
///
/// Codes outside `1..=8` fail with [`Error::InvalidMode`] before any file
/// is opened.
pub fn dispatch<R, W>(
    reader: &R,
    writer: &W,
    code: u8,
    input: &Path,
    output: &Path,
) -> Result<(), Error>
where
    R: ReadDataset,
    W: WriteDataset<R::Dataset>,
{
    let mode = Mode::from_code(code).ok_or(Error::InvalidMode(code))?;
    run(reader, writer, mode, input, output)
}

/// Run a single conversion: exactly one read followed by exactly one write.
///
/// There is no partial success state. A read failure returns before the
/// writer is invoked, so no output file is created for unreadable input.
pub fn run<R, W>(
    reader: &R,
    writer: &W,
    mode: Mode,
    input: &Path,
    output: &Path,
) -> Result<(), Error>
where
    R: ReadDataset,
    W: WriteDataset<R::Dataset>,
{
    let data = reader.read_dataset(mode.kind, input)?;
    writer.write_dataset(data, mode.format, output)
}

/// Reader for ASCII legacy `.vtk` files, backed by `vtkio`.
///
/// `vtkio`'s legacy parser accepts any dataset kind, so the typed-reader
/// behavior of the VTK toolkit (an image data reader rejects a polydata
/// file) is restored by checking the parsed kind against the requested one.
pub struct LegacyReader;

impl ReadDataset for LegacyReader {
    type Dataset = Vtk;

    fn read_dataset(&self, kind: DatasetKind, path: &Path) -> Result<Vtk, Error> {
        let vtk = Vtk::import(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            kind,
            source,
        })?;
        if data_set_kind(&vtk.data) != Some(kind) {
            return Err(Error::KindMismatch {
                path: path.to_path_buf(),
                expected: kind,
                found: data_set_name(&vtk.data),
            });
        }
        if let Some(s) = summarize(&vtk.data) {
            debug!(
                "read {} from {}: {} points, {} cells",
                kind,
                path.display(),
                s.num_points,
                s.num_cells
            );
        }
        Ok(vtk)
    }
}

/// Writer producing binary output in either container, backed by `vtkio`.
pub struct BinaryWriter;

impl WriteDataset<Vtk> for BinaryWriter {
    fn write_dataset(&self, data: Vtk, format: BinaryFormat, path: &Path) -> Result<(), Error> {
        // vtkio derives the XML flavor from the output extension, and a
        // `.vtk` name would switch it to the legacy container. The mode
        // picked the container already, so a contradicting name is an
        // error, never a different format.
        if format == BinaryFormat::Xml {
            if let Some(kind) = data_set_kind(&data.data) {
                let expected = kind.xml_extension();
                if path.extension().and_then(|e| e.to_str()) != Some(expected) {
                    return Err(Error::ExtensionMismatch {
                        path: path.to_path_buf(),
                        expected,
                    });
                }
            }
        }
        let result = match format {
            // Legacy binary files are conventionally big endian.
            BinaryFormat::Legacy => data.export_be(path),
            // XML data arrays come out base64 encoded, never ascii.
            BinaryFormat::Xml => data.export(path),
        };
        result.map_err(|source| Error::Write {
            path: path.to_path_buf(),
            format,
            source,
        })?;
        debug!("wrote binary {} file {}", format, path.display());
        Ok(())
    }
}

fn data_set_kind(data: &DataSet) -> Option<DatasetKind> {
    match data {
        DataSet::ImageData { .. } => Some(DatasetKind::ImageData),
        DataSet::PolyData { .. } => Some(DatasetKind::PolyData),
        DataSet::StructuredGrid { .. } => Some(DatasetKind::StructuredGrid),
        DataSet::UnstructuredGrid { .. } => Some(DatasetKind::UnstructuredGrid),
        _ => None,
    }
}

/// Name of the dataset kind as spelled in the legacy format header.
fn data_set_name(data: &DataSet) -> &'static str {
    match data {
        DataSet::ImageData { .. } => "STRUCTURED_POINTS",
        DataSet::StructuredGrid { .. } => "STRUCTURED_GRID",
        DataSet::RectilinearGrid { .. } => "RECTILINEAR_GRID",
        DataSet::PolyData { .. } => "POLYDATA",
        DataSet::UnstructuredGrid { .. } => "UNSTRUCTURED_GRID",
        DataSet::Field { .. } => "FIELD",
    }
}
