//! Point and cell counts for a dataset in memory.
//!
//! Used for the post-read debug report and by the round trip tests to check
//! structural equivalence between the text and binary encodings of the same
//! dataset.

use vtkio::model::{DataSet, Piece, VertexNumbers};

/// Point and cell counts of a single piece dataset.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub num_points: u64,
    pub num_cells: u64,
}

/// Count points and cells in `data`.
///
/// Structured kinds derive both counts from the extent. Unstructured kinds
/// count explicit points and cells of the first piece. Returns `None` for
/// dataset kinds outside the conversion table or for pieces that are not
/// stored inline, neither of which can come out of the legacy reader.
pub fn summarize(data: &DataSet) -> Option<Summary> {
    match data {
        DataSet::ImageData { extent, .. } | DataSet::StructuredGrid { extent, .. } => {
            Some(Summary {
                num_points: extent.num_points() as u64,
                num_cells: extent.num_cells() as u64,
            })
        }
        DataSet::PolyData { pieces, .. } => {
            let piece = inline_piece(pieces)?;
            let num_cells = [&piece.verts, &piece.lines, &piece.polys, &piece.strips]
                .into_iter()
                .flatten()
                .map(cell_count)
                .sum();
            Some(Summary {
                num_points: (piece.points.len() / 3) as u64,
                num_cells,
            })
        }
        DataSet::UnstructuredGrid { pieces, .. } => {
            let piece = inline_piece(pieces)?;
            Some(Summary {
                num_points: (piece.points.len() / 3) as u64,
                num_cells: piece.cells.types.len() as u64,
            })
        }
        _ => None,
    }
}

fn inline_piece<P>(pieces: &[Piece<P>]) -> Option<&P> {
    match pieces.first()? {
        Piece::Inline(piece) => Some(&**piece),
        _ => None,
    }
}

fn cell_count(verts: &VertexNumbers) -> u64 {
    match verts {
        VertexNumbers::Legacy { num_cells, .. } => *num_cells as u64,
        VertexNumbers::XML { offsets, .. } => offsets.len() as u64,
    }
}
