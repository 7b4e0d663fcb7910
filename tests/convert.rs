//! End to end conversions over the sample meshes in `assets/`.

use std::path::Path;

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use vtkio::model::Vtk;

use vtk2binary::{convert_code, summarize, DatasetKind, Error};

type Result = std::result::Result<(), Error>;

/// Convert `asset` with the legacy-binary mode `code` and check that the
/// binary output re-reads to a dataset equal to the original.
fn roundtrip_legacy(asset: &str, code: u8) -> Result {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.vtk");
    convert_code(code, Path::new(asset), &out)?;

    let original = Vtk::import(asset).unwrap();
    let converted = Vtk::import(&out).unwrap();
    assert_eq!(original.data, converted.data);
    Ok(())
}

/// Convert `asset` with the XML mode `code` and check structural
/// equivalence (point and cell counts) between input and output.
fn roundtrip_xml(asset: &str, code: u8, ext: &str) -> Result {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join(format!("out.{}", ext));
    convert_code(code, Path::new(asset), &out)?;

    let original = Vtk::import(asset).unwrap();
    let converted = Vtk::import(&out).unwrap();
    let expected = summarize(&original.data).unwrap();
    assert_eq!(summarize(&converted.data).unwrap(), expected);
    Ok(())
}

#[test]
fn image_data_to_binary_vtk() -> Result {
    roundtrip_legacy("assets/image_ascii.vtk", 1)
}

#[test]
fn image_data_to_binary_vti() -> Result {
    roundtrip_xml("assets/image_ascii.vtk", 2, "vti")
}

#[test]
fn poly_data_to_binary_vtk() -> Result {
    roundtrip_legacy("assets/poly_ascii.vtk", 3)
}

#[test]
fn poly_data_to_binary_vtp() -> Result {
    roundtrip_xml("assets/poly_ascii.vtk", 4, "vtp")
}

#[test]
fn structured_grid_to_binary_vtk() -> Result {
    roundtrip_legacy("assets/sgrid_ascii.vtk", 5)
}

#[test]
fn structured_grid_to_binary_vts() -> Result {
    roundtrip_xml("assets/sgrid_ascii.vtk", 6, "vts")
}

#[test]
fn unstructured_grid_to_binary_vtk() -> Result {
    roundtrip_legacy("assets/ugrid_ascii.vtk", 7)
}

#[test]
fn unstructured_grid_to_binary_vtu() -> Result {
    roundtrip_xml("assets/ugrid_ascii.vtk", 8, "vtu")
}

#[test]
fn vtp_output_is_binary_encoded_with_expected_counts() -> Result {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("square.vtp");
    convert_code(4, Path::new("assets/poly_ascii.vtk"), &out)?;

    // The polydata sample has 4 points and 2 polygons.
    let converted = Vtk::import(&out).unwrap();
    let s = summarize(&converted.data).unwrap();
    assert_eq!(s.num_points, 4);
    assert_eq!(s.num_cells, 2);

    // Data arrays are base64 encoded binary, not ascii.
    let contents = std::fs::read_to_string(&out).unwrap();
    assert!(contents.contains("<VTKFile"));
    assert!(!contents.contains("format=\"ascii\""));
    Ok(())
}

#[test]
fn legacy_output_is_binary() -> Result {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.vtk");
    convert_code(1, Path::new("assets/image_ascii.vtk"), &out)?;

    let contents = std::fs::read(&out).unwrap();
    let header = String::from_utf8_lossy(&contents[..contents.len().min(200)]).to_string();
    assert!(header.contains("BINARY"));
    assert!(!header.contains("ASCII"));
    Ok(())
}

#[test]
fn xml_modes_reject_a_contradicting_output_extension() {
    // A `.vtk` output name must not switch an XML mode to the legacy
    // container; the mode picked the container already.
    let cases = [
        (2u8, "assets/image_ascii.vtk"),
        (4, "assets/poly_ascii.vtk"),
        (6, "assets/sgrid_ascii.vtk"),
        (8, "assets/ugrid_ascii.vtk"),
    ];
    for (code, asset) in cases {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out.vtk");
        let err = convert_code(code, Path::new(asset), &out).unwrap_err();

        assert!(matches!(err, Error::ExtensionMismatch { .. }));
        assert!(!out.exists());
    }
}

#[test]
fn xml_modes_reject_an_extensionless_output() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out");
    let err = convert_code(2, Path::new("assets/image_ascii.vtk"), &out).unwrap_err();

    assert!(matches!(err, Error::ExtensionMismatch { expected: "vti", .. }));
    assert!(!out.exists());
}

#[test]
fn legacy_modes_ignore_the_output_extension() -> Result {
    // The legacy writer is not extension driven, matching the toolkit's
    // behavior: mode 1 to a `.vti` name still writes legacy binary.
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.vti");
    convert_code(1, Path::new("assets/image_ascii.vtk"), &out)?;

    let contents = std::fs::read(&out).unwrap();
    let header = String::from_utf8_lossy(&contents[..contents.len().min(200)]).to_string();
    assert!(header.starts_with("# vtk DataFile"));
    assert!(header.contains("BINARY"));
    Ok(())
}

#[test]
fn missing_input_reports_read_failure() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.vtk");
    let err = convert_code(1, Path::new("assets/no_such_file.vtk"), &out).unwrap_err();

    assert!(matches!(err, Error::Read { .. }));
    assert!(!out.exists());
}

#[test]
fn wrong_dataset_kind_is_rejected() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.vtk");
    // Polydata pushed through the image data pipeline.
    let err = convert_code(1, Path::new("assets/poly_ascii.vtk"), &out).unwrap_err();

    assert!(matches!(
        err,
        Error::KindMismatch {
            expected: DatasetKind::ImageData,
            found: "POLYDATA",
            ..
        }
    ));
    assert!(!out.exists());
}

#[test]
fn unwritable_output_reports_write_failure() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("missing").join("out.vtk");
    let err = convert_code(1, Path::new("assets/image_ascii.vtk"), &out).unwrap_err();

    assert!(matches!(err, Error::Write { .. }));
    // The input is left as it was.
    assert!(Vtk::import("assets/image_ascii.vtk").is_ok());
}

#[test]
fn invalid_codes_create_no_output() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.vtk");
    for code in [0u8, 9, 200] {
        let err = convert_code(code, Path::new("assets/image_ascii.vtk"), &out).unwrap_err();
        assert!(matches!(err, Error::InvalidMode(c) if c == code));
    }
    assert!(!out.exists());
}
