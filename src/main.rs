//! vtk2binary - convert ASCII legacy VTK files to binary VTK files.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use vtk2binary::{convert_code, mode, Error};

const MODE_TABLE: &str = "\
Modes:
  1   ImageData         ASCII .vtk to binary .vtk
  2   ImageData         ASCII .vtk to binary .vti
  3   PolyData          ASCII .vtk to binary .vtk
  4   PolyData          ASCII .vtk to binary .vtp
  5   StructuredGrid    ASCII .vtk to binary .vtk
  6   StructuredGrid    ASCII .vtk to binary .vts
  7   UnstructuredGrid  ASCII .vtk to binary .vtk
  8   UnstructuredGrid  ASCII .vtk to binary .vtu";

/// Convert an ASCII legacy VTK file to one of the binary VTK formats.
#[derive(Parser, Debug)]
#[command(name = "vtk2binary", version, about, after_help = MODE_TABLE)]
struct Args {
    /// Conversion mode (1-8), see the mode table below
    #[arg(value_name = "MODE")]
    mode: String,

    /// Input ASCII legacy VTK file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    // A non numeric mode argument becomes 0 and is rejected as an invalid
    // mode rather than as a separate parse error.
    let code = mode::parse_code(&args.mode);

    match convert_code(code, &args.input, &args.output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err @ Error::InvalidMode(_)) => {
            eprintln!("error: {}", err);
            eprintln!();
            eprintln!("{}", MODE_TABLE);
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("error: {}", err);
            let mut source = std::error::Error::source(&err);
            while let Some(cause) = source {
                eprintln!("  caused by: {}", cause);
                source = cause.source();
            }
            ExitCode::from(1)
        }
    }
}
