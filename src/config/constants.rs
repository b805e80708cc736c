//! Configuration constants.
//!
//! Defaults reproduce the behavior of the original export script: scan every
//! candidate code from 1 up to (but excluding) one million and write the result
//! to `epsg_proj_definitions.csv` in the working directory.

/// Default output CSV path
pub const DEFAULT_OUTPUT_PATH: &str = "epsg_proj_definitions.csv";

/// First code scanned by default (inclusive)
pub const DEFAULT_RANGE_START: u32 = 1;

/// End of the default scan range (exclusive)
pub const DEFAULT_RANGE_END: u32 = 1_000_000;

/// Header of the code column
pub const HEADER_EPSG_CODE: &str = "EPSG Code";
/// Header of the definition column
pub const HEADER_PROJ_DEFINITION: &str = "PROJ Definition";

/// Header row written at the top of every export, even when nothing resolves.
pub const CSV_HEADERS: [&str; 2] = [HEADER_EPSG_CODE, HEADER_PROJ_DEFINITION];

/// Number of scanned codes between two progress log lines.
/// The full default range is a million candidates, so this yields ten lines.
pub const PROGRESS_INTERVAL: u32 = 100_000;

/// Token every usable PROJ definition must carry.
pub const PROJ_KEYWORD: &str = "+proj=";
