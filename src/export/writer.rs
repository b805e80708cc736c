//! CSV export loop.
//!
//! Writes the `EPSG Code,PROJ Definition` header, then one row per code that
//! resolves, in ascending code order. Standard CSV quoting applies to
//! definitions containing commas (for example `+towgs84=...`).

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use csv::Writer;
use log::{debug, trace};

use crate::app::log_progress;
use crate::config::{CSV_HEADERS, PROGRESS_INTERVAL};
use crate::error_handling::{ExportError, ResolveError};
use crate::refine::Refiner;
use crate::resolver::{normalize_definition, Resolver};

use super::types::{CodeRange, ExportRecord, ExportStats};

/// Resolves codes and writes them as CSV rows.
pub struct Exporter<'a, R: Resolver + ?Sized> {
    resolver: &'a R,
    refiner: Option<&'a Refiner>,
}

impl<'a, R: Resolver + ?Sized> Exporter<'a, R> {
    /// Creates an exporter that writes definitions exactly as resolved.
    pub fn new(resolver: &'a R) -> Self {
        Exporter {
            resolver,
            refiner: None,
        }
    }

    /// Runs every resolved definition through `refiner` before writing it.
    pub fn with_refiner(mut self, refiner: &'a Refiner) -> Self {
        self.refiner = Some(refiner);
        self
    }

    /// Resolves one code into the row that would be written for it.
    ///
    /// # Errors
    ///
    /// Returns the resolver's [`ResolveError`] for unknown codes and
    /// unusable definitions. A refined definition is checked again, so a
    /// rewrite that drops `+proj=` is reported as unsupported.
    pub fn resolve_record(&self, code: u32) -> Result<ExportRecord, ResolveError> {
        let crs = self.resolver.resolve(code)?;
        let definition = self.resolver.to_proj_string(&crs)?;
        let definition = match self.refiner {
            Some(refiner) => {
                let rewrites = refiner.rewrites_for(code);
                if rewrites > 0 {
                    trace!("Applying {} code rewrite(s) to EPSG:{}", rewrites, code);
                }
                normalize_definition(code, &refiner.refine(&definition, code))?
            }
            None => definition,
        };
        Ok(ExportRecord { code, definition })
    }

    /// Writes the export for `range` to `writer`.
    ///
    /// Resolution failures never abort the loop: the code is skipped and
    /// counted under its [`SkipReason`](crate::SkipReason).
    ///
    /// # Errors
    ///
    /// Fails on the first header or row write error and when the final flush
    /// fails. Rows already handed to `writer` are not rolled back.
    pub fn export_to_writer<W: Write>(
        &self,
        range: CodeRange,
        writer: W,
    ) -> Result<ExportStats, ExportError> {
        let mut csv_writer = Writer::from_writer(writer);
        csv_writer.write_record(CSV_HEADERS)?;

        debug!(
            "Scanning {} candidate codes [{}, {}) with the {} resolver",
            range.code_count(),
            range.start(),
            range.end(),
            self.resolver.name()
        );

        let start_time = Instant::now();
        let mut stats = ExportStats::default();

        for code in range.iter() {
            stats.scanned += 1;

            match self.resolve_record(code) {
                Ok(record) => {
                    let code_field = record.code.to_string();
                    csv_writer.write_record([code_field.as_str(), record.definition.as_str()])?;
                    stats.written += 1;
                }
                Err(e) => {
                    trace!("Skipping EPSG:{}: {}", e.code(), e);
                    stats.skipped.increment(e.skip_reason());
                }
            }

            if (code - range.start() + 1) % PROGRESS_INTERVAL == 0 {
                log_progress(start_time, stats.scanned, stats.written, range.code_count());
            }
        }

        csv_writer.flush()?;
        Ok(stats)
    }

    /// Writes the export for `range` to the file at `output_path`.
    ///
    /// The file is created (or truncated) only after the range has been
    /// validated, and stays open until the loop finishes.
    pub fn export_to_path(
        &self,
        range: CodeRange,
        output_path: &Path,
    ) -> Result<ExportStats, ExportError> {
        let file = File::create(output_path).map_err(|source| ExportError::CreateOutputError {
            path: output_path.to_path_buf(),
            source,
        })?;
        self.export_to_writer(range, file)
    }
}

/// Exports every code in `[range_start, range_end)` that `resolver` can
/// resolve to a CSV file at `output_path`.
///
/// # Errors
///
/// Returns `ExportError::InvalidRange` before touching the file when
/// `range_start < 1` or `range_end <= range_start`, and propagates failures
/// to create or flush the output file.
///
/// # Example
///
/// ```no_run
/// use epsg_export::export::run;
/// use epsg_export::resolver::BuiltinResolver;
/// use std::path::Path;
///
/// let stats = run(&BuiltinResolver::new(), 4000, 5000, Path::new("geographic.csv"))?;
/// println!("{} rows written", stats.written);
/// # Ok::<(), epsg_export::ExportError>(())
/// ```
pub fn run<R: Resolver + ?Sized>(
    resolver: &R,
    range_start: u32,
    range_end: u32,
    output_path: &Path,
) -> Result<ExportStats, ExportError> {
    let range = CodeRange::new(range_start, range_end)?;
    Exporter::new(resolver).export_to_path(range, output_path)
}
