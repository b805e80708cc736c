// Shared test helpers: stub resolvers and CSV readers.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::collections::BTreeMap;
use std::path::Path;

use epsg_export::resolver::{ReferenceSystem, Resolver};
use epsg_export::ResolveError;

/// Resolver backed by an in-memory table.
///
/// Codes listed in `broken` fail with a backend error, mimicking a resolver
/// that throws for reasons unrelated to the code being unknown.
#[derive(Default)]
pub struct StubResolver {
    definitions: BTreeMap<u32, String>,
    broken: Vec<u32>,
}

#[allow(dead_code)] // Not every test file uses every helper
impl StubResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, code: u32, definition: &str) -> Self {
        self.definitions.insert(code, definition.to_string());
        self
    }

    pub fn broken(mut self, code: u32) -> Self {
        self.broken.push(code);
        self
    }
}

impl Resolver for StubResolver {
    fn name(&self) -> &str {
        "stub"
    }

    fn resolve(&self, code: u32) -> Result<ReferenceSystem, ResolveError> {
        if self.broken.contains(&code) {
            return Err(ResolveError::Backend {
                code,
                message: "database locked".to_string(),
            });
        }
        self.definitions
            .get(&code)
            .map(|proj4| ReferenceSystem {
                code,
                proj4: proj4.clone(),
                wkt: None,
            })
            .ok_or(ResolveError::UnknownCode { code })
    }
}

/// Reads a CSV export back into (header, rows).
#[allow(dead_code)]
pub fn read_export(path: &Path) -> (Vec<String>, Vec<(u32, String)>) {
    let mut reader = csv::Reader::from_path(path).expect("Failed to open export");
    let header: Vec<String> = reader
        .headers()
        .expect("Export should have a header")
        .iter()
        .map(str::to_string)
        .collect();
    let rows: Vec<(u32, String)> = reader
        .records()
        .map(|record| {
            let record = record.expect("Row should parse");
            let code: u32 = record[0].parse().expect("Code column should be numeric");
            (code, record[1].to_string())
        })
        .collect();
    (header, rows)
}
