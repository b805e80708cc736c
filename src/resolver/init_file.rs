//! Resolver backed by a PROJ `epsg` init file.
//!
//! The init file format is line oriented:
//!
//! ```text
//! # WGS 84
//! <4326> +proj=longlat +datum=WGS84 +no_defs  <>
//! ```
//!
//! Lines starting with `#` are comments. Entries whose header is not a
//! positive integer (such as `<metadata>`) are ignored.

use std::collections::BTreeMap;
use std::path::Path;

use log::debug;

use crate::error_handling::{InitializationError, ResolveError};
use crate::resolver::{ReferenceSystem, Resolver};

/// Resolves codes from definitions loaded out of a PROJ init file.
#[derive(Debug, Clone, Default)]
pub struct InitFileResolver {
    definitions: BTreeMap<u32, String>,
}

impl InitFileResolver {
    /// Loads and parses the init file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::DefinitionsFileError` if the file cannot be read.
    pub fn load(path: &Path) -> Result<Self, InitializationError> {
        let contents = std::fs::read_to_string(path).map_err(|source| {
            InitializationError::DefinitionsFileError {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let resolver = Self::parse(&contents);
        debug!(
            "Loaded {} definitions from {}",
            resolver.len(),
            path.display()
        );
        Ok(resolver)
    }

    /// Parses init file contents. Malformed lines are skipped; when a code
    /// appears twice the later definition wins.
    pub fn parse(contents: &str) -> Self {
        let mut definitions = BTreeMap::new();
        for (index, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match parse_entry(line) {
                Some((code, definition)) => {
                    definitions.insert(code, definition);
                }
                None => debug!("Skipping init file line {}: {}", index + 1, line),
            }
        }
        InitFileResolver { definitions }
    }

    /// Number of loaded definitions.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether no definition was loaded.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// Splits `<code> definition <>` into its parts.
fn parse_entry(line: &str) -> Option<(u32, String)> {
    let rest = line.strip_prefix('<')?;
    let (header, body) = rest.split_once('>')?;
    let code: u32 = header.trim().parse().ok()?;
    if code == 0 {
        return None;
    }
    let body = body.trim();
    let body = body.strip_suffix("<>").unwrap_or(body);
    Some((code, body.trim().to_string()))
}

impl Resolver for InitFileResolver {
    fn name(&self) -> &str {
        "init-file"
    }

    fn resolve(&self, code: u32) -> Result<ReferenceSystem, ResolveError> {
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

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# WGS 84
<4326> +proj=longlat +datum=WGS84 +no_defs  <>
# WGS 84 / Pseudo-Mercator
<3857> +proj=merc +a=6378137 +b=6378137 +lat_ts=0 +lon_0=0 +x_0=0 +y_0=0 +k=1 +units=m +nadgrids=@null +wktext +no_defs <>

<metadata> +version=9.0.0 +origin=EPSG <>
<0> +proj=longlat <>
<9999> <>
not an entry
";

    #[test]
    fn test_parse_keeps_numeric_entries() {
        let resolver = InitFileResolver::parse(SAMPLE);
        assert_eq!(resolver.len(), 3, "4326, 3857 and the empty 9999");
        assert!(resolver.resolve(4326).is_ok());
        assert!(resolver.resolve(3857).is_ok());
    }

    #[test]
    fn test_parse_strips_terminator() {
        let resolver = InitFileResolver::parse(SAMPLE);
        let crs = resolver.resolve(4326).expect("4326 should be present");
        assert_eq!(crs.proj4, "+proj=longlat +datum=WGS84 +no_defs");
        assert_eq!(crs.wkt, None);
    }

    #[test]
    fn test_zero_and_metadata_are_ignored() {
        let resolver = InitFileResolver::parse(SAMPLE);
        assert_eq!(
            resolver.resolve(0),
            Err(ResolveError::UnknownCode { code: 0 })
        );
    }

    #[test]
    fn test_empty_entry_is_unsupported() {
        let resolver = InitFileResolver::parse(SAMPLE);
        let crs = resolver.resolve(9999).expect("9999 is registered");
        assert!(matches!(
            resolver.to_proj_string(&crs),
            Err(ResolveError::UnsupportedDefinition { code: 9999, .. })
        ));
    }

    #[test]
    fn test_duplicate_code_last_wins() {
        let resolver =
            InitFileResolver::parse("<1> +proj=longlat +a=1 <>\n<1> +proj=longlat +a=2 <>\n");
        let crs = resolver.resolve(1).expect("1 should be present");
        assert_eq!(crs.proj4, "+proj=longlat +a=2");
    }

    #[test]
    fn test_entry_without_terminator() {
        assert_eq!(
            parse_entry("<2000> +proj=tmerc +k=1"),
            Some((2000, "+proj=tmerc +k=1".to_string()))
        );
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = InitFileResolver::load(Path::new("/nonexistent/proj/epsg"));
        assert!(matches!(
            result,
            Err(InitializationError::DefinitionsFileError { .. })
        ));
    }
}
