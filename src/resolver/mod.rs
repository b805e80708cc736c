//! Reference system resolution.
//!
//! A [`Resolver`] turns an EPSG code into a [`ReferenceSystem`] and derives its
//! PROJ definition string. The exporter only talks to this trait, so the
//! backing database can be the one compiled into the binary
//! ([`BuiltinResolver`]), a PROJ init file ([`InitFileResolver`]), or a test
//! stub.

mod builtin;
mod init_file;

pub use builtin::BuiltinResolver;
pub use init_file::InitFileResolver;

use crate::config::PROJ_KEYWORD;
use crate::error_handling::ResolveError;

/// Canonical reference system description returned by a resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceSystem {
    /// EPSG code the system was resolved from
    pub code: u32,
    /// PROJ definition as stored by the backend (not yet normalized)
    pub proj4: String,
    /// WKT representation, when the backend carries one
    pub wkt: Option<String>,
}

/// Maps EPSG codes to reference systems and their PROJ definitions.
pub trait Resolver {
    /// Short backend name used in log output.
    fn name(&self) -> &str;

    /// Looks up the reference system registered under `code`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::UnknownCode`] when the backend has no such code.
    fn resolve(&self, code: u32) -> Result<ReferenceSystem, ResolveError>;

    /// Derives the PROJ definition string of a resolved system.
    ///
    /// The default implementation collapses whitespace runs and rejects
    /// definitions that are empty or carry no `+proj=` parameter.
    fn to_proj_string(&self, crs: &ReferenceSystem) -> Result<String, ResolveError> {
        normalize_definition(crs.code, &crs.proj4)
    }
}

impl<R: Resolver + ?Sized> Resolver for Box<R> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn resolve(&self, code: u32) -> Result<ReferenceSystem, ResolveError> {
        (**self).resolve(code)
    }

    fn to_proj_string(&self, crs: &ReferenceSystem) -> Result<String, ResolveError> {
        (**self).to_proj_string(crs)
    }
}

/// Collapses whitespace in `definition` and checks it is a usable PROJ string.
pub fn normalize_definition(code: u32, definition: &str) -> Result<String, ResolveError> {
    let normalized = definition.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.is_empty() {
        return Err(ResolveError::UnsupportedDefinition {
            code,
            reason: "empty definition".to_string(),
        });
    }
    if !normalized
        .split(' ')
        .any(|token| token.starts_with(PROJ_KEYWORD))
    {
        return Err(ResolveError::UnsupportedDefinition {
            code,
            reason: format!("missing {PROJ_KEYWORD} parameter"),
        });
    }
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_whitespace() {
        let result = normalize_definition(4326, "  +proj=longlat   +datum=WGS84\t+no_defs \n");
        assert_eq!(
            result,
            Ok("+proj=longlat +datum=WGS84 +no_defs".to_string())
        );
    }

    #[test]
    fn test_normalize_rejects_empty() {
        let result = normalize_definition(7, "   ");
        assert!(matches!(
            result,
            Err(ResolveError::UnsupportedDefinition { code: 7, .. })
        ));
    }

    #[test]
    fn test_normalize_rejects_missing_proj() {
        let result = normalize_definition(8, "+datum=WGS84 +no_defs");
        assert!(matches!(
            result,
            Err(ResolveError::UnsupportedDefinition { code: 8, .. })
        ));
    }

    #[test]
    fn test_boxed_resolver_delegates() {
        let boxed: Box<dyn Resolver> = Box::new(InitFileResolver::parse(
            "<4326> +proj=longlat +datum=WGS84 +no_defs <>\n",
        ));
        assert_eq!(boxed.name(), "init-file");
        let crs = boxed.resolve(4326).expect("4326 should resolve");
        assert_eq!(
            boxed.to_proj_string(&crs),
            Ok("+proj=longlat +datum=WGS84 +no_defs".to_string())
        );
    }
}
