//! Resolver backed by the EPSG database compiled into the binary.

use crate::error_handling::ResolveError;
use crate::resolver::{ReferenceSystem, Resolver};

/// Resolves codes against the `crs-definitions` EPSG tables.
///
/// The database is keyed by 16-bit codes, so any code above `u16::MAX` is
/// reported as unknown without a lookup.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinResolver;

impl BuiltinResolver {
    /// Creates the resolver. The tables are static, so this is free.
    pub fn new() -> Self {
        BuiltinResolver
    }
}

impl Resolver for BuiltinResolver {
    fn name(&self) -> &str {
        "builtin"
    }

    fn resolve(&self, code: u32) -> Result<ReferenceSystem, ResolveError> {
        let key = u16::try_from(code).map_err(|_| ResolveError::UnknownCode { code })?;
        let def = crs_definitions::from_code(key).ok_or(ResolveError::UnknownCode { code })?;
        let wkt = def.wkt.trim();
        Ok(ReferenceSystem {
            code,
            proj4: def.proj4.to_string(),
            wkt: if wkt.is_empty() {
                None
            } else {
                Some(wkt.to_string())
            },
        })
    }
}
