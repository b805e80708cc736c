//! Resolver and refiner initialization.

use std::path::Path;

use log::info;

use crate::config::{Config, ResolverSource};
use crate::error_handling::InitializationError;
use crate::refine::Refiner;
use crate::resolver::{BuiltinResolver, InitFileResolver, Resolver};

/// Builds the resolver selected by `config.source`.
///
/// # Errors
///
/// Returns `InitializationError::MissingDefinitionsPath` when the init-file
/// source is selected without a path, and
/// `InitializationError::DefinitionsFileError` when that file cannot be read.
pub fn init_resolver(config: &Config) -> Result<Box<dyn Resolver>, InitializationError> {
    match config.source {
        ResolverSource::Builtin => {
            info!("Using the built-in EPSG database");
            Ok(Box::new(BuiltinResolver::new()))
        }
        ResolverSource::InitFile => {
            let path = config
                .definitions
                .as_deref()
                .ok_or(InitializationError::MissingDefinitionsPath)?;
            let resolver = InitFileResolver::load(path)?;
            info!(
                "Loaded {} definitions from {}",
                resolver.len(),
                path.display()
            );
            Ok(Box::new(resolver))
        }
    }
}

/// Loads the refinements file, if one is configured.
///
/// # Errors
///
/// Returns `InitializationError::RefinementsError` if the file cannot be read
/// or contains an invalid rule.
pub fn init_refiner(path: Option<&Path>) -> Result<Option<Refiner>, InitializationError> {
    let Some(path) = path else {
        return Ok(None);
    };
    let refiner = Refiner::load(path)?;
    info!("Loaded PROJ refinements from {}", path.display());
    Ok(Some(refiner))
}
