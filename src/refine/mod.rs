//! PROJ string refinement.
//!
//! Some exported definitions need adjustments before downstream tooling can
//! compare them: a stable parameter order, parameters appended to every
//! definition, unit rewrites, and code-specific fixes. A [`Refiner`] applies
//! those rules, loaded from a JSON file:
//!
//! ```json
//! {
//!   "order": ["proj", "lat_0", "lon_0", "k", "x_0", "y_0", "datum", "units"],
//!   "global_additions": "+no_defs",
//!   "unit_refinements": [{ "regex": "\\+units=m\\b", "replacement": "+units=m" }],
//!   "code_refinements": [
//!     { "regex": "\\+towgs84=\\S+", "replacement": "", "codes": "2000-2010,4326" }
//!   ]
//! }
//! ```

mod codes;
mod ordering;

use std::ops::RangeInclusive;
use std::path::Path;

use regex::Regex;
use serde::Deserialize;

use crate::error_handling::RefinementError;

pub use codes::parse_code_list;
pub use ordering::reorder;

/// A regex rewrite as written in the rules file.
#[derive(Debug, Clone, Deserialize)]
pub struct RewriteRule {
    /// Pattern matched against the whole definition
    pub regex: String,
    /// Replacement text, `$1`-style group references allowed
    pub replacement: String,
}

/// A regex rewrite restricted to a list of codes.
#[derive(Debug, Clone, Deserialize)]
pub struct CodeRewriteRule {
    /// Pattern matched against the whole definition
    pub regex: String,
    /// Replacement text, `$1`-style group references allowed
    pub replacement: String,
    /// Comma separated codes and inclusive `a-b` ranges
    pub codes: String,
}

/// Raw contents of a refinements file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RefinementRules {
    /// Parameter names (without `+`) emitted first, in this order
    #[serde(default)]
    pub order: Vec<String>,
    /// Text appended to every definition
    #[serde(default)]
    pub global_additions: String,
    /// Rewrites applied to every definition
    #[serde(default)]
    pub unit_refinements: Vec<RewriteRule>,
    /// Rewrites applied only to the listed codes
    #[serde(default)]
    pub code_refinements: Vec<CodeRewriteRule>,
}

#[derive(Debug, Clone)]
struct Rewrite {
    pattern: Regex,
    replacement: String,
}

impl Rewrite {
    fn compile(regex: &str, replacement: &str) -> Result<Self, RefinementError> {
        let pattern = Regex::new(regex).map_err(|source| RefinementError::RegexError {
            pattern: regex.to_string(),
            source,
        })?;
        Ok(Rewrite {
            pattern,
            replacement: replacement.to_string(),
        })
    }

    fn apply(&self, definition: &str) -> String {
        self.pattern
            .replace_all(definition, self.replacement.as_str())
            .into_owned()
    }
}

#[derive(Debug, Clone)]
struct CodeRewrite {
    codes: Vec<RangeInclusive<u32>>,
    rewrite: Rewrite,
}

impl CodeRewrite {
    fn covers(&self, code: u32) -> bool {
        self.codes.iter().any(|range| range.contains(&code))
    }
}

/// Compiled refinement rules.
#[derive(Debug, Clone, Default)]
pub struct Refiner {
    order: Vec<String>,
    global_additions: String,
    unit_rewrites: Vec<Rewrite>,
    code_rewrites: Vec<CodeRewrite>,
}

impl Refiner {
    /// Compiles `rules`, validating every regex and code list up front.
    ///
    /// # Errors
    ///
    /// Returns `RefinementError::RegexError` or `RefinementError::CodeListError`
    /// for the first invalid rule.
    pub fn from_rules(rules: RefinementRules) -> Result<Self, RefinementError> {
        let unit_rewrites = rules
            .unit_refinements
            .iter()
            .map(|rule| Rewrite::compile(&rule.regex, &rule.replacement))
            .collect::<Result<Vec<_>, _>>()?;

        let code_rewrites = rules
            .code_refinements
            .iter()
            .map(|rule| -> Result<CodeRewrite, RefinementError> {
                Ok(CodeRewrite {
                    codes: parse_code_list(&rule.codes)?,
                    rewrite: Rewrite::compile(&rule.regex, &rule.replacement)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Refiner {
            order: rules.order,
            global_additions: rules.global_additions.trim().to_string(),
            unit_rewrites,
            code_rewrites,
        })
    }

    /// Parses and compiles rules from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, RefinementError> {
        let rules: RefinementRules = serde_json::from_str(json)?;
        Self::from_rules(rules)
    }

    /// Reads and compiles the rules file at `path`.
    pub fn load(path: &Path) -> Result<Self, RefinementError> {
        let json = std::fs::read_to_string(path).map_err(|source| RefinementError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Number of code-specific rewrites that apply to `code`.
    pub fn rewrites_for(&self, code: u32) -> usize {
        self.code_rewrites.iter().filter(|r| r.covers(code)).count()
    }

    /// Refines the definition exported for `code`.
    ///
    /// Steps, in order: reorder parameters, append the global additions,
    /// apply unit rewrites, apply rewrites registered for `code`, then
    /// collapse whitespace and reorder again.
    pub fn refine(&self, definition: &str, code: u32) -> String {
        let mut refined = reorder(definition, &self.order);
        if !self.global_additions.is_empty() {
            refined.push(' ');
            refined.push_str(&self.global_additions);
        }

        for rewrite in &self.unit_rewrites {
            refined = rewrite.apply(&refined);
        }
        for code_rewrite in self.code_rewrites.iter().filter(|r| r.covers(code)) {
            refined = code_rewrite.rewrite.apply(&refined);
        }

        reorder(&refined, &self.order)
    }
}
