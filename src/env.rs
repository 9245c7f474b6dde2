//! Environment-variable convenience entry points.
//!
//! Thin wrappers that fetch a DSN from the process environment and hand it
//! to the parser. Each `*_with` variant takes an injected lookup so callers
//! and tests can parse against any key→string store without touching real
//! process state.

use std::env;

use crate::error::DsnError;
use crate::parser::parse_as;
use crate::result::{FromDsn, ParseResult};

/// Parse the DSN held in the environment variable `name`.
///
/// # Errors
///
/// Returns [`DsnError::EnvNotFound`] when the variable is absent or empty,
/// or [`DsnError::Malformed`] when its value does not parse.
pub fn parse_environ(name: &str) -> Result<ParseResult, DsnError> {
    parse_environ_as(name)
}

/// Like [`parse_environ`] but producing a caller-supplied result type.
pub fn parse_environ_as<R: FromDsn>(name: &str) -> Result<R, DsnError> {
    parse_environ_with(name, |key| env::var(key).ok())
}

/// Parse the DSN returned for `name` by an injected environment accessor.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
///
/// let vars = HashMap::from([("FOO_DSN".to_string(), "scheme://host/db".to_string())]);
/// let r: dsnparse::ParseResult =
///     dsnparse::parse_environ_with("FOO_DSN", |key| vars.get(key).cloned()).unwrap();
/// assert_eq!(r.host(), Some("host"));
/// ```
pub fn parse_environ_with<R, F>(name: &str, lookup: F) -> Result<R, DsnError>
where
    R: FromDsn,
    F: Fn(&str) -> Option<String>,
{
    let dsn = fetch(name, &lookup)?;
    parse_as(&dsn)
}

/// Parse `NAME` plus the numbered series `NAME_1, NAME_2, …` from the
/// process environment.
///
/// The series starts at `NAME_0` when that spelling is present and stops at
/// the first gap, so the numbered variables must be consecutive.
///
/// # Errors
///
/// Returns [`DsnError::Malformed`] when any found value does not parse. A
/// missing variable is not an error here; it just ends the series.
pub fn parse_environs(name: &str) -> Result<Vec<ParseResult>, DsnError> {
    parse_environs_with(name, |key| env::var(key).ok())
}

/// Like [`parse_environs`] but against an injected environment accessor.
pub fn parse_environs_with<F>(name: &str, lookup: F) -> Result<Vec<ParseResult>, DsnError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut results = Vec::new();
    if let Ok(dsn) = fetch(name, &lookup) {
        results.push(crate::parse(&dsn)?);
    }

    let mut num = if lookup(&format!("{name}_0")).is_some() { 0 } else { 1 };
    while let Ok(dsn) = fetch(&format!("{name}_{num}"), &lookup) {
        results.push(crate::parse(&dsn)?);
        num += 1;
    }

    Ok(results)
}

/// Fetch a non-empty value for `name`, or fail with `EnvNotFound`.
fn fetch<F>(name: &str, lookup: &F) -> Result<String, DsnError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| DsnError::env_not_found(name))
}
