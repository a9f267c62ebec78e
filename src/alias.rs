//! Module id aliasing.
//!
//! Maps Netatmo module ids (MAC-address-like strings) to human-readable names
//! for the `name` tag of line protocol output.

use std::collections::BTreeMap;

/// A type alias for id-to-name mappings.
pub type AliasMap = BTreeMap<String, String>;

/// A parsed alias mapping a module id to a human-readable name.
#[derive(Debug, Clone, PartialEq)]
pub struct Alias {
    /// The module id (e.g., "02:00:00:00:00:02")
    pub id: String,
    /// The human-readable name (e.g., "Garden")
    pub name: String,
}

/// Parse an alias from a string in the format "ID=NAME".
///
/// Ids are compared case-insensitively, so they are stored lowercased as the
/// API reports them.
///
/// # Example
/// ```
/// use netatmo_weather::alias::parse_alias;
///
/// let alias = parse_alias("02:00:00:00:00:02=Garden").unwrap();
/// assert_eq!(alias.id, "02:00:00:00:00:02");
/// assert_eq!(alias.name, "Garden");
/// ```
pub fn parse_alias(src: &str) -> Result<Alias, String> {
    let (id, name) = src
        .split_once('=')
        .ok_or_else(|| "invalid alias: expected format ID=NAME".to_string())?;
    let id = id.trim();
    if id.is_empty() {
        return Err("invalid alias: empty id".into());
    }
    let name = name.trim();
    if name.is_empty() {
        return Err("invalid alias: empty name".into());
    }
    Ok(Alias {
        id: id.to_lowercase(),
        name: name.into(),
    })
}

/// Convert a slice of Alias values into an AliasMap.
pub fn to_map(aliases: &[Alias]) -> AliasMap {
    aliases
        .iter()
        .map(|a| (a.id.clone(), a.name.clone()))
        .collect()
}

/// The alias for `id`, or the id itself.
pub fn resolve_name<'a>(id: &'a str, aliases: &'a AliasMap) -> &'a str {
    aliases
        .get(&id.to_lowercase())
        .map(String::as_str)
        .unwrap_or(id)
}
