// crates/algokit-cli/src/i18n.rs
// ============================================================================
// Module: CLI Message Catalog
// Description: Message catalog and substitution utilities for the CLI.
// Purpose: Keep every user-facing string in one place.
// Dependencies: Standard library collections.
// ============================================================================

//! ## Overview
//! The algokit CLI stores user-facing strings in a small catalog so wording
//! stays consistent across commands. All runtime output is routed through the
//! [`t!`](crate::t) macro.
//!
//! ## Invariants
//! - The catalog is initialized once and read-only thereafter.
//! - Missing keys fall back to the key itself.
//! - Placeholders are substituted in argument order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// SECTION: Types
// ============================================================================

/// A formatted message argument captured by the [`macro@crate::t`] macro.
#[derive(Clone)]
pub struct MessageArg {
    /// The placeholder name used in message templates (e.g., `"path"`).
    pub key: &'static str,
    /// The formatted value substituted for this placeholder.
    pub value: String,
}

impl MessageArg {
    /// Constructs a new [`MessageArg`] from a key and displayable value.
    #[must_use]
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// Static catalog entries.
const CATALOG_ITEMS: &[(&str, &str)] = &[
    ("main.version", "algokit {version}"),
    ("output.stream.stdout", "stdout"),
    ("output.stream.stderr", "stderr"),
    ("output.write_failed", "Failed to write to {stream}: {error}"),
    ("output.json_failed", "Failed to serialize output: {error}"),
    ("input.read_failed", "Failed to read {source}: {error}"),
    ("input.too_large", "Refusing to read {source}: more than {limit} bytes."),
    ("input.not_utf8", "Input from {source} is not valid utf-8."),
    ("input.stdin", "stdin"),
    ("config.load_failed", "Failed to load config: {error}"),
    ("config.validate.ok", "Config valid."),
    ("logging.init_failed", "Failed to initialize logging: {error}"),
    ("parse.integer", "Line {line}: expected an integer, found {token}."),
    ("parse.number", "Token {token} is not a number."),
    ("parse.missing_count", "Input must start with the number of sites."),
    ("parse.pair", "Line {line}: expected two site indices."),
    ("parse.transaction", "Line {line}: {error}"),
    ("algorithm.failed", "{error}"),
    ("eval.missing", "No expression given."),
    ("eval.failed", "Could not evaluate expression: {error}"),
    ("eval.result", "{value}"),
    ("union_find.joined", "{p} {q}"),
    ("union_find.count", "{count} components"),
    ("search.count", "{count}"),
    ("frequency.max", "{word} {count}"),
    ("frequency.none", "No words of length {min_length} or more."),
    ("frequency.summary", "distinct = {distinct}, words = {words}"),
    ("graph.path", "{source} to {target}: {path}"),
    ("graph.path.weighted", "{source} to {target} ({distance}): {path}"),
    ("graph.path.none", "{source} to {target}: not connected"),
    ("graph.components.count", "{count} components"),
    ("graph.cycle.found", "cycle: {cycle}"),
    ("graph.cycle.none", "no cycle"),
    ("graph.bipartite.yes", "bipartite"),
    ("graph.bipartite.no", "not bipartite, odd cycle: {cycle}"),
    ("graph.bipartite.color", "{vertex}: {color}"),
    ("graph.topological.none", "Graph has a directed cycle; no topological order exists."),
    ("graph.mst.weight", "{weight}"),
    ("graph.negative_cycle", "negative cycle: {cycle}"),
    ("graph.undirected_requires_dijkstra", "--undirected is only supported with dijkstra."),
    ("graph.routes.unknown", "{name} is not in the database."),
    ("graph.routes.none", "{name}: not connected to {source}"),
    ("graph.routes.path", "{name} ({degrees}): {path}"),
];

// ============================================================================
// SECTION: Translation
// ============================================================================

/// Looks up `key` in the catalog while substituting `args`.
#[must_use]
pub fn translate(key: &str, args: Vec<MessageArg>) -> String {
    let template = catalog().get(key).copied().unwrap_or(key);
    if args.is_empty() {
        return template.to_string();
    }

    let mut result = template.to_string();
    for arg in args {
        let placeholder = format!("{{{}}}", arg.key);
        result = result.replace(&placeholder, &arg.value);
    }
    result
}

/// Returns the static catalog used by the CLI.
fn catalog() -> &'static HashMap<&'static str, &'static str> {
    static CATALOG: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

    CATALOG.get_or_init(|| CATALOG_ITEMS.iter().copied().collect())
}

// ============================================================================
// SECTION: Macro
// ============================================================================

/// Formats a catalog message from a key and named arguments.
///
/// # Arguments
///
/// - `$key` must match a catalog entry.
/// - Named arguments are substituted into `{placeholder}` positions.
#[macro_export]
macro_rules! t {
    ($key:literal $(, $name:ident = $value:expr )* $(,)?) => {{
        let args = ::std::vec![
            $(
                $crate::i18n::MessageArg::new(stringify!($name), $value.to_string()),
            )*
        ];
        $crate::i18n::translate($key, args)
    }};
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::MessageArg;
    use super::translate;

    #[test]
    fn substitutes_placeholders() {
        let message = translate("union_find.count", vec![MessageArg::new("count", "2")]);
        assert_eq!(message, "2 components");
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(translate("no.such.key", Vec::new()), "no.such.key");
    }

    #[test]
    fn macro_formats_named_arguments() {
        let message = crate::t!("graph.path.none", source = 0, target = 7);
        assert_eq!(message, "0 to 7: not connected");
    }
}
