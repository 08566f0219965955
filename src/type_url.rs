/// Authority prefix of every type URL produced by the translator.
pub const TYPE_URL_PREFIX: &str = "type.googleapis.com/";

/// Builds the type URL for a message or enum reference.
///
/// The name is used verbatim. Type references taken from a descriptor are
/// already fully qualified by the compiler and keep their leading dot, e.g.
/// `.pkg.Other` becomes `type.googleapis.com/.pkg.Other`.
pub fn type_url(type_name: &str) -> String {
    format!("{}{}", TYPE_URL_PREFIX, type_name)
}
