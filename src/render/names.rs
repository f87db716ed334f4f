//! Identifier manifest rendering.
//!
//! Renders the closed set of icon identifiers as a TypeScript union type so
//! downstream code gets compile-time checking of icon references.

/// Comment placed at the top of the generated manifest.
const GENERATED_HEADER: &str = "// This file is generated by iconsprite. Do not edit.";

/// Render the union type covering every icon identifier.
///
/// Identifiers are emitted in the order given; callers pass discovery
/// order. Each identifier is JSON-escaped into a string literal.
pub fn render_names<S: AsRef<str>>(names: &[S]) -> String {
    let mut lines = Vec::with_capacity(names.len() + 4);
    lines.push(GENERATED_HEADER.to_string());
    lines.push(String::new());
    lines.push("export type IconName =".to_string());
    for name in names {
        let literal = serde_json::to_string(name.as_ref()).unwrap();
        lines.push(format!("\t| {literal}"));
    }
    lines.push(String::new());
    lines.join("\n")
}
