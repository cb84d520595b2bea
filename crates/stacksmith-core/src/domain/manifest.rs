//! Textual `package.json` script insertion.
//!
//! The wizard extends the `scripts` map of freshly generated manifests by
//! plain text substitution rather than a JSON round-trip: parsing and
//! re-serializing would reorder keys and reformat a file the package
//! manager just wrote. The trade-off is that a manifest with a
//! non-canonical `scripts` stanza (different spacing, single quotes) is
//! not matched; callers surface that as an error.

/// The anchor the insertion looks for - the first occurrence only.
pub const SCRIPTS_ANCHOR: &str = "\"scripts\": {";

/// Insert `script` (a literal JSON fragment like `"dev": "vite"`) as the
/// first entry of the manifest's `scripts` map.
///
/// Returns `None` when the anchor does not occur, leaving the input
/// untouched. Repeated insertion prepends each new entry above the
/// previous one.
pub fn insert_script(manifest: &str, script: &str) -> Option<String> {
    let at = manifest.find(SCRIPTS_ANCHOR)?;
    let split = at + SCRIPTS_ANCHOR.len();

    let mut updated = String::with_capacity(manifest.len() + script.len() + 6);
    updated.push_str(&manifest[..split]);
    updated.push_str("\n    ");
    updated.push_str(script);
    updated.push(',');
    updated.push_str(&manifest[split..]);
    Some(updated)
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"{
  "name": "frontend",
  "version": "0.0.0",
  "scripts": {
    "build": "tsc"
  }
}
"#;

    #[test]
    fn inserts_first_entry_after_anchor() {
        let updated = insert_script(MANIFEST, r#""dev": "vite""#).unwrap();
        assert!(updated.contains("\"scripts\": {\n    \"dev\": \"vite\","));
        // Existing entries are untouched.
        assert!(updated.contains("\"build\": \"tsc\""));
    }

    #[test]
    fn second_insertion_lands_above_the_first() {
        let once = insert_script(MANIFEST, r#""dev": "vite""#).unwrap();
        let twice = insert_script(&once, r#""preview": "vite preview""#).unwrap();

        let preview = twice.find(r#""preview": "vite preview""#).unwrap();
        let dev = twice.find(r#""dev": "vite""#).unwrap();
        assert!(preview < dev, "newest entry should sit on top");
    }

    #[test]
    fn only_the_first_anchor_is_touched() {
        let doubled = format!("{MANIFEST}{MANIFEST}");
        let updated = insert_script(&doubled, r#""dev": "vite""#).unwrap();
        assert_eq!(updated.matches(r#""dev": "vite""#).count(), 1);
    }

    #[test]
    fn missing_anchor_returns_none() {
        assert!(insert_script("{}", r#""dev": "vite""#).is_none());
        // Non-canonical spacing is a documented non-match.
        assert!(insert_script(r#"{"scripts":{}}"#, r#""dev": "vite""#).is_none());
    }
}
