//! Content embedder.
//!
//! Turns a dev-server URL or a located static bundle into a single
//! renderable document string for the host surface. Three shapes:
//!
//! - reference: an iframe pointing at a URL, loading delegated to the
//!   host;
//! - srcdoc: an iframe carrying a full document in its `srcdoc`
//!   attribute;
//! - inline: stylesheet and scripts read off disk and spliced into one
//!   self-contained document, so the host never has to resolve relative
//!   asset paths.
//!
//! This layer is blind to the embedded application; it guarantees a
//! renderable string, nothing about what the dashboard does inside it.

use std::fs;
use std::path::Path;

use crate::assets::BundleArtifacts;
use crate::error::{GlobedockError, GlobedockResult};

/// Host-surface presentation knobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedOptions {
    /// Document title.
    pub title: String,
    /// Embed height in CSS pixels. The host renders at a fixed height,
    /// non-scrolling.
    pub height: u32,
    /// Page background, matching the dashboard's own chrome so the
    /// surrounding surface never flashes a different color.
    pub background: String,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self {
            title: "Globe Dashboard".to_string(),
            height: 900,
            background: "#000000".to_string(),
        }
    }
}

/// Escape text for use inside an HTML attribute or text node.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Wrapper document with an iframe pointing at `url`.
pub fn reference_document(url: &str, opts: &EmbedOptions) -> String {
    format!(
        r#"<!doctype html>
<html lang="en" style="background-color: {bg};">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{title}</title>
  </head>
  <body style="background-color: {bg}; margin: 0; padding: 0;">
    <iframe src="{url}" style="width: 100%; height: {height}px; border: none; background-color: {bg};" scrolling="no"></iframe>
  </body>
</html>
"#,
        bg = opts.background,
        title = escape_html(&opts.title),
        url = escape_html(url),
        height = opts.height,
    )
}

/// Wrapper document with `document` escaped into an iframe `srcdoc`
/// attribute. Useful when the host surface accepts only a single
/// top-level document but the content must stay sandboxed.
pub fn srcdoc_document(document: &str, opts: &EmbedOptions) -> String {
    format!(
        r#"<!doctype html>
<html lang="en" style="background-color: {bg};">
  <head>
    <meta charset="UTF-8" />
    <title>{title}</title>
  </head>
  <body style="background-color: {bg}; margin: 0; padding: 0;">
    <iframe srcdoc="{srcdoc}" style="width: 100%; height: {height}px; border: none; background-color: {bg};" scrolling="no"></iframe>
  </body>
</html>
"#,
        bg = opts.background,
        title = escape_html(&opts.title),
        srcdoc = escape_html(document),
        height = opts.height,
    )
}

/// Self-contained document with the bundle's stylesheet and scripts
/// spliced in verbatim.
///
/// The globe chunk loads before the entry script, matching the order
/// the built `index.html` uses. Script and style payloads are inserted
/// as-is; an unreadable file fails loudly instead of embedding an empty
/// block.
pub fn inline_document(artifacts: &BundleArtifacts, opts: &EmbedOptions) -> GlobedockResult<String> {
    let stylesheet = read_artifact(&artifacts.stylesheet)?;
    let globe_script = read_artifact(&artifacts.globe_script)?;
    let main_script = read_artifact(&artifacts.main_script)?;

    Ok(format!(
        r#"<!doctype html>
<html lang="en" style="background-color: {bg};">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{title}</title>
    <style>
{stylesheet}
    </style>
  </head>
  <body style="background-color: {bg}; margin: 0; padding: 0;">
    <div id="root"></div>
    <script type="module">
{globe_script}
    </script>
    <script type="module">
{main_script}
    </script>
  </body>
</html>
"#,
        bg = opts.background,
        title = escape_html(&opts.title),
    ))
}

fn read_artifact(path: &Path) -> GlobedockResult<String> {
    fs::read_to_string(path).map_err(|source| GlobedockError::AssetRead {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_reference_document_points_at_url() {
        let doc = reference_document("http://localhost:5173/", &EmbedOptions::default());
        assert!(doc.contains(r#"<iframe src="http://localhost:5173/""#));
        assert!(doc.contains("height: 900px"));
        assert!(doc.contains(r#"scrolling="no""#));
    }

    #[test]
    fn test_reference_document_escapes_url() {
        let doc = reference_document(
            "http://localhost:5173/?a=1&b=\"x\"",
            &EmbedOptions::default(),
        );
        assert!(doc.contains("a=1&amp;b=&quot;x&quot;"));
        assert!(!doc.contains("b=\"x\""));
    }

    #[test]
    fn test_srcdoc_document_escapes_inner_markup() {
        let inner = r#"<html><body class="dark">1 & 2</body></html>"#;
        let doc = srcdoc_document(inner, &EmbedOptions::default());
        assert!(doc.contains("srcdoc=\"&lt;html&gt;"));
        assert!(doc.contains("class=&quot;dark&quot;"));
        assert!(doc.contains("1 &amp; 2"));
    }

    #[test]
    fn test_inline_document_contains_literal_payloads() {
        let dir = TempDir::new().unwrap();
        let stylesheet = dir.path().join("index-a.css");
        let globe = dir.path().join("globe-a.js");
        let main = dir.path().join("index-a.js");
        fs::write(&stylesheet, "body { background: #000; }").unwrap();
        fs::write(&globe, "export const globe = 1;").unwrap();
        fs::write(&main, "import './globe';").unwrap();

        let artifacts = BundleArtifacts {
            entry: dir.path().join("index.html"),
            main_script: main,
            globe_script: globe,
            stylesheet,
        };

        let doc = inline_document(&artifacts, &EmbedOptions::default()).unwrap();
        assert!(doc.contains("body { background: #000; }"));
        assert!(doc.contains("export const globe = 1;"));
        assert!(doc.contains("import './globe';"));
        assert!(doc.contains(r#"<div id="root"></div>"#));

        // Globe chunk must come before the entry script.
        let globe_at = doc.find("export const globe").unwrap();
        let main_at = doc.find("import './globe'").unwrap();
        assert!(globe_at < main_at);
    }

    #[test]
    fn test_inline_document_fails_loudly_on_unreadable_asset() {
        let dir = TempDir::new().unwrap();
        let stylesheet = dir.path().join("index-a.css");
        fs::write(&stylesheet, "body{}").unwrap();

        let artifacts = BundleArtifacts {
            entry: dir.path().join("index.html"),
            main_script: dir.path().join("index-gone.js"),
            globe_script: dir.path().join("globe-gone.js"),
            stylesheet,
        };

        let err = inline_document(&artifacts, &EmbedOptions::default()).unwrap_err();
        assert!(matches!(err, GlobedockError::AssetRead { .. }));
    }

    #[test]
    fn test_custom_title_is_escaped() {
        let opts = EmbedOptions {
            title: "Globe <Dashboard> & Friends".to_string(),
            ..EmbedOptions::default()
        };
        let doc = reference_document("http://localhost:5173/", &opts);
        assert!(doc.contains("<title>Globe &lt;Dashboard&gt; &amp; Friends</title>"));
    }
}
