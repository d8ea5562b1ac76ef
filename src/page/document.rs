//! Standalone HTML document wrapper for hosts that serve whole pages.

use maud::{html, PreEscaped, DOCTYPE};

/// The page background uses the brand gradient so the hero's white copy
/// stays legible without a host theme behind it.
const DOCUMENT_STYLE: &str = r#"
  html, body {
    margin: 0;
    min-height: 100%;
    font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
    background: linear-gradient(135deg, #00BFFF 0%, #0099E5 100%);
    color: #2C3E50;
  }
  .page {
    max-width: 1280px;
    margin: 0 auto;
    padding: 2rem 1rem 4rem;
  }
"#;

/// Wrap rendered fragments in a complete HTML5 document.
///
/// `title` is escaped; `body` is already markup and is spliced in as is.
pub fn wrap_document(title: &str, body: &str) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(DOCUMENT_STYLE)) }
            }
            body {
                main.page {
                    (PreEscaped(body))
                }
            }
        }
    }
    .into_string()
}
