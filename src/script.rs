//! Embedding of the export record into a page.

use next_config_model::{SiteConfig, ThemeConfig};

use crate::export::ExportRecord;

/// Class the theme's scripts use to locate the fragment
pub const SCRIPT_CLASS: &str = "hexo-configurations";

/// Render the `<script>` fragment declaring `NexT` and `CONFIG`.
///
/// Never fails: unset options are left out of `CONFIG` instead.
pub fn render_config_script(
    site: &SiteConfig,
    theme: &ThemeConfig,
    version: Option<&str>,
) -> String {
    let record = ExportRecord::new(site, theme, version);
    wrap(&to_json(&record))
}

fn wrap(json: &str) -> String {
    format!(
        "<script class=\"{SCRIPT_CLASS}\">
    var NexT = window.NexT || {{}};
    var CONFIG = {json};
  </script>"
    )
}

/// Serialize `record` as JSON text that is safe inside a `<script>` element.
///
/// `<` and the JavaScript line terminators U+2028/U+2029 are written as
/// `\u` escapes, so the text still parses to the same value.
pub fn to_json(record: &ExportRecord) -> String {
    match serde_json::to_string(record) {
        Ok(json) => escape_script(&json),
        Err(e) => {
            log::error!("Failed to serialize theme config: {e}");
            "{}".to_owned()
        }
    }
}

fn escape_script(json: &str) -> String {
    let mut escaped = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' | '\u{2028}' | '\u{2029}' => {
                escaped.push_str(&format!("\\u{:04x}", c as u32));
            }
            _ => escaped.push(c),
        }
    }
    escaped
}
