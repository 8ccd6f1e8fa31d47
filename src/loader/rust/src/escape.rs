/* src/loader/rust/src/escape.rs */

//! Escaping for the two places a load reference is embedded: an HTML
//! attribute value and a JavaScript string literal inside a `<script>` body.

/// Escape text for an HTML attribute value or text node.
pub fn escape_html(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for ch in s.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#x27;"),
      c => out.push(c),
    }
  }
  out
}

/// Escape text for the inside of a double-quoted JavaScript string that sits
/// in an inline script. Output has no surrounding quotes.
///
/// JSON string escaping covers quotes, backslashes and control characters.
/// `<`, `>` and `&` become `\u` escapes so the HTML parser never sees a
/// `</script` or `<!--` in the script body. U+2028/U+2029 are escaped for
/// engines that treat them as line terminators inside string literals.
pub fn escape_js_string(s: &str) -> String {
  // Serializing a &str cannot fail
  let quoted = serde_json::to_string(s).unwrap_or_default();
  let inner = quoted.get(1..quoted.len().saturating_sub(1)).unwrap_or_default();

  let mut out = String::with_capacity(inner.len());
  for ch in inner.chars() {
    match ch {
      '<' => out.push_str("\\u003c"),
      '>' => out.push_str("\\u003e"),
      '&' => out.push_str("\\u0026"),
      '\u{2028}' => out.push_str("\\u2028"),
      '\u{2029}' => out.push_str("\\u2029"),
      c => out.push(c),
    }
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn escape_html_special_chars() {
    assert_eq!(escape_html("<>&\"'"), "&lt;&gt;&amp;&quot;&#x27;");
  }

  #[test]
  fn escape_html_safe_string() {
    assert_eq!(escape_html("JS_functions/config.js"), "JS_functions/config.js");
  }

  #[test]
  fn escape_html_empty() {
    assert_eq!(escape_html(""), "");
  }

  #[test]
  fn escape_js_plain_path_unchanged() {
    assert_eq!(escape_js_string("JS_functions/inner_MID.js"), "JS_functions/inner_MID.js");
  }

  #[test]
  fn escape_js_quotes_and_backslashes() {
    assert_eq!(escape_js_string(r#"a"b\c"#), r#"a\"b\\c"#);
  }

  #[test]
  fn escape_js_breaks_script_terminator() {
    let out = escape_js_string("</script><script>alert(1)</script>");
    assert!(!out.contains("</script"));
    assert!(!out.contains('<'));
    assert_eq!(&out[..15], "\\u003c/script\\u");
  }

  #[test]
  fn escape_js_ampersand_and_comment_open() {
    assert_eq!(escape_js_string("&<!--"), "\\u0026\\u003c!--");
  }

  #[test]
  fn escape_js_line_separators() {
    assert_eq!(escape_js_string("a\u{2028}b\u{2029}"), "a\\u2028b\\u2029");
  }

  #[test]
  fn escape_js_control_chars() {
    assert_eq!(escape_js_string("a\nb"), "a\\nb");
  }
}
