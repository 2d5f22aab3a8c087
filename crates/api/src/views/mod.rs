//! Server-rendered HTML pages.

pub mod error;
pub mod expense_form;
pub mod stats;
pub mod summary;

const BASE_STYLE: &str = "\
body { font-family: Arial; max-width: 600px; margin: 40px auto; padding: 20px; }
.form-group { margin-bottom: 15px; }
input, select { width: 100%; padding: 8px; margin-top: 5px; }
button { background: #4CAF50; color: white; padding: 10px 15px; border: none; cursor: pointer; }
.nav { margin-bottom: 20px; }
.nav a { margin-right: 15px; text-decoration: none; color: #4CAF50; }
.success { color: green; margin-top: 10px; }
.error { color: red; font-size: 18px; margin: 20px 0; }
.centered { text-align: center; }
.stats-box { background: #f5f5f5; padding: 15px; margin: 10px 0; border-radius: 5px; }
.category-item { margin: 5px 0; }
.overall { margin-top: 20px; padding-top: 15px; border-top: 2px solid #4CAF50; }
.save { background: #2196F3; border-radius: 4px; padding: 10px 20px; }
table { width: 100%; border-collapse: collapse; margin-top: 15px; }
th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }
th { background-color: #4CAF50; color: white; }
";

const NAV: &str = r#"<div class="nav">
        <a href="/">Add Expense</a>
        <a href="/stats">View Stats</a>
    </div>"#;

/// Wraps `body` in the shared page layout.
pub(crate) fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>{title}</title>
    <style>
{BASE_STYLE}    </style>
</head>
<body>
    {NAV}
{body}
</body>
</html>
"#,
        title = escape(title),
    )
}

/// Escapes text for use in HTML content and quoted attribute values.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("plain", "plain")]
    #[case("<b>", "&lt;b&gt;")]
    #[case("a & b", "a &amp; b")]
    #[case(r#"say "hi""#, "say &quot;hi&quot;")]
    #[case("it's", "it&#x27;s")]
    fn test_escape(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(escape(raw), expected);
    }

    #[test]
    fn test_page_has_navigation() {
        let html = page("Title <x>", "<p>body</p>");
        assert!(html.contains("<title>Title &lt;x&gt;</title>"));
        assert!(html.contains(r#"<a href="/stats">View Stats</a>"#));
        assert!(html.contains("<p>body</p>"));
    }
}
