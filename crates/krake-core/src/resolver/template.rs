//! Response templates
//!
//! A template is literal text with `{name}` or `{name|default}`
//! placeholders. A placeholder whose lookup misses renders its default, or
//! nothing when it has none. An unterminated `{` is kept literally.

/// Render a template, resolving placeholders through `lookup`
///
/// # Example
///
/// ```
/// use krake_core::resolver::template::render;
///
/// let text = render("Sending email to {recipients|recipients}", |_| None);
/// assert_eq!(text, "Sending email to recipients");
/// ```
pub fn render<F>(template: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let placeholder = &after[..close];
                let (name, default) = match placeholder.split_once('|') {
                    Some((name, default)) => (name, default),
                    None => (placeholder, ""),
                };
                match lookup(name) {
                    Some(value) => out.push_str(&value),
                    None => out.push_str(default),
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Placeholder names used by a template, in order of appearance
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            break;
        };
        let placeholder = &after[..close];
        names.push(placeholder.split_once('|').map_or(placeholder, |(n, _)| n));
        rest = &after[close + 1..];
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_text(name: &str) -> Option<String> {
        (name == "text").then(|| "spring sale".to_string())
    }

    #[test]
    fn test_render_value_and_missing() {
        let out = render("Creating email with {text} and layout {layoutprompt}", lookup_text);
        assert_eq!(out, "Creating email with spring sale and layout ");
    }

    #[test]
    fn test_render_default() {
        let out = render(
            "Listing emails for workspace {workspace|current workspace}",
            |_| None,
        );
        assert_eq!(out, "Listing emails for workspace current workspace");
    }

    #[test]
    fn test_render_without_placeholders() {
        assert_eq!(render("Retrieving affiliate links.", |_| None), "Retrieving affiliate links.");
    }

    #[test]
    fn test_unterminated_brace_kept() {
        assert_eq!(render("odd {text", lookup_text), "odd {text");
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(
            placeholders("Sending {recipients|recipients} via {@handler}"),
            vec!["recipients", "@handler"]
        );
        assert!(placeholders("plain").is_empty());
    }
}
