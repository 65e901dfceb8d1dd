//! GitHub-flavored markdown anchor/slug generation for section links.

/// Generate a table-of-contents link for a section name.
pub fn render_toc_link(text: &str) -> String {
    format!("[{}](#{})", text, github_slug(text))
}

/// Generate a TOC list item.
pub fn render_toc_item(title: &str) -> String {
    format!("* {}", render_toc_link(title))
}

/// Anchor GitHub assigns to a `## <section name>` heading.
pub fn github_slug(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            ' ' | '-' => Some('-'),
            c if c.is_alphanumeric() => Some(c),
            // Heading punctuation such as `/`, `&` or `:` has no anchor form
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_simple() {
        assert_eq!(github_slug("Drawing helpers"), "drawing-helpers");
    }

    #[test]
    fn slug_strips_punctuation() {
        assert_eq!(github_slug("I/O: files & blocks"), "io-files--blocks");
        assert_eq!(github_slug("s::startup"), "sstartup");
    }

    #[test]
    fn slug_uppercase() {
        assert_eq!(github_slug("GEOMETRY"), "geometry");
    }

    #[test]
    fn toc_item() {
        assert_eq!(render_toc_item("Geometry"), "* [Geometry](#geometry)");
    }
}
