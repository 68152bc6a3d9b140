use pulldown_cmark::{html, Event, Options, Parser};

/// Renders article markdown to HTML.
///
/// Raw HTML in the source is emitted as escaped text.
pub fn render_markdown(source: &str) -> String {
    let parser = Parser::new_ext(source, Options::all()).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        other => other,
    });

    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headings_and_emphasis() {
        let html = render_markdown("# Judul\n\nTeks *miring*");

        assert!(html.contains("<h1>Judul</h1>"));
        assert!(html.contains("<em>miring</em>"));
    }

    #[test]
    fn escapes_raw_html() {
        let html = render_markdown("<script>alert(1)</script>");

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
