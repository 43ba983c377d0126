//! HTML page renderer module
//!
//! Produces the static page for one entry as a single string by
//! substitution into a fixed skeleton. Pure string building, no I/O, so
//! page output can be asserted directly in tests.

use crate::config::Config;
use crate::models::Entry;

/// Fixed stylesheet inlined into every page
const STYLE: &str = "\
body { max-width: 42rem; margin: 2rem auto; padding: 0 1rem; font-family: system-ui, sans-serif; line-height: 1.5; }
header h1 { font-size: 1.2rem; margin-bottom: 0; }
header a { color: inherit; text-decoration: none; }
nav a { font-size: 0.9rem; }
.date, .type { color: #555; margin: 0.2rem 0; }
.reflection { margin-top: 1.5rem; }
";

/// Escape a user-supplied value for interpolation into HTML.
///
/// Replacements run in a fixed order, ampersand first, so the entities
/// introduced by later replacements are not escaped again.
pub fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// HTML renderer for entry pages
pub struct Renderer<'a> {
    config: &'a Config,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Render the complete page document for one entry
    pub fn render(&self, entry: &Entry) -> String {
        let mut page = String::new();

        page.push_str("<!DOCTYPE html>\n");
        page.push_str("<html lang=\"en\">\n");
        page.push_str(&self.render_head(entry));
        page.push_str("<body>\n");
        page.push_str(&self.render_site_header());
        page.push_str("<main>\n");
        page.push_str(&self.render_article(entry));
        page.push_str("</main>\n");
        page.push_str("</body>\n");
        page.push_str("</html>\n");

        page
    }

    /// Render the head block: page title from the entry, fixed stylesheet
    fn render_head(&self, entry: &Entry) -> String {
        let mut output = String::new();

        output.push_str("<head>\n");
        output.push_str("<meta charset=\"utf-8\">\n");
        output.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        output.push_str(&format!(
            "<title>{} · {}</title>\n",
            escape_html(&entry.thing),
            escape_html(&self.config.site.title)
        ));
        output.push_str("<style>\n");
        output.push_str(STYLE);
        output.push_str("</style>\n");
        output.push_str("</head>\n");

        output
    }

    /// Render the heading/navigation shell common to all entries
    fn render_site_header(&self) -> String {
        let mut output = String::new();

        output.push_str("<header>\n");
        output.push_str(&format!(
            "<h1><a href=\"/\">{}</a></h1>\n",
            escape_html(&self.config.site.title)
        ));
        output.push_str(&format!(
            "<nav><a href=\"{}\">← all entries</a></nav>\n",
            self.entries_url()
        ));
        output.push_str("</header>\n");

        output
    }

    /// Render the entry body: date, thing, type, proof link, reflection
    fn render_article(&self, entry: &Entry) -> String {
        let mut output = String::new();

        output.push_str("<article>\n");
        output.push_str(&format!("<h2>{}</h2>\n", escape_html(&entry.thing)));
        output.push_str(&format!(
            "<p class=\"date\">{}</p>\n",
            escape_html(&entry.date)
        ));
        output.push_str(&format!(
            "<p class=\"type\">{}</p>\n",
            escape_html(&entry.kind)
        ));
        output.push_str(&format!(
            "<p class=\"proof\"><a href=\"{}\">{}</a></p>\n",
            escape_html(&entry.proof_url),
            escape_html(&entry.proof_text)
        ));
        output.push_str(&format!(
            "<p class=\"reflection\">{}</p>\n",
            escape_html(&entry.reflection)
        ));
        output.push_str("</article>\n");

        output
    }

    /// Entries listing URL with a guaranteed trailing slash
    fn entries_url(&self) -> String {
        format!("{}/", self.config.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> Config {
        Config::default()
    }

    fn sample_entry() -> Entry {
        Entry {
            date: "2025-03-14".to_string(),
            slug: "manifesto-rules".to_string(),
            thing: "finishingthingz manifesto & rules".to_string(),
            kind: "system".to_string(),
            proof_text: "this page".to_string(),
            proof_url: "/".to_string(),
            reflection: "built the container first.".to_string(),
        }
    }

    #[test]
    fn test_escape_html_all_five_characters() {
        assert_eq!(
            escape_html("a&b<c>d\"e'f"),
            "a&amp;b&lt;c&gt;d&quot;e&#039;f"
        );
    }

    #[test]
    fn test_escape_html_ampersand_first() {
        // A pre-escaped entity is escaped again, never left alone
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
        // Entities introduced by later replacements stay intact
        assert_eq!(escape_html("<"), "&lt;");
        assert_eq!(escape_html("'"), "&#039;");
    }

    #[test]
    fn test_escape_html_leaves_plain_text_alone() {
        assert_eq!(escape_html("plain text 123"), "plain text 123");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_render_escapes_thing_everywhere() {
        let config = create_test_config();
        let renderer = Renderer::new(&config);

        let output = renderer.render(&sample_entry());

        assert!(output.contains("<title>finishingthingz manifesto &amp; rules · shiplog</title>"));
        assert!(output.contains("<h2>finishingthingz manifesto &amp; rules</h2>"));
        assert!(!output.contains("manifesto & rules"));
    }

    #[test]
    fn test_render_script_tag_never_survives() {
        let config = create_test_config();
        let renderer = Renderer::new(&config);

        let mut entry = sample_entry();
        entry.thing = "<script>alert('pwned')</script>".to_string();
        let output = renderer.render(&entry);

        assert!(output.contains("&lt;script&gt;alert(&#039;pwned&#039;)&lt;/script&gt;"));
        assert!(!output.contains("<script>"));
    }

    #[test]
    fn test_render_body_fields() {
        let config = create_test_config();
        let renderer = Renderer::new(&config);

        let output = renderer.render(&sample_entry());

        assert!(output.contains("<p class=\"date\">2025-03-14</p>"));
        assert!(output.contains("<p class=\"type\">system</p>"));
        assert!(output.contains("<p class=\"reflection\">built the container first.</p>"));
    }

    #[test]
    fn test_render_proof_link() {
        let config = create_test_config();
        let renderer = Renderer::new(&config);

        let output = renderer.render(&sample_entry());

        assert!(output.contains("<a href=\"/\">this page</a>"));
    }

    #[test]
    fn test_render_proof_url_quotes_cannot_break_href() {
        let config = create_test_config();
        let renderer = Renderer::new(&config);

        let mut entry = sample_entry();
        entry.proof_url = "/x?q=\"quoted\"".to_string();
        let output = renderer.render(&entry);

        assert!(output.contains("href=\"/x?q=&quot;quoted&quot;\""));
    }

    #[test]
    fn test_render_nav_uses_base_url() {
        let mut config = create_test_config();
        config.base_url = "/done".to_string();
        let renderer = Renderer::new(&config);

        let output = renderer.render(&sample_entry());

        assert!(output.contains("<nav><a href=\"/done/\">← all entries</a></nav>"));
    }

    #[test]
    fn test_render_site_title_in_header() {
        let mut config = create_test_config();
        config.site.title = "things <i> finished".to_string();
        let renderer = Renderer::new(&config);

        let output = renderer.render(&sample_entry());

        assert!(output.contains("<h1><a href=\"/\">things &lt;i&gt; finished</a></h1>"));
    }

    #[test]
    fn test_render_document_shape() {
        let config = create_test_config();
        let renderer = Renderer::new(&config);

        let output = renderer.render(&sample_entry());

        assert!(output.starts_with("<!DOCTYPE html>\n"));
        assert!(output.ends_with("</html>\n"));
        assert!(output.contains("<style>"));
    }
}
