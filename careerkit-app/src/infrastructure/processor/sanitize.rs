use ego_tree::NodeRef;
use scraper::{Html, Node};

/// Tags allowed to reach the rendered preview. Everything else is stripped.
const ALLOWED_TAGS: &[&str] = &["strong", "em", "p", "br", "ol", "li", "h2", "h3"];

/// Tags whose text content is dropped along with the tag itself.
const DROP_CONTENT_TAGS: &[&str] = &["script", "style"];

/// Re-serializes untrusted HTML keeping only the allow-listed tags.
///
/// Disallowed wrappers lose their tag but keep their text; script and style
/// bodies are dropped entirely. Attributes never survive. The output parses
/// back to itself, so sanitizing twice is a no-op.
pub fn sanitize_html(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut out = String::new();
    for child in fragment.root_element().children() {
        write_node(child, &mut out);
    }
    out
}

fn write_node(node: NodeRef<Node>, out: &mut String) {
    match node.value() {
        Node::Text(text) => out.push_str(&escape_text(&text)),
        Node::Element(element) => {
            let name = element.name();
            if DROP_CONTENT_TAGS.contains(&name) {
                return;
            }
            if !ALLOWED_TAGS.contains(&name) {
                for child in node.children() {
                    write_node(child, out);
                }
                return;
            }
            if name == "br" {
                out.push_str("<br>");
                return;
            }
            out.push('<');
            out.push_str(name);
            out.push('>');
            for child in node.children() {
                write_node(child, out);
            }
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
        // Comments, doctypes and processing instructions are dropped.
        _ => {}
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowed_tags_survive_without_attributes() {
        assert_eq!(
            sanitize_html(r#"<p class="x"><strong>hi</strong><br></p>"#),
            "<p><strong>hi</strong><br></p>"
        );
    }

    #[test]
    fn script_tags_and_their_content_are_dropped() {
        assert_eq!(
            sanitize_html("<p>safe</p><script>alert(1)</script>"),
            "<p>safe</p>"
        );
    }

    #[test]
    fn disallowed_wrappers_keep_their_text() {
        assert_eq!(
            sanitize_html("<div><span>kept</span></div>"),
            "kept"
        );
    }

    #[test]
    fn event_handlers_and_links_are_stripped() {
        let out = sanitize_html(r#"<a href="javascript:x" onclick="y">text</a>"#);
        assert_eq!(out, "text");
    }

    #[test]
    fn sanitizing_is_idempotent() {
        let dirty = "<div><p>one<script>bad()</script></p><ol><li>**x**</li></ol></div>";
        let once = sanitize_html(dirty);
        let twice = sanitize_html(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn raw_angle_brackets_are_escaped() {
        assert_eq!(sanitize_html("a &lt; b"), "a &lt; b");
    }
}
