use regex_lite::Regex;
use ego_tree::NodeRef;
use scraper::{Html, Node};
use std::sync::OnceLock;

/// Derives the copy/download/print text from sanitized HTML.
///
/// Walks the tree rather than regex-stripping tags, so nesting and
/// malformed input degrade to dropped content instead of errors.
pub fn derive_plain_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut out = String::new();
    for child in fragment.root_element().children() {
        walk(child, &mut out);
    }

    let collapsed = newline_runs_re().replace_all(&out, "\n\n");
    collapsed.trim().to_string()
}

fn walk(node: NodeRef<Node>, out: &mut String) {
    match node.value() {
        Node::Text(text) => out.push_str(&text),
        Node::Element(element) => match element.name() {
            "br" => out.push('\n'),
            "p" => {
                walk_children(node, out);
                out.push_str("\n\n");
            }
            "li" => {
                out.push_str("\n- ");
                walk_children(node, out);
            }
            "h2" | "h3" => {
                walk_children(node, out);
                out.push_str("\n\n");
            }
            "ol" => {
                walk_children(node, out);
                out.push_str("\n\n");
            }
            "strong" => {
                out.push_str("**");
                walk_children(node, out);
                out.push_str("**");
            }
            "em" => {
                out.push('_');
                walk_children(node, out);
                out.push('_');
            }
            // Anything outside the allow-list contributes nothing.
            _ => {}
        },
        _ => {}
    }
}

fn walk_children(node: NodeRef<Node>, out: &mut String) {
    for child in node.children() {
        walk(child, out);
    }
}

fn newline_runs_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n{3,}").expect("static regex"))
}
