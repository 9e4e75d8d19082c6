use regex_lite::Regex;
use std::sync::OnceLock;

/// Converts the model's markdown-like conventions into HTML.
///
/// A line-based pass with two states (paragraph, ordered list) rather than
/// chained global substitutions, so list grouping and paragraph breaks do
/// not depend on replacement order. Inline emphasis and placeholder
/// rewriting happen per line.
pub fn markdown_to_html(raw: &str) -> String {
    let mut out = String::new();
    let mut paragraph: Vec<String> = Vec::new();
    let mut list_items: Vec<String> = Vec::new();

    for line in raw.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            flush_paragraph(&mut paragraph, &mut out);
            flush_list(&mut list_items, &mut out);
            continue;
        }

        if let Some(item) = strip_ordered_prefix(trimmed) {
            flush_paragraph(&mut paragraph, &mut out);
            list_items.push(convert_inline(item));
            continue;
        }

        flush_list(&mut list_items, &mut out);

        if let Some(rest) = trimmed.strip_prefix("## ") {
            flush_paragraph(&mut paragraph, &mut out);
            out.push_str(&format!("<h2>{}</h2>", convert_inline(rest)));
        } else if let Some(rest) = trimmed.strip_prefix("### ") {
            flush_paragraph(&mut paragraph, &mut out);
            out.push_str(&format!("<h3>{}</h3>", convert_inline(rest)));
        } else {
            let line = trimmed
                .strip_prefix("- ")
                .or_else(|| trimmed.strip_prefix("* "))
                .unwrap_or(trimmed);
            paragraph.push(convert_inline(line));
        }
    }

    flush_paragraph(&mut paragraph, &mut out);
    flush_list(&mut list_items, &mut out);
    out
}

fn flush_paragraph(lines: &mut Vec<String>, out: &mut String) {
    if lines.is_empty() {
        return;
    }
    out.push_str(&format!("<p>{}</p>", lines.join("<br>")));
    lines.clear();
}

fn flush_list(items: &mut Vec<String>, out: &mut String) {
    if items.is_empty() {
        return;
    }
    out.push_str("<ol>");
    for item in items.iter() {
        out.push_str(&format!("<li>{item}</li>"));
    }
    out.push_str("</ol>");
    items.clear();
}

/// Returns the item text of a `N. ` line, with the numeric prefix removed.
fn strip_ordered_prefix(line: &str) -> Option<&str> {
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    line[digits..].strip_prefix(". ").map(str::trim_start)
}

fn emphasis_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").expect("static regex"))
}

fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[([^\[\]]+)\]").expect("static regex"))
}

fn convert_inline(line: &str) -> String {
    // Quadruple asterisks are a model artifact for plain double emphasis.
    let line = line.replace("****", "**");
    let line = emphasis_re().replace_all(&line, "<strong>$1</strong>");
    // Placeholders the reader must fill in by hand are kept bracketed but
    // rendered bold-italic so they stand out.
    placeholder_re()
        .replace_all(&line, "<strong><em>[$1]</em></strong>")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_and_quadruple_asterisks_become_strong() {
        assert_eq!(
            markdown_to_html("**bold** and ****also bold****"),
            "<p><strong>bold</strong> and <strong>also bold</strong></p>"
        );
    }

    #[test]
    fn unterminated_emphasis_stays_literal() {
        assert_eq!(markdown_to_html("**dangling"), "<p>**dangling</p>");
    }

    #[test]
    fn placeholders_keep_their_brackets() {
        assert_eq!(
            markdown_to_html("Dear [Hiring Manager],"),
            "<p>Dear <strong><em>[Hiring Manager]</em></strong>,</p>"
        );
    }

    #[test]
    fn blank_lines_split_paragraphs_and_newlines_break() {
        assert_eq!(
            markdown_to_html("one\ntwo\n\n\nthree"),
            "<p>one<br>two</p><p>three</p>"
        );
    }

    #[test]
    fn numbered_runs_become_one_ordered_list() {
        assert_eq!(
            markdown_to_html("intro\n1. First\n2. Second\n10. Tenth"),
            "<p>intro</p><ol><li>First</li><li>Second</li><li>Tenth</li></ol>"
        );
    }

    #[test]
    fn separate_numbered_runs_become_separate_lists() {
        assert_eq!(
            markdown_to_html("1. A\n\ntext\n\n1. B"),
            "<ol><li>A</li></ol><p>text</p><ol><li>B</li></ol>"
        );
    }

    #[test]
    fn leading_bullet_markers_are_stripped() {
        assert_eq!(
            markdown_to_html("- point one\n* point two"),
            "<p>point one<br>point two</p>"
        );
    }

    #[test]
    fn headings_convert() {
        assert_eq!(
            markdown_to_html("## Title\n### Sub"),
            "<h2>Title</h2><h3>Sub</h3>"
        );
    }
}
