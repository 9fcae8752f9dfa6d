use crate::ports::outbound::MarkupRenderer;

/// MarkdownHtmlRenderer adapter for rendering description markup as HTML
///
/// Component descriptions use a small markdown subset: ATX headings,
/// unordered lists, paragraphs, and the inline spans `**bold**`, `*em*`,
/// and `` `code` ``. The renderer is stateless, so one instance can be
/// shared across generation calls.
pub struct MarkdownHtmlRenderer;

impl MarkdownHtmlRenderer {
    pub fn new() -> Self {
        Self
    }

    fn escape_html(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
    }

    /// Replaces one delimiter-wrapped inline span kind with an HTML tag.
    fn render_span(text: &str, delimiter: &str, tag: &str) -> String {
        let mut output = String::with_capacity(text.len());
        let mut rest = text;
        loop {
            let Some(open) = rest.find(delimiter) else {
                output.push_str(rest);
                return output;
            };
            let after_open = &rest[open + delimiter.len()..];
            let Some(close) = after_open.find(delimiter) else {
                output.push_str(rest);
                return output;
            };
            output.push_str(&rest[..open]);
            output.push_str(&format!("<{}>{}</{}>", tag, &after_open[..close], tag));
            rest = &after_open[close + delimiter.len()..];
        }
    }

    fn render_inline(text: &str) -> String {
        let escaped = Self::escape_html(text);
        let strong = Self::render_span(&escaped, "**", "strong");
        let code = Self::render_span(&strong, "`", "code");
        Self::render_span(&code, "*", "em")
    }

    fn heading_level(line: &str) -> Option<(usize, &str)> {
        let hashes = line.bytes().take_while(|b| *b == b'#').count();
        if hashes == 0 || hashes > 6 {
            return None;
        }
        let rest = &line[hashes..];
        rest.strip_prefix(' ').map(|text| (hashes, text))
    }
}

impl Default for MarkdownHtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkupRenderer for MarkdownHtmlRenderer {
    fn render(&self, markup: &str) -> String {
        let mut output = String::new();
        let mut paragraph: Vec<String> = Vec::new();
        let mut list_items: Vec<String> = Vec::new();

        let flush_paragraph = |output: &mut String, paragraph: &mut Vec<String>| {
            if !paragraph.is_empty() {
                output.push_str(&format!("<p>{}</p>\n", paragraph.join(" ")));
                paragraph.clear();
            }
        };
        let flush_list = |output: &mut String, list_items: &mut Vec<String>| {
            if !list_items.is_empty() {
                output.push_str("<ul>\n");
                for item in list_items.iter() {
                    output.push_str(&format!("<li>{}</li>\n", item));
                }
                output.push_str("</ul>\n");
                list_items.clear();
            }
        };

        for line in markup.lines() {
            let trimmed = line.trim();

            if trimmed.is_empty() {
                flush_paragraph(&mut output, &mut paragraph);
                flush_list(&mut output, &mut list_items);
            } else if let Some((level, text)) = Self::heading_level(trimmed) {
                flush_paragraph(&mut output, &mut paragraph);
                flush_list(&mut output, &mut list_items);
                output.push_str(&format!(
                    "<h{}>{}</h{}>\n",
                    level,
                    Self::render_inline(text),
                    level
                ));
            } else if let Some(item) = trimmed.strip_prefix("- ").or_else(|| trimmed.strip_prefix("* ")) {
                flush_paragraph(&mut output, &mut paragraph);
                list_items.push(Self::render_inline(item));
            } else {
                flush_list(&mut output, &mut list_items);
                paragraph.push(Self::render_inline(trimmed));
            }
        }

        flush_paragraph(&mut output, &mut paragraph);
        flush_list(&mut output, &mut list_items);

        output
    }
}
