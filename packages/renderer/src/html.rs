//! Serialize virtual nodes to HTML markup.

use crate::VNode;

/// Elements that never have a closing tag
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// Options for HTML output
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
        }
    }
}

impl HtmlOptions {
    pub fn compact() -> Self {
        Self {
            pretty: false,
            indent: String::new(),
        }
    }
}

struct Context<'a> {
    options: &'a HtmlOptions,
    depth: usize,
    buffer: String,
}

impl<'a> Context<'a> {
    fn new(options: &'a HtmlOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Serialize a root sequence
pub fn to_html(nodes: &[VNode], options: &HtmlOptions) -> String {
    let mut ctx = Context::new(options);
    for node in nodes {
        write_node(node, &mut ctx);
    }
    ctx.get_output()
}

/// Full HTML document with page metadata in the head
pub fn render_html_document(
    title: &str,
    description: &str,
    body: &[VNode],
    options: &HtmlOptions,
) -> String {
    let mut ctx = Context::new(options);

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html>");
    ctx.indent();

    ctx.add_line("<head>");
    ctx.indent();
    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    ctx.add_line(&format!("<title>{}</title>", escape(title)));
    ctx.add_line(&format!(
        "<meta name=\"description\" content=\"{}\">",
        escape(description)
    ));
    ctx.dedent();
    ctx.add_line("</head>");

    ctx.add_line("<body>");
    ctx.indent();
    for node in body {
        write_node(node, &mut ctx);
    }
    ctx.dedent();
    ctx.add_line("</body>");

    ctx.dedent();
    ctx.add_line("</html>");

    ctx.get_output()
}

fn write_node(node: &VNode, ctx: &mut Context) {
    match node {
        VNode::Text { content } => ctx.add_line(&escape(content)),
        VNode::Comment { content } => {
            ctx.add_line(&format!("<!-- {} -->", content.replace("--", "- -")))
        }
        VNode::Element { tag, children, .. } => {
            let open = open_tag(node);

            if VOID_ELEMENTS.contains(&tag.as_str()) {
                ctx.add_line(&open);
                return;
            }

            // Text-only content stays on one line
            if children.iter().all(|c| matches!(c, VNode::Text { .. })) {
                let text: String = children.iter().map(|c| escape(&c.text_content())).collect();
                ctx.add_line(&format!("{}{}</{}>", open, text, tag));
                return;
            }

            ctx.add_line(&open);
            ctx.indent();
            for child in children {
                write_node(child, ctx);
            }
            ctx.dedent();
            ctx.add_line(&format!("</{}>", tag));
        }
    }
}

fn open_tag(node: &VNode) -> String {
    let VNode::Element {
        tag,
        attributes,
        styles,
        ..
    } = node
    else {
        return String::new();
    };

    let mut open = format!("<{}", tag);
    for (name, value) in attributes {
        open.push_str(&format!(" {}=\"{}\"", name, escape(value)));
    }
    if !styles.is_empty() {
        let style = styles
            .iter()
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect::<Vec<_>>()
            .join("; ");
        open.push_str(&format!(" style=\"{}\"", escape(&style)));
    }
    open.push('>');
    open
}

/// Escape text for use in HTML content and attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_output() {
        let nodes = vec![VNode::element("p")
            .with_attr("id", "x")
            .with_style("color", "red")
            .with_style("font-size", "16px")
            .with_child(VNode::text("a < b"))];

        assert_eq!(
            to_html(&nodes, &HtmlOptions::compact()),
            "<p id=\"x\" style=\"color: red; font-size: 16px\">a &lt; b</p>"
        );
    }

    #[test]
    fn test_void_elements_have_no_closing_tag() {
        let nodes = vec![VNode::element("img").with_attr("src", "a.png")];
        assert_eq!(to_html(&nodes, &HtmlOptions::compact()), "<img src=\"a.png\">");
    }

    #[test]
    fn test_pretty_nesting() {
        let nodes = vec![VNode::element("section")
            .with_child(VNode::element("p").with_child(VNode::text("hi")))];

        assert_eq!(
            to_html(&nodes, &HtmlOptions::default()),
            "<section>\n  <p>hi</p>\n</section>\n"
        );
    }

    #[test]
    fn test_document_head_carries_metadata() {
        let html = render_html_document("A & B", "Say \"hi\"", &[], &HtmlOptions::default());
        assert!(html.contains("<title>A &amp; B</title>"));
        assert!(html.contains("content=\"Say &quot;hi&quot;\""));
        assert!(html.starts_with("<!DOCTYPE html>"));
    }
}
