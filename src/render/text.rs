// src/render/text.rs
use super::view::{ListStyle, Node, SectionId};
use crate::controller::{Notification, Page};

pub fn format_text_page(page: &Page, notifications: &[Notification]) -> String {
    let mut out = String::new();

    for notification in notifications {
        out.push_str(&format!(
            "[{}] {}\n\n",
            notification.title, notification.message
        ));
    }

    if let Some(alert) = &page.alert {
        out.push_str(&format!("! {}\n", alert));
    }
    if !page.file_info.is_empty() {
        out.push_str(&format!("{}\n", page.file_info));
    }
    if !page.results_visible {
        return out;
    }

    out.push_str("════════════════════════════════════════════════════════════════\n");
    out.push_str("                    Career Analysis Results                     \n");
    out.push_str("════════════════════════════════════════════════════════════════\n\n");

    for (id, nodes) in page.sections() {
        out.push_str(&format!("## {}\n\n", id.title()));
        if nodes.is_empty() {
            out.push_str("  (none)\n");
        }
        for node in nodes {
            out.push_str(&format_node(id, node));
        }
        out.push('\n');
    }

    out
}

fn format_list(style: ListStyle, items: &[String], indent: &str) -> String {
    let mut s = String::new();
    for (i, item) in items.iter().enumerate() {
        match style {
            ListStyle::Bullet => s.push_str(&format!("{}- {}\n", indent, item)),
            ListStyle::Numbered => s.push_str(&format!("{}{}. {}\n", indent, i + 1, item)),
        }
    }
    s
}

fn format_node(id: SectionId, node: &Node) -> String {
    match node {
        Node::Text { text } if id == SectionId::OverallScore => format!("  {}/100\n", text),
        Node::Text { text } | Node::Paragraph { text } => format!("  {}\n", text),
        Node::Tag { label, style } => format!("  [{}] {}\n", style.css_class(), label),
        Node::Field { label, value } => format!("  {}: {}\n", label, value),
        Node::List { style, items } => format_list(*style, items, "  "),
        Node::Subsection { title, items } => {
            let mut s = format!("  {}\n", title);
            s.push_str(&format_list(ListStyle::Bullet, items, "    "));
            s
        }
    }
}
