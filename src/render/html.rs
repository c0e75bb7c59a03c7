// src/render/html.rs
//! HTML rendering of the page. Same page in, same bytes out.

use super::view::{ListStyle, Node, SectionId};
use crate::controller::{Notification, Page};

const STYLE: &str = r#"
body { font-family: -apple-system, 'Segoe UI', Helvetica, Arial, sans-serif; margin: 0; color: #1a202c; background: #f7fafc; }
main { max-width: 960px; margin: 0 auto; padding: 2rem; }
.hidden { display: none; }
.card { background: #fff; border-radius: 8px; padding: 1rem 1.5rem; margin-bottom: 1rem; box-shadow: 0 1px 3px rgba(0,0,0,0.1); }
.skill-tag { display: inline-block; background: #667eea; color: #fff; border-radius: 12px; padding: 4px 10px; margin: 2px; }
.skill-tag.soft-skill { background: #48bb78; }
.missing-skill { display: inline-block; background: #f56565; color: #fff; border-radius: 12px; padding: 4px 10px; margin: 2px; }
.alert { background: #fed7d7; color: #9b2c2c; padding: 10px 15px; border-radius: 8px; }
.notification { position: fixed; top: 20px; right: 20px; background: #f59e0b; color: #fff; padding: 15px 20px; border-radius: 8px; box-shadow: 0 4px 12px rgba(0,0,0,0.15); z-index: 1000; max-width: 350px; font-size: 14px; line-height: 1.4; }
.hero { text-align: center; padding: 2rem 0; }
.notification button { background: none; border: none; color: #fff; float: right; cursor: pointer; font-size: 16px; margin-left: 10px; }
"#;

const SCRIPT: &str = r#"
document.querySelectorAll('.notification').forEach(function (el) {
  var remaining = parseInt(el.dataset.remaining, 10);
  setTimeout(function () { if (el.parentElement) { el.remove(); } }, remaining);
  el.querySelector('button').addEventListener('click', function () {
    fetch('/notifications/' + el.dataset.id + '/dismiss', { method: 'POST' });
    el.remove();
  });
});
var target = document.body.dataset.scroll;
if (target) { document.getElementById(target).scrollIntoView({ behavior: 'smooth' }); }
"#;

struct Html {
    buf: String,
}

impl Html {
    fn new() -> Self {
        Self {
            buf: String::with_capacity(8 * 1024),
        }
    }

    fn push<S: AsRef<str>>(&mut self, s: S) {
        self.buf.push_str(s.as_ref());
    }

    fn finish(self) -> String {
        self.buf
    }
}

pub fn esc(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the whole host page: form, loading indicator, results and notices.
pub fn render_page(page: &Page, notifications: &[Notification]) -> String {
    let mut w = Html::new();

    w.push("<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">");
    w.push("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
    w.push("<title>SkillScope</title><style>");
    w.push(STYLE);
    w.push("</style></head>");

    match page.scroll_target {
        Some(anchor) => {
            w.push("<body data-scroll=\"");
            w.push(anchor.element_id());
            w.push("\">");
        }
        None => w.push("<body>"),
    }

    for notification in notifications {
        render_notification(&mut w, notification);
    }

    w.push("<main>");
    render_hero(&mut w);
    render_form(&mut w, page);
    render_loading(&mut w, page);
    render_results(&mut w, page);
    w.push("</main><script>");
    w.push(SCRIPT);
    w.push("</script></body></html>");

    w.finish()
}

fn render_notification(w: &mut Html, n: &Notification) {
    w.push(format!(
        "<div class=\"notification\" data-id=\"{}\" data-remaining=\"{}\">",
        n.id, n.remaining_ms
    ));
    w.push(format!(
        "<strong>{}</strong><br>{}<button type=\"button\">&times;</button></div>",
        esc(&n.title),
        esc(&n.message)
    ));
}

fn render_hero(w: &mut Html) {
    w.push("<header class=\"hero\"><h1>SkillScope</h1>");
    w.push("<p>See where your skills stand in the market and what to learn next.</p>");
    w.push("<form method=\"post\" action=\"/get-started\"><button type=\"submit\" id=\"getStarted\">Get Started</button></form>");
    w.push("</header>");
}

fn render_form(w: &mut Html, page: &Page) {
    w.push("<section id=\"analyze\" class=\"card\"><h2>Analyze Your Career</h2>");
    if let Some(alert) = &page.alert {
        w.push(format!("<p class=\"alert\" role=\"alert\">{}</p>", esc(alert)));
    }
    w.push(
        "<form id=\"analyzeForm\" method=\"post\" action=\"/submit\" enctype=\"multipart/form-data\">",
    );
    w.push("<label>Resume file <input type=\"file\" id=\"resumeFile\" name=\"resume\" accept=\".pdf,.doc,.docx,.txt\"></label>");
    w.push(format!(
        "<span class=\"file-info\">{}</span>",
        esc(&page.file_info)
    ));
    w.push("<label>Or paste your resume <textarea id=\"resumeText\" name=\"resume_text\" rows=\"8\"></textarea></label>");
    w.push("<label>GitHub URL (optional) <input type=\"url\" id=\"githubUrl\" name=\"github_url\"></label>");
    w.push("<button type=\"submit\">Analyze</button></form>");
    w.push("<form method=\"post\" action=\"/reset\"><button type=\"submit\">Start Over</button></form>");
    w.push("</section>");
}

fn render_loading(w: &mut Html, page: &Page) {
    let class = if page.loading { "card" } else { "card hidden" };
    w.push(format!(
        "<div id=\"loadingIndicator\" class=\"{}\">Analyzing your profile...</div>",
        class
    ));
}

fn render_results(w: &mut Html, page: &Page) {
    let class = if page.results_visible { "" } else { " class=\"hidden\"" };
    w.push(format!("<section id=\"results\"{}>", class));

    for (id, nodes) in page.sections() {
        w.push("<div class=\"card\"><h3>");
        w.push(id.title());
        w.push("</h3>");

        let tag = match id {
            SectionId::Recommendations => "ol",
            SectionId::OverallScore | SectionId::MarketPosition => "span",
            _ => "div",
        };
        w.push(format!("<{} id=\"{}\">", tag, id.container_id()));
        for node in nodes {
            render_node(w, id, node);
        }
        w.push(format!("</{}></div>", tag));
    }

    w.push("</section>");
}

fn render_items(w: &mut Html, items: &[String]) {
    for item in items {
        w.push("<li>");
        w.push(esc(item));
        w.push("</li>");
    }
}

fn render_node(w: &mut Html, id: SectionId, node: &Node) {
    match node {
        Node::Text { text } => w.push(esc(text)),
        Node::Tag { label, style } => {
            w.push(format!(
                "<span class=\"{}\">{}</span>",
                style.css_class(),
                esc(label)
            ));
        }
        Node::Field { label, value } => {
            w.push(format!(
                "<p><strong>{}:</strong> {}</p>",
                esc(label),
                esc(value)
            ));
        }
        // The recommendations container is itself the list element
        Node::List { items, .. } if id == SectionId::Recommendations => render_items(w, items),
        Node::List { style, items } => {
            let tag = match style {
                ListStyle::Bullet => "ul",
                ListStyle::Numbered => "ol",
            };
            w.push(format!("<{}>", tag));
            render_items(w, items);
            w.push(format!("</{}>", tag));
        }
        Node::Subsection { title, items } => {
            w.push("<div class=\"plan-section\"><h4>");
            w.push(esc(title));
            w.push("</h4><ul>");
            render_items(w, items);
            w.push("</ul></div>");
        }
        Node::Paragraph { text } => {
            w.push("<p>");
            w.push(esc(text));
            w.push("</p>");
        }
    }
}
