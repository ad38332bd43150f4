//! Feed renderer
//!
//! Renders project cards to the HTML fragment the portfolio page drops into
//! its projects container.

use crate::app::ProjectFeed;
use crate::domain::entities::{Category, ProjectCard};

/// Where rendered markup goes. Rendering always replaces the previous content.
pub trait ProjectContainer {
    fn replace_content(&mut self, html: String);
}

impl ProjectContainer for String {
    fn replace_content(&mut self, html: String) {
        *self = html;
    }
}

/// Render a feed into `container`, replacing whatever it held
pub fn render_feed<C: ProjectContainer + ?Sized>(container: &mut C, feed: &ProjectFeed) {
    let html = match feed {
        ProjectFeed::Loaded(cards) if cards.is_empty() => render_empty(),
        ProjectFeed::Loaded(cards) => cards.iter().map(render_card).collect(),
        ProjectFeed::NoMatches { category } => render_no_matches(*category),
        ProjectFeed::Unavailable { reason } => render_unavailable(reason),
    };

    container.replace_content(html);
}

/// Render a feed to a fresh string
pub fn render_feed_html(feed: &ProjectFeed) -> String {
    let mut buf = String::new();
    render_feed(&mut buf, feed);
    buf
}

fn render_empty() -> String {
    "<div class=\"loading\">\n\
     unable to load repos!\n\
     <br><small>Please try again later...</small>\n\
     </div>\n"
        .to_string()
}

fn render_no_matches(category: Category) -> String {
    format!(
        "<div class=\"loading\">\n\
         No {} projects to show yet.\n\
         </div>\n",
        category
    )
}

fn render_unavailable(reason: &str) -> String {
    format!(
        "<div class=\"loading error\">\n\
         <p>Unable to load projects from GitHub.</p>\n\
         <p><small>Error: {}</small></p>\n\
         <p><small>Please check your GitHub username configuration.</small></p>\n\
         </div>\n",
        escape(reason)
    )
}

fn render_card(card: &ProjectCard) -> String {
    let mut buf = String::new();

    buf.push_str(&format!(
        "<div class=\"project-card\" data-category=\"{}\">\n",
        card.category
    ));
    buf.push_str("<div class=\"project-image\"><i class=\"fas fa-code\"></i></div>\n");
    buf.push_str("<div class=\"project-content\">\n");
    buf.push_str(&format!(
        "<h3 class=\"project-title\">{}</h3>\n",
        escape(&card.title)
    ));
    buf.push_str(&format!(
        "<p class=\"project-description\">{}</p>\n",
        escape(&card.description)
    ));

    buf.push_str("<div class=\"project-tech\">");
    for tag in &card.tags {
        buf.push_str(&format!("<span class=\"tech-tag\">{}</span>", escape(tag)));
    }
    buf.push_str("</div>\n");

    buf.push_str("<div class=\"project-links\">\n");
    buf.push_str(&format!(
        "<a href=\"{}\" class=\"project-link\" target=\"_blank\" rel=\"noopener\"><i class=\"fab fa-github\"></i> Code</a>\n",
        escape(&card.html_url)
    ));
    if let Some(homepage) = &card.homepage {
        buf.push_str(&format!(
            "<a href=\"{}\" class=\"project-link\" target=\"_blank\" rel=\"noopener\"><i class=\"fas fa-external-link-alt\"></i> Live Demo</a>\n",
            escape(homepage)
        ));
    }
    buf.push_str("</div>\n");

    buf.push_str("</div>\n</div>\n");
    buf
}

/// Minimal HTML escaping for text and attribute values
fn escape(s: &str) -> String {
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
