//! Renders user-supplied markdown text safely.
//!
//! Uses pulldown-cmark with raw HTML disabled to prevent XSS attacks. Bare
//! URLs are turned into links before rendering.

use pulldown_cmark::{Event, Options, Parser, html};
use yew::prelude::*;

use crate::utils::format::auto_link_urls;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// The markdown text to render.
    pub text: AttrValue,
    /// Additional CSS classes for the container.
    #[prop_or_default]
    pub class: Classes,
}

#[function_component]
pub fn MarkdownText(props: &Props) -> Html {
    let html_content = render_markdown(&props.text);

    let base_classes = classes!(
        "prose",
        "prose-gray",
        "prose-sm",
        "max-w-none",
        "prose-p:my-2",
        "prose-headings:mt-4",
        "prose-headings:mb-2",
        "prose-a:text-blue-600",
        props.class.clone()
    );

    html! {
        <div class={base_classes}>
            { Html::from_html_unchecked(html_content.into()) }
        </div>
    }
}

/// Converts markdown to HTML with raw HTML escaped, not rendered.
pub fn render_markdown(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;

    let linked = auto_link_urls(markdown);
    // Raw HTML goes back through as text so push_html escapes it
    let parser = Parser::new_ext(&linked, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_urls_become_anchors() {
        let html = render_markdown("자료: https://example.com/a");
        assert!(
            html.contains(r#"<a href="https://example.com/a">https://example.com/a</a>"#),
            "{html}"
        );
    }

    #[test]
    fn raw_html_is_escaped() {
        let html = render_markdown("<script>alert(1)</script>\n\n**굵게**");
        assert!(!html.contains("<script>"), "{html}");
        assert!(html.contains("&lt;script&gt;"), "{html}");
        assert!(html.contains("<strong>굵게</strong>"));
    }
}
