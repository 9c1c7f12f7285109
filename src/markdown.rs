//! Markdown Rendering
//!
//! Static content pages are written in markdown and rendered with
//! pulldown-cmark, plus:
//! - Rule markers on list items: `- (ok) text` and `- (warn) text`
//! - Raw HTML in the source is shown as text

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag};

/// List item prefixes and the class they put on the `<li>`
const RULE_MARKERS: &[(&str, &str)] = &[
    ("(ok) ", "rule rule-ok"),
    ("(warn) ", "rule rule-warning"),
];

/// Render markdown to HTML
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = transform_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES
}

fn transform_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    // `Start(Item)` waiting to see whether its text carries a marker
    let mut pending_item: Option<Event<'a>> = None;

    for event in parser {
        let event = match event {
            Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
            other => other,
        };

        if let Some(item) = pending_item.take() {
            match event {
                Event::Text(text) => match split_marker(&text) {
                    Some((class, rest)) => {
                        events.push(Event::Html(CowStr::from(format!("<li class=\"{}\">", class))));
                        events.push(Event::Text(CowStr::from(rest.to_string())));
                    }
                    None => {
                        events.push(item);
                        events.push(Event::Text(text));
                    }
                },
                other => {
                    events.push(item);
                    events.push(other);
                }
            }
            continue;
        }

        match event {
            Event::Start(Tag::Item) => pending_item = Some(event),
            other => events.push(other),
        }
    }
    if let Some(item) = pending_item {
        events.push(item);
    }

    events
}

fn split_marker(text: &str) -> Option<(&'static str, &str)> {
    RULE_MARKERS
        .iter()
        .find_map(|(marker, class)| text.strip_prefix(marker).map(|rest| (*class, rest)))
}
