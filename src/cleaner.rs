use std::collections::HashSet;

use log::debug;

use crate::config::CleanerConfig;
use crate::constants;
use crate::events::{self, Event};
use crate::state::State;
use crate::util::Util;

/// Single-pass HTML to HTML filter.
///
/// Drops comments, the text of skip-content tags, and every attribute
/// outside the allow-list, then serializes the rest either compact or
/// indented.
pub struct HtmlCleaner {
    config: CleanerConfig,
    allowed_attributes: HashSet<&'static str>,
}

impl HtmlCleaner {
    pub fn new(config: CleanerConfig) -> Self {
        Self {
            allowed_attributes: config.allowed_attributes(),
            config,
        }
    }

    pub fn config(&self) -> &CleanerConfig {
        &self.config
    }

    pub fn clean(&self, html: &str) -> String {
        let mut state = State::default();
        events::tokenize(html, |event| self.handle_event(&mut state, event));

        if state.skip_content {
            debug!("document ended inside a skipped tag");
        }
        if state.indent_level != 0 {
            debug!("document ended at indent level {}", state.indent_level);
        }

        state.finish()
    }

    fn handle_event(&self, state: &mut State, event: Event) {
        match event {
            Event::StartTag { name, attrs } => self.handle_start_tag(state, &name, &attrs),
            Event::EndTag { name } => self.handle_end_tag(state, &name),
            Event::Text(text) => self.handle_text(state, &text),
            Event::Comment(_) => {}
        }
    }

    fn handle_start_tag(&self, state: &mut State, name: &str, attrs: &[(String, String)]) {
        if constants::SKIP_CONTENT_TAGS.contains(name) {
            debug!("skipping content of <{name}>");
            state.skip_content = true;
            return;
        }

        if self.config.pretty_print && !constants::INLINE_TAGS.contains(name) && !state.is_empty()
        {
            let newline = state.newline();
            state.push(newline);
        }

        let attrs = attrs
            .iter()
            .filter(|(key, value)| self.keep_attribute(key, value))
            .map(|(key, value)| format!("{key}=\"{}\"", Util::escape_attribute(value)))
            .collect::<Vec<_>>();

        let tag = if attrs.is_empty() {
            format!("<{name}>")
        } else {
            format!("<{name} {}>", attrs.join(" "))
        };
        state.push(tag);

        if self.config.pretty_print && !constants::SELF_CLOSING_TAGS.contains(name) {
            state.indent_level += 1;
        }
    }

    fn handle_end_tag(&self, state: &mut State, name: &str) {
        if constants::SKIP_CONTENT_TAGS.contains(name) {
            debug!("resuming content after </{name}>");
            state.skip_content = false;
            return;
        }

        if self.config.pretty_print {
            if !constants::SELF_CLOSING_TAGS.contains(name) {
                state.indent_level -= 1;
            }
            if !constants::INLINE_TAGS.contains(name) {
                let newline = state.newline();
                state.push(newline);
            }
        }

        state.push(format!("</{name}>"));
    }

    fn handle_text(&self, state: &mut State, text: &str) {
        if state.skip_content || Util::is_whitespace(text) {
            return;
        }

        let mut text = text.trim().to_owned();
        if self.config.remove_links {
            text = Util::strip_urls(&text);
        }
        if text.is_empty() {
            return;
        }

        let text = Util::escape_text(&text);
        if self.config.pretty_print && !state.ends_with_newline() {
            let newline = state.newline();
            state.push(newline + &text);
        } else {
            state.push(text);
        }
    }

    fn keep_attribute(&self, key: &str, value: &str) -> bool {
        if self.config.remove_classes && key == "class" {
            return false;
        }
        if self.config.remove_links && constants::URL_ATTRIBUTES.contains(key) {
            return false;
        }
        if Util::has_passthrough_prefix(key) {
            return !(self.config.remove_links && Util::is_url_like(value));
        }
        self.allowed_attributes.contains(key)
    }
}

/// Clean `html` with a one-off [`HtmlCleaner`].
pub fn clean_html(html: &str, config: &CleanerConfig) -> String {
    HtmlCleaner::new(*config).clean(html)
}
