use std::collections::HashSet;

use crate::constants;

/// Options fixed before a cleaning pass starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CleanerConfig {
    pub pretty_print: bool,
    pub remove_classes: bool,
    pub remove_links: bool,
}

impl CleanerConfig {
    pub fn pretty_print(mut self, pretty_print: bool) -> Self {
        self.pretty_print = pretty_print;
        self
    }

    pub fn remove_classes(mut self, remove_classes: bool) -> Self {
        self.remove_classes = remove_classes;
        self
    }

    pub fn remove_links(mut self, remove_links: bool) -> Self {
        self.remove_links = remove_links;
        self
    }

    /// Attribute names kept on any tag, excluding the `data-*` / `aria-*`
    /// passthrough which is decided per value.
    pub fn allowed_attributes(&self) -> HashSet<&'static str> {
        constants::ATTRIBUTES_TO_KEEP
            .iter()
            .copied()
            .filter(|attr| !(self.remove_classes && *attr == "class"))
            .filter(|attr| !(self.remove_links && constants::URL_ATTRIBUTES.contains(attr)))
            .collect()
    }

    pub fn options_applied(&self) -> Vec<&'static str> {
        let mut options = Vec::new();
        if self.pretty_print {
            options.push("pretty formatting");
        }
        if self.remove_classes {
            options.push("class removal");
        }
        if self.remove_links {
            options.push("link/URL removal");
        }
        options
    }
}
