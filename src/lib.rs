//! Strip scripts, styles, comments and noisy attributes from HTML and
//! re-serialize what is left, either minified or indented.
//!
//! ```
//! use html_cleaner::{clean_html, CleanerConfig};
//!
//! let config = CleanerConfig::default().remove_classes(true);
//! let html = clean_html(r#"<div class="a b" id="x">t</div>"#, &config);
//! assert_eq!(html, r#"<div id="x">t</div>"#);
//! ```

mod cleaner;
mod config;
mod constants;
mod error;
pub mod events;
mod file;
mod state;
mod util;


pub use cleaner::{clean_html, HtmlCleaner};
pub use config::CleanerConfig;
pub use error::CleanerError;
pub use file::{CleanJob, CleanReport};
pub use util::Util;
