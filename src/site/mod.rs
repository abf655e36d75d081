use crate::config::SiteConfig;

mod content;
mod menu;
mod nav;
mod slug;

pub use content::*;
pub use menu::*;
pub use nav::*;
pub use slug::*;

#[derive(Debug)]
pub struct Site {
    pub config: SiteConfig,
}

impl Site {
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    /// Public URL of the page, if the site root is known.
    pub fn canonical_url(&self) -> Option<String> {
        self.config
            .root_url
            .as_ref()
            .map(|root| format!("{}/", root.trim_end_matches('/')))
    }
}
