use anyhow::{Context, Result};
use reqwest::Url;

use crate::core::interfaces::adapters::LinkOpener;

#[derive(Debug, Default)]
pub struct SystemBrowserLinkOpener;

impl SystemBrowserLinkOpener {
    pub fn new() -> Self {
        Self
    }
}

impl LinkOpener for SystemBrowserLinkOpener {
    fn open_link(&self, link: &Url) -> Result<()> {
        log::info!("[BROWSER] Opening {}", link);

        open::that(link.as_str()).with_context(|| format!("Failed to open {}", link))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_default_matches_new() {
        let opener = SystemBrowserLinkOpener::default();

        assert_eq!(
            format!("{:?}", opener),
            format!("{:?}", SystemBrowserLinkOpener::new())
        );
        assert_eq!(std::mem::size_of::<SystemBrowserLinkOpener>(), 0);
    }

    #[test]
    fn test_default_usable_as_link_opener_port() {
        let opener: Arc<dyn LinkOpener> = Arc::new(SystemBrowserLinkOpener::default());

        assert_eq!(Arc::strong_count(&opener), 1);
    }
}
