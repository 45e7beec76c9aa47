use anyhow::Result;
use reqwest::Url;

pub trait LinkOpener: Send + Sync {
    fn open_link(&self, link: &Url) -> Result<()>;
}
