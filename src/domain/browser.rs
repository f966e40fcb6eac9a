use anyhow::Result;

/// Hands URLs to whatever displays web pages on this machine.
#[cfg_attr(test, mockall::automock)]
pub trait Browser: Send + Sync {
    fn open(&self, url: &str) -> Result<()>;
}
