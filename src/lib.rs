pub mod cli;
pub mod config;
pub mod discovery;
pub mod item;
pub mod provider;
pub mod sampler;
pub mod text;

use crate::discovery::Discovery;
use crate::provider::error::CatalogError;

/// 설정대로 펭귄 카탈로그 클라이언트를 만들고 서비스로 감싼다.
pub fn create_discovery(config: &crate::config::catalog::CatalogConfig) -> Result<Discovery<provider::penguin::Client>, CatalogError> {
    let client = provider::penguin::Client::from_config(config)?;
    Ok(Discovery::with_config(client, config))
}
