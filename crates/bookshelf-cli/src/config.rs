use bookshelf_core::{CatalogConfig, DEFAULT_BASE_URL};

use crate::cli::Cli;
use crate::error::CliError;

pub const BASE_URL_ENV: &str = "BOOKSHELF_API_BASE";

/// Resolve store configuration from flags, then environment, then defaults.
pub fn resolve(cli: &Cli) -> Result<CatalogConfig, CliError> {
    let env_base = std::env::var(BASE_URL_ENV).ok();
    build(cli.base_url.as_deref(), env_base.as_deref(), cli.timeout_ms)
}

fn build(
    flag_base: Option<&str>,
    env_base: Option<&str>,
    timeout_ms: u64,
) -> Result<CatalogConfig, CliError> {
    let base_url = flag_base
        .or(env_base.filter(|value| !value.trim().is_empty()))
        .unwrap_or(DEFAULT_BASE_URL);

    let config = CatalogConfig::new(base_url)?;
    Ok(if timeout_ms == 0 {
        config
    } else {
        config.with_timeout_ms(timeout_ms)
    })
}
