//! Backend connection setup for a console run.

use anyhow::{Context, Result};
use std::sync::Arc;

use fusion_client::{ClientConfig, FusionApi, RelayHost, TracingObserver, TransportSelector};
use fusion_types::{ConsoleSettings, TransportPreference};

use crate::settings;

/// Effective base URL: command-line/env override first, then stored settings.
pub fn resolve_base_url(stored: &ConsoleSettings, api_url: Option<&str>) -> Result<String> {
    match api_url {
        Some(url) => settings::normalize_api_url(url).context("Invalid --api-url"),
        None => Ok(stored.api_base_url.clone()),
    }
}

/// Build the facade with the transport chosen for this run.
///
/// `relayed` starts an in-process relay host; `auto` probes for a relay once
/// and, finding none, calls the backend directly.
pub fn connect(
    stored: &ConsoleSettings,
    transport: Option<TransportPreference>,
    api_url: Option<&str>,
) -> Result<FusionApi> {
    let config = ClientConfig::new(resolve_base_url(stored, api_url)?);
    let preference = transport.unwrap_or(stored.transport);

    let selector = match preference {
        TransportPreference::Direct => TransportSelector::direct(&config)?,
        TransportPreference::Relayed => TransportSelector::relayed(RelayHost::spawn(&config)?),
        TransportPreference::Auto => TransportSelector::detect(&config, None)?,
    };
    tracing::debug!("Using {} transport against {}", selector.mode(), config.base_url);

    Ok(FusionApi::new(selector.with_observer(Arc::new(TracingObserver))))
}
