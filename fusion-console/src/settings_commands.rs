use anyhow::Result;
use colored::Colorize;

use fusion_types::{Theme, TransportPreference};

use crate::settings;

pub fn show_settings(json: bool) -> Result<()> {
    let current = settings::load()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&current)?);
    } else {
        println!("{}", "Console Settings:".cyan().bold());
        println!("  Backend URL: {}", current.api_base_url);
        println!("  Refresh interval: {} ms", current.refresh_interval_ms);
        println!("  Theme: {}", current.theme);
        println!("  Transport: {}", current.transport);
        println!("  Stored in: {}", settings::data_dir()?.join(settings::SETTINGS_FILE).display());
    }
    Ok(())
}

pub fn set_api_url(url: &str) -> Result<()> {
    let url = settings::normalize_api_url(url)?;
    settings::update(|s| s.api_base_url = url.clone())?;
    println!("{} Backend URL set to {}", "✓".green(), url);
    Ok(())
}

pub fn set_refresh_interval(ms: u64) -> Result<()> {
    settings::update(|s| s.refresh_interval_ms = ms)?;
    println!("{} Refresh interval set to {} ms", "✓".green(), ms);
    Ok(())
}

pub fn set_theme(theme: Theme) -> Result<()> {
    settings::update(|s| s.theme = theme)?;
    println!("{} Theme set to {}", "✓".green(), theme);
    Ok(())
}

pub fn set_transport(transport: TransportPreference) -> Result<()> {
    settings::update(|s| s.transport = transport)?;
    println!("{} Transport set to {}", "✓".green(), transport);
    Ok(())
}
