use anyhow::{Context, Result};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use std::collections::BTreeMap;

use fusion_client::FusionApi;
use fusion_types::{AmountMode, TrackConfig, TrackConfigForm};

pub async fn list_tracks(api: &FusionApi, json: bool) -> Result<()> {
    let tracks = api.list_tracks().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tracks)?);
        return Ok(());
    }

    if tracks.is_empty() {
        println!("{}", "No track configurations found.".yellow());
        return Ok(());
    }

    let running = tracks.iter().filter(|t| t.is_running()).count();
    println!("{}", tracks_table(&tracks));
    println!("\n{} tracks total, {} running", tracks.len(), running);
    Ok(())
}

fn tracks_table(tracks: &[TrackConfig]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["User", "KOL", "Mode", "Sizing", "Futures", "Reverse", "Status"]);

    for track in tracks {
        let status = if track.is_running() {
            Cell::new(track.status).fg(Color::Green)
        } else {
            Cell::new(track.status).fg(Color::DarkGrey)
        };
        table.add_row(vec![
            Cell::new(&track.username),
            Cell::new(&track.kol_name),
            Cell::new(track.amount_mode),
            Cell::new(sizing_summary(track)),
            Cell::new(if track.futures.is_empty() { "-".to_string() } else { track.futures.join(", ") }),
            Cell::new(if track.is_reverse { "yes" } else { "no" }),
            status,
        ]);
    }
    table
}

fn sizing_summary(track: &TrackConfig) -> String {
    let entries = |map: Option<&BTreeMap<String, f64>>, suffix: &str| {
        map.filter(|m| !m.is_empty())
            .map(|m| m.iter().map(|(k, v)| format!("{}={}{}", k, v, suffix)).collect::<Vec<_>>().join(", "))
            .unwrap_or_else(|| "-".to_string())
    };
    match track.amount_mode {
        AmountMode::Fixed => entries(track.fixed_amounts.as_ref(), ""),
        AmountMode::Percentage => entries(track.percentages.as_ref(), "%"),
        AmountMode::LossFixed => track.max_loss.map_or_else(|| "-".to_string(), |v| format!("max loss {}", v)),
    }
}

fn parse_entry(raw: &str) -> Result<(&str, f64)> {
    let (symbol, value) = raw.split_once('=').with_context(|| format!("Expected SYMBOL=VALUE, got {}", raw))?;
    let value = value.trim().parse::<f64>().with_context(|| format!("Invalid number in {}", raw))?;
    Ok((symbol, value))
}

/// Assemble and validate the body of a track add request from CLI arguments.
pub fn build_form(
    username: &str,
    kol: &str,
    futures: &[String],
    mode: AmountMode,
    amounts: &[String],
    max_loss: Option<f64>,
    reverse: bool,
) -> Result<TrackConfigForm> {
    let mut form = TrackConfigForm::new(username, kol);
    form.is_reverse = reverse;
    for symbol in futures {
        form.add_future(symbol);
    }
    form.set_amount_mode(mode);

    for raw in amounts {
        let (symbol, value) = parse_entry(raw)?;
        match mode {
            AmountMode::Fixed => form.set_fixed_amount(symbol, value)?,
            AmountMode::Percentage => form.set_percentage(symbol, value)?,
            AmountMode::LossFixed => anyhow::bail!("--amount does not apply to LOSS_FIXED, use --max-loss"),
        }
    }

    if let Some(max_loss) = max_loss {
        if mode != AmountMode::LossFixed {
            anyhow::bail!("--max-loss only applies to LOSS_FIXED");
        }
        form.max_loss = Some(max_loss);
    }

    form.validate()?;
    Ok(form)
}
