use anyhow::{Context, Result};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};

use fusion_client::FusionApi;
use fusion_types::{BigId, Kol, KolForm, KolType};

use crate::commands::report;

pub async fn list_kols(api: &FusionApi, name: Option<&str>, json: bool) -> Result<()> {
    let list = api.get_kols(name).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&list.kols)?);
        return Ok(());
    }

    if list.kols.is_empty() {
        println!("{}", "No KOLs found.".yellow());
        return Ok(());
    }

    println!("{}", kols_table(&list.kols));
    println!("\n{} KOLs total", list.kols.len());
    Ok(())
}

fn kols_table(kols: &[Kol]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["ID", "Name", "Type", "Source", "Channel", "Authors", "Followed by"]);

    for kol in kols {
        let kind = match kol.kol_type {
            KolType::Wwg => Cell::new(kol.kol_type).fg(Color::Magenta),
            KolType::Normal => Cell::new(kol.kol_type),
        };
        let authors: Vec<&str> = kol.dc_author_ids.iter().map(BigId::as_str).collect();
        table.add_row(vec![
            Cell::new(kol.id),
            Cell::new(&kol.name),
            kind,
            Cell::new(if kol.source_type.is_empty() { "-" } else { kol.source_type.as_str() }),
            Cell::new(&kol.dc_channel_id),
            Cell::new(if authors.is_empty() { "-".to_string() } else { authors.join("\n") }),
            Cell::new(if kol.followed_by.is_empty() { "-".to_string() } else { kol.followed_by.join(", ") }),
        ]);
    }
    table
}

/// IDs are validated as integer literals but sent as text.
fn build_form(name: String, kol_type: KolType, channel_id: &str, author_ids: &[String]) -> Result<KolForm> {
    if name.trim().is_empty() {
        anyhow::bail!("KOL name must not be empty");
    }
    let channel = BigId::parse(channel_id).with_context(|| format!("Invalid channel ID: {}", channel_id))?;
    let authors = author_ids
        .iter()
        .map(|raw| BigId::parse(raw).map(BigId::into_string).with_context(|| format!("Invalid author ID: {}", raw)))
        .collect::<Result<Vec<_>>>()?;

    Ok(KolForm { name, kol_type, dc_channel_id: channel.into_string(), dc_author_ids: authors })
}

pub async fn add_kol(
    api: &FusionApi,
    name: String,
    kol_type: KolType,
    channel_id: &str,
    author_ids: &[String],
) -> Result<()> {
    let form = build_form(name, kol_type, channel_id, author_ids)?;
    report(api.add_kol(&form).await?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_build_form_keeps_ids_exact() {
        let form = build_form(
            "whale".to_string(),
            KolType::Wwg,
            " 1234567890123456789 ",
            &["987654321098765432".to_string()],
        )
        .unwrap();

        assert_eq!(form.dc_channel_id, "1234567890123456789");
        assert_eq!(form.dc_author_ids, vec!["987654321098765432".to_string()]);
    }

    #[test]
    fn test_build_form_rejects_bad_ids() {
        assert!(build_form("whale".to_string(), KolType::Normal, "12ab", &[]).is_err());
        assert!(build_form("whale".to_string(), KolType::Normal, "1", &["x".to_string()]).is_err());
        assert!(build_form(" ".to_string(), KolType::Normal, "1", &[]).is_err());
    }

    #[test]
    fn test_table_shows_big_ids() {
        let kol = Kol {
            id: 3,
            name: "whale".to_string(),
            dc_channel_id: BigId::parse("1234567890123456789").unwrap(),
            followed_by: vec!["alice".to_string(), "bob".to_string()],
            ..Default::default()
        };
        let rendered = kols_table(&[kol]).to_string();
        assert!(rendered.contains("1234567890123456789"));
        assert!(rendered.contains("alice, bob"));
    }
}
