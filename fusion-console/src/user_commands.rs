use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};

use fusion_client::FusionApi;
use fusion_types::{User, UserForm, UserUpdate};

use crate::commands::{confirmed, report};

pub async fn list_users(api: &FusionApi, username: Option<&str>, json: bool) -> Result<()> {
    let list = api.get_users(username).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&list.users)?);
        return Ok(());
    }

    if list.users.is_empty() {
        println!("{}", "No users found.".yellow());
        return Ok(());
    }

    println!("{}", users_table(&list.users));
    println!("\n{} users total", list.total.max(list.users.len() as u64));
    Ok(())
}

fn users_table(users: &[User]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["ID", "Username", "Process", "Monitor", "Exporter", "Tracks", "Balance"]);

    for user in users {
        let running = user.followed_kols.iter().filter(|t| t.is_active).count();
        table.add_row(vec![
            Cell::new(user.id),
            Cell::new(&user.username),
            on_off(user.is_running, "Running", "Stopped"),
            on_off(user.is_monitoring, "On", "Off"),
            on_off(user.enable_exporter, "On", "Off"),
            Cell::new(format!("{}/{}", running, user.followed_kols.len())),
            Cell::new(balance_summary(user)),
        ]);
    }
    table
}

fn on_off(flag: bool, on: &str, off: &str) -> Cell {
    if flag {
        Cell::new(on).fg(Color::Green)
    } else {
        Cell::new(off).fg(Color::DarkGrey)
    }
}

fn balance_summary(user: &User) -> String {
    let fmt = |v: Option<f64>| v.map_or_else(|| "-".to_string(), |v| format!("{}", v));
    format!("init {} / min {} / rate {}", fmt(user.init_balance), fmt(user.min_balance), fmt(user.balance_rate))
}

pub async fn add_user(api: &FusionApi, form: &UserForm) -> Result<()> {
    if form.username.trim().is_empty() {
        anyhow::bail!("Username must not be empty");
    }
    println!("{}", format!("Adding user {} ({})...", form.username, form.trade_mode).cyan());
    report(api.add_user(form).await?)
}

pub async fn update_user(api: &FusionApi, username: &str, update: &UserUpdate) -> Result<()> {
    if update.is_empty() {
        anyhow::bail!("Nothing to update: pass at least one field");
    }
    report(api.update_user(username, update).await?)
}

pub async fn close_all(api: &FusionApi, username: &str, yes: bool) -> Result<()> {
    if !confirmed(&format!("Close ALL open positions of {}?", username), yes)? {
        return Ok(());
    }
    report(api.close_all_positions(username).await?)
}
