use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

use fusion_client::FusionApi;
use fusion_types::ApiResponse;

use crate::cli::{KolCommands, SettingsCommands, TrackCommands, UserCommands};
use crate::{kol_commands, settings_commands, track_commands, user_commands};

pub async fn handle_user_command(api: &FusionApi, cmd: UserCommands) -> Result<()> {
    match cmd {
        UserCommands::List { username, json } => user_commands::list_users(api, username.as_deref(), json).await,
        UserCommands::Add {
            username,
            api_key,
            secret_key,
            trade_mode,
            balance_monitor,
            init_balance,
            balance_rate,
            min_balance,
            exporter_name,
        } => {
            let form = fusion_types::UserForm {
                username,
                gate_api_key: api_key,
                gate_secret_key: secret_key,
                trade_mode,
                enable_balance_monitor: balance_monitor,
                init_balance,
                balance_rate,
                min_balance,
                exporter_name,
            };
            user_commands::add_user(api, &form).await
        }
        UserCommands::Update {
            username,
            api_key,
            secret_key,
            trade_mode,
            balance_monitor,
            init_balance,
            balance_rate,
            min_balance,
            exporter_name,
        } => {
            let update = fusion_types::UserUpdate {
                gate_api_key: api_key,
                gate_secret_key: secret_key,
                trade_mode,
                enable_balance_monitor: balance_monitor,
                init_balance,
                balance_rate,
                min_balance,
                exporter_name,
            };
            user_commands::update_user(api, &username, &update).await
        }
        UserCommands::Remove { username, yes } => {
            if confirmed(&format!("Remove user {} and all of its track configurations?", username), yes)? {
                report(api.remove_user(&username).await?)?;
            }
            Ok(())
        }
        UserCommands::Run { username } => report(api.run_user(&username).await?),
        UserCommands::Stop { username } => report(api.stop_user(&username).await?),
        UserCommands::MonitorRun { username } => report(api.run_monitor(&username).await?),
        UserCommands::MonitorStop { username } => report(api.stop_monitor(&username).await?),
        UserCommands::CloseAll { username, yes } => user_commands::close_all(api, &username, yes).await,
        UserCommands::ExporterStart { username, exporter_name } => {
            report(api.start_exporter(&username, exporter_name.as_deref()).await?)
        }
        UserCommands::ExporterStop { username } => report(api.stop_exporter(&username).await?),
    }
}

pub async fn handle_kol_command(api: &FusionApi, cmd: KolCommands) -> Result<()> {
    match cmd {
        KolCommands::List { name, json } => kol_commands::list_kols(api, name.as_deref(), json).await,
        KolCommands::Add { name, kol_type, channel_id, author_ids } => {
            kol_commands::add_kol(api, name, kol_type, &channel_id, &author_ids).await
        }
        KolCommands::Remove { name, yes } => {
            if confirmed(&format!("Remove KOL {}?", name), yes)? {
                report(api.remove_kol(&name).await?)?;
            }
            Ok(())
        }
    }
}

pub async fn handle_track_command(api: &FusionApi, cmd: TrackCommands) -> Result<()> {
    match cmd {
        TrackCommands::List { json } => track_commands::list_tracks(api, json).await,
        TrackCommands::Add { username, kol, futures, mode, amounts, max_loss, reverse } => {
            let form = track_commands::build_form(&username, &kol, &futures, mode, &amounts, max_loss, reverse)?;
            report(api.add_track_config(&form).await?)
        }
        TrackCommands::Remove { username, kol, yes } => {
            if confirmed(&format!("Remove the {} track of {}?", kol, username), yes)? {
                report(api.remove_track_config(&username, &kol).await?)?;
            }
            Ok(())
        }
        TrackCommands::Start { username, kol } => report(api.start_track(&username, &kol).await?),
        TrackCommands::Stop { username, kol } => report(api.stop_track(&username, &kol).await?),
        TrackCommands::Restart { username, kol, yes } => {
            if confirmed(&format!("Restart the {} track of {}? Its positions are cleared.", kol, username), yes)? {
                report(api.restart_track(&username, &kol).await?)?;
            }
            Ok(())
        }
    }
}

pub fn handle_settings_command(cmd: SettingsCommands) -> Result<()> {
    match cmd {
        SettingsCommands::Show { json } => settings_commands::show_settings(json),
        SettingsCommands::SetUrl { url } => settings_commands::set_api_url(&url),
        SettingsCommands::SetInterval { ms } => settings_commands::set_refresh_interval(ms),
        SettingsCommands::SetTheme { theme } => settings_commands::set_theme(theme),
        SettingsCommands::SetTransport { transport } => settings_commands::set_transport(transport),
    }
}

pub async fn handle_dashboard(api: &FusionApi) -> Result<()> {
    let stats = api.dashboard().await?;

    println!("{}", "Fusion Alpha Dashboard".cyan().bold());
    println!("  Backend: {} ({})", api.base_url().await?, api.selector().mode());
    println!("  Users: {} total, {} running, {} monitored", stats.total_users, stats.active_users, stats.monitored_users);
    println!("  Tracks: {} total, {} running", stats.total_tracks, stats.running_tracks);
    println!("  KOLs: {}", stats.total_kols);
    Ok(())
}

/// Print a mutation acknowledgement. A 2xx without a status counts as success;
/// an explicit non-success status fails the command.
pub(crate) fn report(resp: ApiResponse) -> Result<()> {
    if resp.status.is_empty() || resp.is_success() {
        let summary = resp.summary();
        println!("{} {}", "✓".green(), if summary.is_empty() { "done" } else { summary });
        Ok(())
    } else {
        anyhow::bail!("Backend rejected the request: {}", resp.summary())
    }
}

/// Gate a destructive call. `--yes` skips the prompt; a refusal prints
/// "Aborted." and returns `false`.
pub(crate) fn confirmed(prompt: &str, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }
    let accepted = confirm(prompt, &mut io::stdin().lock())?;
    if !accepted {
        println!("{}", "Aborted.".yellow());
    }
    Ok(accepted)
}

/// Prompt with `[y/N]`. Only `y` or `yes` accepts.
pub(crate) fn confirm(prompt: &str, input: &mut impl BufRead) -> Result<bool> {
    print!("{} [y/N] ", prompt.red().bold());
    io::stdout().flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
