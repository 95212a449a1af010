//! Live polling view.
//!
//! Users and KOLs are polled concurrently every refresh interval. Each half of
//! the view is replaced only by a successful poll, so a failure leaves the last
//! good data on screen together with the error.

use anyhow::Result;
use chrono::{DateTime, Local};
use colored::Colorize;
use std::time::Duration;

use fusion_client::{ClientError, FusionApi};
use fusion_types::models::MIN_REFRESH_INTERVAL_MS;
use fusion_types::{DashboardStats, Kol, KolList, User, UserList};

#[derive(Debug, Default)]
pub struct WatchView {
    users: Option<Vec<User>>,
    kols: Option<Vec<Kol>>,
    errors: Vec<String>,
    updated_at: Option<DateTime<Local>>,
}

impl WatchView {
    /// Merge one poll. Failed halves keep their previous data.
    pub fn apply(&mut self, users: Result<UserList, ClientError>, kols: Result<KolList, ClientError>) {
        self.errors.clear();
        match users {
            Ok(list) => self.users = Some(list.users),
            Err(e) => self.errors.push(format!("users: {}", e)),
        }
        match kols {
            Ok(list) => self.kols = Some(list.kols),
            Err(e) => self.errors.push(format!("kols: {}", e)),
        }
        if self.errors.is_empty() {
            self.updated_at = Some(Local::now());
        }
    }

    pub fn stats(&self) -> Option<DashboardStats> {
        match (&self.users, &self.kols) {
            (None, None) => None,
            (users, kols) => Some(DashboardStats::from_snapshot(
                users.as_deref().unwrap_or_default(),
                kols.as_deref().unwrap_or_default(),
            )),
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        match self.stats() {
            Some(stats) => {
                out.push_str(&format!(
                    "Users {} ({} running, {} monitored) | Tracks {}/{} running | KOLs {}",
                    stats.total_users,
                    stats.active_users,
                    stats.monitored_users,
                    stats.running_tracks,
                    stats.total_tracks,
                    stats.total_kols
                ));
            }
            None => out.push_str("Waiting for first successful poll..."),
        }
        if let Some(at) = self.updated_at {
            out.push_str(&format!("  [updated {}]", at.format("%H:%M:%S")));
        }
        for error in &self.errors {
            out.push_str(&format!("\n  {} {}", "✗".red(), error));
        }
        out
    }
}

pub async fn run(api: &FusionApi, refresh_ms: u64, iterations: Option<u64>) -> Result<()> {
    // `interval` panics on a zero period.
    let refresh_ms = refresh_ms.max(MIN_REFRESH_INTERVAL_MS);
    println!(
        "{}",
        format!("Watching {} every {} ms (Ctrl-C to stop)", api.base_url().await?, refresh_ms).cyan()
    );

    let mut view = WatchView::default();
    let mut ticker = tokio::time::interval(Duration::from_millis(refresh_ms));
    let mut polls = 0u64;

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = tokio::signal::ctrl_c() => {
                tracing::debug!("Watch interrupted after {} polls", polls);
                break;
            }
        }

        let (users, kols) = tokio::join!(api.get_users(None), api.get_kols(None));
        view.apply(users, kols);
        println!("{}", view.render());

        polls += 1;
        if iterations.is_some_and(|n| polls >= n) {
            break;
        }
    }
    Ok(())
}
