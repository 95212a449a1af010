//! Dashboard statistics derived from polled data.

use serde::{Deserialize, Serialize};

use super::{Kol, User};

/// Counters shown on the console dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DashboardStats {
    /// Total number of users
    pub total_users: usize,
    /// Users whose process is running
    pub active_users: usize,
    /// Users with the balance monitor running
    pub monitored_users: usize,
    /// Track configurations currently active
    pub running_tracks: usize,
    /// Total configured tracks
    pub total_tracks: usize,
    /// Total number of KOLs
    pub total_kols: usize,
}

impl DashboardStats {
    /// Calculate statistics from one snapshot of users and KOLs.
    pub fn from_snapshot(users: &[User], kols: &[Kol]) -> Self {
        let mut stats = Self { total_users: users.len(), total_kols: kols.len(), ..Default::default() };

        for user in users {
            if user.is_running {
                stats.active_users += 1;
            }
            if user.is_monitoring {
                stats.monitored_users += 1;
            }
            stats.total_tracks += user.followed_kols.len();
            stats.running_tracks += user.followed_kols.iter().filter(|t| t.is_active).count();
        }

        stats
    }
}
