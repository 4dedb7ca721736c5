use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::stats::dto::{DashboardResponse, LeaderboardEntry};
use crate::stats::repo::UserTotal;

/// Reaching this many points counts as 100% progress. Policy constant, not
/// configurable.
const GOAL_POINTS: f64 = 300.0;

/// Percentage of the point goal reached, capped at 100.
pub fn progress(total_points: f64) -> f64 {
    (total_points / GOAL_POINTS * 100.0).min(100.0)
}

pub fn dashboard_summary(total_weight: Decimal) -> DashboardResponse {
    let total_weight = total_weight.to_f64().unwrap_or_default();
    let total_points = total_weight; // 1 kg = 1 point
    DashboardResponse {
        total_weight,
        total_points,
        progress: progress(total_points),
    }
}

/// Orders totals descending by points with user id ascending as the
/// deterministic tie-break, then assigns ranks 1..N in that order.
pub fn rank_users(mut totals: Vec<UserTotal>) -> Vec<LeaderboardEntry> {
    totals.sort_by(|a, b| {
        b.total_weight
            .cmp(&a.total_weight)
            .then(a.user_id.cmp(&b.user_id))
    });

    totals
        .into_iter()
        .enumerate()
        .map(|(i, t)| {
            let total = t.total_weight.to_f64().unwrap_or_default();
            LeaderboardEntry {
                user_id: t.user_id,
                name: t.username,
                total_points: total,
                total_weight: total,
                rank: (i + 1) as u32,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn total(user_id: Uuid, name: &str, weight: Decimal) -> UserTotal {
        UserTotal {
            user_id,
            username: name.to_string(),
            total_weight: weight,
        }
    }

    #[test]
    fn empty_dashboard_is_all_zero() {
        let summary = dashboard_summary(Decimal::ZERO);
        assert_eq!(summary.total_weight, 0.0);
        assert_eq!(summary.total_points, 0.0);
        assert_eq!(summary.progress, 0.0);
    }

    #[test]
    fn points_equal_weight_and_progress_follows() {
        // 2.5kg plastic + 1.0kg organic
        let summary = dashboard_summary(Decimal::new(35, 1));
        assert_eq!(summary.total_weight, 3.5);
        assert_eq!(summary.total_points, 3.5);
        assert!((summary.progress - 3.5 / 300.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn progress_is_clamped_at_100() {
        assert_eq!(progress(450.0), 100.0);
        assert_eq!(progress(300.0), 100.0);
        assert!(progress(299.99) < 100.0);
    }

    #[test]
    fn leaderboard_sorts_descending_and_ranks_sequentially() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = Uuid::new_v4();
        let entries = rank_users(vec![
            total(a, "a", Decimal::from(10)),
            total(b, "b", Decimal::from(25)),
            total(c, "c", Decimal::from(10)),
        ]);

        assert_eq!(entries[0].name, "b");
        assert_eq!(entries[0].total_points, 25.0);
        let ranks: Vec<u32> = entries.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn ties_break_by_user_id_ascending() {
        let mut ids = [Uuid::new_v4(), Uuid::new_v4()];
        ids.sort();
        let entries = rank_users(vec![
            total(ids[1], "second", Decimal::from(10)),
            total(ids[0], "first", Decimal::from(10)),
        ]);

        assert_eq!(entries[0].user_id, ids[0]);
        assert_eq!(entries[0].rank, 1);
        assert_eq!(entries[1].rank, 2);
    }

    #[test]
    fn users_without_submissions_keep_zero_totals() {
        let entries = rank_users(vec![total(Uuid::new_v4(), "idle", Decimal::ZERO)]);
        assert_eq!(entries[0].total_points, 0.0);
        assert_eq!(entries[0].rank, 1);
    }
}
