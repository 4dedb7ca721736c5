use serde::Serialize;
use uuid::Uuid;

/// Per-user dashboard summary. Points equal weight (1 kg = 1 point);
/// progress is the share of the 300-point goal, capped at 100.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub total_weight: f64,
    pub total_points: f64,
    pub progress: f64,
}

/// One leaderboard row. Ranks are 1-based and strictly increasing; ties do
/// not share a rank.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub user_id: Uuid,
    pub name: String,
    pub total_points: f64,
    pub total_weight: f64,
    pub rank: u32,
}
