use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::submissions::repo::WasteSubmission;

/// Body for create and full update. `weight_kg` arrives as a JSON number and
/// is validated against the NUMERIC(6,2) domain before it touches the
/// database.
#[derive(Debug, Deserialize)]
pub struct SubmissionBody {
    pub waste_type: String,
    pub weight_kg: f64,
}

/// Submission as returned to clients. `points` is derived from the weight on
/// every read (1 kg = 1 point) and never stored.
#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub id: Uuid,
    pub waste_type: String,
    pub weight_kg: Decimal,
    #[serde(rename = "date", with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub points: f64,
}

impl From<WasteSubmission> for SubmissionResponse {
    fn from(row: WasteSubmission) -> Self {
        let points = row.weight_kg.to_f64().unwrap_or_default();
        Self {
            id: row.id,
            waste_type: row.waste_type,
            weight_kg: row.weight_kg,
            created_at: row.created_at,
            points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(weight: Decimal) -> WasteSubmission {
        WasteSubmission {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            waste_type: "plastic".to_string(),
            weight_kg: weight,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    #[test]
    fn points_equal_weight() {
        let response = SubmissionResponse::from(row(Decimal::new(25, 1)));
        assert_eq!(response.points, 2.5);

        let response = SubmissionResponse::from(row(Decimal::ZERO));
        assert_eq!(response.points, 0.0);
    }

    #[test]
    fn response_omits_owner_and_renames_timestamp() {
        let json = serde_json::to_value(SubmissionResponse::from(row(Decimal::ONE))).unwrap();
        assert!(json.get("user_id").is_none());
        assert!(json.get("created_at").is_none());
        assert!(json["date"].is_string());
        assert_eq!(json["points"], 1.0);
    }
}
