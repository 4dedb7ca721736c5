use rust_decimal::Decimal;

use crate::error::ApiError;

/// Accepted waste categories. Stored as lowercase text in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WasteType {
    Plastic,
    Organic,
    Textile,
    Ewaste,
    Other,
}

impl WasteType {
    pub fn as_str(self) -> &'static str {
        match self {
            WasteType::Plastic => "plastic",
            WasteType::Organic => "organic",
            WasteType::Textile => "textile",
            WasteType::Ewaste => "ewaste",
            WasteType::Other => "other",
        }
    }

    pub fn parse(raw: &str) -> Result<Self, ApiError> {
        match raw {
            "plastic" => Ok(WasteType::Plastic),
            "organic" => Ok(WasteType::Organic),
            "textile" => Ok(WasteType::Textile),
            "ewaste" => Ok(WasteType::Ewaste),
            "other" => Ok(WasteType::Other),
            _ => Err(ApiError::Validation(format!(
                "waste_type must be one of plastic, organic, textile, ewaste, other (got {raw:?})"
            ))),
        }
    }
}

/// Validates a weight against the NUMERIC(6,2) column domain: finite,
/// non-negative, at most 2 decimal places, below 10000.
pub fn parse_weight(raw: f64) -> Result<Decimal, ApiError> {
    let weight = Decimal::try_from(raw)
        .map_err(|_| ApiError::Validation("weight_kg must be a valid number".into()))?;

    if weight < Decimal::ZERO {
        return Err(ApiError::Validation("weight_kg must be non-negative".into()));
    }
    if weight.round_dp(2) != weight {
        return Err(ApiError::Validation(
            "weight_kg must have at most 2 decimal places".into(),
        ));
    }
    if weight >= Decimal::from(10_000) {
        return Err(ApiError::Validation(
            "weight_kg must be less than 10000".into(),
        ));
    }

    Ok(weight)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_category() {
        for raw in ["plastic", "organic", "textile", "ewaste", "other"] {
            assert_eq!(WasteType::parse(raw).unwrap().as_str(), raw);
        }
    }

    #[test]
    fn rejects_unknown_and_miscased_categories() {
        assert!(WasteType::parse("metal").is_err());
        assert!(WasteType::parse("Plastic").is_err());
        assert!(WasteType::parse("").is_err());
    }

    #[test]
    fn accepts_weights_within_the_column_domain() {
        assert_eq!(parse_weight(0.0).unwrap(), Decimal::ZERO);
        assert_eq!(parse_weight(2.5).unwrap(), Decimal::new(25, 1));
        assert_eq!(parse_weight(9999.99).unwrap(), Decimal::new(999_999, 2));
    }

    #[test]
    fn rejects_negative_weight() {
        assert!(parse_weight(-0.01).is_err());
    }

    #[test]
    fn rejects_more_than_two_decimal_places() {
        assert!(parse_weight(1.234).is_err());
    }

    #[test]
    fn rejects_out_of_range_and_non_finite_weight() {
        assert!(parse_weight(10_000.0).is_err());
        assert!(parse_weight(f64::NAN).is_err());
        assert!(parse_weight(f64::INFINITY).is_err());
    }
}
