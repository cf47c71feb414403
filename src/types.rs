use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Stock row
// ---------------------------------------------------------------------------

/// One result row from a screen, tagged with the category that produced it.
///
/// Chartink's row shape (symbol, name, close, volume, ...) is pass-through
/// data: everything beyond `volume` is kept opaque in `fields` and serialized
/// back out untouched via flatten.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockRow {
    /// Display label of the screen category that produced this row.
    pub side: String,

    /// Volume relative to the category median, two decimals. Only present on
    /// rows from the buy/sell/advanceBuy/advanceSell categories.
    #[serde(rename = "momentumStrength", skip_serializing_if = "Option::is_none")]
    pub momentum_strength: Option<f64>,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl StockRow {
    /// Wrap an upstream row value with a side label. Non-object rows keep an
    /// empty field map rather than failing the whole screen.
    pub fn tagged(value: &Value, side: &str) -> Self {
        let fields = match value {
            Value::Object(map) => map.clone(),
            _ => Map::new(),
        };
        Self {
            side: side.to_string(),
            momentum_strength: None,
            fields,
        }
    }

    /// Trading volume of the row; rows without a numeric `volume` score as 0.
    pub fn volume(&self) -> f64 {
        self.fields
            .get("volume")
            .and_then(Value::as_f64)
            .unwrap_or(0.0)
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Credentials scraped from the landing page. Lives for one aggregation
/// request; never cached or shared across invocations.
#[derive(Debug, Clone)]
pub struct SessionContext {
    /// Anti-forgery token from the `csrf-token` meta tag.
    pub csrf_token: String,
    /// All Set-Cookie header values joined with "; ", sent back verbatim.
    pub cookies: String,
}

// ---------------------------------------------------------------------------
// Per-screen result
// ---------------------------------------------------------------------------

/// Tagged rows from a single screen, paired with the screen's table name so
/// the merge step can decide whether to score it.
#[derive(Debug, Clone)]
pub struct ScreenResult {
    pub name: &'static str,
    pub rows: Vec<StockRow>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tagged_row_keeps_upstream_fields() {
        let raw = json!({"nsecode": "TCS", "close": 3500.5, "volume": 120000});
        let row = StockRow::tagged(&raw, "topGainers");
        assert_eq!(row.side, "topGainers");
        assert_eq!(row.fields.get("nsecode"), Some(&json!("TCS")));
        assert!((row.volume() - 120000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_volume_scores_zero() {
        let row = StockRow::tagged(&json!({"nsecode": "INFY"}), "buy");
        assert_eq!(row.volume(), 0.0);
    }

    #[test]
    fn non_object_row_gets_empty_fields() {
        let row = StockRow::tagged(&json!("garbage"), "sell");
        assert_eq!(row.side, "sell");
        assert!(row.fields.is_empty());
    }

    #[test]
    fn momentum_field_omitted_when_absent() {
        let row = StockRow::tagged(&json!({"volume": 10}), "topLosers");
        let out = serde_json::to_value(&row).unwrap();
        assert!(out.get("momentumStrength").is_none());
        assert_eq!(out.get("side"), Some(&json!("topLosers")));
        assert_eq!(out.get("volume"), Some(&json!(10)));
    }

    #[test]
    fn momentum_field_serialized_camel_case() {
        let mut row = StockRow::tagged(&json!({"volume": 10}), "buy");
        row.momentum_strength = Some(1.5);
        let out = serde_json::to_value(&row).unwrap();
        assert_eq!(out.get("momentumStrength"), Some(&json!(1.5)));
    }
}
