//! Wire models for the VCI chart API.

use serde::{Deserialize, Serialize};

/// Request payload for OHLC chart data
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OhlcRequest {
    pub time_frame: &'static str,
    pub symbols: Vec<String>,
    pub to: i64,
    pub count_back: i64,
}

/// Raw OHLC response from VCI (parallel arrays, one entry per session).
#[derive(Debug, Clone, Deserialize)]
pub struct VciOhlcResponse {
    #[serde(default)]
    pub symbol: Option<String>,
    /// Session timestamps (Unix seconds); VCI sends these as strings or numbers
    #[serde(deserialize_with = "deserialize_timestamps")]
    pub t: Vec<i64>,
    pub o: Vec<f64>,
    pub h: Vec<f64>,
    pub l: Vec<f64>,
    pub c: Vec<f64>,
    pub v: Vec<i64>,
}

fn deserialize_timestamps<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct TimestampVisitor;

    impl<'de> Visitor<'de> for TimestampVisitor {
        type Value = Vec<i64>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a sequence of timestamps (either strings or integers)")
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut timestamps = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(value) = seq.next_element::<serde_json::Value>()? {
                let ts = match value {
                    serde_json::Value::Number(n) => n
                        .as_i64()
                        .ok_or_else(|| de::Error::custom("invalid timestamp number"))?,
                    serde_json::Value::String(s) => s.parse::<i64>().map_err(|_| {
                        de::Error::custom(format!("invalid timestamp string: {}", s))
                    })?,
                    _ => return Err(de::Error::custom("expected number or string for timestamp")),
                };
                timestamps.push(ts);
            }
            Ok(timestamps)
        }
    }

    deserializer.deserialize_seq(TimestampVisitor)
}

/// Daily bars; the only time frame this crate requests.
pub const DAILY_TIME_FRAME: &str = "ONE_DAY";

/// Map a public index code to the code VCI expects. `None` for non-index symbols.
pub fn map_index_symbol(symbol: &str) -> Option<&'static str> {
    match symbol.to_uppercase().as_str() {
        "VNINDEX" => Some("VNINDEX"),
        "VN30" => Some("VN30"),
        "HNXINDEX" => Some("HNXIndex"),
        "HNX30" => Some("HNX30"),
        "UPCOMINDEX" => Some("HNXUpcomIndex"),
        _ => None,
    }
}
