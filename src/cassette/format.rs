//! On-disk cassette format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recorded session of port interactions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cassette {
    /// Human-readable name of the recording.
    pub name: String,
    /// When the recording was made.
    pub recorded_at: DateTime<Utc>,
    /// Git commit hash at recording time, or "unknown".
    pub commit: String,
    /// Recorded interactions in call order.
    pub interactions: Vec<Interaction>,
}

/// One recorded port call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    /// Global sequence number within the cassette.
    pub seq: u64,
    /// Port name (e.g., `"image_generator"`).
    pub port: String,
    /// Method name (e.g., `"generate"`).
    pub method: String,
    /// Serialized call input.
    pub input: serde_json::Value,
    /// Serialized call output, wrapped as `{"Ok": ...}` or `{"Err": "..."}`.
    pub output: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cassette_yaml_round_trip() {
        let cassette = Cassette {
            name: "round-trip".into(),
            recorded_at: Utc::now(),
            commit: "deadbeef".into(),
            interactions: vec![Interaction {
                seq: 0,
                port: "image_generator".into(),
                method: "generate".into(),
                input: json!({"prompt": "a cat"}),
                output: json!({"Ok": {"parts": [{"image": {"data": "QQ==", "mime_type": "image/png"}}]}}),
            }],
        };

        let yaml = serde_yaml::to_string(&cassette).unwrap();
        let parsed: Cassette = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.name, "round-trip");
        assert_eq!(parsed.interactions.len(), 1);
        assert_eq!(parsed.interactions[0].port, "image_generator");
        assert_eq!(parsed.interactions[0].output["Ok"]["parts"][0]["image"]["data"], "QQ==");
    }
}
