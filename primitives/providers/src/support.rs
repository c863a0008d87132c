//! Probe result types.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of a capability probe.
///
/// `Unknown` means the probe could not decide in time; it is not a negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportStatus {
    /// The call succeeded.
    Supported,
    /// The call failed.
    Unsupported,
    /// The call timed out.
    Unknown,
}

impl SupportStatus {
    /// Canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SupportStatus::Supported => "supported",
            SupportStatus::Unsupported => "unsupported",
            SupportStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SupportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.as_str()) }
}

/// Coarse provider capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Feature {
    /// Subscriptions over a WebSocket endpoint
    Websockets,
    /// Reads at the chain head
    LatestState,
    /// Logs at the chain head
    LatestEvents,
    /// Archive reads
    HistoricalState,
    /// Archive logs
    HistoricalEvents,
}

struct FeatureMeta {
    key: &'static str,
    display_name: &'static str,
}

const FEATURE_METADATA: [FeatureMeta; 5] = [
    FeatureMeta { key: "websockets", display_name: "Websockets" },
    FeatureMeta { key: "latestState", display_name: "Latest State" },
    FeatureMeta { key: "latestEvents", display_name: "Recent Events" },
    FeatureMeta { key: "historicalState", display_name: "Archive Data" },
    FeatureMeta { key: "historicalEvents", display_name: "Archive Events" },
];

impl Feature {
    /// Every feature, in dataset order.
    pub const ALL: [Feature; 5] = [
        Feature::Websockets,
        Feature::LatestState,
        Feature::LatestEvents,
        Feature::HistoricalState,
        Feature::HistoricalEvents,
    ];

    fn meta(&self) -> &'static FeatureMeta { &FEATURE_METADATA[*self as usize] }

    /// Dataset key.
    pub fn as_str(&self) -> &'static str { self.meta().key }

    /// Human-readable label.
    pub fn display_name(&self) -> &'static str { self.meta().display_name }
}

impl FromStr for Feature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feature::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown feature: {}", s))
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.display_name()) }
}

/// Status of every [`Feature`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Features {
    /// WebSocket support
    pub websockets: SupportStatus,
    /// Head reads
    pub latest_state: SupportStatus,
    /// Head logs
    pub latest_events: SupportStatus,
    /// Archive reads
    pub historical_state: SupportStatus,
    /// Archive logs
    pub historical_events: SupportStatus,
}

impl Features {
    /// Every feature with the same status.
    pub fn uniform(status: SupportStatus) -> Self {
        Self {
            websockets: status,
            latest_state: status,
            latest_events: status,
            historical_state: status,
            historical_events: status,
        }
    }

    /// Status of one feature.
    pub fn get(&self, feature: Feature) -> SupportStatus {
        match feature {
            Feature::Websockets => self.websockets,
            Feature::LatestState => self.latest_state,
            Feature::LatestEvents => self.latest_events,
            Feature::HistoricalState => self.historical_state,
            Feature::HistoricalEvents => self.historical_events,
        }
    }

    /// Set the status of one feature.
    pub fn set(&mut self, feature: Feature, status: SupportStatus) {
        let slot = match feature {
            Feature::Websockets => &mut self.websockets,
            Feature::LatestState => &mut self.latest_state,
            Feature::LatestEvents => &mut self.latest_events,
            Feature::HistoricalState => &mut self.historical_state,
            Feature::HistoricalEvents => &mut self.historical_events,
        };
        *slot = status;
    }

    /// `(feature, status)` pairs in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = (Feature, SupportStatus)> + '_ {
        Feature::ALL.into_iter().map(move |f| (f, self.get(f)))
    }
}

/// Probe result of one provider on one chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderChainData {
    /// Feature support
    pub features: Features,
    /// Per-method support, keyed by method id
    #[serde(default)]
    pub methods: BTreeMap<String, SupportStatus>,
    /// Probe time, milliseconds since the Unix epoch
    pub timestamp: i64,
}

impl ProviderChainData {
    /// Probed status of `method`; `None` if it was not probed.
    pub fn method_status(&self, method: &str) -> Option<SupportStatus> { self.methods.get(method).copied() }

    /// Method ids probed with `status`.
    pub fn methods_with(&self, status: SupportStatus) -> impl Iterator<Item = &str> {
        self.methods.iter().filter(move |(_, s)| **s == status).map(|(m, _)| m.as_str())
    }

    /// Probe time, if the timestamp is representable.
    pub fn probed_at(&self) -> Option<DateTime<Utc>> { DateTime::from_timestamp_millis(self.timestamp) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_metadata_lines_up() {
        for feature in Feature::ALL {
            assert_eq!(feature.as_str().parse::<Feature>().expect("round trip"), feature);
        }
        assert_eq!(Feature::HistoricalState.display_name(), "Archive Data");
    }

    #[test]
    fn test_features_set_get() {
        let mut features = Features::uniform(SupportStatus::Supported);
        features.set(Feature::Websockets, SupportStatus::Unknown);
        assert_eq!(features.get(Feature::Websockets), SupportStatus::Unknown);
        assert_eq!(features.iter().filter(|(_, s)| *s == SupportStatus::Supported).count(), 4);
    }

    #[test]
    fn test_probed_at() {
        let data = ProviderChainData {
            features: Features::uniform(SupportStatus::Supported),
            methods: BTreeMap::new(),
            timestamp: 1_700_000_000_000,
        };
        let at = data.probed_at().expect("valid timestamp");
        assert_eq!(at.timestamp(), 1_700_000_000);
    }
}
