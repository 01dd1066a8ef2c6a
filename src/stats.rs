//! Dashboard statistics - summary wire type, stat cards, fetch plumbing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "async")]
use std::sync::Arc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::reactive::AsyncData;

/// Card labels, in display order.
pub const LABEL_TOTAL_VALUE: &str = "总价值";
pub const LABEL_TOTAL_ITEMS: &str = "总件数";
pub const LABEL_TOTAL_LOCATIONS: &str = "总地点";
pub const LABEL_TOTAL_LABELS: &str = "标签总数";

/// Grouped statistics as returned by the backend.
///
/// Every field is optional: the backend may omit any of them, and an
/// absent field renders as 0 in its card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatisticsSummary {
    pub total_item_price: Option<f64>,
    pub total_items: Option<i64>,
    pub total_locations: Option<i64>,
    pub total_labels: Option<i64>,
}

/// How a card value is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Currency,
    Number,
}

/// One aggregate statistic for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCard {
    pub label: &'static str,
    pub value: f64,
    #[serde(rename = "type")]
    pub card_type: CardType,
}

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Statistics request failed: {0}")]
    Request(String),
    #[error("Failed to decode statistics response: {0}")]
    Decode(String),
}

/// Client capability for fetching grouped statistics.
///
/// Implemented over the application's API client; tests use mock
/// implementations. Retry and error surfacing live behind this seam, not
/// in the card layer.
#[cfg(feature = "async")]
#[async_trait::async_trait]
pub trait StatsClient: Send + Sync {
    async fn group_statistics(&self) -> Result<StatisticsSummary, StatsError>;
}

/// Reactive source for the four dashboard stat cards.
///
/// Cards are recomputed from the current fetch state on every read: all
/// zeros while the fetch is pending or failed, the summary's values once
/// it resolves.
pub struct StatCards {
    data: AsyncData<StatisticsSummary>,
}

impl StatCards {
    /// A card source with no fetch attached; stays all-zero until the
    /// returned handle is resolved externally.
    pub fn pending() -> Self {
        Self {
            data: AsyncData::pending(),
        }
    }

    /// Wraps an externally driven data handle.
    pub fn from_data(data: AsyncData<StatisticsSummary>) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &AsyncData<StatisticsSummary> {
        &self.data
    }

    /// The four cards: total value, item count, location count, label
    /// count. Fixed order and labels; absent fields read as 0.
    pub fn cards(&self) -> [StatCard; 4] {
        let summary = self.data.resolved().unwrap_or_default();
        [
            StatCard {
                label: LABEL_TOTAL_VALUE,
                value: summary.total_item_price.unwrap_or(0.0),
                card_type: CardType::Currency,
            },
            StatCard {
                label: LABEL_TOTAL_ITEMS,
                value: summary.total_items.unwrap_or(0) as f64,
                card_type: CardType::Number,
            },
            StatCard {
                label: LABEL_TOTAL_LOCATIONS,
                value: summary.total_locations.unwrap_or(0) as f64,
                card_type: CardType::Number,
            },
            StatCard {
                label: LABEL_TOTAL_LABELS,
                value: summary.total_labels.unwrap_or(0) as f64,
                card_type: CardType::Number,
            },
        ]
    }
}

#[cfg(feature = "async")]
impl StatCards {
    /// Starts the fetch on the current Tokio runtime and returns the card
    /// source immediately; cards stay zero until the fetch settles.
    ///
    /// Cancelling the token discards the outcome, leaving the data pending
    /// indefinitely. No retry: a failed fetch stays failed.
    pub fn spawn_fetch(client: Arc<dyn StatsClient>, token: CancellationToken) -> Self {
        let data = AsyncData::pending();
        let task_data = data.clone();
        tokio::spawn(async move {
            let result = client.group_statistics().await;
            if token.is_cancelled() {
                return;
            }
            settle(&task_data, result);
        });
        Self { data }
    }
}

/// Performs the fetch once, settling the given handle.
#[cfg(feature = "async")]
pub async fn fetch_statistics(client: &dyn StatsClient, data: &AsyncData<StatisticsSummary>) {
    settle(data, client.group_statistics().await);
}

#[cfg(feature = "async")]
fn settle(data: &AsyncData<StatisticsSummary>, result: Result<StatisticsSummary, StatsError>) {
    match result {
        Ok(summary) => {
            #[cfg(feature = "tracing")]
            tracing::debug!("Statistics fetch resolved");
            data.resolve(summary);
        }
        Err(err) => {
            #[cfg(feature = "tracing")]
            tracing::warn!("Statistics fetch failed: {}", err);
            data.fail(err.to_string());
        }
    }
}
