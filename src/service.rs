//! Request orchestration: fetch, merge into the shared window, average

use crate::average::format_average;
use crate::source::{Category, NumberSource};
use crate::window::NumberWindow;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Response payload for a single request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateReport {
    #[serde(rename = "windowPrevState")]
    pub previous_window: Vec<i64>,
    #[serde(rename = "windowCurrState")]
    pub current_window: Vec<i64>,
    #[serde(rename = "numbers")]
    pub fetched_numbers: Vec<i64>,
    #[serde(rename = "avg")]
    pub average: String,
}

/// Owns the process-wide window and the source feeding it
///
/// Provider calls from concurrent requests run in parallel; the window lock is
/// only taken for the merge itself, so merges are serialized.
pub struct WindowService {
    source: Arc<dyn NumberSource>,
    window: Mutex<NumberWindow>,
}

impl WindowService {
    pub fn new(source: Arc<dyn NumberSource>, window: NumberWindow) -> Self {
        Self {
            source,
            window: Mutex::new(window),
        }
    }

    pub async fn handle(&self, category: Category) -> AggregateReport {
        let outcome = self.source.fetch(category).await;
        if outcome.is_failure() {
            log::info!("Fetch for {} failed, merging nothing", category);
        }
        let fetched = outcome.into_numbers();

        let transition = {
            let mut window = self.window.lock().await;
            window.merge(&fetched)
        };

        let average = format_average(&transition.current);

        log::info!(
            "{}: fetched={} window {} -> {} avg={}",
            category,
            fetched.len(),
            transition.previous.len(),
            transition.current.len(),
            average
        );

        AggregateReport {
            previous_window: transition.previous,
            current_window: transition.current,
            fetched_numbers: fetched,
            average,
        }
    }

    pub async fn window_snapshot(&self) -> Vec<i64> {
        self.window.lock().await.snapshot()
    }
}
