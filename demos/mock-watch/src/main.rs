//! Watching a mock job from kickoff to completion.
//!
//! This example demonstrates the full path an HTTP source would take:
//! the mock server answers with the JSON envelope of the status
//! endpoints, the wire adapter classifies it, and a printing observer
//! plays the role of the UI.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use jobwatch::{
    JobStatus, JobStatusPoller, PollerConfig, RawStatusResponse, StatusSource, TransportError,
    WatchObserver, WatchResult,
};

/// In-memory stand-in for a status endpoint. Each fetch advances the
/// job's lifecycle, with one simulated network drop along the way.
struct MockJobServer {
    calls: Mutex<u32>,
}

#[async_trait]
impl StatusSource for MockJobServer {
    async fn fetch_status(&self) -> WatchResult<JobStatus> {
        let call = {
            let mut calls = self.calls.lock().unwrap();
            *calls += 1;
            *calls
        };

        let body = match call {
            1 => r#"{"success": true, "status": "processando", "progress": 10}"#,
            2 => r#"{"success": true, "status": "processando", "progress": 45}"#,
            3 => return Err(TransportError::Network("simulated connection drop".into())),
            4 => r#"{"success": true, "status": "processando", "progress": 80}"#,
            _ => {
                r#"{"success": true, "status": "concluido", "processed": true, "progress": 100, "qa_count": 17}"#
            }
        };

        RawStatusResponse::from_json(body)?.into_status()
    }
}

/// Observer that renders observations to stdout.
struct ProgressPrinter;

impl WatchObserver for ProgressPrinter {
    fn on_observe(&self, status: &JobStatus) {
        let progress = status
            .progress_percent
            .map_or(String::from("  --"), |p| format!("{p:3}%"));
        println!("  [{progress}] {}", status.outcome);
    }

    fn on_terminal(&self, status: &JobStatus) {
        println!();
        println!("Finished: {}", status.outcome);
        if let Some(count) = status.detail_u64("qa_count") {
            println!("QA items: {count}");
        }
    }

    fn on_transport_error(&self, error: &TransportError) {
        println!("  [ err] {error}, retrying");
    }
}

#[tokio::main]
async fn main() {
    let source = Arc::new(MockJobServer {
        calls: Mutex::new(0),
    });

    let config = PollerConfig::new()
        .with_interval(Duration::from_millis(300))
        .with_error_interval(Duration::from_millis(600))
        .with_initial_delay(Duration::from_millis(100));

    println!("Watching mock job until completion...");
    println!();

    let poller = JobStatusPoller::new(source, Arc::new(ProgressPrinter), config);
    poller.start();

    while poller.is_running() {
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
}
