//! Background refresh loops for the read operations

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::info;

use crate::config::RefreshConfig;
use crate::ops::ConsoleOps;

/// Drives the metrics, simulation-result, and breakthrough refresh loops.
///
/// Loops sleep first; the initial paint comes from an explicit
/// [`Poller::refresh_now`] at startup. Concurrent invocations of the same
/// read are not deduplicated, and display writes are last-write-wins.
pub struct Poller {
    ops: Arc<ConsoleOps>,
    config: RefreshConfig,
    tasks: RwLock<Vec<JoinHandle<()>>>,
}

impl Poller {
    pub fn new(ops: Arc<ConsoleOps>, config: RefreshConfig) -> Self {
        Self {
            ops,
            config,
            tasks: RwLock::new(Vec::new()),
        }
    }

    /// Start the background refresh tasks. Calling `start` again stacks
    /// additional loops, so pair each `start` with a `stop`.
    pub async fn start(&self) {
        let mut tasks = self.tasks.write().await;

        let ops = self.ops.clone();
        let interval = Duration::from_secs(self.config.metrics_interval_secs);
        tasks.push(tokio::spawn(async move {
            loop {
                tokio::time::sleep(interval).await;
                ops.load_metrics().await;
            }
        }));

        let ops = self.ops.clone();
        let interval = Duration::from_secs(self.config.simulation_poll_secs);
        tasks.push(tokio::spawn(async move {
            loop {
                tokio::time::sleep(interval).await;
                ops.load_simulation_results().await;
            }
        }));

        let ops = self.ops.clone();
        let interval = Duration::from_secs(self.config.innovation_interval_secs);
        tasks.push(tokio::spawn(async move {
            loop {
                tokio::time::sleep(interval).await;
                ops.load_breakthroughs().await;
            }
        }));

        info!(
            metrics_interval_secs = self.config.metrics_interval_secs,
            simulation_poll_secs = self.config.simulation_poll_secs,
            innovation_interval_secs = self.config.innovation_interval_secs,
            "started refresh loops"
        );
    }

    /// Abort all refresh tasks.
    pub async fn stop(&self) {
        let mut tasks = self.tasks.write().await;
        for handle in tasks.drain(..) {
            handle.abort();
        }
        info!("stopped refresh loops");
    }

    /// Number of running refresh tasks.
    pub async fn task_count(&self) -> usize {
        self.tasks.read().await.len()
    }

    /// Fire all read operations once, concurrently.
    pub async fn refresh_now(&self) {
        futures::join!(
            self.ops.load_metrics(),
            self.ops.load_simulation_results(),
            self.ops.load_breakthroughs(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::display::DisplayRegistry;
    use crate::gateway::{ApiGateway, LogNotifier};

    fn poller() -> Poller {
        let gateway = ApiGateway::new(&ApiConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            request_timeout_ms: 100,
        })
        .unwrap();
        let ops = Arc::new(ConsoleOps::new(
            gateway,
            Arc::new(DisplayRegistry::new()),
            Arc::new(LogNotifier),
        ));
        Poller::new(
            ops,
            RefreshConfig {
                metrics_interval_secs: 3600,
                simulation_poll_secs: 3600,
                innovation_interval_secs: 3600,
            },
        )
    }

    #[test]
    fn test_start_and_stop_manage_tasks() {
        tokio_test::block_on(async {
            let poller = poller();
            assert_eq!(poller.task_count().await, 0);

            poller.start().await;
            assert_eq!(poller.task_count().await, 3);

            poller.stop().await;
            assert_eq!(poller.task_count().await, 0);
        });
    }

    #[test]
    fn test_stop_without_start_is_a_noop() {
        tokio_test::block_on(async {
            let poller = poller();
            poller.stop().await;
            assert_eq!(poller.task_count().await, 0);
        });
    }
}
