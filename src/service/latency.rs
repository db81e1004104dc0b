// file: src/service/latency.rs
// description: injectable network delay in front of the in-memory data service
// reference: https://docs.rs/tokio/latest/tokio/time/fn.sleep.html

use crate::config::ServiceConfig;
use crate::error::Result;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    FetchDoctors,
    AddDoctor,
    FilterOptions,
}

/// Boundary standing in for the network. Implementations may fail to
/// simulate a transport error; callers propagate it unchanged.
pub trait Latency {
    fn wait(&self, operation: Operation) -> impl Future<Output = Result<()>> + Send;
}

#[derive(Debug, Clone)]
pub struct SimulatedLatency {
    fetch: Duration,
    add: Duration,
    options: Duration,
}

impl SimulatedLatency {
    pub fn new(fetch: Duration, add: Duration, options: Duration) -> Self {
        Self {
            fetch,
            add,
            options,
        }
    }

    pub fn from_config(config: &ServiceConfig) -> Self {
        if !config.simulate_latency {
            return Self::new(Duration::ZERO, Duration::ZERO, Duration::ZERO);
        }

        Self::new(
            Duration::from_millis(config.fetch_delay_ms),
            Duration::from_millis(config.add_delay_ms),
            Duration::from_millis(config.options_delay_ms),
        )
    }

    pub fn delay_for(&self, operation: Operation) -> Duration {
        match operation {
            Operation::FetchDoctors => self.fetch,
            Operation::AddDoctor => self.add,
            Operation::FilterOptions => self.options,
        }
    }
}

impl Latency for SimulatedLatency {
    async fn wait(&self, operation: Operation) -> Result<()> {
        let delay = self.delay_for(operation);
        if !delay.is_zero() {
            debug!("Simulating {:?} latency of {}ms", operation, delay.as_millis());
            tokio::time::sleep(delay).await;
        }
        Ok(())
    }
}

/// Returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

impl Latency for NoLatency {
    async fn wait(&self, _operation: Operation) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_delays_from_default_config() {
        let latency = SimulatedLatency::from_config(&Config::default_config().service);
        assert_eq!(latency.delay_for(Operation::FetchDoctors), Duration::from_millis(800));
        assert_eq!(latency.delay_for(Operation::AddDoctor), Duration::from_millis(1000));
        assert_eq!(latency.delay_for(Operation::FilterOptions), Duration::from_millis(300));
    }

    #[test]
    fn test_disabled_latency_is_zero() {
        let mut config = Config::default_config().service;
        config.simulate_latency = false;
        let latency = SimulatedLatency::from_config(&config);
        assert!(latency.delay_for(Operation::FetchDoctors).is_zero());
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_wait_sleeps() {
        let latency = SimulatedLatency::new(
            Duration::from_millis(800),
            Duration::ZERO,
            Duration::ZERO,
        );
        let start = tokio::time::Instant::now();
        latency.wait(Operation::FetchDoctors).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(800));
    }

    #[test]
    fn test_no_latency() {
        assert!(tokio_test::block_on(NoLatency.wait(Operation::AddDoctor)).is_ok());
    }
}
