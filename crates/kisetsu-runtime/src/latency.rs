use std::future::Future;
use std::time::Duration;

/// How long a service call waits before it resolves.
pub trait Latency: Send + Sync {
    fn wait(&self) -> impl Future<Output = ()> + Send;
}

/// Sleep for a fixed duration on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDelay(pub Duration);

impl FixedDelay {
    pub fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }
}

impl Default for FixedDelay {
    fn default() -> Self {
        Self::from_millis(1000)
    }
}

impl Latency for FixedDelay {
    fn wait(&self) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(self.0)
    }
}

/// Resolve immediately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoDelay;

impl Latency for NoDelay {
    fn wait(&self) -> impl Future<Output = ()> + Send {
        std::future::ready(())
    }
}
