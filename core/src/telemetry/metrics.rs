use std::sync::Mutex;

use crate::link::SignalStatus;

/// Evaluation counters kept by callers that drive the core repeatedly.
pub struct MetricsRecorder {
    inner: Mutex<MetricsSnapshot>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub optimal: usize,
    pub marginal: usize,
    pub blocked: usize,
    pub no_los: usize,
    pub rejected: usize,
}

impl MetricsSnapshot {
    pub fn evaluated(&self) -> usize {
        self.optimal + self.marginal + self.blocked + self.no_los
    }

    pub fn count(&self, status: SignalStatus) -> usize {
        match status {
            SignalStatus::Optimal => self.optimal,
            SignalStatus::Marginal => self.marginal,
            SignalStatus::Blocked => self.blocked,
            SignalStatus::NoLos => self.no_los,
        }
    }
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MetricsSnapshot::default()),
        }
    }

    pub fn record_status(&self, status: SignalStatus) {
        if let Ok(mut metrics) = self.inner.lock() {
            match status {
                SignalStatus::Optimal => metrics.optimal += 1,
                SignalStatus::Marginal => metrics.marginal += 1,
                SignalStatus::Blocked => metrics.blocked += 1,
                SignalStatus::NoLos => metrics.no_los += 1,
            }
        }
    }

    pub fn record_rejection(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.rejected += 1;
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        self.inner
            .lock()
            .map(|metrics| *metrics)
            .unwrap_or_default()
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn counts_each_status_separately() {
        let recorder = MetricsRecorder::new();
        recorder.record_status(SignalStatus::Blocked);
        recorder.record_status(SignalStatus::Blocked);
        recorder.record_status(SignalStatus::Optimal);
        recorder.record_rejection();

        let snapshot = recorder.snapshot();
        assert_eq!(snapshot.count(SignalStatus::Blocked), 2);
        assert_eq!(snapshot.count(SignalStatus::Optimal), 1);
        assert_eq!(snapshot.evaluated(), 3);
        assert_eq!(snapshot.rejected, 1);
    }

    #[test]
    fn concurrent_recording_is_not_lost() {
        let recorder = Arc::new(MetricsRecorder::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let recorder = Arc::clone(&recorder);
                thread::spawn(move || {
                    for _ in 0..100 {
                        recorder.record_status(SignalStatus::Marginal);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(recorder.snapshot().marginal, 400);
    }
}
