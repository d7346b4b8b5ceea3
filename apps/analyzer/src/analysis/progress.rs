//! Monotonic progress reporting.
//!
//! The caller's callback sees a non-decreasing sequence of percentages
//! ending at 100 on success, regardless of what the pipeline stages report —
//! a retried stage re-reporting an earlier value is silently dropped.

use std::sync::atomic::{AtomicU8, Ordering};

/// Optional caller-supplied progress callback.
pub type ProgressCallback<'a> = &'a (dyn Fn(u8) + Send + Sync);

pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
    last: AtomicU8,
}

impl<'a> ProgressReporter<'a> {
    pub fn new(callback: Option<ProgressCallback<'a>>) -> Self {
        Self {
            callback,
            last: AtomicU8::new(0),
        }
    }

    /// Forwards `percent` (clamped to 100) to the callback unless it would
    /// regress below an already-reported value.
    pub fn report(&self, percent: u8) {
        let percent = percent.min(100);
        if percent < self.last.load(Ordering::SeqCst) {
            return;
        }
        self.last.store(percent, Ordering::SeqCst);
        if let Some(callback) = self.callback {
            callback(percent);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_reports_pass_through_in_order() {
        let seen = Mutex::new(Vec::new());
        let cb = |p: u8| seen.lock().unwrap().push(p);
        let reporter = ProgressReporter::new(Some(&cb));

        reporter.report(0);
        reporter.report(33);
        reporter.report(67);
        reporter.report(100);

        assert_eq!(*seen.lock().unwrap(), vec![0, 33, 67, 100]);
    }

    #[test]
    fn test_regressing_value_is_dropped() {
        let seen = Mutex::new(Vec::new());
        let cb = |p: u8| seen.lock().unwrap().push(p);
        let reporter = ProgressReporter::new(Some(&cb));

        reporter.report(50);
        reporter.report(30);
        reporter.report(60);

        assert_eq!(*seen.lock().unwrap(), vec![50, 60]);
    }

    #[test]
    fn test_equal_value_is_re_reported() {
        let seen = Mutex::new(Vec::new());
        let cb = |p: u8| seen.lock().unwrap().push(p);
        let reporter = ProgressReporter::new(Some(&cb));

        reporter.report(40);
        reporter.report(40);

        assert_eq!(*seen.lock().unwrap(), vec![40, 40]);
    }

    #[test]
    fn test_values_above_100_are_clamped() {
        let seen = Mutex::new(Vec::new());
        let cb = |p: u8| seen.lock().unwrap().push(p);
        let reporter = ProgressReporter::new(Some(&cb));

        reporter.report(250);

        assert_eq!(*seen.lock().unwrap(), vec![100]);
    }

    #[test]
    fn test_absent_callback_is_a_no_op() {
        let reporter = ProgressReporter::new(None);
        reporter.report(50);
        reporter.report(100);
    }
}
