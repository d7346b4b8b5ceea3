//! In-memory result cache keyed by a fingerprint of (document, job title).
//!
//! Entries live for 24 hours and are evicted lazily: the next `get` for a
//! stale key drops it, there is no background sweeper. The cache is plain
//! data meant to be shared behind an `Arc` and injected into the analyzer —
//! construct one per process (or per test) as needed.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine;
use sha2::{Digest, Sha256};

use crate::models::report::AnalysisReport;

/// How long a cached report stays servable.
pub const CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Separates document text from job title inside the digest input, so
/// ("ab", "c") and ("a", "bc") can never share a key.
const KEY_SEPARATOR: u8 = 0x1f;

/// Content-addressed cache key: base64(SHA-256(document ∥ 0x1F ∥ title)).
pub fn fingerprint(document_text: &str, job_title: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(document_text.as_bytes());
    hasher.update([KEY_SEPARATOR]);
    hasher.update(job_title.as_bytes());
    STANDARD_NO_PAD.encode(hasher.finalize())
}

struct CacheEntry {
    report: AnalysisReport,
    created_at: Instant,
}

/// Process-lifetime key/value store for computed reports.
///
/// Reads and writes lock the whole map; get/compute/set across two
/// concurrent identical requests is not atomic, so both may miss and the
/// last writer wins. Callers needing at-most-once computation must
/// serialize per key themselves.
pub struct ResultCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultCache {
    pub fn new() -> Self {
        Self::with_ttl(CACHE_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Returns the cached report, evicting it first if it has outlived the
    /// TTL. An entry aged exactly TTL is still served.
    pub fn get(&self, document_text: &str, job_title: &str) -> Option<AnalysisReport> {
        let key = fingerprint(document_text, job_title);
        let mut entries = self.entries.lock().expect("cache lock poisoned");

        match entries.get(&key) {
            Some(entry) if entry.created_at.elapsed() > self.ttl => {
                entries.remove(&key);
                None
            }
            Some(entry) => Some(entry.report.clone()),
            None => None,
        }
    }

    pub fn set(&self, document_text: &str, job_title: &str, report: AnalysisReport) {
        let key = fingerprint(document_text, job_title);
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        entries.insert(
            key,
            CacheEntry {
                report,
                created_at: Instant::now(),
            },
        );
    }

    pub fn remove(&self, document_text: &str, job_title: &str) {
        let key = fingerprint(document_text, job_title);
        self.entries
            .lock()
            .expect("cache lock poisoned")
            .remove(&key);
    }

    pub fn clear(&self) {
        self.entries.lock().expect("cache lock poisoned").clear();
    }

    pub fn len(&self) -> usize {
        self.entries.lock().expect("cache lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
