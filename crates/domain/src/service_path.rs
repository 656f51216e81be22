//! Query name to coordination-store path mapping.
//!
//! A name such as `0.job.foo.bar.bas.buz.zk.example.com` is turned into the
//! store paths a serverset could be registered under, most specific first:
//!
//! ```text
//! buz/bas/bar/foo/job   shard 0
//! buz/bas/bar/job.foo   shard 0
//! buz/bas/job.foo.bar   shard 0
//! buz/job.foo.bar.bas   shard 0
//! job.foo.bar.bas.buz   shard 0
//! ```
//!
//! Services can therefore register at any nesting depth without the
//! querying side knowing that depth in advance.

use std::fmt;

use crate::domain_name;

/// A store location to probe, with the shard the query asked for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServicePath {
    pub path: String,
    pub shard: Option<u32>,
}

impl ServicePath {
    pub fn new(path: impl Into<String>, shard: Option<u32>) -> Self {
        Self {
            path: path.into(),
            shard,
        }
    }

    /// Number of `/`-separated components in the path.
    pub fn depth(&self) -> usize {
        self.path.split('/').count()
    }
}

impl fmt::Display for ServicePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.shard {
            Some(shard) => write!(f, "{} (shard {})", self.path, shard),
            None => f.write_str(&self.path),
        }
    }
}

/// Ordered candidate paths for one query name.
///
/// Each step coalesces the two innermost labels into one, so the sequence
/// is finite and every yielded path is one component shorter than the
/// previous one.
#[derive(Debug, Clone)]
pub struct ServicePathCandidates {
    // Outermost label first, i.e. the reversed query labels.
    labels: Vec<String>,
    shard: Option<u32>,
}

impl ServicePathCandidates {
    /// Builds the candidates for `hostname` served under `base_domain`.
    ///
    /// Names outside `base_domain`, the apex itself and names made only of
    /// a shard label produce an empty sequence.
    pub fn new(hostname: &str, base_domain: &str) -> Self {
        let relative = domain_name::relative_to_zone(hostname, base_domain).unwrap_or_default();

        let mut labels: Vec<String> = relative
            .split('.')
            .filter(|label| !label.is_empty())
            .rev()
            .map(str::to_string)
            .collect();

        // Only the innermost label may carry a shard number.
        let shard = labels.last().and_then(|label| label.parse::<u32>().ok());
        if shard.is_some() {
            labels.pop();
        }

        Self { labels, shard }
    }

    pub fn shard(&self) -> Option<u32> {
        self.shard
    }
}

impl Iterator for ServicePathCandidates {
    type Item = ServicePath;

    fn next(&mut self) -> Option<Self::Item> {
        if self.labels.is_empty() {
            return None;
        }

        let candidate = ServicePath::new(self.labels.join("/"), self.shard);

        if self.labels.len() == 1 {
            self.labels.clear();
        } else if let (Some(inner), Some(outer)) = (self.labels.pop(), self.labels.pop()) {
            // ['a', 'b', 'c', 'f.e.d'] -> ['a', 'b', 'f.e.d.c']
            self.labels.push(format!("{}.{}", inner, outer));
        }

        Some(candidate)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.labels.len(), Some(self.labels.len()))
    }
}

impl ExactSizeIterator for ServicePathCandidates {}

/// Shorthand for [`ServicePathCandidates::new`].
pub fn candidate_paths(hostname: &str, base_domain: &str) -> ServicePathCandidates {
    ServicePathCandidates::new(hostname, base_domain)
}
