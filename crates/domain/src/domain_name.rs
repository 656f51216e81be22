//! Helpers for comparing query names against the served zone.
//!
//! Names are compared case-insensitively and without surrounding dots, so
//! `Foo.ZK.example.com.` and `foo.zk.example.com` are the same name.

/// Case-folds a name and strips leading and trailing dots.
pub fn normalize(name: &str) -> String {
    name.trim_matches('.').to_ascii_lowercase()
}

/// Returns the part of `name` left of `zone`, without the joining dot.
///
/// The match is on a label boundary: `xzk.example.com` is not below
/// `zk.example.com`.
///
/// The apex itself maps to an empty string; names outside the zone map to
/// `None`. An empty zone contains every name.
pub fn relative_to_zone(name: &str, zone: &str) -> Option<String> {
    let name = normalize(name);
    let zone = normalize(zone);

    if zone.is_empty() {
        return Some(name);
    }
    if name == zone {
        return Some(String::new());
    }

    name.strip_suffix(zone.as_str())
        .and_then(|prefix| prefix.strip_suffix('.'))
        .map(|prefix| prefix.trim_end_matches('.').to_string())
}
