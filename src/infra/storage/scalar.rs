//! Scalar conversions between storage and domain representations
//!
//! Storage speaks in integers and optional strings; the domain speaks in
//! `Duration`, `Url`, and `IpAddr`. Every pair here round-trips both ways.

use std::net::IpAddr;
use std::time::Duration;
use url::Url;

/// Durations are persisted as whole seconds.
pub fn duration_to_seconds(duration: Duration) -> i64 {
    duration.as_secs() as i64
}

pub fn seconds_to_duration(seconds: i64) -> Duration {
    Duration::from_secs(seconds.max(0) as u64)
}

pub fn url_to_string(url: Option<&Url>) -> Option<String> {
    url.map(|u| u.to_string())
}

/// `None` and unparsable strings both map to an absent URL; a stored value
/// that no longer parses is treated the same as never having been set.
pub fn string_to_url(value: Option<&str>) -> Option<Url> {
    value.and_then(|s| Url::parse(s).ok())
}

pub fn ip_to_string(ip: Option<IpAddr>) -> Option<String> {
    ip.map(|addr| addr.to_string())
}

pub fn string_to_ip(value: Option<&str>) -> Option<IpAddr> {
    value.and_then(|s| s.parse().ok())
}
