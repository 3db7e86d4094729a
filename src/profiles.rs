//! Fingerprint request profiles.
//!
//! The AIS provider rejects clients it identifies as automated, and its
//! header analysis is the detection method we can actually influence (JA3
//! TLS fingerprinting will still identify the native client stack, which is
//! acceptable since many legitimate applications share it). Each profile in
//! the table below is a distinct client persona: a fixed header set plus a
//! per-attempt timeout. The table order is the fallback order - the first
//! entry looks like a same-origin browser XHR, later entries degrade toward
//! a minimal command-line client.
//!
//! Accept-Encoding is deliberately absent from every header set: the HTTP
//! client negotiates it itself so response decompression stays automatic.

use std::time::Duration;

/// A single client persona: named header set plus per-attempt timeout.
///
/// Profiles are static and never mutated; the whole table is defined once in
/// [`PROFILES`].
#[derive(Debug, Clone, Copy)]
pub struct RequestProfile {
    /// Short identifier used in logs.
    pub name: &'static str,
    /// Header name/value pairs applied to each request made with this profile.
    pub headers: &'static [(&'static str, &'static str)],
    /// Attempt timeout; escalates through the table so the cheap-looking
    /// personas fail fast and the last-resort ones get the most patience.
    pub timeout: Duration,
}

impl RequestProfile {
    /// Applies this profile's headers and timeout to a request builder.
    pub fn apply_to_request_builder(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        let mut builder = builder;
        for (name, value) in self.headers {
            builder = builder.header(*name, *value);
        }
        builder.timeout(self.timeout)
    }
}

// The browser personas pin the same current Chrome stable build so the
// User-Agent does not age into an obvious tell; bump all three together.
const UA_WINDOWS: &str = concat!(
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 ",
    "(KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36"
);
const UA_MACOS: &str = concat!(
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 ",
    "(KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36"
);
const UA_LINUX: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 ",
    "(KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36"
);
const UA_CURL: &str = "curl/7.68.0";

/// The ordered fingerprint profile table.
///
/// Order is the fallback order, not arbitrary: the first profile presents
/// the most legitimate-looking fingerprint (a browser fetching the
/// provider's own API from its own origin), and each subsequent profile
/// strips signal until the last is a bare curl client.
pub const PROFILES: &[RequestProfile] = &[
    // Same-origin browser XHR: full sec-fetch metadata plus referer/origin
    // pointing at the provider itself.
    RequestProfile {
        name: "browser-same-origin",
        headers: &[
            ("User-Agent", UA_WINDOWS),
            ("Accept", "application/json, text/plain, */*"),
            ("Accept-Language", "en-US,en;q=0.9"),
            ("Connection", "keep-alive"),
            ("Referer", "https://www.aisfriends.com/"),
            ("Origin", "https://www.aisfriends.com"),
            ("Sec-Fetch-Dest", "empty"),
            ("Sec-Fetch-Mode", "cors"),
            ("Sec-Fetch-Site", "same-origin"),
        ],
        timeout: Duration::from_secs(15),
    },
    // Different platform, no navigation metadata.
    RequestProfile {
        name: "browser-macos",
        headers: &[
            ("User-Agent", UA_MACOS),
            ("Accept", "*/*"),
            ("Accept-Language", "en-US,en;q=0.5"),
            ("Connection", "keep-alive"),
        ],
        timeout: Duration::from_secs(20),
    },
    // Plain browser UA with a bare JSON accept.
    RequestProfile {
        name: "browser-linux",
        headers: &[
            ("User-Agent", UA_LINUX),
            ("Accept", "application/json"),
        ],
        timeout: Duration::from_secs(25),
    },
    // Last resort: make no pretense at all. Some defenses whitelist plain
    // tooling that honest operators use.
    RequestProfile {
        name: "bare-curl",
        headers: &[("User-Agent", UA_CURL), ("Accept", "*/*")],
        timeout: Duration::from_secs(30),
    },
];
