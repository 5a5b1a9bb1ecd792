//! The redirect resolver: bounded manual traversal of a redirect chain.

use std::collections::HashSet;

use log::{debug, warn};
use reqwest::header::LOCATION;
use url::Url;

use super::outcome::{Hop, ResolutionOutcome};

/// Resolves the redirect chain for a single starting address.
///
/// Issues up to `max_hops` single, non-following GET requests, recording each
/// visited address and its status code. Resolution terminates on the first
/// non-3xx status, on a 3xx response without a usable `Location` target
/// (reported as final, not as an error), on a revisit of an address already
/// in the chain (a loop; the repeated hop is not appended), or when the hop
/// budget runs out (truncation, reported distinctly from a loop).
///
/// # Arguments
///
/// * `client` - HTTP client with redirect following disabled; its request
///   timeout is the per-hop timeout
/// * `input` - The starting address; blank input returns the all-absent
///   outcome without any network access
/// * `max_hops` - Maximum number of hops to follow
///
/// Failures never escape as errors: any transport problem (connection,
/// timeout, DNS, an unjoinable `Location` value) yields an outcome with both
/// statuses absent and whatever hops completed so far. This discards a
/// `first_status` recorded on an earlier successful hop in the same attempt,
/// which matches the historical behavior downstream consumers expect.
///
/// The resolver holds no state between calls; each call owns its own visited
/// set and chain, so it is safe to call from many tasks concurrently.
pub async fn resolve(client: &reqwest::Client, input: &str, max_hops: usize) -> ResolutionOutcome {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return ResolutionOutcome::absent();
    }

    let mut visited: HashSet<String> = HashSet::new();
    let mut chain: Vec<Hop> = Vec::new();
    let mut first_status: Option<u16> = None;
    let mut current = trimmed.to_string();

    for _ in 0..max_hops {
        if visited.contains(&current) {
            debug!("Redirect loop detected at {current}");
            return ResolutionOutcome {
                first_status,
                final_status: None,
                is_loop: true,
                chain,
            };
        }
        visited.insert(current.clone());

        let response = match client.get(&current).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Request to {current} failed: {e}");
                return ResolutionOutcome {
                    first_status: None,
                    final_status: None,
                    is_loop: false,
                    chain,
                };
            }
        };

        let status = response.status().as_u16();
        chain.push(Hop {
            address: current.clone(),
            status: Some(status),
        });
        if first_status.is_none() {
            first_status = Some(status);
        }

        if !(300..=399).contains(&status) {
            // Terminal status (2xx, 4xx, 5xx, ...)
            return ResolutionOutcome {
                first_status,
                final_status: Some(status),
                is_loop: false,
                chain,
            };
        }

        // Header lookup is case-insensitive in reqwest's header map
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        let Some(location) = location else {
            // A redirect with no target is final, not an error
            warn!("Redirect status {status} for {current} but no Location header");
            return ResolutionOutcome {
                first_status,
                final_status: Some(status),
                is_loop: false,
                chain,
            };
        };

        current = match join_location(&current, &location) {
            Some(target) => target,
            None => {
                warn!("Unusable Location {location:?} in response from {current}");
                return ResolutionOutcome {
                    first_status: None,
                    final_status: None,
                    is_loop: false,
                    chain,
                };
            }
        };
    }

    // Hop budget exhausted without a repeat: truncated, not a loop
    debug!("Gave up after {max_hops} hops starting from {trimmed}");
    ResolutionOutcome {
        first_status,
        final_status: None,
        is_loop: false,
        chain,
    }
}

/// Resolves a `Location` value against the address that produced it.
///
/// Absolute targets (http/https scheme prefix) are used verbatim; anything
/// else is joined against the current address per standard URL rules.
pub(super) fn join_location(current: &str, location: &str) -> Option<String> {
    if location.starts_with("http://") || location.starts_with("https://") {
        return Some(location.to_string());
    }
    Url::parse(current)
        .and_then(|base| base.join(location))
        .ok()
        .map(|url| url.to_string())
}
