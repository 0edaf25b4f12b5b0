// src/checker/mod.rs
// =============================================================================
// This module contains all link handling logic.
//
// Submodules:
// - html: Extracts, resolves, and classifies links from a parsed page
// - http: Probes links over HTTP to see whether they are broken
//
// This file (mod.rs) is the module root - it re-exports the public API so
// callers can write `checker::LinkVerifier` instead of `checker::http::...`
// =============================================================================

mod html;
mod http;

pub use html::{extract_candidate_links, BaseUrl, CandidateLink, LinkKind};
pub use http::{build_client, HttpLinkChecker, LinkCheck, LinkVerifier};
