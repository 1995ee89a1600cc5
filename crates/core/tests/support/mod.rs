//! Shared test helpers for `bizhub-core` integration tests.
//!
//! In-memory fakes for every core port so service tests can focus on
//! behaviour (what was sent, what state remains) instead of plumbing.

#![allow(dead_code)]

pub mod gateways;
pub mod interaction;
pub mod storage;
