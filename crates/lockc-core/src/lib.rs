//! The container-policy decision engine.
//!
//! Holds the data model associating processes with containers and
//! containers with policy tiers, the event handler that maintains that
//! model as processes fork (the Lineage Tracker), and the per-hook
//! decision procedures (mount, syslog, setuid, open) that query policy
//! and path allow/deny lists.
//!
//! Everything here is pure and allocation-free so it can run inside an
//! eBPF program's verified, loop-bounded sandbox (see `lockc-ebpf`) and
//! be exercised with ordinary `cargo test` on the host.
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

pub mod error;
pub mod handlers;
pub mod lineage;
pub mod matcher;
pub mod resolver;
pub mod runtimes;
pub mod tables;
pub mod verdict;

#[cfg(test)]
pub(crate) mod testutil;

pub use error::{LineageError, TableError};
pub use resolver::PolicyDecision;
pub use tables::{InsertOutcome, KeyedMap, PathTable};
pub use verdict::Verdict;
