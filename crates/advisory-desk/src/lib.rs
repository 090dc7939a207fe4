//! Domain services for the advisory firm's client portal: the three tax
//! calculators, the published-notice feed, contact intake, and the client
//! session gateway, plus the shared configuration/telemetry/error plumbing.

pub mod calculators;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod session;
pub mod telemetry;
