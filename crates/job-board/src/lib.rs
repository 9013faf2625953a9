//! Job board core: listing normalization, filtering, sorting, and aggregation, plus the
//! visitor session and the HTTP surface built on top of them.

pub mod config;
pub mod error;
pub mod listings;
pub mod router;
pub mod session;
pub mod telemetry;

pub use router::job_board_router;
