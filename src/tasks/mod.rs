//! Background Tasks Module
//!
//! Contains background tasks that run periodically while a cache is alive.
//!
//! # Tasks
//! - Cache Sweep: Removes stale cache entries at a fixed period

mod sweep;

pub use sweep::spawn_sweep_task;
