//! Process-lifetime response cache: raw query text → rendered
//! fragment. Entries are written once and never evicted; with a cache
//! file configured, new entries are appended by a background flusher
//! and loaded back on the next start.

pub mod flusher;
pub mod manager;


pub use manager::ResponseCache;
