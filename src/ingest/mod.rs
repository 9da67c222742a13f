//! Ingestion Module
//!
//! One-shot bootstrap path behind the `--setup` flag: creates the index,
//! applies the geo mapping, and bulk-loads the tab-separated place dataset.
//! Runs before the server starts and is never exercised per request; the
//! listing cache deliberately goes stale relative to anything ingested later
//! in the process lifetime.

pub mod loader;

#[cfg(test)]
mod tests;
