//! Outbound adapters: the remote search client and the dataset loader.

pub mod dataset;
pub mod search_client;
