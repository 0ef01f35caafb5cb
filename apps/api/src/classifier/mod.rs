// Category classifier: static taxonomy, gender detection, keyword scoring,
// suggestion/search API. Pure synchronous computation over the read-only
// catalog — safe to call from any number of tasks without locking.

pub mod catalog;
pub mod gender;
pub mod handlers;
pub mod scoring;
pub mod suggest;
pub mod taxonomy;
