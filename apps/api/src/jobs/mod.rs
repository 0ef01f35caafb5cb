// Posting job pipeline: submission API, in-memory queue, worker pool.
// The workers are the only callers of the automation layer.

pub mod handlers;
pub mod queue;
pub mod worker;
