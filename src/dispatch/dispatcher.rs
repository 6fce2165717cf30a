//! Dispatch trait and inline implementation.

/// A unit of work handed to a dispatcher.
///
/// Jobs are one-shot closures; a dispatcher runs each submitted job at
/// most once.
pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// Abstraction over the execution context that runs completion callbacks.
///
/// Implementations decide where and when a submitted job runs. The fetch
/// layer submits exactly one job per call, so callers observe exactly one
/// callback invocation regardless of the dispatcher in use.
pub trait Dispatch: Send + Sync {
    /// Submits a job to this context.
    ///
    /// Submission must not block the caller. Implementations may drop the
    /// job if the context has shut down, but must never run it twice.
    fn dispatch(&self, job: Job);
}

/// Dispatcher that runs each job immediately on the submitting thread.
///
/// No marshaling, no serialization guarantee between submitters. Useful in
/// tests and for callers that need no execution-context hop.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineDispatcher;

impl Dispatch for InlineDispatcher {
    fn dispatch(&self, job: Job) {
        job();
    }
}
