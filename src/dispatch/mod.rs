//! Callback execution contexts for outcome delivery.
//!
//! This module provides a [`Dispatch`] trait that allows running completion
//! callbacks on a designated context, with a production [`SerialDispatcher`]
//! that serializes jobs on a single task and an [`InlineDispatcher`] that
//! runs them immediately.

mod dispatcher;
mod serial;


pub use dispatcher::{Dispatch, InlineDispatcher, Job};
pub use serial::SerialDispatcher;
