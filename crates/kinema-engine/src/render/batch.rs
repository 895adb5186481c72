use std::cell::RefCell;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use futures::channel::oneshot;

use crate::scene::ElementId;

use super::TransitionError;

/// A completion callback that returned an error.
pub struct CallbackFailure {
    pub element: ElementId,
    pub error: anyhow::Error,
}

impl fmt::Debug for CallbackFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackFailure")
            .field("element", &self.element)
            .field("error", &format_args!("{:#}", self.error))
            .finish()
    }
}

/// Outcome of a batch whose transitions all completed.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Number of completed transitions, equal to the batch size.
    pub completed: usize,
    /// Callbacks that failed along the way. They never hold the batch back.
    pub failures: Vec<CallbackFailure>,
}

impl BatchReport {
    /// True when every completion callback succeeded.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

pub(crate) type SharedBatch = Rc<RefCell<Batch>>;

/// Fan-in state shared by every transition of one `transition` request.
pub(crate) struct Batch {
    total: usize,
    completed: usize,
    failures: Vec<CallbackFailure>,
    sender: Option<oneshot::Sender<BatchReport>>,
}

impl Batch {
    /// Opens a batch of `total` transitions. An empty batch is resolved on the spot.
    pub(crate) fn open(total: usize) -> (SharedBatch, Completion) {
        let (sender, receiver) = oneshot::channel();
        let batch = Rc::new(RefCell::new(Batch {
            total,
            completed: 0,
            failures: Vec::new(),
            sender: Some(sender),
        }));
        batch.borrow_mut().settle();
        (batch, Completion { receiver })
    }

    pub(crate) fn mark_completed(&mut self) {
        self.completed += 1;
    }

    pub(crate) fn record_failure(&mut self, element: ElementId, error: anyhow::Error) {
        self.failures.push(CallbackFailure { element, error });
    }

    /// Resolves the completion once the counter reaches the batch size.
    pub(crate) fn settle(&mut self) {
        if self.completed < self.total {
            return;
        }
        if let Some(sender) = self.sender.take() {
            let report = BatchReport {
                completed: self.completed,
                failures: std::mem::take(&mut self.failures),
            };
            // The caller may have dropped its `Completion`; nothing to deliver then.
            let _ = sender.send(report);
        }
    }
}

/// Resolves once every transition of a batch has completed.
///
/// Await it, or poll it without an executor via [`Completion::try_outcome`].
/// Dropping it has no effect on the transitions themselves.
#[must_use = "a Completion does nothing unless polled; drop it to ignore the batch"]
pub struct Completion {
    receiver: oneshot::Receiver<BatchReport>,
}

impl Completion {
    /// `None` while the batch is still running.
    pub fn try_outcome(&mut self) -> Option<Result<BatchReport, TransitionError>> {
        match self.receiver.try_recv() {
            Ok(Some(report)) => Some(Ok(report)),
            Ok(None) => None,
            Err(oneshot::Canceled) => Some(Err(TransitionError::Cancelled)),
        }
    }
}

impl fmt::Debug for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Completion").finish_non_exhaustive()
    }
}

impl Future for Completion {
    type Output = Result<BatchReport, TransitionError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.receiver)
            .poll(cx)
            .map(|result| result.map_err(|oneshot::Canceled| TransitionError::Cancelled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn empty_batch_resolves_immediately() {
        let (_batch, mut completion) = Batch::open(0);
        let report = completion.try_outcome().unwrap().unwrap();
        assert_eq!(report.completed, 0);
        assert!(report.is_clean());
    }

    #[test]
    fn resolves_only_when_counter_reaches_total() {
        let (batch, mut completion) = Batch::open(2);

        batch.borrow_mut().mark_completed();
        batch.borrow_mut().settle();
        assert!(completion.try_outcome().is_none());

        batch.borrow_mut().mark_completed();
        batch
            .borrow_mut()
            .record_failure(ElementId::next(), anyhow::anyhow!("boom"));
        batch.borrow_mut().settle();

        let report = block_on(completion).unwrap();
        assert_eq!(report.completed, 2);
        assert_eq!(report.failures.len(), 1);
    }

    #[test]
    fn dropped_batch_cancels() {
        let (batch, mut completion) = Batch::open(3);
        drop(batch);
        assert!(matches!(
            completion.try_outcome(),
            Some(Err(TransitionError::Cancelled))
        ));
    }
}
