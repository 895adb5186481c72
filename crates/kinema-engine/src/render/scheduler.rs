use std::cell::RefCell;
use std::rc::Rc;

/// Handle of one requested frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FrameHandle(u64);

/// Host frame-scheduling primitive.
///
/// The renderer requests at most one frame at a time; the host answers by calling
/// `Renderer::frame` with the returned handle once the display is ready for it.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameHandle;

    /// Revokes a request. Cancelling an already delivered or unknown handle is a no-op.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

#[derive(Debug, Default)]
struct QueueState {
    next_id: u64,
    pending: Option<FrameHandle>,
}

/// Single-slot frame scheduler.
///
/// Clones share the slot: the renderer owns one clone and requests frames, the
/// host (event loop or test) keeps another and takes the pending handle when it
/// is time to deliver it.
#[derive(Debug, Clone, Default)]
pub struct FrameQueue {
    state: Rc<RefCell<QueueState>>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pending request, if any, without consuming it.
    pub fn pending(&self) -> Option<FrameHandle> {
        self.state.borrow().pending
    }

    /// Consumes the pending request so it can be delivered.
    pub fn take(&self) -> Option<FrameHandle> {
        self.state.borrow_mut().pending.take()
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self) -> FrameHandle {
        let mut state = self.state.borrow_mut();
        state.next_id = state.next_id.wrapping_add(1);
        let handle = FrameHandle(state.next_id);
        state.pending = Some(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let mut state = self.state.borrow_mut();
        if state.pending == Some(handle) {
            state.pending = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_replaces_and_cancel_matches_handle() {
        let mut queue = FrameQueue::new();
        let host = queue.clone();

        let first = queue.request_frame();
        let second = queue.request_frame();
        assert_ne!(first, second);
        assert_eq!(host.pending(), Some(second));

        queue.cancel_frame(first);
        assert_eq!(host.pending(), Some(second));

        queue.cancel_frame(second);
        assert_eq!(host.pending(), None);
    }

    #[test]
    fn take_consumes_request() {
        let mut queue = FrameQueue::new();
        let handle = queue.request_frame();
        assert_eq!(queue.take(), Some(handle));
        assert_eq!(queue.take(), None);
    }
}
