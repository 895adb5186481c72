use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use crate::animation::{Direction, Ease, ElementState};
use crate::scene::Element;

/// Invoked with the element once its transition completes.
///
/// Errors are logged and reported through the batch's `BatchReport`; they do not
/// stop the loop or hold the batch back.
pub type CompletionCallback = Rc<dyn Fn(&mut dyn Element) -> anyhow::Result<()>>;

/// Parameters of one element's transition.
#[derive(Clone, Default)]
pub struct TransitionOptions {
    pub duration: Duration,
    /// Offset added to the request time before progress starts counting.
    pub delay: Duration,
    pub ease: Ease,
    /// Restart instead of completing. Looped transitions only end by eviction or stop.
    pub looped: bool,
    pub direction: Direction,
    /// Target property values.
    pub state: ElementState,
    pub callback: Option<CompletionCallback>,
}

impl TransitionOptions {
    /// Zero-duration, linear, forward transition towards `state`.
    pub fn new(state: ElementState) -> Self {
        Self {
            state,
            ..Self::default()
        }
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn looped(mut self, looped: bool) -> Self {
        self.looped = looped;
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn on_complete<F>(mut self, callback: F) -> Self
    where
        F: Fn(&mut dyn Element) -> anyhow::Result<()> + 'static,
    {
        self.callback = Some(Rc::new(callback));
        self
    }
}

impl fmt::Debug for TransitionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionOptions")
            .field("duration", &self.duration)
            .field("delay", &self.delay)
            .field("ease", &self.ease)
            .field("looped", &self.looped)
            .field("direction", &self.direction)
            .field("state", &self.state)
            .field("callback", &self.callback.is_some())
            .finish()
    }
}

type OptionsFactory = dyn Fn(&dyn Element, usize, usize) -> TransitionOptions;

/// Options for a whole batch: one value for every element, or one computed per element.
pub enum OptionsSource {
    Fixed(TransitionOptions),
    /// Called with the element, its index in the resolved batch, and the batch size.
    PerElement(Box<OptionsFactory>),
}

impl OptionsSource {
    pub fn per_element<F>(factory: F) -> Self
    where
        F: Fn(&dyn Element, usize, usize) -> TransitionOptions + 'static,
    {
        OptionsSource::PerElement(Box::new(factory))
    }

    pub(crate) fn resolve(
        &self,
        element: &dyn Element,
        index: usize,
        total: usize,
    ) -> TransitionOptions {
        match self {
            OptionsSource::Fixed(options) => options.clone(),
            OptionsSource::PerElement(factory) => factory(element, index, total),
        }
    }
}

impl From<TransitionOptions> for OptionsSource {
    fn from(options: TransitionOptions) -> Self {
        OptionsSource::Fixed(options)
    }
}

impl fmt::Debug for OptionsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionsSource::Fixed(options) => f.debug_tuple("Fixed").field(options).finish(),
            OptionsSource::PerElement(_) => f.write_str("PerElement(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Property;
    use crate::coords::Rect;
    use crate::scene::shapes::RectShape;

    #[test]
    fn builder_defaults() {
        let options = TransitionOptions::new(ElementState::new().with(Property::X, 10.0));
        assert_eq!(options.duration, Duration::ZERO);
        assert_eq!(options.delay, Duration::ZERO);
        assert!(!options.looped);
        assert_eq!(options.direction, Direction::Forward);
        assert!(options.callback.is_none());
        assert_eq!(options.state.number(Property::X), Some(10.0));
    }

    #[test]
    fn per_element_sees_index_and_total() {
        let source = OptionsSource::per_element(|_, index, total| {
            TransitionOptions::default().duration(Duration::from_millis((index * 100 + total) as u64))
        });
        let shape = RectShape::new(Rect::new(0.0, 0.0, 1.0, 1.0));

        assert_eq!(source.resolve(&shape, 0, 3).duration, Duration::from_millis(3));
        assert_eq!(source.resolve(&shape, 2, 3).duration, Duration::from_millis(203));
    }
}
