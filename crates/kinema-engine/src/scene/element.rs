use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::animation::{ElementState, Interpolator};
use crate::coords::Rect;

use super::DrawList;

/// Stable identity of a drawable element.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    /// Allocates a process-unique id.
    pub fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "element#{}", self.0)
    }
}

/// Identity of a group registered with a `Scene`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(u64);

impl GroupId {
    pub fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "group#{}", self.0)
    }
}

/// Drawable entity animated by the renderer.
///
/// The render loop only needs identity, a state it can read and write, and a
/// way to draw; shapes decide how their state maps to draw commands.
pub trait Element {
    fn id(&self) -> ElementId;

    fn state(&self) -> &ElementState;

    fn state_mut(&mut self) -> &mut ElementState;

    /// Records this element's draw commands using its current state.
    fn render(&self, surface: &mut DrawList);

    fn bounding_box(&self) -> Rect;

    /// Builds the interpolator driving this element towards `target`.
    fn interpolate(&self, target: &ElementState) -> Interpolator {
        Interpolator::between(self.state(), target)
    }

    /// Writes an intermediate or final state produced by an interpolator.
    fn apply(&mut self, state: ElementState) {
        self.state_mut().merge(state);
    }
}

/// Transition target: a leaf element or a group standing in for its members.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    Element(ElementId),
    Group(GroupId),
}

impl From<ElementId> for Target {
    fn from(id: ElementId) -> Self {
        Target::Element(id)
    }
}

impl From<GroupId> for Target {
    fn from(id: GroupId) -> Self {
        Target::Group(id)
    }
}

/// One or more transition targets, in request order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Targets(Vec<Target>);

impl Targets {
    pub fn iter(&self) -> impl Iterator<Item = Target> + '_ {
        self.0.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Target> for Targets {
    fn from(target: Target) -> Self {
        Targets(vec![target])
    }
}

impl From<ElementId> for Targets {
    fn from(id: ElementId) -> Self {
        Targets(vec![id.into()])
    }
}

impl From<GroupId> for Targets {
    fn from(id: GroupId) -> Self {
        Targets(vec![id.into()])
    }
}

impl<T: Into<Target>> From<Vec<T>> for Targets {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T: Into<Target>, const N: usize> From<[T; N]> for Targets {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<T: Into<Target> + Copy> From<&[T]> for Targets {
    fn from(items: &[T]) -> Self {
        items.iter().copied().collect()
    }
}

impl<T: Into<Target>> FromIterator<T> for Targets {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Targets(iter.into_iter().map(Into::into).collect())
    }
}

/// Container whose membership substitutes for itself as a transition target.
///
/// Members may be elements or previously registered groups.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    id: GroupId,
    members: Vec<Target>,
}

impl Group {
    pub(crate) fn new(id: GroupId, members: Targets) -> Self {
        Self { id, members: members.0 }
    }

    pub fn id(&self) -> GroupId {
        self.id
    }

    pub fn members(&self) -> &[Target] {
        &self.members
    }
}
