use std::collections::HashMap;

use crate::paint::Color;

use super::{DrawList, Element, ElementId, Group, GroupId, Target, Targets};

/// Pointer notifications emitted by the host for the scene's surface.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SceneEvent {
    PointerEntered,
    PointerLeft,
}

/// Ordered element collection plus the drawing surface it renders into.
///
/// Element order is paint order: earlier elements are drawn first (further back).
#[derive(Default)]
pub struct Scene {
    elements: Vec<Box<dyn Element>>,
    groups: HashMap<GroupId, Group>,
    surface: DrawList,
    pointer_inside: bool,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element on top of the current paint order.
    pub fn add<E>(&mut self, element: E) -> ElementId
    where
        E: Element + 'static,
    {
        self.add_boxed(Box::new(element))
    }

    pub fn add_boxed(&mut self, element: Box<dyn Element>) -> ElementId {
        let id = element.id();
        debug_assert!(!self.contains(id), "{id} added twice");
        self.elements.push(element);
        id
    }

    /// Removes an element, keeping the relative order of the others.
    pub fn remove(&mut self, id: ElementId) -> Option<Box<dyn Element>> {
        let index = self.index_of(id)?;
        Some(self.elements.remove(index))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn element(&self, id: ElementId) -> Option<&dyn Element> {
        self.elements.iter().find(|e| e.id() == id).map(Box::as_ref)
    }

    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut (dyn Element + 'static)> {
        self.elements.iter_mut().find(|e| e.id() == id).map(Box::as_mut)
    }

    /// Iterates elements in paint order.
    pub fn elements(&self) -> impl Iterator<Item = &dyn Element> {
        self.elements.iter().map(Box::as_ref)
    }

    /// Registers a group over existing elements and/or groups.
    pub fn add_group(&mut self, members: impl Into<Targets>) -> GroupId {
        let id = GroupId::next();
        self.groups.insert(id, Group::new(id, members.into()));
        id
    }

    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.get(&id)
    }

    pub fn remove_group(&mut self, id: GroupId) -> Option<Group> {
        self.groups.remove(&id)
    }

    /// Flattens targets into element ids, expanding groups in member order.
    ///
    /// Ids that do not resolve to anything in this scene are dropped.
    pub fn resolve(&self, targets: &Targets) -> Vec<ElementId> {
        let mut out = Vec::new();
        for target in targets.iter() {
            self.expand(target, &mut out);
        }
        out
    }

    fn expand(&self, target: Target, out: &mut Vec<ElementId>) {
        match target {
            Target::Element(id) if self.contains(id) => out.push(id),
            Target::Element(id) => log::warn!("transition target {id} is not in the scene"),
            Target::Group(id) => match self.groups.get(&id) {
                Some(group) => {
                    for member in group.members() {
                        self.expand(*member, out);
                    }
                }
                None => log::warn!("transition target {id} is not in the scene"),
            },
        }
    }

    /// Surface holding the commands recorded by the most recent frame.
    #[inline]
    pub fn surface(&self) -> &DrawList {
        &self.surface
    }

    #[inline]
    pub fn pointer_inside(&self) -> bool {
        self.pointer_inside
    }

    pub(crate) fn handle_event(&mut self, event: SceneEvent) {
        self.pointer_inside = event == SceneEvent::PointerEntered;
    }

    pub(crate) fn clear_surface(&mut self) {
        self.surface.clear();
    }

    pub(crate) fn id_at(&self, index: usize) -> ElementId {
        self.elements[index].id()
    }

    pub(crate) fn element_at_mut(&mut self, index: usize) -> &mut (dyn Element + 'static) {
        self.elements[index].as_mut()
    }

    /// Draws one element, optionally followed by its bounding-box outline.
    pub(crate) fn render_at(&mut self, index: usize, bounding_box: bool) {
        let element = &self.elements[index];
        element.render(&mut self.surface);

        if bounding_box {
            self.surface
                .push_outline(element.bounding_box(), Color::from_premul(1.0, 0.0, 0.0, 1.0));
        }
    }

    fn index_of(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|e| e.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rect;
    use crate::scene::shapes::RectShape;

    fn rect() -> RectShape {
        RectShape::new(Rect::new(0.0, 0.0, 10.0, 10.0))
    }

    #[test]
    fn resolve_expands_nested_groups_in_order() {
        let mut scene = Scene::new();
        let a = scene.add(rect());
        let b = scene.add(rect());
        let c = scene.add(rect());

        let inner = scene.add_group([b, c]);
        let outer = scene.add_group(vec![Target::from(a), Target::from(inner)]);

        assert_eq!(scene.resolve(&outer.into()), vec![a, b, c]);
        assert_eq!(scene.resolve(&Targets::from([c, a])), vec![c, a]);
    }

    #[test]
    fn resolve_drops_unknown_targets() {
        let mut scene = Scene::new();
        let a = scene.add(rect());
        let stray = ElementId::next();

        assert_eq!(scene.resolve(&Targets::from([stray, a])), vec![a]);
        assert!(scene.resolve(&GroupId::next().into()).is_empty());
    }

    #[test]
    fn remove_keeps_paint_order() {
        let mut scene = Scene::new();
        let a = scene.add(rect());
        let b = scene.add(rect());
        let c = scene.add(rect());

        assert!(scene.remove(b).is_some());
        let order: Vec<_> = scene.elements().map(|e| e.id()).collect();
        assert_eq!(order, vec![a, c]);
        assert!(scene.remove(b).is_none());
    }

    #[test]
    fn pointer_events_track_inside_state() {
        let mut scene = Scene::new();
        scene.handle_event(SceneEvent::PointerEntered);
        assert!(scene.pointer_inside());
        scene.handle_event(SceneEvent::PointerLeft);
        assert!(!scene.pointer_inside());
    }

    #[test]
    fn render_at_appends_outline_when_requested() {
        let mut scene = Scene::new();
        scene.add(rect().fill(Color::from_premul(0.0, 0.0, 1.0, 1.0)));

        scene.render_at(0, true);
        assert_eq!(scene.surface().len(), 2);

        scene.clear_surface();
        scene.render_at(0, false);
        assert_eq!(scene.surface().len(), 1);
    }
}
