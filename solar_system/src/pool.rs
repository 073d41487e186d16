//! Ordered collection of bodies shared by the solver and the renderer

use crate::body::{Body, BodyId};

/// Append-only, insertion-ordered set of bodies.
///
/// Order does not change the physics of a single pair but it does change
/// accumulation order inside a step, and it is the draw order.
#[derive(Debug, Default, Clone)]
pub struct BodyPool {
    bodies: Vec<Body>,
}

impl BodyPool {
    pub fn new() -> Self {
        Self { bodies: Vec::new() }
    }

    /// Append `body` unless a body with the same identity is already here.
    pub fn add(&mut self, body: Body) -> bool {
        if self.contains(body.id()) {
            log::debug!("{} already in pool", body.id());
            return false;
        }
        self.bodies.push(body);
        true
    }

    pub fn all(&self) -> &[Body] {
        &self.bodies
    }

    pub fn all_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Body> {
        self.bodies.iter()
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|body| body.id() == id)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|body| body.id() == id)
    }

    pub fn contains(&self, id: BodyId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl<'a> IntoIterator for &'a BodyPool {
    type Item = &'a Body;
    type IntoIter = std::slice::Iter<'a, Body>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn adding_same_body_twice_is_rejected() {
        let mut pool = BodyPool::new();
        let body = Body::new(Vec2::ZERO, 10.0);

        assert!(pool.add(body.clone()));
        assert!(!pool.add(body));
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn equal_valued_bodies_are_both_added() {
        let mut pool = BodyPool::new();
        assert!(pool.add(Body::new(Vec2::ONE, 10.0)));
        assert!(pool.add(Body::new(Vec2::ONE, 10.0)));
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn all_keeps_insertion_order() {
        let mut pool = BodyPool::new();
        let first = Body::new(Vec2::ZERO, 1.0);
        let second = Body::new(Vec2::X, 2.0);
        let ids = [first.id(), second.id()];
        pool.add(first);
        pool.add(second);

        let order: Vec<_> = pool.all().iter().map(Body::id).collect();
        assert_eq!(order, ids);
    }

    #[test]
    fn get_mut_is_a_live_view() {
        let mut pool = BodyPool::new();
        let body = Body::new(Vec2::ZERO, 10.0);
        let id = body.id();
        pool.add(body);

        pool.get_mut(id).unwrap().active = false;
        assert!(!pool.all()[0].active);
    }
}
