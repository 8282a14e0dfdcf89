//! Pointer state relative to the cloud container.
//!
//! Written by the pointer-move handler, read by the render pass. Last write
//! wins; there is no ordering contract between consecutive moves.

use std::cell::Cell;
use std::rc::Rc;

use serde::Serialize;

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct PointF {
    pub x: f64,
    pub y: f64,
}

impl PointF {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Last known pointer position, or nothing before the first move.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct PointerState {
    position: Option<PointF>,
}

impl PointerState {
    pub const fn new() -> Self {
        Self { position: None }
    }

    /// State for a pointer at `(x, y)`. Non-finite coordinates give an absent pointer.
    pub fn at(x: f64, y: f64) -> Self {
        let mut state = Self::new();
        state.moved(x, y);
        state
    }

    /// Convert viewport coordinates into container-relative ones.
    pub fn from_client(client: PointF, container_origin: PointF) -> Self {
        Self::at(client.x - container_origin.x, client.y - container_origin.y)
    }

    pub fn moved(&mut self, x: f64, y: f64) {
        let p = PointF::new(x, y);
        self.position = if p.is_finite() { Some(p) } else { None };
    }

    pub fn reset(&mut self) {
        self.position = None;
    }

    pub fn position(&self) -> Option<PointF> {
        self.position
    }
}

/// Pointer cell shared between event listeners and the render pass.
///
/// Listeners hold a [`PointerLease`]. The pointer resets only when the last
/// lease is released, so one listener going away does not clear the position
/// another one is still tracking.
#[derive(Debug, Clone, Default)]
pub struct SharedPointer {
    state: Rc<Cell<PointerState>>,
    leases: Rc<Cell<usize>>,
}

impl SharedPointer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> PointerState {
        self.state.get()
    }

    pub fn set(&self, state: PointerState) {
        self.state.set(state);
    }

    pub fn clear(&self) {
        self.state.set(PointerState::new());
    }

    pub fn lease(&self) -> PointerLease {
        self.leases.set(self.leases.get() + 1);
        PointerLease { shared: self.clone() }
    }

    pub fn live_leases(&self) -> usize {
        self.leases.get()
    }
}

/// One writer's hold on a [`SharedPointer`].
#[derive(Debug)]
pub struct PointerLease {
    shared: SharedPointer,
}

impl PointerLease {
    pub fn set(&self, state: PointerState) {
        self.shared.set(state);
    }
}

impl Drop for PointerLease {
    fn drop(&mut self) {
        let remaining = self.shared.leases.get().saturating_sub(1);
        self.shared.leases.set(remaining);
        if remaining == 0 {
            self.shared.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_absent() {
        assert_eq!(PointerState::default().position(), None);
    }

    #[test]
    fn test_last_write_wins() {
        let mut state = PointerState::new();
        state.moved(10.0, 20.0);
        state.moved(30.0, 40.0);
        assert_eq!(state.position(), Some(PointF::new(30.0, 40.0)));
    }

    #[test]
    fn test_non_finite_clears() {
        let mut state = PointerState::at(5.0, 5.0);
        state.moved(f64::NAN, 5.0);
        assert_eq!(state.position(), None);
        assert_eq!(PointerState::at(1.0, f64::INFINITY).position(), None);
    }

    #[test]
    fn test_from_client() {
        let state = PointerState::from_client(PointF::new(150.0, 320.0), PointF::new(100.0, 300.0));
        assert_eq!(state.position(), Some(PointF::new(50.0, 20.0)));
    }

    #[test]
    fn test_reset() {
        let mut state = PointerState::at(1.0, 2.0);
        state.reset();
        assert_eq!(state, PointerState::new());
    }

    #[test]
    fn test_last_lease_resets_pointer() {
        let shared = SharedPointer::new();
        let first = shared.lease();
        let second = shared.lease();
        first.set(PointerState::at(40.0, 60.0));
        assert_eq!(shared.live_leases(), 2);

        drop(first);
        assert_eq!(shared.live_leases(), 1);
        assert_eq!(shared.get().position(), Some(PointF::new(40.0, 60.0)));

        second.set(PointerState::at(5.0, 6.0));
        drop(second);
        assert_eq!(shared.live_leases(), 0);
        assert_eq!(shared.get(), PointerState::new());
    }

    #[test]
    fn test_clones_share_state() {
        let shared = SharedPointer::new();
        let reader = shared.clone();
        shared.set(PointerState::at(1.0, 1.0));
        assert_eq!(reader.get().position(), Some(PointF::new(1.0, 1.0)));
        reader.clear();
        assert_eq!(shared.get().position(), None);
    }
}
