//! Drag/click state machine.
//!
//! Pointer input is already expressed as axis coordinates; the host decides
//! whether a press landed on a handle, on the track, or elsewhere.

use crate::handles::HandleSet;

/// Where a pointer press landed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerTarget {
    Handle(usize),
    /// Track click at a coordinate in percent.
    Track(f64),
    Outside,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(usize),
}

/// Snapshot of the current gesture, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragSession {
    pub active_handle_index: usize,
    pub active: bool,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct InteractionController {
    state: DragState,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> DragState {
        self.state
    }

    #[must_use]
    pub fn session(&self) -> Option<DragSession> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging(i) => Some(DragSession {
                active_handle_index: i,
                active: true,
            }),
        }
    }

    /// Begin a gesture. Returns the grabbed handle index when a drag started.
    ///
    /// A track press first jumps the nearest handle to the pressed
    /// coordinate. Presses while a drag is already active are ignored.
    pub fn press(&mut self, target: PointerTarget, handles: &mut HandleSet) -> Option<usize> {
        if self.state != DragState::Idle {
            return None;
        }
        let index = match target {
            PointerTarget::Handle(i) if i < handles.len() => i,
            PointerTarget::Handle(_) | PointerTarget::Outside => return None,
            PointerTarget::Track(coord) => {
                if !coord.is_finite() {
                    return None;
                }
                let goal = handles.space().coordinate_to_value(coord);
                let i = nearest_index(handles.values(), goal)?;
                handles.request_update(i, coord);
                i
            }
        };
        log::info!("[drag] begin on handle {}", index);
        self.state = DragState::Dragging(index);
        Some(index)
    }

    /// Follow the pointer. Returns false (and does nothing) while idle.
    pub fn pointer_move(&mut self, coord: f64, handles: &mut HandleSet) -> bool {
        match self.state {
            DragState::Idle => false,
            DragState::Dragging(i) => {
                handles.request_update(i, coord);
                true
            }
        }
    }

    /// End the gesture. Returns the handle that was released.
    pub fn release(&mut self) -> Option<usize> {
        match std::mem::take(&mut self.state) {
            DragState::Idle => None,
            DragState::Dragging(i) => {
                log::info!("[drag] end on handle {}", i);
                Some(i)
            }
        }
    }

    /// Drop a session whose handle no longer exists.
    pub fn cancel_if_stale(&mut self, handle_count: usize) {
        if let DragState::Dragging(i) = self.state {
            if i >= handle_count {
                log::info!("[drag] handle {} removed mid-drag; ending session", i);
                self.state = DragState::Idle;
            }
        }
    }
}

/// Index of the value closest to `goal`; the lowest index wins ties.
#[inline]
pub fn nearest_index(values: &[f64], goal: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, v) in values.iter().enumerate() {
        let d = (v - goal).abs();
        match best {
            Some((_, bd)) if d >= bd => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}
