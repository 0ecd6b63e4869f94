use linktab_core::math::Vec2;
pub use winit::event::{ElementState, MouseButton, WindowEvent as WinitEvent};

use std::collections::VecDeque;

/// Event queue with batching and mouse-move deduplication.
///
/// Only the latest cursor position survives a frame, but it is emitted
/// before any button event that arrived after it, so a release is always
/// handled at the position it happened.
pub struct EventQueue {
    pending: VecDeque<Event>,
    latest_mouse_pos: Option<Vec2>,
    stats: EventStats,
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            pending: VecDeque::with_capacity(16),
            latest_mouse_pos: None,
            stats: EventStats::default(),
        }
    }

    /// Push event to queue (called from the winit handler).
    pub fn push(&mut self, event: Event) {
        self.stats.events_received += 1;

        match event {
            Event::MouseMoved(pos) => {
                self.latest_mouse_pos = Some(pos);
            }
            _ => {
                // Moves before a button change must not be reordered after it.
                if let Some(pos) = self.latest_mouse_pos.take() {
                    self.pending.push_back(Event::MouseMoved(pos));
                }
                self.pending.push_back(event);
            }
        }
    }

    /// Convert and push a raw winit event.
    pub fn push_winit(&mut self, event: WinitEvent, scale_factor: f64) {
        if let Some(event) = Event::from_winit(event, scale_factor) {
            self.push(event);
        }
    }

    /// Drain all events and return the frame batch.
    pub fn drain(&mut self) -> EventBatch {
        let mut events = Vec::with_capacity(self.pending.len() + 1);
        events.extend(self.pending.drain(..));
        if let Some(pos) = self.latest_mouse_pos.take() {
            events.push(Event::MouseMoved(pos));
        }

        self.stats.events_processed += events.len();
        self.stats.events_coalesced = self.stats.events_received - self.stats.events_processed;

        EventBatch { events }
    }

    pub fn stats(&self) -> &EventStats {
        &self.stats
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// The events of one frame, in arrival order.
#[derive(Debug, Clone, Default)]
pub struct EventBatch {
    events: Vec<Event>,
}

impl EventBatch {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Run `handler` over every event, dropping the ones it consumes.
    pub fn dispatch<H>(&mut self, mut handler: H)
    where
        H: FnMut(&Event) -> HandleStatus,
    {
        self.events.retain(|event| {
            let status = handler(event);
            !status.is_consumed()
        });
    }
}

impl From<Vec<Event>> for EventBatch {
    fn from(events: Vec<Event>) -> Self {
        Self::new(events)
    }
}

#[derive(Default, Debug, Clone)]
pub struct EventStats {
    pub events_received: usize,
    pub events_processed: usize,
    pub events_coalesced: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Mouse button pressed.
    MouseButtonDown(MouseButton),
    /// Mouse button released.
    MouseButtonUp(MouseButton),
    /// Mouse cursor moved (logical coordinates).
    MouseMoved(Vec2),
    /// Mouse cursor entered the window.
    MouseEntered,
    /// Mouse cursor left the window.
    MouseLeft,
    /// Window focus changed.
    Focused(bool),
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct HandleStatus: u8 {
        const HANDLED = 0b00000001;
        const CONSUMED = 0b00000010;
    }
}

impl HandleStatus {
    pub const fn is_consumed(&self) -> bool {
        self.contains(Self::CONSUMED)
    }

    pub const fn is_handled(&self) -> bool {
        self.contains(Self::HANDLED)
    }

    pub const fn consumed() -> Self {
        Self::from_bits_truncate(Self::HANDLED.bits() | Self::CONSUMED.bits())
    }

    pub const fn handled() -> Self {
        Self::from_bits_truncate(Self::HANDLED.bits())
    }

    pub const fn ignored() -> Self {
        Self::empty()
    }
}

impl Event {
    /// Convert a winit window event, keeping only what pointer dragging needs.
    pub fn from_winit(event: WinitEvent, scale_factor: f64) -> Option<Self> {
        match event {
            WinitEvent::MouseInput {
                device_id: _,
                state,
                button,
            } => match state {
                ElementState::Pressed => Some(Event::MouseButtonDown(button)),
                ElementState::Released => Some(Event::MouseButtonUp(button)),
            },
            WinitEvent::CursorMoved {
                device_id: _,
                position,
            } => Some(Event::MouseMoved(Vec2::new(
                (position.x / scale_factor) as f32,
                (position.y / scale_factor) as f32,
            ))),
            WinitEvent::CursorEntered { device_id: _ } => Some(Event::MouseEntered),
            WinitEvent::CursorLeft { device_id: _ } => Some(Event::MouseLeft),
            WinitEvent::Focused(focus) => Some(Event::Focused(focus)),
            other => {
                tracing::trace!("ignoring window event: {:?}", other);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_are_coalesced() {
        let mut queue = EventQueue::new();
        queue.push(Event::MouseMoved(Vec2::new(1.0, 0.0)));
        queue.push(Event::MouseMoved(Vec2::new(2.0, 0.0)));
        queue.push(Event::MouseMoved(Vec2::new(3.0, 0.0)));

        let batch = queue.drain();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch.iter().next(), Some(&Event::MouseMoved(Vec2::new(3.0, 0.0))));
        assert_eq!(queue.stats().events_coalesced, 2);
    }

    #[test]
    fn test_move_stays_before_release() {
        let mut queue = EventQueue::new();
        queue.push(Event::MouseButtonDown(MouseButton::Left));
        queue.push(Event::MouseMoved(Vec2::new(40.0, 0.0)));
        queue.push(Event::MouseMoved(Vec2::new(90.0, 0.0)));
        queue.push(Event::MouseButtonUp(MouseButton::Left));

        let events: Vec<_> = queue.drain().iter().cloned().collect();
        assert_eq!(
            events,
            vec![
                Event::MouseButtonDown(MouseButton::Left),
                Event::MouseMoved(Vec2::new(90.0, 0.0)),
                Event::MouseButtonUp(MouseButton::Left),
            ]
        );
    }

    #[test]
    fn test_dispatch_drops_consumed() {
        let mut batch = EventBatch::new(vec![
            Event::MouseEntered,
            Event::MouseButtonDown(MouseButton::Left),
            Event::MouseLeft,
        ]);
        batch.dispatch(|event| match event {
            Event::MouseButtonDown(_) => HandleStatus::consumed(),
            Event::MouseEntered => HandleStatus::handled(),
            _ => HandleStatus::ignored(),
        });
        assert_eq!(batch.len(), 2);
    }

    #[test]
    fn test_handle_status_flags() {
        assert!(HandleStatus::consumed().is_handled());
        assert!(HandleStatus::consumed().is_consumed());
        assert!(!HandleStatus::handled().is_consumed());
        assert!(!HandleStatus::ignored().is_handled());
    }

    #[test]
    fn test_from_winit_filters() {
        assert_eq!(
            Event::from_winit(WinitEvent::Focused(false), 2.0),
            Some(Event::Focused(false))
        );
        assert_eq!(Event::from_winit(WinitEvent::CloseRequested, 2.0), None);
    }
}
