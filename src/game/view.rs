//! Rendering boundary.

use alloc::vec::Vec;

use crate::deck::DeckEvent;

/// Receives deck events and presents them.
///
/// Implementors only observe state. They never reach back into the deck.
pub trait View {
    /// Presents a single event.
    fn render(&mut self, event: &DeckEvent);
}

/// Records every event in order.
impl View for Vec<DeckEvent> {
    fn render(&mut self, event: &DeckEvent) {
        self.push(*event);
    }
}

impl<V: View + ?Sized> View for &mut V {
    fn render(&mut self, event: &DeckEvent) {
        (**self).render(event);
    }
}
