//! Board controller: routes drag events into the store and repaints.

use tracing::{debug, trace};

use crate::core::{Assignment, BoardConfig, ConfigError, ItemId};
use crate::render::{BoardView, Renderer};
use crate::zones::PlacementStore;

use super::event::DragEvent;

/// A placement store wired to a renderer.
///
/// Events are applied strictly in the order `handle` is called. The store is
/// owned here; the renderer only ever sees views.
///
/// ## Usage
///
/// ```
/// use placement_board::presets;
/// use placement_board::render::NoRender;
/// use placement_board::surface::{Board, DragEvent};
/// use placement_board::core::ItemId;
///
/// let mut board = Board::new(&presets::color_zones(), NoRender).unwrap();
///
/// board.handle(DragEvent::start("4"));
/// let snapshot = board.handle(DragEvent::drop_on("4", presets::RED));
///
/// let red = board.store().layout().resolve(presets::RED).unwrap();
/// assert_eq!(snapshot.query(red), vec![ItemId::new("4")]);
/// ```
#[derive(Debug)]
pub struct Board<R: Renderer> {
    store: PlacementStore,
    renderer: R,
    /// Item currently being dragged.
    active: Option<ItemId>,
}

impl<R: Renderer> Board<R> {
    /// Build the store and paint the initial view.
    pub fn new(config: &BoardConfig, renderer: R) -> Result<Self, ConfigError> {
        let store = PlacementStore::new(config)?;
        let mut board = Self {
            store,
            renderer,
            active: None,
        };
        board.refresh();
        Ok(board)
    }

    /// Apply one event and return the resulting snapshot.
    ///
    /// `End` and `Recall` repaint; `Start` only records the active item.
    pub fn handle(&mut self, event: DragEvent) -> Assignment {
        match event {
            DragEvent::Start { item } => {
                if self.store.is_movable(&item) {
                    trace!(item = item.as_str(), "drag started");
                    self.active = Some(item);
                } else {
                    trace!(item = item.as_str(), "drag start ignored");
                }
                self.store.snapshot()
            }
            DragEvent::End { item, over } => {
                self.active = None;
                let snapshot = self.store.move_to_named(&item, over.as_deref());
                self.paint(&snapshot);
                snapshot
            }
            DragEvent::Recall => {
                debug!("recall");
                self.active = None;
                let snapshot = self.store.reset();
                self.paint(&snapshot);
                snapshot
            }
        }
    }

    /// Apply events in order, returning the final snapshot.
    pub fn handle_all<I>(&mut self, events: I) -> Assignment
    where
        I: IntoIterator<Item = DragEvent>,
    {
        for event in events {
            self.handle(event);
        }
        self.store.snapshot()
    }

    /// Repaint the current state.
    pub fn refresh(&mut self) {
        let snapshot = self.store.snapshot();
        self.paint(&snapshot);
    }

    fn paint(&mut self, snapshot: &Assignment) {
        let view = BoardView::new(self.store.layout(), snapshot);
        self.renderer.render(&view);
    }

    /// Current view, without repainting.
    #[must_use]
    pub fn view(&self) -> BoardView {
        BoardView::from_store(&self.store)
    }

    /// Item currently being dragged, if any.
    #[must_use]
    pub fn active(&self) -> Option<&ItemId> {
        self.active.as_ref()
    }

    /// Read access to the store.
    #[must_use]
    pub fn store(&self) -> &PlacementStore {
        &self.store
    }

    /// Read access to the renderer.
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Consume the board, returning the store and renderer.
    pub fn into_parts(self) -> (PlacementStore, R) {
        (self.store, self.renderer)
    }
}
