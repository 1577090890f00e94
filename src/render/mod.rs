//! Renderer seam.
//!
//! The engine never paints. After every mutation it hands the renderer a
//! `BoardView`: each bucket with its label and items in placement order.
//! Hosts implement `Renderer` for their UI stack; closures work directly.
//!
//! ```
//! use placement_board::core::{BoardConfig, BucketConfig};
//! use placement_board::render::{BoardView, Renderer};
//! use placement_board::zones::PlacementStore;
//!
//! let config = BoardConfig::new(BucketConfig::named("pool")).with_numbered_items(2);
//! let store = PlacementStore::new(&config).unwrap();
//!
//! let mut painted = Vec::new();
//! let mut renderer = |view: &BoardView| painted.push(view.clone());
//! renderer.render(&BoardView::from_store(&store));
//!
//! assert_eq!(painted[0].buckets[0].items.len(), 2);
//! ```

mod view;

pub use view::{BoardView, BucketView};

/// Receives a fresh view after every move or reset.
pub trait Renderer {
    /// Repaint from the given view.
    fn render(&mut self, view: &BoardView);
}

impl<F> Renderer for F
where
    F: FnMut(&BoardView),
{
    fn render(&mut self, view: &BoardView) {
        self(view);
    }
}

/// Renderer that discards every view (headless boards, tests).
#[derive(Clone, Copy, Debug, Default)]
pub struct NoRender;

impl Renderer for NoRender {
    fn render(&mut self, _view: &BoardView) {}
}
