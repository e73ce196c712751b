mod report;

pub use report::write_samples;

use slotmap::SlotMap;

use crate::error::{ParcurveError, Result};
use crate::geometry::curve::{AnyCurve, Circle, Curve, CurveKind};

slotmap::new_key_type! {
    /// Unique identifier for a curve in a [`CurveSet`].
    pub struct CurveId;
}

/// Arena-backed collection of heterogeneous curves.
///
/// Curves are owned by an internal arena and referenced by id from two
/// sequences: the insertion-ordered main sequence, and a derived
/// circle-only sequence populated on demand by
/// [`collect_circles`](Self::collect_circles). A curve collected into
/// the derived sequence is shared by id, not copied.
///
/// The set only grows; curves are never removed.
#[derive(Debug, Default)]
pub struct CurveSet {
    arena: SlotMap<CurveId, AnyCurve>,
    order: Vec<CurveId>,
    circles: Vec<CurveId>,
}

impl CurveSet {
    /// Creates a new, empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of curves in the main sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns whether the main sequence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Appends a curve to the main sequence and returns its id.
    pub fn add_curve(&mut self, curve: impl Into<AnyCurve>) -> CurveId {
        let id = self.arena.insert(curve.into());
        self.order.push(id);
        id
    }

    /// Returns a reference to a curve, or an error if the id is unknown.
    ///
    /// # Errors
    ///
    /// Returns an error if the id does not resolve to a stored curve.
    pub fn curve(&self, id: CurveId) -> Result<&AnyCurve> {
        self.arena.get(id).ok_or(ParcurveError::CurveNotFound)
    }

    /// Returns a mutable reference to a curve, or an error if the id is unknown.
    ///
    /// # Errors
    ///
    /// Returns an error if the id does not resolve to a stored curve.
    pub fn curve_mut(&mut self, id: CurveId) -> Result<&mut AnyCurve> {
        self.arena.get_mut(id).ok_or(ParcurveError::CurveNotFound)
    }

    /// Iterates over curves in main-sequence order.
    pub fn curves(&self) -> impl Iterator<Item = &AnyCurve> {
        self.order.iter().filter_map(|id| self.arena.get(*id))
    }

    /// Returns the ids of the main sequence, in order.
    #[must_use]
    pub fn order(&self) -> &[CurveId] {
        &self.order
    }

    /// Returns a mutable view of the main sequence.
    ///
    /// The caller may reorder entries or append the id of an already
    /// stored curve again; duplicates are allowed and iterate twice.
    pub fn order_mut(&mut self) -> &mut Vec<CurveId> {
        &mut self.order
    }

    /// Scans the main sequence once and appends the id of every circle
    /// to the derived circle sequence, preserving relative order.
    ///
    /// The derived sequence is not cleared first: repeated calls
    /// accumulate duplicate ids. Call
    /// [`clear_circles`](Self::clear_circles) between collections to
    /// rebuild from scratch.
    pub fn collect_circles(&mut self) {
        for &id in &self.order {
            let is_circle = self
                .arena
                .get(id)
                .is_some_and(|c| c.kind() == CurveKind::Circle);
            if is_circle {
                self.circles.push(id);
            }
        }
    }

    /// Empties the derived circle sequence.
    pub fn clear_circles(&mut self) {
        self.circles.clear();
    }

    /// Returns the ids in the derived circle sequence, in current order.
    #[must_use]
    pub fn circle_ids(&self) -> &[CurveId] {
        &self.circles
    }

    /// Iterates over the derived circle sequence in its current order.
    pub fn circles(&self) -> impl Iterator<Item = &Circle> {
        self.circles
            .iter()
            .filter_map(|id| self.arena.get(*id).and_then(AnyCurve::as_circle))
    }

    /// Sorts the derived circle sequence in place, ascending by radius.
    ///
    /// Equal radii may reorder relative to each other.
    pub fn sort_circles(&mut self) {
        let arena = &self.arena;
        let radius_of = |id: CurveId| {
            arena
                .get(id)
                .and_then(AnyCurve::as_circle)
                .map_or(0.0, Circle::radius)
        };
        self.circles
            .sort_unstable_by(|a, b| radius_of(*a).total_cmp(&radius_of(*b)));
    }

    /// Sums the radii of the derived circle sequence.
    ///
    /// Returns `0.0` when no circles have been collected.
    #[must_use]
    pub fn total_radius_sum(&self) -> f64 {
        self.circles().map(Circle::radius).sum()
    }
}
