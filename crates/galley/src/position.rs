//! Drop-position resolution.
//!
//! Pointer-driven editing needs to turn a drop offset into an insertion
//! index among siblings. [`insertion_index`] walks the sibling sequence,
//! accumulating each sibling's extent along the drop axis, and places the
//! insertion in front of the first sibling whose midpoint lies at or past
//! the offset. Dropping in the front half of a sibling inserts before it,
//! the back half after it, and past the last sibling appends.
//!
//! Extents come from an [`ExtentSource`], so the same resolver serves any
//! geometry backend; a sibling without a known extent contributes zero and
//! is effectively skipped.

use log::trace;

use galley_core::identifier::Id;

/// Supplies the extent of an entity along the axis being resolved.
///
/// Any `Fn(Id) -> Option<f32>` qualifies, so a closure over a geometry map
/// is enough:
///
/// ```
/// # use galley::position::insertion_index;
/// # use galley::identifier::Id;
/// let siblings = [Id::new("para1"), Id::new("para2")];
/// let heights = |id: Id| if id == "para1" { Some(40.0) } else { Some(24.0) };
///
/// assert_eq!(insertion_index(&siblings, 30.0, &heights), 1);
/// ```
pub trait ExtentSource {
    /// Extent of `id` along the drop axis, or `None` when no geometry is
    /// available for it.
    fn extent_of(&self, id: Id) -> Option<f32>;
}

impl<F> ExtentSource for F
where
    F: Fn(Id) -> Option<f32>,
{
    fn extent_of(&self, id: Id) -> Option<f32> {
        self(id)
    }
}

/// Resolves a drop offset to an insertion index in `siblings`.
///
/// The returned index is always valid for insertion: between `0` and
/// `siblings.len()` inclusive. An empty sequence resolves to `0`, and an
/// offset beyond every midpoint resolves to `siblings.len()`.
///
/// # Examples
///
/// ```
/// use galley::position::insertion_index;
/// use galley::identifier::Id;
///
/// let siblings = [Id::new("a"), Id::new("b"), Id::new("c")];
/// let extents = |_: Id| Some(20.0_f32);
///
/// assert_eq!(insertion_index(&siblings, 10.0, &extents), 0);
/// assert_eq!(insertion_index(&siblings, 25.0, &extents), 1);
/// assert_eq!(insertion_index(&siblings, 55.0, &extents), 3);
/// assert_eq!(insertion_index(&[], 10.0, &extents), 0);
/// ```
pub fn insertion_index(siblings: &[Id], offset: f32, extents: &impl ExtentSource) -> usize {
    let mut accumulated = 0.0;
    for (index, &sibling) in siblings.iter().enumerate() {
        let extent = match extents.extent_of(sibling) {
            Some(extent) => extent,
            None => {
                trace!(sibling:% = sibling; "No extent available, treating as zero");
                0.0
            }
        };
        if offset <= accumulated + extent / 2.0 {
            trace!(offset:? = offset, index = index; "Resolved insertion index");
            return index;
        }
        accumulated += extent;
    }
    trace!(offset:? = offset, index = siblings.len(); "Resolved insertion index at the end");
    siblings.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn siblings(count: usize) -> Vec<Id> {
        (0..count).map(|i| Id::new(&format!("sib{i}"))).collect()
    }

    fn uniform(extent: f32) -> impl Fn(Id) -> Option<f32> {
        move |_| Some(extent)
    }

    #[test]
    fn test_front_half_inserts_before() {
        let sibs = siblings(3);
        assert_eq!(insertion_index(&sibs, 10.0, &uniform(20.0)), 0);
    }

    #[test]
    fn test_back_half_inserts_after() {
        let sibs = siblings(3);
        assert_eq!(insertion_index(&sibs, 25.0, &uniform(20.0)), 1);
    }

    #[test]
    fn test_past_last_midpoint_appends() {
        let sibs = siblings(3);
        assert_eq!(insertion_index(&sibs, 55.0, &uniform(20.0)), 3);
    }

    #[test]
    fn test_empty_siblings_resolve_to_zero() {
        assert_eq!(insertion_index(&[], 10.0, &uniform(20.0)), 0);
    }

    #[test]
    fn test_exact_midpoint_inserts_before() {
        let sibs = siblings(3);
        // 10.0 is exactly the first midpoint; the tie goes in front.
        assert_eq!(insertion_index(&sibs, 10.0, &uniform(20.0)), 0);
        assert_eq!(insertion_index(&sibs, 10.001, &uniform(20.0)), 1);
    }

    #[test]
    fn test_negative_offset_resolves_to_zero() {
        let sibs = siblings(3);
        assert_eq!(insertion_index(&sibs, -5.0, &uniform(20.0)), 0);
    }

    #[test]
    fn test_unavailable_extents_count_as_zero() {
        let sibs = siblings(3);
        let unavailable = |_: Id| None;
        assert_eq!(insertion_index(&sibs, 0.0, &unavailable), 0);
        assert_eq!(insertion_index(&sibs, 1.0, &unavailable), 3);
    }

    #[test]
    fn test_mixed_unavailable_extents() {
        let sibs = siblings(3);
        // The middle sibling has no geometry and contributes nothing.
        let spotty = move |id: Id| if id == "sib1" { None } else { Some(20.0_f32) };
        assert_eq!(insertion_index(&sibs, 10.0, &spotty), 0);
        assert_eq!(insertion_index(&sibs, 21.0, &spotty), 2);
        assert_eq!(insertion_index(&sibs, 35.0, &spotty), 3);
    }

    #[test]
    fn test_varying_extents() {
        let sibs = siblings(3);
        let table = [40.0_f32, 10.0, 30.0];
        let lookup = move |id: Id| {
            (0..3)
                .find(|i| id == format!("sib{i}").as_str())
                .map(|i| table[i])
        };
        assert_eq!(insertion_index(&sibs, 19.0, &lookup), 0);
        assert_eq!(insertion_index(&sibs, 44.0, &lookup), 1);
        assert_eq!(insertion_index(&sibs, 46.0, &lookup), 2);
        assert_eq!(insertion_index(&sibs, 70.0, &lookup), 3);
    }
}
