//! Sorted-set intersection over neighbor slices.
//!
//! Both inputs must be sorted ascending without duplicates (every
//! [`AdjacencyIndex`](super::AdjacencyIndex) row is). The shorter side drives the
//! scan; when it is much shorter than the other side we gallop (exponential then
//! binary search) instead of stepping linearly.

use super::NodeId;

/// Below `longer / GALLOP_RATIO` elements on the short side, galloping wins.
const GALLOP_RATIO: usize = 16;

/// Calls `visit` for every element of `a ∩ b`, in ascending order.
#[inline]
pub fn for_each_common<F: FnMut(NodeId)>(a: &[NodeId], b: &[NodeId], mut visit: F) {
    let (short, mut long) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    if short.len() < long.len() / GALLOP_RATIO {
        for &x in short {
            long = gallop_ge(long, x);
            match long.first() {
                None => return,
                Some(&y) if y == x => visit(x),
                Some(_) => {}
            }
        }
    } else {
        for &x in short {
            while let Some((&y, rest)) = long.split_first() {
                if y >= x {
                    break;
                }
                long = rest;
            }
            match long.first() {
                None => return,
                Some(&y) if y == x => visit(x),
                Some(_) => {}
            }
        }
    }
}

/// `|a ∩ b|`.
#[inline]
pub fn count_common(a: &[NodeId], b: &[NodeId]) -> usize {
    let mut count = 0;
    for_each_common(a, b, |_| count += 1);
    count
}

/// Advances `slice` to start at the first element `>= value`.
///
/// Same exponential-then-binary probe as `gallop` in Frank McSherry's
/// `dataflow-join`, over `NodeId` slices.
#[inline]
pub fn gallop_ge(mut slice: &[NodeId], value: NodeId) -> &[NodeId] {
    // empty, or already >= value
    if !slice.is_empty() && slice[0] < value {
        let mut step = 1;
        while step < slice.len() && slice[step] < value {
            slice = &slice[step..];
            step <<= 1;
        }

        step >>= 1;
        while step > 0 {
            if step < slice.len() && slice[step] < value {
                slice = &slice[step..];
            }
            step >>= 1;
        }

        // slice[0] < value still holds here
        slice = &slice[1..];
    }
    slice
}
