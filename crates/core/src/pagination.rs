//! Fixed-size pagination over an already-ordered, already-fetched sequence.
//!
//! The window itself never fails: an out-of-range page is an empty slice.
//! Callers decide what an empty page means -- the question listing treats it
//! as not-found, the search endpoint treats it as a valid zero-result answer.

/// Number of items per page, for every paginated listing.
pub const PAGE_SIZE: usize = 10;

/// Return the `page`-th window of `items` (1-based, `PAGE_SIZE` items wide).
///
/// Page 0 is treated as page 1. Pages past the end yield an empty slice.
pub fn paginate<T>(items: &[T], page: u32) -> &[T] {
    let start = (page.max(1) as usize - 1).saturating_mul(PAGE_SIZE);
    if start >= items.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(items.len());
    &items[start..end]
}
