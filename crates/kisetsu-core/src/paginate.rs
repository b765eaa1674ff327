use crate::models::PageResult;

/// Slice page `offset` (1-based) of length `size` out of `subset`.
///
/// `total` is always the length of `subset`. A page past the end, an
/// `offset` of 0 or a `size` of 0 yields an empty window.
pub fn paginate<T: Clone>(subset: &[T], offset: usize, size: usize) -> PageResult<T> {
    let total = subset.len();
    if offset == 0 || size == 0 {
        return PageResult {
            data: Vec::new(),
            total,
        };
    }

    let start = (offset - 1).saturating_mul(size).min(total);
    let end = start.saturating_add(size).min(total);

    PageResult {
        data: subset[start..end].to_vec(),
        total,
    }
}

/// `ceil(total / size)`; zero for an empty set or a zero page size.
pub fn page_count(total: usize, size: usize) -> usize {
    if size == 0 {
        return 0;
    }
    total.div_ceil(size)
}
