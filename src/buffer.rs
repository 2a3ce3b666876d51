use anyhow::{Context, Result};

/// Make room for `additional` more elements in `buf`, never below `min_capacity`.
///
/// Growth goes through `try_reserve`, which keeps the usual amortized doubling but
/// surfaces running out of memory as an `allocation error` instead of aborting.
pub(crate) fn reserve<T>(buf: &mut Vec<T>, additional: usize, min_capacity: usize) -> Result<()> {
    let wanted = buf.len().saturating_add(additional).max(min_capacity);
    buf.try_reserve(wanted - buf.len()).context("allocation error")
}
