//! Wrap-around stepping for cycled selections (sections, dates, metrics,
//! form focus). An empty cycle always yields index 0.

pub const fn wrap_decrement(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

pub const fn wrap_increment(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    (index + 1) % len
}

/// One step forward or back around a cycle of `len` entries.
pub const fn wrap_step(index: usize, len: usize, forward: bool) -> usize {
    if forward {
        wrap_increment(index, len)
    } else {
        wrap_decrement(index, len)
    }
}
