/// Divide `length` pixels starting at `start` into `count` spans separated by
/// `gap`, sized by `proportions`. The last span absorbs rounding.
///
/// Proportions that don't match `count` are replaced by uniform shares.
pub(super) fn split(start: i32, length: i32, gap: i32, count: usize, proportions: &[f64]) -> Vec<(i32, i32)> {
    if count == 0 {
        return vec![];
    }
    let available = (length - gap * (count as i32 - 1)).max(0);
    let uniform;
    let proportions = if proportions.len() == count {
        proportions
    } else {
        uniform = vec![1.0 / count as f64; count];
        &uniform
    };

    let mut spans = Vec::with_capacity(count);
    let mut offset = start;
    let mut used = 0;
    for (i, share) in proportions.iter().enumerate() {
        let size = if i + 1 == count {
            available - used
        } else {
            (f64::from(available) * share).round() as i32
        };
        spans.push((offset, size));
        offset += size + gap;
        used += size;
    }
    spans
}

/// Space the spans of a split share, without the gaps between them.
pub(super) fn available(length: i32, gap: i32, count: usize) -> f64 {
    f64::from(length - gap * (count as i32 - 1))
}
