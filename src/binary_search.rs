use crate::math::midpoint;

/// Narrow the closed index window `[l, r]` toward a boundary.
///
/// `move_right(mid)` is asked about the probed index and answers whether the
/// boundary lies at or to the right of it (`l := mid`) or at or to the left of
/// it (`r := mid`). Probes are always strictly inside the window, so `f` is
/// never called with `l` or `r` themselves and never outside the initial
/// window, whatever it answers.
///
/// Stops as soon as the midpoint coincides with one of the ends, which for a
/// floored midpoint happens exactly when `r - l <= 1`. The returned pair
/// therefore spans at most two indices.
pub fn narrow<F>(mut l: usize, mut r: usize, mut move_right: F) -> (usize, usize)
where
    F: FnMut(usize) -> bool,
{
    debug_assert!(l <= r);
    let mut mid = midpoint(l, r);
    while mid != l && mid != r {
        if move_right(mid) {
            l = mid;
        } else {
            r = mid;
        }
        mid = midpoint(l, r);
    }
    (l, r)
}

/// First index in `[lo, hi]` where `f` holds, for `f` false then true.
pub fn partition_first<F>(lo: usize, hi: usize, mut f: F) -> Option<usize>
where
    F: FnMut(usize) -> bool,
{
    let (l, r) = narrow(lo, hi, |mid| !f(mid));
    if f(l) {
        Some(l)
    } else if l != r && f(r) {
        Some(r)
    } else {
        None
    }
}

/// Last index in `[lo, hi]` where `f` holds, for `f` true then false.
pub fn partition_last<F>(lo: usize, hi: usize, mut f: F) -> Option<usize>
where
    F: FnMut(usize) -> bool,
{
    let (l, r) = narrow(lo, hi, &mut f);
    if f(r) {
        Some(r)
    } else if l != r && f(l) {
        Some(l)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn log2_ceil(n: usize) -> usize {
        (usize::BITS - n.saturating_sub(1).leading_zeros()) as usize
    }

    #[test]
    fn test_narrow_single_index() {
        let mut probes = 0;
        let result = narrow(5, 5, |_| {
            probes += 1;
            true
        });
        assert_eq!(result, (5, 5));
        assert_eq!(probes, 0);
    }

    #[test]
    fn test_narrow_leaves_small_window() {
        for lo in 0..8_usize {
            for hi in lo..lo + 40 {
                for boundary in lo..=hi + 1 {
                    let (l, r) = narrow(lo, hi, |mid| mid < boundary);
                    assert!(lo <= l && l <= r && r <= hi);
                    assert!(r - l <= 1);
                }
            }
        }
    }

    #[test]
    fn test_partition_first_exhaustive() {
        for lo in 0..4_usize {
            for hi in lo..lo + 70 {
                for boundary in lo..=hi + 1 {
                    let expected = (boundary <= hi).then_some(boundary);
                    let mut probes = 0;
                    let result = partition_first(lo, hi, |i| {
                        probes += 1;
                        i >= boundary
                    });
                    assert_eq!(result, expected, "lo={lo} hi={hi} boundary={boundary}");
                    assert!(probes <= log2_ceil(hi - lo + 1) + 2);
                }
            }
        }
    }

    #[test]
    fn test_partition_last_exhaustive() {
        for lo in 0..4_usize {
            for hi in lo..lo + 70 {
                // the last true index is boundary - 1
                for boundary in lo..=hi + 1 {
                    let expected = (boundary > lo).then(|| boundary - 1);
                    let mut probes = 0;
                    let result = partition_last(lo, hi, |i| {
                        probes += 1;
                        i < boundary
                    });
                    assert_eq!(result, expected, "lo={lo} hi={hi} boundary={boundary}");
                    assert!(probes <= log2_ceil(hi - lo + 1) + 2);
                }
            }
        }
    }

    #[test]
    fn test_non_monotonic_predicate_stays_in_window() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..2_000 {
            let lo = rng.gen_range(0..50_usize);
            let hi = lo + rng.gen_range(0..50_usize);
            let noise: Vec<bool> = (0..=hi).map(|_| rng.gen()).collect();
            let first = partition_first(lo, hi, |i| {
                assert!(lo <= i && i <= hi);
                noise[i]
            });
            let last = partition_last(lo, hi, |i| {
                assert!(lo <= i && i <= hi);
                noise[i]
            });
            assert!(first.map_or(true, |i| lo <= i && i <= hi));
            assert!(last.map_or(true, |i| lo <= i && i <= hi));
        }
    }
}
