//! Scenario and property tests for IntervalSet.

use std::collections::BTreeSet;

use quickcheck_macros::quickcheck;

use super::*;

type TestSet = IntervalSet<i64>;

/// Helper to create intervals more concisely in tests.
fn iv(start: i64, end: i64) -> Interval<i64> {
    Interval::new(start, end)
}

fn set(intervals: &[(i64, i64)]) -> TestSet {
    intervals.iter().map(|&(s, e)| iv(s, e)).collect()
}

/// Small, collision-prone intervals for property tests; zero lengths produce
/// empty intervals on purpose.
fn arbitrary_interval(start: i8, len: i8) -> Interval<i64> {
    let start = i64::from(start) / 2;
    iv(start, start + i64::from(len).rem_euclid(10))
}

fn arbitrary_set(raw: &[(i8, i8)]) -> TestSet {
    raw.iter().map(|&(s, l)| arbitrary_interval(s, l)).collect()
}

/// Integer points covered by `set`, the brute-force model used by the
/// property tests.
fn points(set: &TestSet) -> BTreeSet<i64> {
    set.iter().flat_map(|iv| iv.start()..iv.end()).collect()
}

fn interval_points(interval: &Interval<i64>) -> BTreeSet<i64> {
    (interval.start()..interval.end()).collect()
}

#[cfg(test)]
mod scenarios {
    use super::*;
    use crate::units::QuantityKey;
    use qtty::{Quantity, Second};

    #[test]
    fn adding_the_gap_joins_neighbours() {
        let mut s = TestSet::new();
        s.add(iv(1, 2)).unwrap().add(iv(3, 4)).unwrap().add(iv(2, 3)).unwrap();
        assert_eq!(s, iv(1, 4));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn removing_the_middle_splits() {
        let mut s = set(&[(0, 10)]);
        s.remove(iv(2, 8)).unwrap();
        assert_eq!(s, set(&[(0, 2), (8, 10)]));
    }

    #[test]
    fn intersecting_keeps_only_the_overlap() {
        let s = set(&[(0, 1), (2, 3)]);
        assert_eq!(s.intersection(iv(0, 2)).unwrap(), set(&[(0, 1)]));
    }

    #[test]
    fn xor_of_two_sets() {
        let a = set(&[(0, 2), (4, 6)]);
        let b = set(&[(1, 5), (7, 8)]);
        assert_eq!(
            a.symmetric_difference(&b).unwrap(),
            set(&[(0, 1), (2, 4), (5, 6), (7, 8)])
        );
    }

    #[test]
    fn convolving_two_sets() {
        let mut a = set(&[(0, 1), (10, 12)]);
        let b = set(&[(-2, 1), (1, 2)]);
        a.convolve(&b);
        assert_eq!(a, set(&[(-2, 3), (8, 14)]));
    }

    #[test]
    fn buffering_grows_and_shrinks() {
        let mut grown = set(&[(1, 2)]);
        grown.buffer(1, 2);
        assert_eq!(grown, iv(0, 4));

        let at = QuantityKey::<Second>::from_f64;
        let mut shrunk = IntervalSet::from(Interval::new(at(1.0), at(2.0)));
        shrunk.buffer(Quantity::<Second>::new(-0.5), Quantity::new(-0.5));
        assert!(shrunk.is_empty());
    }

    #[test]
    fn reversed_offsets_shrink_in_buffer_but_empty_in_convolve() {
        let mut buffered = set(&[(0, 10)]);
        buffered.buffer(-3, -3);
        assert_eq!(buffered, iv(3, 7));

        let mut convolved = set(&[(0, 10)]);
        convolved.convolve(iv(3, -3));
        assert!(convolved.is_empty());
    }

    #[test]
    fn reversed_interval_is_ignored_by_add_and_remove() {
        let mut s = set(&[(0, 10)]);
        s.add(iv(20, 15)).unwrap().remove(iv(8, 2)).unwrap();
        assert_eq!(s, iv(0, 10));
    }
}

#[cfg(test)]
mod construction {
    use super::*;

    #[test]
    fn new_is_empty() {
        let s = TestSet::new();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        assert_eq!(s.bounds(), None);
        assert_eq!(s.min(), None);
        assert_eq!(s.max(), None);
        assert_eq!(s.first(), None);
    }

    #[test]
    fn default_is_empty() {
        assert!(TestSet::default().is_empty());
    }

    #[test]
    fn from_unsorted_vec_normalizes() {
        let s: TestSet = vec![iv(200, 300), iv(0, 100), iv(50, 150), iv(150, 160)].into();
        assert_eq!(s, set(&[(0, 160), (200, 300)]));
        assert_eq!(s.min(), Some(0));
        assert_eq!(s.max(), Some(300));
        assert_eq!(s.first(), Some(iv(0, 160)));
        assert_eq!(s.last(), Some(iv(200, 300)));
    }

    #[test]
    fn from_empty_interval_is_empty() {
        assert!(TestSet::from(iv(4, 4)).is_empty());
    }

    #[test]
    fn try_from_sorted_accepts_canonical_input() {
        let s = TestSet::try_from_sorted(vec![iv(0, 10), iv(20, 30)]).unwrap();
        assert_eq!(s.len(), 2);
        assert_eq!(s.bounds(), Some(iv(0, 30)));
    }

    #[test]
    fn try_from_sorted_rejects_touching_input() {
        let err = TestSet::try_from_sorted(vec![iv(0, 10), iv(10, 30)]).unwrap_err();
        assert_eq!(
            err,
            IntervalSetError::InvalidArgument("intervals overlap or touch".to_string())
        );
    }

    #[test]
    fn extend_merges() {
        let mut s = set(&[(0, 10)]);
        s.extend(vec![iv(5, 20), iv(30, 31)]);
        assert_eq!(s, set(&[(0, 20), (30, 31)]));
    }

    #[test]
    fn clone_is_independent() {
        let original = set(&[(0, 10), (20, 30)]);
        let mut copy = original.clone();
        assert_eq!(copy, original);
        copy.remove(iv(5, 25)).unwrap();
        assert_eq!(original, set(&[(0, 10), (20, 30)]));
        assert_eq!(copy, set(&[(0, 5), (25, 30)]));
    }

    #[test]
    fn copy_from_overwrites_contents_and_bounds() {
        let mut target = set(&[(100, 200)]);
        let source = set(&[(0, 1), (5, 6)]);
        target.copy_from(&source);
        assert_eq!(target, source);
        assert_eq!(target.bounds(), Some(iv(0, 6)));
    }

    #[test]
    fn clear_resets_bounds() {
        let mut s = set(&[(0, 10)]);
        s.clear();
        assert!(s.is_empty());
        assert_eq!(s.bounds(), None);
    }
}

#[cfg(test)]
mod views {
    use super::*;

    fn sample() -> TestSet {
        set(&[(0, 2), (10, 12), (20, 22), (30, 32)])
    }

    #[test]
    fn sub_view_selects_by_start() {
        assert_eq!(sample().sub_view(10, true, 30, false), set(&[(10, 12), (20, 22)]));
        assert_eq!(sample().sub_view(10, false, 30, true), set(&[(20, 22), (30, 32)]));
        assert!(sample().sub_view(40, true, 0, true).is_empty());
    }

    #[test]
    fn head_and_tail_views() {
        assert_eq!(sample().head_view(20, false), set(&[(0, 2), (10, 12)]));
        assert_eq!(sample().tail_view(20, true), set(&[(20, 22), (30, 32)]));
        assert_eq!(sample().head_view(20, false).bounds(), Some(iv(0, 12)));
    }

    #[test]
    fn views_do_not_alias_the_source() {
        let source = sample();
        let mut head = source.head_view(20, false);
        head.add(iv(2, 10)).unwrap();
        assert_eq!(head, iv(0, 12));
        assert_eq!(source, sample());
    }

    #[test]
    fn view_over_includes_left_straddler() {
        let source = sample();
        assert_eq!(source.view_over(&iv(11, 21)), set(&[(10, 12), (20, 22)]));
        assert!(source.view_over(&iv(12, 20)).is_empty());
        assert!(source.view_over(&iv(15, 15)).is_empty());
    }
}

#[cfg(test)]
mod formatting_and_iteration {
    use super::*;

    #[test]
    fn display_format() {
        assert_eq!(set(&[(0, 10), (20, 30)]).to_string(), "{[0, 10), [20, 30)}");
        assert_eq!(TestSet::new().to_string(), "{}");
    }

    #[test]
    fn into_iter_owned_and_borrowed() {
        let s = set(&[(0, 10), (20, 30)]);
        let borrowed: Vec<&Interval<i64>> = (&s).into_iter().collect();
        assert_eq!(borrowed, vec![&iv(0, 10), &iv(20, 30)]);
        let owned: Vec<Interval<i64>> = s.into_iter().collect();
        assert_eq!(owned, vec![iv(0, 10), iv(20, 30)]);
    }

    #[test]
    fn iter_is_double_ended() {
        let s = set(&[(0, 1), (2, 3), (4, 5)]);
        assert_eq!(s.iter().next_back(), Some(&iv(4, 5)));
        assert_eq!(s.iter().len(), 3);
    }
}

#[cfg(test)]
mod algebra {
    use super::*;

    #[test]
    fn self_operand_laws() {
        let s = set(&[(0, 3), (5, 9), (12, 13)]);

        let mut added = s.clone();
        added.add(&s).unwrap();
        assert_eq!(added, s);

        let mut removed = s.clone();
        removed.remove(&s).unwrap();
        assert!(removed.is_empty());

        let mut intersected = s.clone();
        intersected.intersect(&s).unwrap();
        assert_eq!(intersected, s);
    }

    #[test]
    fn difference_of_bound_disjoint_sets_is_identity() {
        let a = set(&[(0, 3), (5, 9)]);
        let b = set(&[(9, 12), (20, 30)]);
        assert_eq!(a.difference(&b).unwrap(), a);
    }

    #[test]
    fn convolution_with_empty_set_is_empty() {
        let mut a = set(&[(0, 3), (5, 9)]);
        a.convolve(&TestSet::new());
        assert!(a.is_empty());
    }
}

#[cfg(test)]
mod properties {
    use super::*;

    fn apply(target: &mut TestSet, model: &mut BTreeSet<i64>, op: u8, interval: Interval<i64>) {
        let covered = interval_points(&interval);
        match op % 3 {
            0 => {
                target.add(interval).unwrap();
                model.extend(covered);
            }
            1 => {
                target.remove(interval).unwrap();
                model.retain(|p| !covered.contains(p));
            }
            _ => {
                target.intersect(interval).unwrap();
                model.retain(|p| covered.contains(p));
            }
        }
    }

    #[quickcheck]
    fn mutations_preserve_canonical_form(ops: Vec<(u8, i8, i8)>) -> bool {
        let mut s = TestSet::new();
        let mut model = BTreeSet::new();
        ops.into_iter().all(|(op, start, len)| {
            apply(&mut s, &mut model, op, arbitrary_interval(start, len));
            assertions::is_canonical(&s) && points(&s) == model
        })
    }

    #[quickcheck]
    fn add_is_idempotent(base: Vec<(i8, i8)>, extra: Vec<(i8, i8)>) -> bool {
        let extra = arbitrary_set(&extra);
        let mut once = arbitrary_set(&base);
        once.add(&extra).unwrap();
        let mut twice = once.clone();
        twice.add(&extra).unwrap();
        once == twice
    }

    #[quickcheck]
    fn set_mutations_match_model(left: Vec<(i8, i8)>, right: Vec<(i8, i8)>) -> bool {
        let a = arbitrary_set(&left);
        let b = arbitrary_set(&right);
        let (pa, pb) = (points(&a), points(&b));

        let mut added = a.clone();
        added.add(&b).unwrap();
        let mut removed = a.clone();
        removed.remove(&b).unwrap();
        let mut intersected = a.clone();
        intersected.intersect(&b).unwrap();

        points(&added) == pa.union(&pb).copied().collect::<BTreeSet<_>>()
            && points(&removed) == pa.difference(&pb).copied().collect::<BTreeSet<_>>()
            && points(&intersected) == pa.intersection(&pb).copied().collect::<BTreeSet<_>>()
            && assertions::is_canonical(&added)
            && assertions::is_canonical(&removed)
            && assertions::is_canonical(&intersected)
    }

    #[quickcheck]
    fn combinators_match_model(left: Vec<(i8, i8)>, right: Vec<(i8, i8)>) -> bool {
        let a = arbitrary_set(&left);
        let b = arbitrary_set(&right);
        let (pa, pb) = (points(&a), points(&b));

        let union = a.union(&b).unwrap();
        let difference = a.difference(&b).unwrap();
        let intersection = a.intersection(&b).unwrap();
        let xor = a.symmetric_difference(&b).unwrap();

        points(&union) == pa.union(&pb).copied().collect::<BTreeSet<_>>()
            && points(&difference) == pa.difference(&pb).copied().collect::<BTreeSet<_>>()
            && points(&intersection) == pa.intersection(&pb).copied().collect::<BTreeSet<_>>()
            && points(&xor) == pa.symmetric_difference(&pb).copied().collect::<BTreeSet<_>>()
    }

    #[quickcheck]
    fn interval_combinators_match_model(left: Vec<(i8, i8)>, start: i8, len: i8) -> bool {
        let a = arbitrary_set(&left);
        let interval = arbitrary_interval(start, len);
        let (pa, pi) = (points(&a), interval_points(&interval));

        let union = points(&a.union(interval).unwrap());
        let difference = points(&a.difference(interval).unwrap());
        let intersection = points(&a.intersection(interval).unwrap());
        let xor = points(&a.symmetric_difference(interval).unwrap());

        union == pa.union(&pi).copied().collect::<BTreeSet<_>>()
            && difference == pa.difference(&pi).copied().collect::<BTreeSet<_>>()
            && intersection == pa.intersection(&pi).copied().collect::<BTreeSet<_>>()
            && xor == pa.symmetric_difference(&pi).copied().collect::<BTreeSet<_>>()
    }

    #[quickcheck]
    fn algebraic_identities(left: Vec<(i8, i8)>, right: Vec<(i8, i8)>) -> bool {
        let a = arbitrary_set(&left);
        let b = arbitrary_set(&right);

        let union = a.union(&b).unwrap();
        let intersection = a.intersection(&b).unwrap();
        let xor = a.symmetric_difference(&b).unwrap();

        union == b.union(&a).unwrap()
            && intersection == b.intersection(&a).unwrap()
            && xor == union.difference(&intersection).unwrap()
            && a.symmetric_difference(&a).unwrap().is_empty()
            && a.difference(&a).unwrap().is_empty()
            && a.union(&a).unwrap() == a
            && a.intersection(&a).unwrap() == a
    }

    #[quickcheck]
    fn relations_match_model(left: Vec<(i8, i8)>, right: Vec<(i8, i8)>) -> bool {
        let a = arbitrary_set(&left);
        let b = arbitrary_set(&right);
        let (pa, pb) = (points(&a), points(&b));

        a.is_superset_of(&b) == pa.is_superset(&pb)
            && a.is_subset_of(&b) == pa.is_subset(&pb)
            && a.is_proper_subset_of(&b) == (pa.is_subset(&pb) && pa != pb)
            && a.intersects(&b) == !pa.is_disjoint(&pb)
            && a.contains(&a)
    }

    #[quickcheck]
    fn membership_matches_model(raw: Vec<(i8, i8)>, start: i8, len: i8) -> bool {
        let s = arbitrary_set(&raw);
        let model = points(&s);
        let interval = arbitrary_interval(start, len);
        let covered = interval_points(&interval);

        (-70..80).all(|x| s.contains(Operand::Element(x)) == model.contains(&x))
            && s.contains(interval) == covered.is_subset(&model)
            && s.intersects(interval) == !covered.is_disjoint(&model)
    }

    #[quickcheck]
    fn convolution_matches_pairwise_sums(left: Vec<(i8, i8)>, right: Vec<(i8, i8)>) -> bool {
        let a = arbitrary_set(&left);
        let b = arbitrary_set(&right);

        let expected: TestSet = a
            .iter()
            .flat_map(|ra| {
                b.iter()
                    .map(move |rb| iv(ra.start() + rb.start(), ra.end() + rb.end()))
            })
            .collect();

        let mut convolved = a.clone();
        convolved.convolve(&b);
        convolved == expected && assertions::is_canonical(&convolved)
    }

    #[quickcheck]
    fn convolving_with_element_equals_shift(raw: Vec<(i8, i8)>, amount: i8) -> bool {
        let amount = i64::from(amount);
        let mut convolved = arbitrary_set(&raw);
        let mut shifted = convolved.clone();
        convolved.convolve(Operand::Element(amount));
        shifted.shift(amount);
        convolved == shifted
            && points(&shifted)
                == points(&arbitrary_set(&raw))
                    .into_iter()
                    .map(|p| p + amount)
                    .collect::<BTreeSet<_>>()
    }

    #[quickcheck]
    fn buffer_matches_per_interval_widening(raw: Vec<(i8, i8)>, left: i8, right: i8) -> bool {
        let (left, right) = (i64::from(left % 4), i64::from(right % 4));
        let s = arbitrary_set(&raw);
        let expected: TestSet = s
            .iter()
            .map(|r| iv(r.start() - left, r.end() + right))
            .collect();

        let mut buffered = s.clone();
        buffered.buffer(left, right);
        buffered == expected && assertions::is_canonical(&buffered)
    }
}

#[cfg(feature = "serde")]
mod serde_support {
    use super::*;

    #[test]
    fn round_trips_through_json() {
        let s = set(&[(0, 2), (5, 9)]);
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"[{"start":0,"end":2},{"start":5,"end":9}]"#);
        let back: TestSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn deserialization_normalizes() {
        let json = r#"[{"start":5,"end":9},{"start":0,"end":5},{"start":20,"end":10}]"#;
        let s: TestSet = serde_json::from_str(json).unwrap();
        assert_eq!(s, iv(0, 9));
    }
}
