use super::*;

#[test]
fn rng64_is_deterministic_per_seed() {
    let mut a = Rng64::new(42);
    let mut b = Rng64::new(42);
    for _ in 0..16 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
    let mut c = Rng64::new(43);
    assert_ne!(Rng64::new(42).next_u64(), c.next_u64());
}

#[test]
fn rng64_values_are_in_unit_interval() {
    let mut r = Rng64::new(7);
    for _ in 0..1000 {
        let v = r.next();
        assert!((0.0..1.0).contains(&v));
    }
}

#[test]
fn sequence_wraps_and_counts_draws() {
    let mut s = SequenceRandom::new(vec![0.1, 0.9]);
    assert_eq!(s.next(), 0.1);
    assert_eq!(s.next(), 0.9);
    assert_eq!(s.next(), 0.1);
    assert_eq!(s.draws(), 3);
}

#[test]
fn sequence_clamps_out_of_range_values() {
    let mut s = SequenceRandom::new(vec![1.5, -2.0]);
    assert!(s.next() < 1.0);
    assert_eq!(s.next(), 0.0);
    assert_eq!(SequenceRandom::new(Vec::new()).next(), 0.5);
}

#[test]
fn helpers_map_into_ranges() {
    let mut s = SequenceRandom::constant(0.25);
    assert_eq!(s.range(10.0, 20.0), 12.5);
    assert_eq!(s.centered(), -0.25);
}
