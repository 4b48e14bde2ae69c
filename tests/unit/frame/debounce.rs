use super::*;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn releases_after_quiet_period() {
    let t0 = Instant::now();
    let mut d = Debouncer::default();
    d.submit("a", t0);
    assert!(d.is_pending());
    assert_eq!(d.poll(t0 + ms(299)), None);
    assert_eq!(d.poll(t0 + ms(300)), Some("a"));
    assert!(!d.is_pending());
    assert_eq!(d.poll(t0 + ms(900)), None);
}

#[test]
fn newer_value_replaces_and_restarts_timer() {
    let t0 = Instant::now();
    let mut d = Debouncer::new(ms(100));
    d.submit(1, t0);
    d.submit(2, t0 + ms(80));
    assert_eq!(d.deadline(), Some(t0 + ms(180)));
    assert_eq!(d.poll(t0 + ms(120)), None);
    assert_eq!(d.poll(t0 + ms(180)), Some(2));
}

#[test]
fn cancel_returns_pending_value() {
    let t0 = Instant::now();
    let mut d = Debouncer::new(ms(50));
    d.submit("x", t0);
    assert_eq!(d.cancel(), Some("x"));
    assert_eq!(d.deadline(), None);
    assert_eq!(d.poll(t0 + ms(60)), None);
}
