use super::*;

#[test]
fn parses_long_short_and_alpha_hex() {
    assert_eq!(Rgba8::parse("#FF006E").unwrap(), Rgba8::rgb(255, 0, 110));
    assert_eq!(Rgba8::parse("#f0a").unwrap(), Rgba8::rgb(255, 0, 170));
    assert_eq!(
        Rgba8::parse("#0000ff80").unwrap(),
        Rgba8::rgba(0, 0, 255, 128)
    );
    assert_eq!(
        Rgba8::parse("transparent").unwrap(),
        Rgba8::TRANSPARENT
    );
}

#[test]
fn rejects_malformed_colors() {
    assert!(Rgba8::parse("FF006E").is_err());
    assert!(Rgba8::parse("#12345").is_err());
    assert!(Rgba8::parse("#zzzzzz").is_err());
    assert!(Rgba8::parse("#ééé").is_err());
}

#[test]
fn formats_lowercase_rrggbb() {
    assert_eq!(Rgba8::rgb(255, 0, 110).to_hex(), "#ff006e");
    assert_eq!(Rgba8::rgba(1, 2, 3, 4).to_string(), "#010203");
}

#[test]
fn shift_clamps_each_channel() {
    let c = Rgba8::rgb(250, 128, 3);
    assert_eq!(c.shift(10), Rgba8::rgb(255, 138, 13));
    assert_eq!(c.shift(-10), Rgba8::rgb(240, 118, 0));
}

#[test]
fn percent_amount_rounds_half_up() {
    assert_eq!(percent_amount(10.0), 26); // 25.5
    assert_eq!(percent_amount(20.0), 51);
    assert_eq!(percent_amount(0.0), 0);
}

#[test]
fn premultiply_and_back_is_stable_for_opaque() {
    let c = Rgba8::rgb(12, 200, 99);
    assert_eq!(c.premultiplied(), [12, 200, 99, 255]);
    assert_eq!(Rgba8::from_premultiplied(c.premultiplied()), c);
    assert_eq!(Rgba8::from_premultiplied([0, 0, 0, 0]), Rgba8::TRANSPARENT);
}

#[test]
fn fractional_alpha_matches_css_rgba() {
    let a = Rgba8::rgba_f(0, 0, 0, 0.3).a;
    assert!((76..=77).contains(&a));
    assert_eq!(Rgba8::WHITE.with_alpha_factor(0.5).a, 128);
}
