use super::*;
use skrifa::MetadataProvider;

#[test]
fn bundled_files_cover_letters_digits_and_umlauts() {
    for file in FontFile::ALL {
        let font = skrifa::FontRef::new(file.bytes()).unwrap();
        let charmap = font.charmap();
        for ch in ('A'..='Z').chain('0'..='9').chain("ÄÖÜÉß!?&".chars()) {
            assert!(charmap.map(ch).is_some(), "{file:?} lacks {ch}");
        }
    }
}

#[test]
fn faces_pick_distinct_files_where_it_matters() {
    assert_ne!(FontFace::CONDENSED.file, FontFace::HEAVY.file);
    assert_ne!(FontFace::SCRIPT.file, FontFace::SERIF.file);
    assert!(FontFace::MONO.is_monospace());
    assert!(!FontFace::HEAVY.is_monospace());
}

#[test]
fn scaled_keeps_the_face() {
    let f = Font::new(FontFace::SERIF, 100.0).scaled(0.5);
    assert_eq!(f.face, FontFace::SERIF);
    assert!((f.size - 50.0).abs() < 1e-9);
}
