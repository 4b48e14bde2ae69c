use super::*;

#[test]
fn over_opacity_0_is_noop() {
    let dst = [1, 2, 3, 4];
    let src = [200, 200, 200, 200];
    assert_eq!(over(dst, src, 0.0), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src, 1.0), src);
}

#[test]
fn multiply_with_white_keeps_source_over_transparent() {
    // Over a transparent destination multiply degenerates to plain source.
    assert_eq!(multiply([0, 0, 0, 0], [100, 50, 25, 255]), [100, 50, 25, 255]);
    // Opaque white destination: result is the source color.
    assert_eq!(
        multiply([255, 255, 255, 255], [100, 50, 25, 255]),
        [100, 50, 25, 255]
    );
}

#[test]
fn multiply_darkens_opaque_destination() {
    let out = multiply([128, 128, 128, 255], [128, 128, 128, 255]);
    assert_eq!(out[3], 255);
    assert!(out[0] < 128);
    assert_eq!(blend(BlendMode::Multiply, [9, 9, 9, 9], [0, 0, 0, 0]), [9, 9, 9, 9]);
}

#[test]
fn over_in_place_rejects_mismatched_buffers() {
    let mut dst = vec![0u8; 8];
    assert!(over_in_place(&mut dst, &[0u8; 4], 1.0).is_err());
    over_in_place(&mut dst, &[10, 20, 30, 255, 0, 0, 0, 0], 1.0).unwrap();
    assert_eq!(dst, vec![10, 20, 30, 255, 0, 0, 0, 0]);
}

#[test]
fn scale_by_full_coverage_is_identity() {
    assert_eq!(scale([10, 20, 30, 40], 255), [10, 20, 30, 40]);
    assert_eq!(scale([10, 20, 30, 40], 0), [0, 0, 0, 0]);
}
