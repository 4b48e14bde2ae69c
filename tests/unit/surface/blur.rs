use super::*;

#[test]
fn blur_radius_0_is_identity() {
    let src = vec![1u8, 2, 3, 4];
    let out = blur_alpha8(&src, 2, 2, 0, 1.0).unwrap();
    assert_eq!(out, src);
}

#[test]
fn blur_constant_plane_is_identity() {
    let src = vec![77u8; 4 * 3];
    let out = blur_alpha8(&src, 4, 3, 3, 2.0).unwrap();
    assert_eq!(out, src);
}

#[test]
fn blur_spreads_energy_from_single_pixel() {
    let (w, h) = (9u32, 9u32);
    let mut src = vec![0u8; (w * h) as usize];
    src[(4 * w + 4) as usize] = 255;

    let out = blur_alpha8(&src, w, h, 3, 1.2).unwrap();

    assert!(out.iter().filter(|&&a| a != 0).count() > 1);
    let sum: u32 = out.iter().map(|&a| u32::from(a)).sum();
    assert!((sum as i32 - 255).abs() <= 24);
}

#[test]
fn blur_rejects_wrong_length() {
    assert!(blur_alpha8(&[0u8; 3], 2, 2, 1, 1.0).is_err());
}

#[test]
fn shadow_kernel_uses_half_blur_as_sigma() {
    assert_eq!(shadow_kernel(0.0), None);
    assert_eq!(shadow_kernel(-1.0), None);
    assert_eq!(shadow_kernel(20.0), Some((30, 10.0)));
    assert_eq!(shadow_kernel(1000.0).map(|k| k.0), Some(MAX_BLUR_RADIUS));
}
