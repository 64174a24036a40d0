use super::*;

#[test]
fn mul_div255_variants_align() {
    for x in [0u16, 1, 127, 255] {
        for y in [0u16, 1, 127, 255] {
            assert_eq!(u16::from(mul_div255_u8(x, y)), mul_div255_u16(x, y));
        }
    }
}

#[test]
fn smoothstep_hits_endpoints_and_midpoint() {
    assert_eq!(smoothstep(0.0), 0.0);
    assert_eq!(smoothstep(1.0), 1.0);
    assert_eq!(smoothstep(0.5), 0.5);
    assert!(smoothstep(0.25) < 0.25);
    assert!(smoothstep(0.75) > 0.75);
}

#[test]
fn unpremultiply_restores_opaque_and_zeroes_transparent() {
    let mut px = [128u8, 64, 0, 128, 10, 20, 30, 0, 200, 100, 50, 255];
    unpremultiply_in_place(&mut px);
    assert_eq!(&px[0..4], &[255, 128, 0, 128]);
    assert_eq!(&px[4..8], &[0, 0, 0, 0]);
    assert_eq!(&px[8..12], &[200, 100, 50, 255]);
}
