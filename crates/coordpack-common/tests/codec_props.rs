//! Property tests for the coordinate codec.

use coordpack_common::{Axis, CoordError, Coordinate, CoordinateCodec};
use proptest::prelude::*;

const STD: CoordinateCodec = CoordinateCodec::STANDARD;

fn field() -> impl Strategy<Value = i32> {
    0i32..=0xFFFF
}

proptest! {
    #[test]
    fn prop_roundtrip(x in field(), y in field()) {
        let c = Coordinate::new(x, y);
        let packed = STD.encode(c).unwrap();
        prop_assert_eq!(STD.decode(packed), c);
    }

    #[test]
    fn prop_fields_occupy_their_halves(x in field(), y in field()) {
        let packed = STD.encode(Coordinate::new(x, y)).unwrap();
        prop_assert_eq!(packed >> 16, x as u32);
        prop_assert_eq!(packed & 0xFFFF, y as u32);
    }

    #[test]
    fn prop_injective(a in (field(), field()), b in (field(), field())) {
        prop_assume!(a != b);
        let pa = STD.encode(Coordinate::from(a)).unwrap();
        let pb = STD.encode(Coordinate::from(b)).unwrap();
        prop_assert_ne!(pa, pb);
    }

    #[test]
    fn prop_decode_then_encode_is_identity(v in any::<u32>()) {
        // Every u32 splits into two valid 16-bit fields.
        prop_assert_eq!(STD.encode(STD.decode(v)), Ok(v));
    }

    #[test]
    fn prop_roundtrip_any_width(bits in 1u32..=16, x in any::<u16>(), y in any::<u16>()) {
        let codec = CoordinateCodec::new(bits).unwrap();
        let max = codec.max_field() as i32;
        let c = Coordinate::new(x as i32 & max, y as i32 & max);
        let packed = codec.encode(c).unwrap();
        prop_assert!(bits == 16 || packed >> codec.packed_width() == 0);
        prop_assert_eq!(codec.decode(packed), c);
    }

    #[test]
    fn prop_oversized_x_is_rejected(x in 0x1_0000i32.., y in field()) {
        let err = STD.encode(Coordinate::new(x, y)).unwrap_err();
        prop_assert_eq!(err, CoordError::OutOfRange { axis: Axis::X, value: x, max: 0xFFFF });
    }

    #[test]
    fn prop_negative_y_is_rejected(x in field(), y in i32::MIN..0) {
        let err = STD.encode(Coordinate::new(x, y)).unwrap_err();
        prop_assert_eq!(err, CoordError::OutOfRange { axis: Axis::Y, value: y, max: 0xFFFF });
    }

    #[test]
    fn prop_unchecked_drops_high_x_bits(x in field(), y in field(), k in 1i32..0x7FFF) {
        // x + k * 2^16 loses its upper bits and aliases plain x
        let wide = Coordinate::new(x + (k << 16), y);
        prop_assert_eq!(STD.encode_unchecked(wide), STD.encode_unchecked(Coordinate::new(x, y)));
    }
}

#[test]
fn unchecked_wrap_collides_with_origin() {
    let overflowed = Coordinate::new(1 << CoordinateCodec::BIT_WIDTH, 0);
    assert_eq!(
        STD.encode_unchecked(overflowed),
        STD.encode_unchecked(Coordinate::ORIGIN)
    );
    assert!(STD.encode(overflowed).is_err());
}

#[cfg(feature = "rayon")]
mod parallel {
    use super::*;

    proptest! {
        #[test]
        fn prop_parallel_matches_sequential(
            coords in prop::collection::vec((field(), field()), 0..512)
        ) {
            let coords: Vec<Coordinate> = coords.into_iter().map(Coordinate::from).collect();
            let seq = STD.encode_all(&coords).unwrap();
            let par = STD.par_encode_all(&coords).unwrap();
            prop_assert_eq!(&seq, &par);
            prop_assert_eq!(STD.par_decode_all(&par), coords);
        }
    }

    #[test]
    fn parallel_reports_bad_record() {
        let mut coords = vec![Coordinate::new(1, 1); 1000];
        coords[700] = Coordinate::new(-3, 0);
        let err = STD.par_encode_all(&coords).unwrap_err();
        assert!(matches!(err, CoordError::AtIndex { index: 700, .. }));
    }
}

#[cfg(feature = "serde")]
#[test]
fn coordinate_serializes_as_xy_record() {
    let json = serde_json::to_string(&Coordinate::new(3, 7)).unwrap();
    assert_eq!(json, r#"{"x":3,"y":7}"#);
    let back: Coordinate = serde_json::from_str(r#"{"y":9,"x":4}"#).unwrap();
    assert_eq!(back, Coordinate::new(4, 9));
}
