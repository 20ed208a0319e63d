#![no_main]

use libfuzzer_sys::fuzz_target;
use powf32::{Integrality, MathErrorKind, check_integer, f_powf, f_powf_checked};

fuzz_target!(|data: u64| {
    let lo = data.to_ne_bytes();

    let x = f32::from_bits(u32::from_ne_bytes([lo[0], lo[1], lo[2], lo[3]]));
    let y = f32::from_bits(u32::from_ne_bytes([lo[4], lo[5], lo[6], lo[7]]));

    let value = f_powf(x, y);
    match f_powf_checked(x, y) {
        Ok(v) => assert!(v.to_bits() == value.to_bits() || (v.is_nan() && value.is_nan())),
        Err(e) => {
            assert!(e.value().to_bits() == value.to_bits() || (e.value().is_nan() && value.is_nan()));
            if e.kind() == MathErrorKind::Invalid {
                assert!(x < 0. && x.is_finite() && check_integer(y) == Integrality::NotInteger);
            }
        }
    }

    if !x.is_nan() {
        assert_eq!(f_powf(x, 0.), 1.);
        if x.is_finite() {
            assert_eq!(f_powf(x, 1.), x);
        }
    }
    if !y.is_nan() {
        assert_eq!(f_powf(1., y), 1.);
    }
    if x.is_finite() && x < 0. && y.is_finite() && check_integer(y) == Integrality::NotInteger {
        assert!(value.is_nan());
    }
    if x > 0. && !value.is_nan() {
        assert!(value.is_sign_positive());
    }
});
