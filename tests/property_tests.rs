//! Property tests for the Haar transform and shrinkage rules.
//!
//! Reproduce a failure: `PROPTEST_SEED=<seed> cargo test --test property_tests`

use haar_wavelet::{Plane, Shrinkage, ShrinkageParams, SignMode, forward, inverse};
use proptest::collection::vec;
use proptest::prelude::*;

/// A plane whose dimensions are divisible by `2^levels`, with samples in `[0, 1]`.
fn plane_and_levels() -> impl Strategy<Value = (Plane, usize)> {
    (1usize..=3, 1usize..=4, 1usize..=4).prop_flat_map(|(levels, wm, hm)| {
        let width = wm << levels;
        let height = hm << levels;
        vec(0.0f32..=1.0, width * height).prop_map(move |data| {
            let plane = Plane::from_vec(width, height, data).expect("length matches");
            (plane, levels)
        })
    })
}

fn shrinking_policy() -> impl Strategy<Value = Shrinkage> {
    prop_oneof![Just(Shrinkage::Hard), Just(Shrinkage::Soft), Just(Shrinkage::Garrot)]
}

fn sign_mode() -> impl Strategy<Value = SignMode> {
    prop_oneof![Just(SignMode::Symmetric), Just(SignMode::Legacy)]
}

proptest! {
    #[test]
    fn roundtrip_without_shrinkage((plane, levels) in plane_and_levels()) {
        let coeffs = forward(plane.clone(), levels).unwrap();
        let restored = inverse(coeffs, levels, &ShrinkageParams::none()).unwrap();
        let err = restored.max_abs_diff(&plane).unwrap();
        prop_assert!(err < 1e-5, "max error {}", err);
    }

    #[test]
    fn single_level_preserves_neighbourhood_energy(
        a in -1.0f32..1.0,
        b in -1.0f32..1.0,
        c in -1.0f32..1.0,
        d in -1.0f32..1.0,
    ) {
        let plane = Plane::from_vec(2, 2, vec![a, b, c, d]).unwrap();
        let coeffs = forward(plane.clone(), 1).unwrap();
        prop_assert!((coeffs.energy() - plane.energy()).abs() < 1e-4);
    }

    #[test]
    fn shrinkage_never_amplifies(
        policy in shrinking_policy(),
        sign in sign_mode(),
        d in -10.0f32..10.0,
        t in 0.01f32..5.0,
    ) {
        let params = ShrinkageParams::new(policy, t).with_sign(sign);
        let out = params.shrink(d);
        prop_assert!(out.abs() <= d.abs(), "{:?}: |{}| > |{}|", policy, out, d);
        if d.abs() <= t {
            prop_assert_eq!(out, 0.0);
        }
    }

    #[test]
    fn garrot_keeps_sign_above_threshold(
        d in 0.02f32..10.0,
        t in 0.01f32..5.0,
        negate in any::<bool>(),
    ) {
        prop_assume!(d > t * 1.001);
        let d = if negate { -d } else { d };
        let out = ShrinkageParams::new(Shrinkage::Garrot, t).shrink(d);
        prop_assert!(out.abs() < d.abs());
        prop_assert!(out == 0.0 || out.signum() == d.signum());
    }

    #[test]
    fn soft_is_continuous_at_threshold(t in 0.01f32..5.0) {
        let soft = ShrinkageParams::new(Shrinkage::Soft, t);
        let hard = ShrinkageParams::new(Shrinkage::Hard, t);
        let just_above = t * (1.0 + 1e-4);

        prop_assert_eq!(soft.shrink(t), 0.0);
        prop_assert!(soft.shrink(just_above) < 1e-3 * t.max(1.0));

        prop_assert_eq!(hard.shrink(t), 0.0);
        prop_assert_eq!(hard.shrink(just_above), just_above);
    }

    #[test]
    fn hard_reconstruction_ignores_pre_shrunk_details(
        (plane, levels) in plane_and_levels(),
        t in 0.01f32..0.5,
    ) {
        let params = ShrinkageParams::new(Shrinkage::Hard, t);
        let mut coeffs = forward(plane, levels).unwrap();
        let direct = inverse(coeffs.clone(), levels, &params).unwrap();

        haar_wavelet::shrink_details(&mut coeffs, levels, &params).unwrap();
        let again = inverse(coeffs, levels, &params).unwrap();
        prop_assert_eq!(direct, again);
    }
}
