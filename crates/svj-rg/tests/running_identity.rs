use proptest::prelude::*;
use svj_rg::{MassRunner, STANDARD_QUARKS};

#[test]
fn heavy_flavors_run_to_themselves() {
    let runner = MassRunner::default();
    for (nf_ref, flavor) in STANDARD_QUARKS.iter().enumerate() {
        let mass = runner.running_mass(flavor.pole_mass, nf_ref, flavor.pole_mass, nf_ref);
        if flavor.pole_mass > runner.lambda {
            assert!((mass - flavor.pole_mass).abs() < 1e-12 * flavor.pole_mass);
        } else {
            assert_eq!(mass, 0.0);
        }
    }
}

#[test]
fn running_is_monotonic_in_scale() {
    let runner = MassRunner::default();
    let bottom = STANDARD_QUARKS[4];
    let at_10 = runner.running_mass(bottom.pole_mass, 4, 10.0, 5);
    let at_100 = runner.running_mass(bottom.pole_mass, 4, 100.0, 5);
    assert!(at_100 < at_10);
    assert!(at_10 < bottom.pole_mass);
}

proptest! {
    #[test]
    fn identity_above_lambda(mass in 0.25f64..500.0, nf in 0usize..6) {
        let runner = MassRunner::default();
        let mass_run = runner.running_mass(mass, nf, mass, nf);
        prop_assert!((mass_run - mass).abs() <= 1e-9 * mass);
    }

    #[test]
    fn below_lambda_is_zero(mass in 0.0001f64..0.2, nf in 0usize..6, target in 1.0f64..100.0) {
        let runner = MassRunner::default();
        prop_assert_eq!(runner.running_mass(mass, nf, target, 5), 0.0);
    }
}
