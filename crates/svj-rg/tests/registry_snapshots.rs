use svj_rg::{MassRunner, QuarkFlavor, QuarkRegistry};

#[test]
fn sets_are_mass_ordered_and_filtered() {
    let registry = QuarkRegistry::default();
    let active: Vec<_> = registry.active_set(2.0).iter().map(|q| q.id).collect();
    assert_eq!(active, vec![2, 1, 3, 4]);
    let eligible: Vec<_> = registry.decay_eligible_set(2.0).iter().map(|q| q.id).collect();
    assert_eq!(eligible, vec![2, 1, 3]);
}

#[test]
fn empty_sets_below_lightest_quark() {
    let registry = QuarkRegistry::default();
    assert!(registry.active_set(0.001).is_empty());
    assert!(registry.decay_eligible_set(0.004).is_empty());
    assert_eq!(registry.snapshot(0.0).active_count(), 0);
}

#[test]
fn snapshots_do_not_leak_between_scales() {
    let registry = QuarkRegistry::default();
    let first = registry.snapshot(20.0);
    let _other = registry.snapshot(0.5);
    let again = registry.snapshot(20.0);
    assert_eq!(first, again);
    assert_eq!(first.active_count(), 5);
}

#[test]
fn inactive_quarks_keep_reference_mass() {
    let registry = QuarkRegistry::default();
    let snapshot = registry.snapshot(3.0);
    let bottom = snapshot.quarks().iter().find(|q| q.id == 5).unwrap();
    assert!(!bottom.active);
    assert_eq!(bottom.running_mass, bottom.pole_mass);
    let light: Vec<_> = snapshot.active().filter(|q| q.pole_mass < 0.218).collect();
    assert_eq!(light.len(), 3);
    assert!(light.iter().all(|q| q.running_mass == 0.0));
    let charm = snapshot.active().find(|q| q.id == 4).unwrap();
    assert!(charm.running_mass > 0.0);
}

#[test]
fn custom_tables_are_sorted() {
    let registry = QuarkRegistry::new(
        vec![
            QuarkFlavor { id: 5, pole_mass: 4.18 },
            QuarkFlavor { id: 4, pole_mass: 1.275 },
        ],
        MassRunner::default(),
    );
    let ids: Vec<_> = registry.flavors().iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![4, 5]);
}
