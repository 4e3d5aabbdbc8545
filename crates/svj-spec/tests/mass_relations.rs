use svj_spec::masses::{mqconst_snowmass, mrho_snowmass, rinv_matt, rinv_snowmass_overall};
use svj_spec::MassRelation;

fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

#[test]
fn snowmass_relations_match_benchmarks() {
    assert!(close(mqconst_snowmass(6.0, 10.0), 10.119008, 1e-6));
    assert!(close(mrho_snowmass(6.0, 10.0), 25.099801, 1e-6));
    assert!(close(mqconst_snowmass(30.0, 50.0), 50.595041, 1e-6));
    assert!(close(mrho_snowmass(30.0, 50.0), 125.499004, 1e-6));

    let masses = MassRelation::Snowmass {
        scale: 10.0,
        mpi_over_scale: 0.6,
    }
    .masses();
    assert!(close(masses.mpi, 6.0, 1e-12));
    assert!(close(masses.mq, 10.119008, 1e-6));
}

#[test]
fn cms_relation_sets_the_scale() {
    let masses = MassRelation::Cms { mpi: 20.0 }.masses();
    assert!(close(masses.scale, 35.153937, 1e-6));
    assert_eq!(masses.mq, 10.0);
    assert_eq!(masses.mrho, 20.0);
}

#[test]
fn matt_and_snowmass_agree() {
    let snowmass = MassRelation::Snowmass { scale: 10.0, mpi_over_scale: 0.6 }.masses();
    let matt = MassRelation::Matt { scale: 10.0, mpi_over_scale: 0.6 }.masses();
    assert_eq!(snowmass, matt);
}

#[test]
fn invisible_fractions() {
    assert!(close(rinv_matt(4, 2), 0.666667, 1e-6));
    assert!(close(rinv_matt(5, 1), 0.333333, 1e-6));
    assert!(close(rinv_matt(8, 5), 0.793651, 1e-6));
    assert!(close(rinv_snowmass_overall(1.0), 7.0 / 9.0, 1e-12));
}

#[test]
fn relations_deserialise_by_tag() {
    let relation: MassRelation =
        serde_json::from_str(r#"{"relation": "snowmass", "scale": 10, "mpi_over_scale": 0.6}"#).unwrap();
    assert_eq!(relation, MassRelation::Snowmass { scale: 10.0, mpi_over_scale: 0.6 });
}
