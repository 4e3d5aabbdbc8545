use std::io::Write;

use svj_core::ModelParams;
use svj_helper::ModelHelper;

fn snowmass_helper() -> ModelHelper {
    ModelHelper::new(ModelParams {
        channel: "s".into(),
        mmed: 1000.0,
        nc: 3,
        nf: 3,
        ns: 0,
        scale: 10.0,
        mq: 10.119,
        mpi: 6.0,
        mrho: Some(25.0998),
        pvector: 0.5,
        rinv: Some(1.0 / 3.0),
        spectrum: "snowmass".into(),
        rho_invisible_partner: 53,
    })
    .unwrap()
}

const CARD: &str = "module Merger EnergyFractions {\n$HVEnergyFractions\n}\nmodule PdgCodeFilter NeutrinoFilter {\n${HVNuFilter}\n}\nmodule PdgCodeFilter DarkHadrons {\n$HVDarkHadronFilter\n}\nset Cost $$5 $Unrelated\n";

#[test]
fn substitutions_cover_each_placeholder() {
    let helper = snowmass_helper();
    let subs = helper.filter_substitutions();
    assert_eq!(subs.len(), 3);
    assert_eq!(
        subs["HVEnergyFractions"],
        "  add EnergyFraction {51} {0}\n  add EnergyFraction {52} {0}\n  add EnergyFraction {53} {0}\n  add EnergyFraction {4900211} {0}"
    );
    let nu: Vec<_> = subs["HVNuFilter"].lines().collect();
    assert_eq!(nu.len(), 8);
    assert_eq!(nu[0], "  add PdgCode {51}");
    assert_eq!(nu[1], "  add PdgCode {-51}");
    assert_eq!(
        subs["HVDarkHadronFilter"],
        "  add PdgCode {4900111}\n  add PdgCode {-4900111}\n  add PdgCode {4900211}\n  add PdgCode {-4900211}"
    );
}

#[test]
fn card_is_filled_and_unknowns_survive() {
    let helper = snowmass_helper();
    let filled = helper.detector_settings(CARD);
    assert!(filled.contains("module Merger EnergyFractions {\n  add EnergyFraction {51} {0}\n"));
    assert!(filled.contains("  add PdgCode {-4900211}\n}\nmodule PdgCodeFilter DarkHadrons"));
    assert!(filled.ends_with("set Cost $5 $Unrelated\n"));
    assert!(!filled.contains("$HV"));
}

#[test]
fn card_is_read_from_disk() {
    let helper = snowmass_helper();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CARD.as_bytes()).unwrap();
    let filled = helper.detector_settings_from_file(file.path()).unwrap();
    assert_eq!(filled, helper.detector_settings(CARD));

    let dir = tempfile::tempdir().unwrap();
    let err = helper
        .detector_settings_from_file(&dir.path().join("missing.tcl"))
        .unwrap_err();
    assert_eq!(err.code(), "template-read");
}
