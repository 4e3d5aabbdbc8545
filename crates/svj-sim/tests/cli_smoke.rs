use std::fs;
use std::process::Command;

const MODEL: &str = "channel: s\nmmed: 1000\nNc: 2\nNf: 2\nscale: 35.15393738579578\nmq: 10\nmpi: 20\nmrho: 20\npvector: 0.75\nrinv: 0.3\nspectrum: cms\n";

fn svj_sim() -> Command {
    Command::new(env!("CARGO_BIN_EXE_svj-sim"))
}

#[test]
fn name_prints_the_canonical_model_name() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("model_cms.yaml");
    fs::write(&config, MODEL).unwrap();
    let output = svj_sim()
        .args(["name", "--config"])
        .arg(&config)
        .output()
        .expect("run svj-sim name");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap().trim(),
        "s-channel_mmed-1000_Nc-2_Nf-2_scale-35.1539_mq-10_mpi-20_mrho-20_pvector-0.75_spectrum-cms_rinv-0.3"
    );
}

#[test]
fn settings_and_cards_are_written_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("model_cms.yaml");
    fs::write(&config, MODEL).unwrap();
    let template = dir.path().join("card.tcl");
    fs::write(&template, "$HVDarkHadronFilter\n").unwrap();

    let settings = dir.path().join("out/settings.cmnd");
    let status = svj_sim()
        .args(["settings", "--config"])
        .arg(&config)
        .arg("--out")
        .arg(&settings)
        .status()
        .expect("run svj-sim settings");
    assert!(status.success());
    let text = fs::read_to_string(&settings).unwrap();
    assert!(text.starts_with("HiddenValley:ffbar2Zv = on\n"));
    assert!(text.contains("HiddenValley:Ngauge = 2\n"));

    let card = dir.path().join("out/card.tcl");
    let status = svj_sim()
        .args(["delphes", "--config"])
        .arg(&config)
        .arg("--template")
        .arg(&template)
        .arg("--out")
        .arg(&card)
        .status()
        .expect("run svj-sim delphes");
    assert!(status.success());
    let filled = fs::read_to_string(&card).unwrap();
    assert!(filled.starts_with("  add PdgCode {4900111}\n  add PdgCode {-4900111}\n"));
}

#[test]
fn invalid_models_fail() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("model_bad.yaml");
    fs::write(&config, MODEL.replace("rinv: 0.3", "rinv: 1.5")).unwrap();
    let output = svj_sim()
        .args(["ids", "--config"])
        .arg(&config)
        .output()
        .expect("run svj-sim ids");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("rinv 1.5 not allowed"));
}
