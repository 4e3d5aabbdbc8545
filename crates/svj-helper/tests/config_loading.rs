use std::fs;

use svj_helper::{load_model, ModelConfig, ModelHelper};

const SNOWMASS_YAML: &str = r#"
channel: s
mmed: 1000
Nc: 3
Nf: 3
pvector: 0.5
rinv: 0.3333333333333333
spectrum: snowmass
masses:
  relation: snowmass
  scale: 10
  mpi_over_scale: 0.6
"#;

const CMS_YAML: &str = r#"
mmed: 1000
Nc: 2
Nf: 2
scale: 35.15393738579578
mq: 10
mpi: 20
pvector: 0.75
rinv: 0.3
spectrum: cms
"#;

#[test]
fn relations_fill_missing_masses() {
    let params = ModelConfig::from_yaml(SNOWMASS_YAML).unwrap().resolve().unwrap();
    assert_eq!(params.scale, 10.0);
    assert!((params.mpi - 6.0).abs() < 1e-12);
    assert!((params.mq - 10.119008).abs() < 1e-6);
    assert!((params.vector_mass() - 25.0998).abs() < 1e-4);
    let helper = ModelHelper::new(params).unwrap();
    assert!(helper.name().starts_with("s-channel_mmed-1000_Nc-3_Nf-3_scale-10_mq-10.119_mpi-6_mrho-25.0998"));
}

#[test]
fn explicit_masses_take_precedence() {
    let text = format!("{SNOWMASS_YAML}mq: 12.5\n");
    let params = ModelConfig::from_yaml(&text).unwrap().resolve().unwrap();
    assert_eq!(params.mq, 12.5);
}

#[test]
fn defaults_apply_to_plain_configs() {
    let config = ModelConfig::from_yaml(CMS_YAML).unwrap();
    assert_eq!(config.channel, "s");
    let params = config.resolve().unwrap();
    assert_eq!(params.mrho, None);
    assert_eq!(params.ns, 0);
    assert_eq!(params.rho_invisible_partner, 53);
}

#[test]
fn missing_masses_are_reported() {
    let text = CMS_YAML.replace("mq: 10\n", "");
    let err = ModelConfig::from_yaml(&text).unwrap().resolve().unwrap_err();
    assert_eq!(err.code(), "missing-mass");
    assert_eq!(err.info().context.get("field").map(String::as_str), Some("mq"));
}

#[test]
fn malformed_yaml_is_a_serde_error() {
    let err = ModelConfig::from_yaml("mmed: [1000").unwrap_err();
    assert_eq!(err.code(), "config-parse");
}

#[test]
fn models_load_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model_cms.yaml");
    fs::write(&path, CMS_YAML).unwrap();
    let params = load_model(&path).unwrap();
    assert_eq!(params.spectrum, "cms");

    let err = load_model(&dir.path().join("absent.yaml")).unwrap_err();
    assert_eq!(err.code(), "config-read");
}
