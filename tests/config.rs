use std::io::Write;

use bet_advisor::{AdviceRequest, Advisor, AdvisorConfig, RivalStyle};

#[test]
fn partial_config_file_keeps_defaults() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, r#"{{ "trials": 64, "multipliers": [0.33, 0.66] }}"#)?;

    let config = AdvisorConfig::from_path(file.path())?;
    assert_eq!(config.trials, 64);
    assert_eq!(config.multipliers, vec![0.33, 0.66]);
    assert_eq!(config.seed, None);
    assert!(!config.no_color);
    Ok(())
}

#[test]
fn malformed_config_names_the_file() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, "trials = 64")?;

    let err = AdvisorConfig::from_path(file.path()).unwrap_err();
    assert!(format!("{err}").contains("parsing config"));
    Ok(())
}

#[test]
fn configured_multipliers_drive_the_plan() {
    let mut advisor = Advisor::new(AdvisorConfig {
        trials: 100,
        multipliers: vec![0.33, 0.66, 1.5],
        seed: Some(12),
        no_color: true,
    });
    let advice = advisor
        .advise(&AdviceRequest {
            hand: "Kc Kd".to_string(),
            board: "Ks 7h 2d".to_string(),
            pot: 12.0,
            bet: 6.0,
            street: None,
            in_position: false,
            profile: RivalStyle::Station,
        })
        .expect("valid request");

    let sizes: Vec<f64> = advice.plan.evaluations.iter().map(|e| e.multiplier).collect();
    assert_eq!(sizes, vec![0.33, 0.66, 1.5]);
    // top set against a calling station: the largest size wins
    assert_eq!(advice.plan.best_multiplier, 1.5);
}
