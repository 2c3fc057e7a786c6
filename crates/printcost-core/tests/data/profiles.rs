use printcost_core::data::profiles::*;
use printcost_core::ParameterError;

#[test]
fn test_standard_profile_values() {
    let standard = QualityTier::Standard.profile();
    assert_eq!(standard.name, "standard");
    assert_eq!(standard.layer_height, 0.20);
    assert_eq!(standard.wall_count, 2);
    assert_eq!(standard.line_width, 0.4);
    assert_eq!(standard.top_layers, 4);
    assert_eq!(standard.bottom_layers, 4);
    assert!((standard.wall_thickness() - 0.8).abs() < 1e-12);
    assert!((standard.top_thickness() - 0.8).abs() < 1e-12);
    assert!((standard.bottom_thickness() - 0.8).abs() < 1e-12);
}

#[test]
fn test_tiers_get_finer() {
    let heights: Vec<f64> = QualityTier::ALL
        .iter()
        .map(|t| t.profile().layer_height)
        .collect();
    assert!(heights.windows(2).all(|w| w[0] > w[1]));

    for tier in QualityTier::ALL {
        assert!(tier.profile().validate().is_ok());
    }
}

#[test]
fn test_tier_parsing() {
    assert_eq!("Super".parse::<QualityTier>().unwrap(), QualityTier::Super);
    assert_eq!(" low ".parse::<QualityTier>().unwrap(), QualityTier::Low);
    assert!("ultra".parse::<QualityTier>().is_err());
    assert_eq!(QualityTier::Dynamic.to_string(), "dynamic");
}

#[test]
fn test_profile_validation() {
    let mut profile = PrintProfile::default();
    profile.wall_count = 0;
    assert_eq!(profile.validate(), Err(ParameterError::ZeroWallCount));

    let mut profile = PrintProfile::default();
    profile.layer_height = 0.0;
    assert!(matches!(
        profile.validate(),
        Err(ParameterError::InvalidLayerHeight { .. })
    ));

    let mut profile = PrintProfile::default();
    profile.line_width = -0.4;
    assert!(matches!(
        profile.validate(),
        Err(ParameterError::InvalidLineWidth { .. })
    ));
}

#[test]
fn test_profile_library() {
    let mut library = ProfileLibrary::standard();
    assert_eq!(library.len(), 4);
    assert_eq!(library.find("dynamic").unwrap().layer_height, 0.16);

    let mut custom = QualityTier::Standard.profile();
    custom.wall_count = 3;
    library.set(QualityTier::Standard, custom);
    assert_eq!(library.get(QualityTier::Standard).unwrap().wall_count, 3);
    assert_eq!(library.len(), 4);
}

#[test]
fn test_shell_blend_divisor() {
    assert_eq!(ShellBlend::default(), ShellBlend::HalfSum);
    assert_eq!(ShellBlend::HalfSum.divisor(), 2.0);
    assert_eq!(ShellBlend::ThirdSum.divisor(), 3.0);
}
