use crate::common::{assert_close, cube};
use printcost_core::data::materials::init_standard_library;
use printcost_core::{
    EstimateRequest, EstimateSource, InfillFraction, LaborCostPolicy, QualityTier, ShellBlend,
};
use printcost_estimator::{
    estimate_cost, CostCalculator, GeometricEstimator, MaterialEstimator, ShellModel,
};
use std::sync::Arc;

fn baseline_request() -> EstimateRequest {
    let library = init_standard_library();
    EstimateRequest::new(
        Arc::new(cube(10.0)),
        QualityTier::Standard.profile(),
        library.find("PLA").unwrap().clone(),
        InfillFraction::from_percent(20).unwrap(),
    )
}

#[tokio::test]
async fn test_cube_pla_standard_twenty_percent() {
    let quote = CostCalculator::geometric()
        .calculate(&baseline_request())
        .await
        .unwrap();

    let split = quote.split.unwrap();
    assert_close(split.total_volume_mm3, 1000.0, 1e-9);
    assert_close(split.surface_area_mm2, 600.0, 1e-9);
    assert_close(split.shell_volume_mm3, 720.0, 1e-9);
    assert_close(split.interior_volume_mm3, 280.0, 1e-9);
    assert_close(quote.material_volume_mm3.unwrap(), 776.0, 1e-9);

    let cost = quote.breakdown;
    assert_close(cost.weight_grams, 0.96224, 1e-9);
    assert_close(cost.material_cost, 0.673568, 1e-9);
    assert_eq!(cost.labor_cost, 50.0);
    assert_close(cost.total_cost, 50.673568, 1e-9);

    let shown = cost.rounded();
    assert_eq!(shown.weight_grams, 0.96);
    assert_eq!(shown.material_cost, 0.67);
    assert_eq!(shown.total_cost, 50.67);

    assert_eq!(quote.source, EstimateSource::Geometric);
    assert_eq!(quote.profile, "standard");
    assert_eq!(quote.material.0, "pla");
    assert!(quote.filament_length_mm.unwrap() > 300.0);
}

#[test]
fn test_sync_and_async_paths_agree() {
    let request = baseline_request();
    let quote = estimate_cost(
        &request,
        Arc::new(LaborCostPolicy::default()),
        ShellBlend::default(),
    )
    .unwrap();
    assert_close(quote.breakdown.total_cost, 50.673568, 1e-9);
}

#[test]
fn test_full_infill_equals_solid_volume() {
    let request = baseline_request();
    let estimator = GeometricEstimator::default();
    let solid = estimator
        .estimate(
            &request.mesh,
            &request.profile,
            &request.material,
            InfillFraction::SOLID,
        )
        .unwrap();

    let split = ShellModel::default().split(1000.0, 600.0, &request.profile);
    let expected = MaterialEstimator::new().weight_grams(
        split.shell_volume_mm3 + split.interior_volume_mm3,
        &request.material,
    );

    assert_eq!(solid.weight_grams, expected);
    assert_close(solid.weight_grams, 1.24, 1e-9);
}

#[test]
fn test_tiered_labor_on_baseline() {
    let mut request = baseline_request();
    request.profile = QualityTier::Dynamic.profile();
    let quote = estimate_cost(&request, Arc::new(LaborCostPolicy::Tiered), ShellBlend::HalfSum)
        .unwrap();
    assert_eq!(quote.breakdown.labor_cost, 65.0);
}
