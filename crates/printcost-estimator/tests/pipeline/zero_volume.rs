use crate::common::cube;
use printcost_core::{
    EstimateRequest, InfillFraction, LaborCostPolicy, MaterialSpec, Mesh, Point3D, QualityTier,
    Triangle,
};
use printcost_estimator::{CostCalculator, GeometricEstimator, PricingEngine};
use std::sync::Arc;

fn request(mesh: Mesh) -> EstimateRequest {
    EstimateRequest::new(
        Arc::new(mesh),
        QualityTier::Low.profile(),
        MaterialSpec::new("abs", "ABS", 1.04, 700.0),
        InfillFraction::SOLID,
    )
}

fn flat_square() -> Mesh {
    let p = |x, y| Point3D::new(x, y, 0.0);
    Mesh::new(vec![
        Triangle::new(p(0.0, 0.0), p(5.0, 0.0), p(5.0, 5.0)),
        Triangle::new(p(0.0, 0.0), p(5.0, 5.0), p(0.0, 5.0)),
        Triangle::new(p(0.0, 0.0), p(5.0, 5.0), p(5.0, 0.0)),
        Triangle::new(p(0.0, 0.0), p(0.0, 5.0), p(5.0, 5.0)),
    ])
}

#[tokio::test]
async fn test_empty_and_flat_meshes_cost_labor_only() {
    let calculator = CostCalculator::new(
        Arc::new(GeometricEstimator::default()),
        PricingEngine::with_policy(LaborCostPolicy::Tiered),
    );

    for mesh in [Mesh::default(), flat_square(), cube(0.0)] {
        let quote = calculator.calculate(&request(mesh)).await.unwrap();
        let cost = quote.breakdown;
        assert_eq!(cost.weight_grams, 0.0);
        assert_eq!(cost.material_cost, 0.0);
        assert_eq!(cost.labor_cost, 40.0);
        assert_eq!(cost.total_cost, 40.0);
        assert!(!cost.total_cost.is_nan());
    }
}
