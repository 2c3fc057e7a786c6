use printcost_core::data::materials::*;
use printcost_core::ParameterError;

#[test]
fn test_material_id_display() {
    let id = MaterialId("pla".to_string());
    assert_eq!(id.to_string(), "pla");
}

#[test]
fn test_standard_library_initialization() {
    let library = init_standard_library();
    assert_eq!(library.len(), 3);

    let pla = library.get_material(&MaterialId("pla".to_string())).unwrap();
    assert_eq!(pla.density, 1.24);
    assert_eq!(pla.price_per_kg, 700.0);

    let abs = library.find("ABS").unwrap();
    assert_eq!(abs.density, 1.04);

    let petg = library.find("petg").unwrap();
    assert_eq!(petg.density, 1.27);

    for material in library.get_all_materials() {
        assert!(material.validate().is_ok());
        assert_eq!(material.filament_diameter_mm, DEFAULT_FILAMENT_DIAMETER_MM);
    }
}

#[test]
fn test_find_unknown_material() {
    let library = init_standard_library();
    assert_eq!(
        library.find("Nylon").unwrap_err(),
        ParameterError::UnknownMaterial {
            name: "Nylon".to_string()
        }
    );
}

#[test]
fn test_custom_material_replaces_by_id() {
    let mut library = init_standard_library();
    let mut cheap_pla = MaterialSpec::new("pla", "PLA", 1.24, 450.0);
    cheap_pla.custom = true;
    library.add_material(cheap_pla);

    assert_eq!(library.len(), 3);
    let pla = library.find("pla").unwrap();
    assert_eq!(pla.price_per_kg, 450.0);
    assert!(pla.custom);

    assert!(library.remove_material(&MaterialId("pla".to_string())).is_some());
    assert_eq!(library.len(), 2);
}

#[test]
fn test_material_serde_defaults_diameter() {
    let json = r#"{"id":"tpu","name":"TPU","density":1.21,"price_per_kg":900.0}"#;
    let material: MaterialSpec = serde_json::from_str(json).unwrap();
    assert_eq!(material.filament_diameter_mm, 1.75);
    assert!(!material.custom);
}
