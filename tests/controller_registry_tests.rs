use std::sync::Arc;
use std::thread;

use pkchart::ChartError;
use pkchart::api::{ControllerRegistry, DisplaySettings, SharedPrecisionController};
use pkchart::core::{FormulaCatalog, FormulaDescriptor};

#[test]
fn controllers_are_created_lazily_on_first_access() {
    let mut registry = ControllerRegistry::from_catalog();
    assert_eq!(registry.active_ids().count(), 0);
    assert_eq!(registry.formula_ids().count(), FormulaCatalog::list().len());

    registry
        .controller("multiple-oral-dosing")
        .expect("catalog formula");
    let active: Vec<&str> = registry.active_ids().collect();
    assert_eq!(active, vec!["multiple-oral-dosing"]);
}

#[test]
fn controller_state_survives_repeated_access() {
    let mut registry = ControllerRegistry::default();
    let first_categories = Arc::clone(
        registry
            .controller("single-iv-dosing")
            .expect("controller")
            .configuration()
            .categories(),
    );
    registry
        .controller("single-iv-dosing")
        .expect("controller")
        .set_precision(4)
        .expect("precision change");

    let controller = registry.get("single-iv-dosing").expect("active controller");
    assert_eq!(controller.precision().digits(), 4);
    assert!(Arc::ptr_eq(
        &first_categories,
        controller.configuration().categories()
    ));
}

#[test]
fn views_for_different_formulas_do_not_share_precision() {
    let mut registry = ControllerRegistry::from_catalog();
    registry
        .controller("single-iv-dosing")
        .expect("controller")
        .set_precision(0)
        .expect("precision change");

    let other = registry
        .controller("non-linear-pharmacokinetics")
        .expect("controller");
    assert_eq!(other.precision().digits(), 2);
}

#[test]
fn route_paths_resolve_to_controllers() {
    let mut registry = ControllerRegistry::from_catalog();
    let controller = registry
        .controller_for_path("/formulas/oralDosingPlasmaTimeCurve")
        .expect("controller");
    assert_eq!(controller.descriptor().id, "oral-dosing-plasma-time-curve");

    assert!(matches!(
        registry.controller_for_path("/formulas/unknown"),
        Err(ChartError::UnknownFormula(_))
    ));
}

#[test]
fn unknown_formulas_and_duplicates_are_reported() {
    let mut registry = ControllerRegistry::empty();
    assert!(matches!(
        registry.controller("single-iv-dosing"),
        Err(ChartError::UnknownFormula(_))
    ));

    let descriptor = FormulaDescriptor::new("custom", "Concentration (ng/mL)", "ng/mL", "custom");
    registry
        .register_descriptor(descriptor.clone())
        .expect("register");
    assert!(matches!(
        registry.register_descriptor(descriptor),
        Err(ChartError::InvalidArgument(_))
    ));
    let controller = registry.controller("custom").expect("custom controller");
    assert_eq!(
        controller
            .configuration()
            .tooltip_value_formatter()
            .format(1.5),
        "1.50 ng/mL"
    );
}

#[test]
fn registered_descriptors_resolve_by_path() {
    let mut registry = ControllerRegistry::from_catalog();
    let descriptor = FormulaDescriptor::new("custom", "Concentration (ng/mL)", "ng/mL", "custom");
    registry
        .register_descriptor_at(descriptor.clone(), "/formulas/custom")
        .expect("register");

    let controller = registry
        .controller_for_path("/formulas/custom")
        .expect("controller");
    assert_eq!(controller.descriptor().id, "custom");

    let other = FormulaDescriptor::new("other", "Concentration (ng/mL)", "ng/mL", "other");
    assert!(matches!(
        registry.register_descriptor_at(other, "/formulas/multipleOralDosing"),
        Err(ChartError::InvalidArgument(_))
    ));
    assert!(!registry.formula_ids().any(|id| id == "other"));
    assert!(matches!(
        registry.register_descriptor_at(descriptor, "/formulas/custom-again"),
        Err(ChartError::InvalidArgument(_))
    ));
    assert!(matches!(
        registry.controller_for_path("/formulas/custom-again"),
        Err(ChartError::UnknownFormula(_))
    ));
}

#[test]
fn registry_settings_seed_new_controllers() {
    let mut registry = ControllerRegistry::from_catalog()
        .with_settings(DisplaySettings::default().with_default_precision(3))
        .expect("settings");
    let controller = registry.controller("single-iv-dosing").expect("controller");
    assert_eq!(controller.precision().digits(), 3);
}

#[test]
fn released_views_start_over() {
    let mut registry = ControllerRegistry::from_catalog();
    registry
        .controller("single-iv-dosing")
        .expect("controller")
        .set_precision(6)
        .expect("precision change");

    assert!(registry.release("single-iv-dosing"));
    assert!(!registry.release("single-iv-dosing"));
    let controller = registry.controller("single-iv-dosing").expect("controller");
    assert_eq!(controller.precision().digits(), 2);
}

#[test]
fn shared_controller_serializes_concurrent_precision_changes() {
    let entry = FormulaCatalog::find("single-iv-dosing").expect("entry");
    let shared = SharedPrecisionController::initialize(entry.descriptor.clone())
        .expect("shared controller");

    let handles: Vec<_> = (0..8_i64)
        .map(|precision| {
            let shared = shared.clone();
            thread::spawn(move || shared.set_precision(precision).map(|_| ()))
        })
        .collect();
    for handle in handles {
        handle
            .join()
            .expect("thread join")
            .expect("precision change");
    }

    let precision = shared.precision().expect("precision");
    let config = shared.configuration().expect("configuration");
    let y_label = config.y_axis_label_formatter().format(1.0);
    let tooltip = config.tooltip_value_formatter().format(1.0);
    assert_eq!(tooltip, format!("{y_label} mg/L"));
    assert_eq!(
        y_label.split_once('.').map_or(0, |(_, fraction)| fraction.len()),
        usize::from(precision.digits())
    );
    let revision = shared
        .with_controller(|controller| controller.formatter_revision())
        .expect("revision");
    assert_eq!(revision, 8);
}

#[test]
fn shared_controller_rejects_negative_precision() {
    let entry = FormulaCatalog::find("single-iv-dosing").expect("entry");
    let shared = SharedPrecisionController::initialize(entry.descriptor.clone())
        .expect("shared controller");
    assert!(matches!(
        shared.set_precision(-1),
        Err(ChartError::InvalidArgument(_))
    ));
    assert_eq!(shared.precision().expect("precision").digits(), 2);
}
