use std::collections::HashSet;

use pkchart::api::ConfigBuilder;
use pkchart::core::FormulaCatalog;

#[test]
fn catalog_lists_formulas_in_menu_order() {
    let keys: Vec<&str> = FormulaCatalog::list()
        .iter()
        .map(|entry| entry.route.key)
        .collect();
    assert_eq!(
        keys,
        vec![
            "route.formulas.singleIVDosing",
            "route.formulas.oralDosingPlasmaTimeCurve",
            "route.formulas.intravenousInfusionAndEffectOfClearance",
            "route.formulas.nonLinearPharmacokinetics",
            "route.formulas.multipleOralDosing",
        ]
    );
}

#[test]
fn catalog_is_stable_across_calls() {
    let first = FormulaCatalog::list();
    let second = FormulaCatalog::list();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn ids_and_paths_are_unique() {
    let ids: HashSet<&str> = FormulaCatalog::descriptors()
        .map(|descriptor| descriptor.id.as_str())
        .collect();
    let paths: HashSet<&str> = FormulaCatalog::list()
        .iter()
        .map(|entry| entry.route.path)
        .collect();
    assert_eq!(ids.len(), FormulaCatalog::list().len());
    assert_eq!(paths.len(), FormulaCatalog::list().len());
}

#[test]
fn every_entry_builds_a_valid_configuration() {
    for entry in FormulaCatalog::list() {
        let config = ConfigBuilder::build(&entry.descriptor, 2).expect("catalog descriptor");
        assert_eq!(
            config.categories().len(),
            entry.descriptor.time_range_length as usize
        );
        assert!(entry.route.path.starts_with("/formulas/"));
        assert!(entry.route.image.ends_with(".png"));
    }
}

#[test]
fn lookup_by_id_and_path_agree() {
    let by_id = FormulaCatalog::find("non-linear-pharmacokinetics").expect("by id");
    let by_path = FormulaCatalog::find_by_path("/formulas/nonLinearPharmacokinetics")
        .expect("by path");
    assert_eq!(by_id, by_path);
    assert_eq!(by_id.descriptor.unit, "mg/mL");
    assert_eq!(by_id.descriptor.y_axis_title, "Concentration (mg/mL)");
    assert!(FormulaCatalog::find("unknown").is_none());
}

#[test]
fn only_the_infusion_formula_disables_the_gradient() {
    let disabled: Vec<&str> = FormulaCatalog::descriptors()
        .filter(|descriptor| !descriptor.gradient_enabled)
        .map(|descriptor| descriptor.id.as_str())
        .collect();
    assert_eq!(disabled, vec!["intravenous-infusion-and-effect-of-clearance"]);
}
