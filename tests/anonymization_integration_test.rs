//! End-to-end anonymization tests over realistic judicial text

use velo::anonymization::{
    restore, AnonymizationConfig, AnonymizationEngine, PiiCategory, SubstitutionMap,
};

fn engine() -> AnonymizationEngine {
    AnonymizationEngine::new(AnonymizationConfig::default()).unwrap()
}

const ACTA: &str = "ACTA DE AUDIENCIA. Radicado 11001-60-00000-2024-00123-00. \
Compareció RODRÍGUEZ VILLA, CARLOS ANDRÉS, identificado con C.C. 1.234.567.890. \
Celular: 300 123 4567. Correo: notificaciones@despacho.com. \
Dirección: Carrera 15 #45-67 Apto 301. \
Abogado: PÉREZ MORA, JULIÁN con Tarjeta Profesional: 123456, \
ante el JUZGADO PRIMERO PENAL DEL CIRCUITO DE TUNJA.";

#[test]
fn test_full_document_round_trip() {
    let engine = engine();
    let result = engine.anonymize(ACTA).unwrap();

    assert!(result.has_matches());
    let restored = engine.restore_text(&result.masked_text, &result.mapping);
    assert_eq!(restored, ACTA);
}

#[test]
fn test_masked_text_leaks_no_original_values() {
    let engine = engine();
    let result = engine.anonymize(ACTA).unwrap();

    let originals = [
        "11001-60-00000-2024-00123-00",
        "RODRÍGUEZ VILLA, CARLOS ANDRÉS",
        "1.234.567.890",
        "300 123 4567",
        "notificaciones@despacho.com",
        "Carrera 15 #45-67",
        "PÉREZ MORA, JULIÁN",
        "JUZGADO PRIMERO PENAL DEL CIRCUITO DE TUNJA",
    ];
    for original in originals {
        assert!(
            !result.masked_text.contains(original),
            "leaked: {original}"
        );
    }
}

#[test]
fn test_all_expected_categories_detected() {
    let engine = engine();
    let result = engine.anonymize(ACTA).unwrap();

    for category in [
        PiiCategory::Identity,
        PiiCategory::Mobile,
        PiiCategory::Email,
        PiiCategory::Address,
        PiiCategory::ProfessionalRegistry,
        PiiCategory::Docket,
        PiiCategory::PersonName,
        PiiCategory::Institution,
    ] {
        assert!(
            result.stats_by_category.get(&category).copied().unwrap_or(0) > 0,
            "no detections for {category}"
        );
    }
}

#[test]
fn test_placeholders_preserve_value_shapes() {
    let engine = engine();
    let result = engine.anonymize(ACTA).unwrap();
    let placeholder = |original: &str| {
        result
            .mapping
            .placeholder_for(original)
            .unwrap_or_else(|| panic!("no placeholder for {original}"))
            .to_string()
    };

    // Dotted cédula keeps label, dots and digit grouping.
    let id = placeholder("C.C. 1.234.567.890");
    assert!(regex::Regex::new(r"^C\.C\. \d\.\d{3}\.\d{3}\.\d{3}$")
        .unwrap()
        .is_match(&id));

    // Mobile keeps the 3-3-4 space grouping and a plausible prefix.
    let mobile = placeholder("300 123 4567");
    assert!(regex::Regex::new(r"^3\d{2} \d{3} \d{4}$")
        .unwrap()
        .is_match(&mobile));

    // Judicial-order name stays uppercase with the comma.
    let name = placeholder("RODRÍGUEZ VILLA, CARLOS ANDRÉS");
    assert!(name.contains(','));
    assert!(name
        .chars()
        .filter(|c| c.is_alphabetic())
        .all(char::is_uppercase));

    // Canonical docket keeps its dash segment lengths.
    let docket = placeholder("11001-60-00000-2024-00123-00");
    let lens: Vec<usize> = docket.split('-').map(str::len).collect();
    assert_eq!(lens, vec![5, 2, 5, 4, 5, 2]);

    // Email becomes a synthetic user at a decoy domain.
    let email = placeholder("notificaciones@despacho.com");
    assert!(email.contains('@'));
    assert_ne!(email, "notificaciones@despacho.com");
}

#[test]
fn test_repeated_value_masks_to_single_placeholder() {
    let engine = engine();
    let text = "Primera mención C.C. 1.234.567.890, segunda C.C. 1.234.567.890 \
                y tercera C.C. 1.234.567.890 en el acta.";
    let result = engine.anonymize(text).unwrap();

    let placeholder = result
        .mapping
        .placeholder_for("C.C. 1.234.567.890")
        .unwrap();
    assert_eq!(result.masked_text.matches(placeholder).count(), 3);
    assert_eq!(engine.restore_text(&result.masked_text, &result.mapping), text);
}

#[test]
fn test_restore_walks_nested_json_response() {
    let engine = engine();
    let result = engine.anonymize(ACTA).unwrap();

    let response = serde_json::json!({
        "resumen": result.masked_text,
        "fragmentos": [result.masked_text, "sin marcadores"],
        "detalle": { "texto": result.masked_text, "score": 0.93 }
    });
    let restored = restore(response, &result.mapping);

    assert_eq!(restored["resumen"], serde_json::json!(ACTA));
    assert_eq!(restored["fragmentos"][0], serde_json::json!(ACTA));
    assert_eq!(restored["fragmentos"][1], serde_json::json!("sin marcadores"));
    assert_eq!(restored["detalle"]["texto"], serde_json::json!(ACTA));
    assert_eq!(restored["detalle"]["score"], serde_json::json!(0.93));
}

#[test]
fn test_mapping_survives_json_serialization() {
    let engine = engine();
    let result = engine.anonymize(ACTA).unwrap();

    let json = serde_json::to_string(&result.mapping).unwrap();
    let reloaded: SubstitutionMap = serde_json::from_str(&json).unwrap();

    assert_eq!(reloaded.len(), result.mapping.len());
    assert_eq!(reloaded.unmask(&result.masked_text), ACTA);
}

#[test]
fn test_dry_run_reports_without_substituting() {
    let config = AnonymizationConfig {
        dry_run: true,
        ..Default::default()
    };
    let engine = AnonymizationEngine::new(config).unwrap();

    let result = engine.anonymize(ACTA).unwrap();
    assert_eq!(result.masked_text, ACTA);
    assert!(result.mapping.is_empty());
    assert!(result.total_matches() > 0);
}

#[test]
fn test_concurrent_calls_are_independent() {
    let engine = std::sync::Arc::new(engine());
    let text_a = "Contacto: primero@correo.com y celular 3001234567.";
    let text_b = "Contacto: segundo@correo.com y celular 3109876543.";

    let a = {
        let engine = engine.clone();
        std::thread::spawn(move || engine.anonymize(text_a).unwrap())
    };
    let b = {
        let engine = engine.clone();
        std::thread::spawn(move || engine.anonymize(text_b).unwrap())
    };

    let result_a = a.join().unwrap();
    let result_b = b.join().unwrap();

    assert_eq!(engine.restore_text(&result_a.masked_text, &result_a.mapping), text_a);
    assert_eq!(engine.restore_text(&result_b.masked_text, &result_b.mapping), text_b);
    assert!(result_a.mapping.placeholder_for("segundo@correo.com").is_none());
}
