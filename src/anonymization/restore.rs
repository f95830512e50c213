//! Restore direction of the anonymize/restore round trip
//!
//! Walks a JSON record and replaces placeholders with their originals in
//! every string value, at any nesting depth. Restoration is infallible:
//! placeholders absent from the record are no-ops, an empty mapping returns
//! the record unchanged, and non-string values are never touched.

use crate::anonymization::mapper::SubstitutionMap;
use serde_json::Value;

/// Restore every masked string inside `record`.
///
/// Object keys are left alone; only string values are rewritten.
pub fn restore_record(record: Value, mapping: &SubstitutionMap) -> Value {
    if mapping.is_empty() {
        return record;
    }

    match record {
        Value::String(s) => Value::String(mapping.unmask(&s)),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| restore_record(item, mapping))
                .collect(),
        ),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k, restore_record(v, mapping)))
                .collect(),
        ),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mapping() -> SubstitutionMap {
        let mut map = SubstitutionMap::new();
        map.insert("MARÍA GONZÁLEZ LÓPEZ".into(), "SANDRA MILENA OSORIO".into());
        map.insert("usuario123@ejemplo.com".into(), "real@correo.com".into());
        map
    }

    #[test]
    fn test_restores_nested_strings() {
        let record = json!({
            "respuesta": "La señora MARÍA GONZÁLEZ LÓPEZ fue notificada.",
            "detalle": {
                "contacto": ["usuario123@ejemplo.com", "sin cambios"]
            }
        });

        let restored = restore_record(record, &mapping());
        assert_eq!(
            restored["respuesta"],
            json!("La señora SANDRA MILENA OSORIO fue notificada.")
        );
        assert_eq!(restored["detalle"]["contacto"][0], json!("real@correo.com"));
        assert_eq!(restored["detalle"]["contacto"][1], json!("sin cambios"));
    }

    #[test]
    fn test_non_string_values_untouched() {
        let record = json!({ "n": 7, "ok": true, "nada": null });
        assert_eq!(restore_record(record.clone(), &mapping()), record);
    }

    #[test]
    fn test_unmapped_placeholders_are_noops() {
        let record = json!("texto sin marcadores");
        assert_eq!(restore_record(record.clone(), &mapping()), record);
    }

    #[test]
    fn test_empty_mapping_is_identity() {
        let record = json!({ "x": "MARÍA GONZÁLEZ LÓPEZ" });
        let empty = SubstitutionMap::new();
        assert_eq!(restore_record(record.clone(), &empty), record);
    }

    #[test]
    fn test_keys_are_not_rewritten() {
        let record = json!({ "MARÍA GONZÁLEZ LÓPEZ": "valor" });
        let restored = restore_record(record, &mapping());
        assert!(restored.get("MARÍA GONZÁLEZ LÓPEZ").is_some());
    }
}
