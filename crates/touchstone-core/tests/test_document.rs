//! Document mutator tests
//!
//! Loosely typed assignments as a dynamic caller (wasm, JSON) makes them.

use serde_json::{json, Value};
use touchstone_core::{ParameterType, Resistance, Touchstone, TouchstoneFormat};

fn message<T: std::fmt::Debug>(result: Result<T, touchstone_core::TouchstoneError>) -> String {
    result.unwrap_err().to_string()
}

#[test]
fn test_format_value() {
    let mut ts = Touchstone::new();
    assert_eq!(ts.format(), None);

    assert_eq!(
        message(ts.set_format_value(Some(&json!(0)))),
        "Unknown Touchstone format: 0"
    );
    assert_eq!(
        message(ts.set_format_value(Some(&json!([])))),
        "Unknown Touchstone format: "
    );
    assert_eq!(
        message(ts.set_format_value(Some(&json!({})))),
        "Unknown Touchstone format: [object Object]"
    );
    assert_eq!(
        message(ts.set_format_value(Some(&json!("z")))),
        "Unknown Touchstone format: z"
    );

    for format in TouchstoneFormat::ALL {
        let lower = json!(format.as_str().to_lowercase());
        ts.set_format_value(Some(&lower)).unwrap();
        assert_eq!(ts.format(), Some(format));
    }

    for unset in [None, Some(&Value::Null)] {
        ts.set_format(Some(TouchstoneFormat::RI));
        ts.set_format_value(unset).unwrap();
        assert_eq!(ts.format(), None);
    }
}

#[test]
fn test_failed_assignment_keeps_previous_value() {
    let mut ts = Touchstone::new();
    ts.set_format(Some(TouchstoneFormat::DB));
    assert!(ts.set_format_value(Some(&json!("xx"))).is_err());
    assert_eq!(ts.format(), Some(TouchstoneFormat::DB));

    ts.set_nports(Some(4)).unwrap();
    assert!(ts.set_nports_value(Some(&json!(2.5))).is_err());
    assert_eq!(ts.nports(), Some(4));

    ts.set_resistance_value(Some(&json!([10, 25]))).unwrap();
    assert!(ts.set_resistance_value(None).is_err());
    assert_eq!(ts.resistance(), &Resistance::PerPort(vec![10.0, 25.0]));
}

#[test]
fn test_parameter_value() {
    let mut ts = Touchstone::new();
    assert_eq!(ts.parameter(), None);

    assert_eq!(
        message(ts.set_parameter_value(Some(&json!(0)))),
        "Unknown Touchstone paramter: 0"
    );
    assert_eq!(
        message(ts.set_parameter_value(Some(&json!([])))),
        "Unknown Touchstone paramter: "
    );
    assert_eq!(
        message(ts.set_parameter_value(Some(&json!({})))),
        "Unknown Touchstone paramter: [object Object]"
    );
    assert_eq!(
        message(ts.set_parameter_value(Some(&json!("x")))),
        "Unknown Touchstone paramter: x"
    );

    for parameter in ParameterType::ALL {
        let lower = json!(parameter.as_str().to_lowercase());
        ts.set_parameter_value(Some(&lower)).unwrap();
        assert_eq!(ts.parameter(), Some(parameter));
    }

    for unset in [None, Some(&Value::Null)] {
        ts.set_parameter(Some(ParameterType::Z));
        ts.set_parameter_value(unset).unwrap();
        assert_eq!(ts.parameter(), None);
    }
}

#[test]
fn test_resistance_value() {
    let mut ts = Touchstone::new();
    assert_eq!(ts.resistance(), &Resistance::Single(50.0));

    assert_eq!(
        message(ts.set_resistance_value(Some(&json!("a")))),
        "Unknown Touchstone impedance: a"
    );
    assert_eq!(
        message(ts.set_resistance_value(Some(&json!([50, "a"])))),
        "Unknown Touchstone impedance: 50,a"
    );
    assert_eq!(
        message(ts.set_resistance_value(Some(&json!([])))),
        "Unknown Touchstone impedance: "
    );
    assert_eq!(
        message(ts.set_resistance_value(Some(&json!({})))),
        "Unknown Touchstone impedance: [object Object]"
    );

    let accepted = [
        (json!(0), Resistance::Single(0.0)),
        (json!(10.5), Resistance::Single(10.5)),
        (json!(50), Resistance::Single(50.0)),
        (json!([10]), Resistance::Single(10.0)),
        (json!([10, 25]), Resistance::PerPort(vec![10.0, 25.0])),
        (json!([30, 67.1, 80.9]), Resistance::PerPort(vec![30.0, 67.1, 80.9])),
    ];
    for (value, expected) in accepted {
        ts.set_resistance_value(Some(&value)).unwrap();
        assert_eq!(ts.resistance(), &expected);
    }

    // Unlike the other fields, the resistance cannot be cleared
    assert_eq!(
        message(ts.set_resistance_value(None)),
        "Unknown Touchstone impedance: undefined"
    );
    assert_eq!(
        message(ts.set_resistance_value(Some(&Value::Null))),
        "Unknown Touchstone impedance: null"
    );
}

#[test]
fn test_typed_resistance_is_validated() {
    let mut ts = Touchstone::new();
    assert_eq!(
        message(ts.set_resistance(Resistance::PerPort(Vec::new()))),
        "Unknown Touchstone impedance: "
    );
    assert!(ts.set_resistance(Resistance::Single(f64::NAN)).is_err());
    assert_eq!(ts.resistance(), &Resistance::Single(50.0));
}

#[test]
fn test_nports_value() {
    let mut ts = Touchstone::new();
    assert_eq!(ts.nports(), None);

    let rejected = [
        (json!("a"), "Unknown ports number: a"),
        (json!([50, "a"]), "Unknown ports number: 50,a"),
        (json!([]), "Unknown ports number: "),
        (json!({}), "Unknown ports number: [object Object]"),
        (json!(1.3), "Unknown ports number: 1.3"),
        (json!(0), "Unknown ports number: 0"),
        (json!(-5), "Unknown ports number: -5"),
    ];
    for (value, expected) in rejected {
        assert_eq!(message(ts.set_nports_value(Some(&value))), expected);
    }

    for nports in [1, 6, 13, 50] {
        ts.set_nports_value(Some(&json!(nports))).unwrap();
        assert_eq!(ts.nports(), Some(nports));
    }

    for unset in [None, Some(&Value::Null)] {
        ts.set_nports(Some(2)).unwrap();
        ts.set_nports_value(unset).unwrap();
        assert_eq!(ts.nports(), None);
    }
}

#[test]
fn test_document_serializes_header_as_json() {
    let ts = Touchstone::from_str("! note\n# kHz Z RI R 50 75\n1 1 0 0 0 0 0 1 0", 2).unwrap();
    let header = json!({
        "format": ts.format(),
        "parameter": ts.parameter(),
        "resistance": ts.resistance(),
        "frequency": ts.frequency(),
    });
    assert_eq!(header["format"], "RI");
    assert_eq!(header["parameter"], "Z");
    assert_eq!(header["resistance"], json!([50.0, 75.0]));
    assert_eq!(header["frequency"]["unit"], "kHz");
    assert_eq!(header["frequency"]["value"], json!([1.0]));
}
