//! Stored procedure invocation
//!
//! Form input is coerced per the declared parameter type, then bound
//! positionally into an `EXEC name @P1, ..., @Pn` statement. Values always
//! travel as bound placeholders, never interpolated into the statement text.

use crate::catalog::{ParamType, ProcedureDescriptor};
use crate::config::DbConfig;
use crate::db::{connect, ConnectError};
use std::borrow::Cow;
use thiserror::Error;
use tiberius::{ColumnData, ToSql};

/// Why a submit did not go through.
///
/// The form collapses every variant into one generic status line; the
/// distinction exists so callers (and tests) can tell whether a remote call
/// was ever attempted.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("parameter {name} is not an integer: {raw:?}")]
    BadParameter { name: String, raw: String },
    #[error(transparent)]
    Connect(#[from] ConnectError),
    #[error("procedure call failed: {0}")]
    Call(#[from] tiberius::error::Error),
}

/// A coerced parameter value ready to bind.
///
/// `Null` only ever arises from an empty integer field, so it binds as an
/// absent integer.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    Null,
    Int(i64),
    Text(String),
}

impl ToSql for ParamValue {
    fn to_sql(&self) -> ColumnData<'_> {
        match self {
            ParamValue::Null => ColumnData::I64(None),
            ParamValue::Int(v) => ColumnData::I64(Some(*v)),
            ParamValue::Text(s) => ColumnData::String(Some(Cow::from(s.as_str()))),
        }
    }
}

/// Coerce one raw form input per its declared type category.
///
/// Input is trimmed first. Integer fields: empty becomes `Null`, otherwise
/// the text must parse. Text fields pass through unchanged, empty included.
pub fn coerce(param_name: &str, raw: &str, ty: ParamType) -> Result<ParamValue, ExecError> {
    let trimmed = raw.trim();
    match ty {
        ParamType::Integer => {
            if trimmed.is_empty() {
                Ok(ParamValue::Null)
            } else {
                trimmed
                    .parse::<i64>()
                    .map(ParamValue::Int)
                    .map_err(|_| ExecError::BadParameter {
                        name: param_name.to_string(),
                        raw: trimmed.to_string(),
                    })
            }
        }
        ParamType::Text => Ok(ParamValue::Text(trimmed.to_string())),
    }
}

/// Coerce a full set of raw inputs in declaration order.
///
/// `raw_values` must be parallel to `descriptor.params`; the first coercion
/// failure aborts the submit before any connection is opened.
pub fn coerce_all(
    descriptor: &ProcedureDescriptor,
    raw_values: &[String],
) -> Result<Vec<ParamValue>, ExecError> {
    descriptor
        .params
        .iter()
        .zip(raw_values)
        .map(|(spec, raw)| coerce(spec.name, raw, spec.param_type()))
        .collect()
}

/// Build the call statement with one placeholder per parameter.
pub fn call_statement(descriptor: &ProcedureDescriptor) -> String {
    if descriptor.params.is_empty() {
        return format!("EXEC {}", descriptor.name);
    }
    let placeholders: Vec<String> = (1..=descriptor.params.len())
        .map(|i| format!("@P{}", i))
        .collect();
    format!("EXEC {} {}", descriptor.name, placeholders.join(", "))
}

/// Invoke the named procedure with positionally bound values.
///
/// One connection, one statement, implicit commit; the connection drops on
/// every exit path. The procedure's result set, if any, is discarded —
/// status is inferred from the absence of an error.
pub async fn call_procedure(
    cfg: &DbConfig,
    descriptor: &ProcedureDescriptor,
    values: &[ParamValue],
) -> Result<(), ExecError> {
    let mut client = connect(cfg).await?;
    let params: Vec<&dyn ToSql> = values.iter().map(|v| v as &dyn ToSql).collect();
    client.execute(call_statement(descriptor), &params).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PROCEDURES;

    fn descriptor(name: &str) -> &'static ProcedureDescriptor {
        PROCEDURES.iter().find(|d| d.name == name).unwrap()
    }

    #[test]
    fn empty_integer_coerces_to_null() {
        assert_eq!(
            coerce("ip_weight", "", ParamType::Integer).unwrap(),
            ParamValue::Null
        );
        assert_eq!(
            coerce("ip_weight", "   ", ParamType::Integer).unwrap(),
            ParamValue::Null
        );
    }

    #[test]
    fn numeric_integer_coerces_to_int() {
        assert_eq!(
            coerce("ip_tag", " 42 ", ParamType::Integer).unwrap(),
            ParamValue::Int(42)
        );
        assert_eq!(
            coerce("ip_tag", "-7", ParamType::Integer).unwrap(),
            ParamValue::Int(-7)
        );
    }

    #[test]
    fn non_numeric_integer_is_an_error() {
        let err = coerce("ip_tag", "abc", ParamType::Integer).unwrap_err();
        assert!(matches!(err, ExecError::BadParameter { ref name, .. } if name == "ip_tag"));
    }

    #[test]
    fn text_passes_through_trimmed_including_empty() {
        assert_eq!(
            coerce("ip_name", "  Widget  ", ParamType::Text).unwrap(),
            ParamValue::Text("Widget".to_string())
        );
        assert_eq!(
            coerce("ip_name", "", ParamType::Text).unwrap(),
            ParamValue::Text(String::new())
        );
    }

    #[test]
    fn add_product_scenario() {
        // barcode is varchar, name is varchar, weight is int and left empty
        let raw = vec!["123".to_string(), "Widget".to_string(), String::new()];
        let values = coerce_all(descriptor("add_product"), &raw).unwrap();
        assert_eq!(
            values,
            vec![
                ParamValue::Text("123".to_string()),
                ParamValue::Text("Widget".to_string()),
                ParamValue::Null,
            ]
        );
    }

    #[test]
    fn load_van_bad_tag_fails_before_any_call() {
        let raw = vec![
            "v1".to_string(),
            "abc".to_string(),
            "b1".to_string(),
            "1".to_string(),
            "2".to_string(),
        ];
        let err = coerce_all(descriptor("load_van"), &raw).unwrap_err();
        assert!(matches!(err, ExecError::BadParameter { ref name, .. } if name == "ip_tag"));
    }

    #[test]
    fn coercion_preserves_declaration_order() {
        let d = descriptor("add_van");
        let raw: Vec<String> = vec!["v1", "1", "2", "3", "4", "driver"]
            .into_iter()
            .map(String::from)
            .collect();
        let values = coerce_all(d, &raw).unwrap();
        assert_eq!(values.len(), d.params.len());
        assert_eq!(values[0], ParamValue::Text("v1".to_string()));
        assert_eq!(values[1], ParamValue::Int(1));
        assert_eq!(values[5], ParamValue::Text("driver".to_string()));
    }

    #[test]
    fn statement_has_one_placeholder_per_parameter() {
        for d in PROCEDURES {
            let stmt = call_statement(d);
            assert!(stmt.starts_with(&format!("EXEC {}", d.name)));
            for i in 1..=d.params.len() {
                assert!(stmt.contains(&format!("@P{}", i)), "{}", stmt);
            }
            assert_eq!(stmt.matches("@P").count(), d.params.len());
        }
    }

    #[test]
    fn statement_never_contains_values() {
        let stmt = call_statement(descriptor("add_product"));
        assert_eq!(stmt, "EXEC add_product @P1, @P2, @P3");
    }

    #[test]
    fn param_value_binds_expected_column_data() {
        assert!(matches!(ParamValue::Null.to_sql(), ColumnData::I64(None)));
        assert!(matches!(
            ParamValue::Int(9).to_sql(),
            ColumnData::I64(Some(9))
        ));
        match ParamValue::Text("x".to_string()).to_sql() {
            ColumnData::String(Some(s)) => assert_eq!(s, "x"),
            other => panic!("unexpected binding: {:?}", other),
        }
    }
}
