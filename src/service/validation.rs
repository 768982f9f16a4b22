//! Request validation for student bodies.

use crate::error::AppError;
use crate::model::{NewStudent, AGE_MAX, AGE_MIN};
use serde_json::Value;
use std::collections::HashMap;

/// Per-field bounds. Every student field is required; create and update share the same rules.
#[derive(Clone, Debug, Default)]
pub(crate) struct FieldRule {
    pub min_length: Option<u32>,
    pub minimum: Option<i64>,
    pub maximum: Option<i64>,
}

const NAME: FieldRule = FieldRule {
    min_length: Some(1),
    minimum: None,
    maximum: None,
};

const AGE: FieldRule = FieldRule {
    min_length: None,
    minimum: Some(AGE_MIN),
    maximum: Some(AGE_MAX),
};

const ADDRESS: FieldRule = FieldRule {
    min_length: Some(1),
    minimum: None,
    maximum: None,
};

pub(crate) struct RequestValidator;

impl RequestValidator {
    /// Validate a full student body. All of `name`, `age`, `address` must be present and non-empty.
    pub fn validate_student(body: &HashMap<String, Value>) -> Result<NewStudent, AppError> {
        let name = text_field("name", body.get("name"), &NAME)?;
        let age = integer_field("age", body.get("age"), &AGE)?;
        let address = text_field("address", body.get("address"), &ADDRESS)?;
        Ok(NewStudent { name, age, address })
    }
}

fn is_missing(v: Option<&Value>) -> bool {
    match v {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        _ => false,
    }
}

fn text_field(col: &str, v: Option<&Value>, rule: &FieldRule) -> Result<String, AppError> {
    if is_missing(v) {
        return Err(AppError::Validation(format!("{} is required", col)));
    }
    let s = v
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::Validation(format!("{} must be a string", col)))?
        .trim();
    if let Some(min) = rule.min_length {
        if s.chars().count() < min as usize {
            return Err(AppError::Validation(format!(
                "{} must be at least {} characters",
                col, min
            )));
        }
    }
    Ok(s.to_string())
}

fn integer_field(col: &str, v: Option<&Value>, rule: &FieldRule) -> Result<i32, AppError> {
    if is_missing(v) {
        return Err(AppError::Validation(format!("{} is required", col)));
    }
    let n = match v {
        Some(Value::Number(n)) => n.as_i64(),
        // Form inputs submit numbers as text.
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    let n = match n {
        Some(n) => n,
        _ => return Err(AppError::Validation(format!("{} must be an integer", col))),
    };
    if let Some(min) = rule.minimum {
        if n < min {
            return Err(AppError::Validation(format!("{} must be at least {}", col, min)));
        }
    }
    if let Some(max) = rule.maximum {
        if n > max {
            return Err(AppError::Validation(format!("{} must be at most {}", col, max)));
        }
    }
    i32::try_from(n).map_err(|_| AppError::Validation(format!("{} is out of range", col)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(v: Value) -> HashMap<String, Value> {
        match v {
            Value::Object(m) => m.into_iter().collect(),
            _ => panic!("object expected"),
        }
    }

    fn message(err: AppError) -> String {
        match err {
            AppError::Validation(m) => m,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn accepts_string_age() {
        let s = RequestValidator::validate_student(&body(json!({
            "name": "Ann",
            "age": "20",
            "address": "1 Main St"
        })))
        .unwrap();
        assert_eq!(
            s,
            NewStudent {
                name: "Ann".into(),
                age: 20,
                address: "1 Main St".into()
            }
        );
    }

    #[test]
    fn accepts_numeric_age_and_trims_text() {
        let s = RequestValidator::validate_student(&body(json!({
            "name": "  Bo ",
            "age": 42,
            "address": "2 Side Rd\n"
        })))
        .unwrap();
        assert_eq!(s.name, "Bo");
        assert_eq!(s.age, 42);
        assert_eq!(s.address, "2 Side Rd");
    }

    #[test]
    fn each_field_is_required() {
        for missing in ["name", "age", "address"] {
            let mut b = body(json!({ "name": "Ann", "age": 20, "address": "1 Main St" }));
            b.remove(missing);
            let err = RequestValidator::validate_student(&b).unwrap_err();
            assert_eq!(message(err), format!("{} is required", missing));
        }
    }

    #[test]
    fn empty_and_null_count_as_missing() {
        let err = RequestValidator::validate_student(&body(json!({
            "name": "   ",
            "age": 20,
            "address": "x"
        })))
        .unwrap_err();
        assert_eq!(message(err), "name is required");

        let err = RequestValidator::validate_student(&body(json!({
            "name": "Ann",
            "age": "",
            "address": "x"
        })))
        .unwrap_err();
        assert_eq!(message(err), "age is required");

        let err = RequestValidator::validate_student(&body(json!({
            "name": "Ann",
            "age": 3,
            "address": null
        })))
        .unwrap_err();
        assert_eq!(message(err), "address is required");
    }

    #[test]
    fn age_must_be_integer_in_range() {
        for (age, expected) in [
            (json!("twenty"), "age must be an integer"),
            (json!(20.5), "age must be an integer"),
            (json!(true), "age must be an integer"),
            (json!(0), "age must be at least 1"),
            (json!("101"), "age must be at most 100"),
        ] {
            let err = RequestValidator::validate_student(&body(json!({
                "name": "Ann",
                "age": age,
                "address": "x"
            })))
            .unwrap_err();
            assert_eq!(message(err), expected);
        }
    }

    #[test]
    fn name_must_be_text() {
        let err = RequestValidator::validate_student(&body(json!({
            "name": 12,
            "age": 20,
            "address": "x"
        })))
        .unwrap_err();
        assert_eq!(message(err), "name must be a string");
    }
}
