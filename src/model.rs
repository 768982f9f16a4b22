//! Student entity as stored and as returned by the API.

use serde::{Deserialize, Serialize};
use utoipa::openapi::schema::{ObjectBuilder, OneOfBuilder, Schema, Type};
use utoipa::openapi::RefOr;
use utoipa::ToSchema;

/// Lowest age accepted on create and update.
pub const AGE_MIN: i64 = 1;
/// Highest age accepted on create and update.
pub const AGE_MAX: i64 = 100;

/// A persisted student row. `id` is assigned by the store and never changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Student {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Ann")]
    pub name: String,
    #[schema(example = 20)]
    pub age: i32,
    #[schema(example = "1 Main St")]
    pub address: String,
}

/// Validated field set for insert and full replacement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub age: i32,
    pub address: String,
}

impl NewStudent {
    pub fn into_student(self, id: i32) -> Student {
        Student {
            id,
            name: self.name,
            age: self.age,
            address: self.address,
        }
    }
}

/// Request body for create and update, used for the API description only.
#[derive(Clone, Debug, ToSchema)]
pub struct StudentPayload {
    #[schema(example = "Ann")]
    pub name: String,
    #[schema(schema_with = age_input_schema)]
    pub age: i32,
    #[schema(example = "1 Main St")]
    pub address: String,
}

/// `age` is accepted as a JSON integer or as a string holding one (form fields submit text).
fn age_input_schema() -> RefOr<Schema> {
    let one_of = OneOfBuilder::new()
        .item(ObjectBuilder::new().schema_type(Type::Integer))
        .item(
            ObjectBuilder::new()
                .schema_type(Type::String)
                .pattern(Some("^[0-9]+$")),
        )
        .description(Some(format!("Integer between {} and {}, as a number or numeric string", AGE_MIN, AGE_MAX)))
        .build();
    RefOr::T(Schema::OneOf(one_of))
}
