//! The `persons` table.
//!
//! [`Model`] doubles as the JSON record returned by the API:
//! `{ "id": integer, "name": string, "age": integer }`.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "persons")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub age: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub type Person = Model;

/// Client-submitted person. `id` is accepted for shape compatibility but the
/// server never uses it: create takes the generated id, update the path id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonInput {
    #[serde(default)]
    pub id: Option<i32>,
    pub name: String,
    pub age: i32,
}

impl PersonInput {
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self { id: None, name: name.into(), age }
    }

    /// Attach a persisted id, discarding whatever the client sent.
    pub fn into_person(self, id: i32) -> Person {
        Person { id, name: self.name, age: self.age }
    }
}
