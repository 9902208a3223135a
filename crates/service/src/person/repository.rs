use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    Set,
};

use models::person::{self, Person, PersonInput};

use crate::errors::ServiceError;

/// Storage seam for the persons table. Every method runs exactly one
/// statement; the pool hands out a connection for its duration only.
#[async_trait]
pub trait PersonRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Person>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<Person>, ServiceError>;
    /// `pattern` is passed to `LIKE` verbatim.
    async fn search(&self, pattern: &str) -> Result<Vec<Person>, ServiceError>;
    /// Returns the generated id.
    async fn insert(&self, input: &PersonInput) -> Result<i32, ServiceError>;
    /// Returns the number of rows affected.
    async fn update(&self, id: i32, input: &PersonInput) -> Result<u64, ServiceError>;
    /// Returns the number of rows affected.
    async fn delete(&self, id: i32) -> Result<u64, ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmPersonRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmPersonRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl PersonRepository for SeaOrmPersonRepository {
    async fn list(&self) -> Result<Vec<Person>, ServiceError> {
        Ok(person::Entity::find().all(&self.db).await?)
    }

    async fn get(&self, id: i32) -> Result<Option<Person>, ServiceError> {
        Ok(person::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn search(&self, pattern: &str) -> Result<Vec<Person>, ServiceError> {
        Ok(person::Entity::find()
            .filter(person::Column::Name.like(pattern))
            .all(&self.db)
            .await?)
    }

    async fn insert(&self, input: &PersonInput) -> Result<i32, ServiceError> {
        let am = person::ActiveModel {
            id: NotSet,
            name: Set(input.name.clone()),
            age: Set(input.age),
        };
        let res = person::Entity::insert(am).exec(&self.db).await?;
        Ok(res.last_insert_id)
    }

    async fn update(&self, id: i32, input: &PersonInput) -> Result<u64, ServiceError> {
        let res = person::Entity::update_many()
            .col_expr(person::Column::Name, Expr::value(input.name.clone()))
            .col_expr(person::Column::Age, Expr::value(input.age))
            .filter(person::Column::Id.eq(id))
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected)
    }

    async fn delete(&self, id: i32) -> Result<u64, ServiceError> {
        let res = person::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected)
    }
}
