//! SeaORM Entity for questions table

use chrono::Duration;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "questions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub question_text: String,
    pub pub_date: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::choices::Entity")]
    Choices,
}

impl Related<super::choices::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Choices.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// True when `pub_date` falls inside the trailing one-day window
    /// ending at `now`. A future `pub_date` is never recent, and a
    /// `pub_date` of exactly `now` is.
    pub fn was_published_recently(&self, now: DateTime) -> bool {
        self.pub_date > now - Duration::days(1) && self.pub_date <= now
    }
}
