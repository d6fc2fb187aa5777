//! Test fixtures for creating test data
#![allow(dead_code)]

use chrono::{Duration, Utc};
use pollbox::orm::{choices, questions};
use sea_orm::{entity::*, ActiveValue::Set, DatabaseConnection, DbErr};

/// Create a question published the given number of days offset from now
/// (negative for the past, positive for questions yet to be published).
pub async fn create_question(
    db: &DatabaseConnection,
    question_text: &str,
    days: i64,
) -> Result<questions::Model, DbErr> {
    questions::ActiveModel {
        question_text: Set(question_text.to_owned()),
        pub_date: Set(Utc::now().naive_utc() + Duration::days(days)),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Create a choice for a question with zero votes.
pub async fn create_choice(
    db: &DatabaseConnection,
    question_id: i32,
    choice_text: &str,
) -> Result<choices::Model, DbErr> {
    choices::ActiveModel {
        question_id: Set(question_id),
        choice_text: Set(choice_text.to_owned()),
        votes: Set(0),
        ..Default::default()
    }
    .insert(db)
    .await
}
