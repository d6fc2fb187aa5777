//! Poll listing, detail, results and voting endpoints

use crate::db::get_db_pool;
use crate::orm::{choices, questions};
use actix_web::{error, get, post, web, Error, HttpResponse};
use askama_actix::{Template, TemplateToResponse};
use chrono::Utc;
use sea_orm::{entity::*, query::*, sea_query::Expr, ColumnTrait, EntityTrait};
use serde::Deserialize;

pub(super) fn configure(conf: &mut actix_web::web::ServiceConfig) {
    // Route resolution will stop at the first match.
    conf.service(view_index)
        .service(view_results)
        .service(vote_on_question)
        .service(view_question);
}

/// Question row with its recency flag for the index page.
pub struct QuestionListing {
    pub question: questions::Model,
    pub recent: bool,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub questions: Vec<QuestionListing>,
}

#[derive(Template)]
#[template(path = "detail.html")]
pub struct DetailTemplate<'a> {
    pub question: &'a questions::Model,
    pub choices: &'a Vec<choices::Model>,
    pub error_message: Option<&'a str>,
}

#[derive(Template)]
#[template(path = "results.html")]
pub struct ResultsTemplate<'a> {
    pub question: &'a questions::Model,
    pub choices: &'a Vec<choices::Model>,
}

#[derive(Deserialize)]
pub struct VoteFormData {
    #[serde(default)]
    pub choice: Option<i32>,
}

#[get("/")]
pub async fn view_index() -> Result<HttpResponse, Error> {
    let now = Utc::now().naive_utc();

    let questions = questions::Entity::find()
        .filter(questions::Column::PubDate.lte(now))
        .order_by_desc(questions::Column::PubDate)
        .all(get_db_pool())
        .await
        .map_err(error::ErrorInternalServerError)?;

    let questions = questions
        .into_iter()
        .map(|question| {
            let recent = question.was_published_recently(now);
            QuestionListing { question, recent }
        })
        .collect();

    Ok(IndexTemplate { questions }.to_response())
}

#[get("/polls/{question_id}/")]
pub async fn view_question(path: web::Path<i32>) -> Result<HttpResponse, Error> {
    let question = find_published_question(path.into_inner()).await?;
    render_detail(&question, None).await
}

#[get("/polls/results/{question_id}/")]
pub async fn view_results(path: web::Path<i32>) -> Result<HttpResponse, Error> {
    let question = find_published_question(path.into_inner()).await?;

    let choices = find_choices(question.id).await?;

    Ok(ResultsTemplate {
        question: &question,
        choices: &choices,
    }
    .to_response())
}

#[post("/polls/vote/{question_id}/")]
pub async fn vote_on_question(
    path: web::Path<i32>,
    form: web::Form<VoteFormData>,
) -> Result<HttpResponse, Error> {
    let question = find_published_question(path.into_inner()).await?;
    let db = get_db_pool();

    // The selected choice must exist and belong to this question.
    let selected = match form.choice {
        Some(choice_id) => choices::Entity::find()
            .filter(choices::Column::Id.eq(choice_id))
            .filter(choices::Column::QuestionId.eq(question.id))
            .one(db)
            .await
            .map_err(error::ErrorInternalServerError)?,
        None => None,
    };

    let choice = match selected {
        Some(choice) => choice,
        None => {
            // Re-render the voting form instead of failing the request.
            return render_detail(&question, Some("You didn't select a choice.")).await;
        }
    };

    let txn = db.begin().await.map_err(error::ErrorInternalServerError)?;

    choices::Entity::update_many()
        .col_expr(
            choices::Column::Votes,
            Expr::col(choices::Column::Votes).add(1),
        )
        .filter(choices::Column::Id.eq(choice.id))
        .exec(&txn)
        .await
        .map_err(error::ErrorInternalServerError)?;

    txn.commit()
        .await
        .map_err(error::ErrorInternalServerError)?;

    Ok(HttpResponse::Found()
        .append_header(("Location", format!("/polls/results/{}/", question.id)))
        .finish())
}

/// Fetch a question by id, treating unpublished (future-dated) questions
/// the same as missing ones.
async fn find_published_question(question_id: i32) -> Result<questions::Model, Error> {
    let question = questions::Entity::find_by_id(question_id)
        .one(get_db_pool())
        .await
        .map_err(error::ErrorInternalServerError)?
        .ok_or_else(|| error::ErrorNotFound("Question not found."))?;

    if question.pub_date > Utc::now().naive_utc() {
        return Err(error::ErrorNotFound("Question not found."));
    }

    Ok(question)
}

async fn find_choices(question_id: i32) -> Result<Vec<choices::Model>, Error> {
    choices::Entity::find()
        .filter(choices::Column::QuestionId.eq(question_id))
        .order_by_asc(choices::Column::Id)
        .all(get_db_pool())
        .await
        .map_err(error::ErrorInternalServerError)
}

async fn render_detail(
    question: &questions::Model,
    error_message: Option<&str>,
) -> Result<HttpResponse, Error> {
    let choices = find_choices(question.id).await?;

    Ok(DetailTemplate {
        question,
        choices: &choices,
        error_message,
    }
    .to_response())
}
