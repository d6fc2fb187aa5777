//! HTML error pages for the ErrorHandlers middleware

use actix_web::dev::ServiceResponse;
use actix_web::http::header;
use actix_web::middleware::ErrorHandlerResponse;
use askama_actix::Template;

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate<'a> {
    pub code: u16,
    pub message: &'a str,
}

pub fn render_400<B>(res: ServiceResponse<B>) -> actix_web::Result<ErrorHandlerResponse<B>> {
    render_error_page(res, "The request could not be understood.")
}

pub fn render_404<B>(res: ServiceResponse<B>) -> actix_web::Result<ErrorHandlerResponse<B>> {
    render_error_page(res, "The page you requested does not exist.")
}

pub fn render_500<B>(res: ServiceResponse<B>) -> actix_web::Result<ErrorHandlerResponse<B>> {
    render_error_page(res, "Something went wrong on our end.")
}

fn render_error_page<B>(
    res: ServiceResponse<B>,
    message: &str,
) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let code = res.status().as_u16();
    let body = ErrorTemplate { code, message }
        .render()
        .unwrap_or_else(|_| message.to_owned());

    let (req, res) = res.into_parts();
    let mut res = res.set_body(body);
    res.headers_mut().insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("text/html; charset=utf-8"),
    );

    let res = ServiceResponse::new(req, res)
        .map_into_boxed_body()
        .map_into_right_body();

    Ok(ErrorHandlerResponse::Response(res))
}
