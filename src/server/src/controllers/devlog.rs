use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse};

use crate::errors::DevLogHttpError;
use crate::params::{app_data, request_host, PageNumQuery};

/// Render one page of the dev log, `?p=<page>` selects the page.
pub async fn index(req: HttpRequest) -> actix_web::Result<HttpResponse, DevLogHttpError> {
    let app_data = app_data(&req)?;
    let page_opts = PageNumQuery::from_query_str(req.query_string()).page_opts();
    let host = request_host(&req);

    let page = app_data
        .fetcher
        .fetch_page(page_opts.page_num, &host)
        .await?;
    let html = app_data.templates.render_index(&page)?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(html))
}
