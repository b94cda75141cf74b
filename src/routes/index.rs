use axum::response::IntoResponse;

use crate::template::Template;

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(IndexTemplate)
}
