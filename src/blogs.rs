use crate::blog::Blog;
use crate::links::{self_link, Link, Linked};
use crate::settings::ServerSettings;
use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};

#[get("/blogs")]
pub async fn list_blogs() -> impl Responder {
    HttpResponse::Ok().json(vec![Blog::featured()])
}

#[post("/blogs")]
pub async fn create_blog(blog: web::Json<Blog>) -> impl Responder {
    tracing::info!(
        blog.title = %blog.title,
        blog.description = %blog.description,
        "Received a blog"
    );
    HttpResponse::Ok().json(blog.into_inner())
}

#[get("/blogs/{title}")]
pub async fn get_blog(req: HttpRequest, title: web::Path<String>) -> impl Responder {
    let blog = Blog::placeholder(title.into_inner());
    let href = self_link(&base_url(&req), &blog.title);
    HttpResponse::Ok().json(Linked::new(blog).with_link(Link::new("self", href)))
}

// The configured public URL wins over whatever host the request was addressed to.
fn base_url(req: &HttpRequest) -> String {
    if let Some(url) = req
        .app_data::<web::Data<ServerSettings>>()
        .and_then(|server| server.public_url.clone())
    {
        return url;
    }
    let info = req.connection_info();
    format!("{}://{}", info.scheme(), info.host())
}
