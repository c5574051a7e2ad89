use supercruise_mux::prelude::*;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;

static POSTS: Lazy<Mutex<BTreeMap<u64, Post>>> = Lazy::new(|| Mutex::new(BTreeMap::new()));
static ID_COUNTER: Lazy<AtomicU64> = Lazy::new(|| AtomicU64::from(1));

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Post {
    id: u64,
    title: String,
}

fn json<T: Serialize>(status: StatusCode, value: &T) -> std::io::Result<Response<Body>> {
    let body = serde_json::to_string(value)?;
    let mut resp = Response::new(Body::from(body));
    *resp.status_mut() = status;
    Ok(resp)
}

fn post_id(req: &Request<Body>, index: usize) -> Option<u64> {
    context::capture(req, index)?.parse().ok()
}

async fn health(_req: Request<Body>) -> std::io::Result<Response<Body>> {
    Ok(Response::new(Body::from("ok")))
}

async fn list_posts(_req: Request<Body>) -> std::io::Result<Response<Body>> {
    let posts = POSTS.lock().await;
    let xs: Vec<_> = posts.values().cloned().collect();
    json(StatusCode::OK, &xs)
}

async fn create_post(_req: Request<Body>) -> std::io::Result<Response<Body>> {
    let id = ID_COUNTER.fetch_add(1, Ordering::AcqRel);
    let post = Post {
        id,
        title: format!("Post {}", id),
    };

    POSTS.lock().await.insert(id, post.clone());
    json(StatusCode::CREATED, &post)
}

async fn get_post(req: Request<Body>) -> std::io::Result<Response<Body>> {
    let posts = POSTS.lock().await;
    match post_id(&req, 0).and_then(|id| posts.get(&id)) {
        Some(post) => json(StatusCode::OK, post),
        None => json(StatusCode::NOT_FOUND, &"no such post"),
    }
}

async fn delete_post(req: Request<Body>) -> std::io::Result<Response<Body>> {
    let removed = match post_id(&req, 0) {
        Some(id) => POSTS.lock().await.remove(&id),
        None => None,
    };

    json(StatusCode::OK, &removed.is_some())
}

async fn post_comments(req: Request<Body>) -> std::io::Result<Response<Body>> {
    let id = context::capture(&req, 0).unwrap_or_default();
    json(StatusCode::OK, &format!("comments for post {}", id))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let router = Router::builder()
        .get("/", health)
        .get("/posts", list_posts)
        .post("/posts", create_post)
        .get("/posts/*", get_post)
        .delete("/posts/*", delete_post)
        .get("/posts/*/comments", post_comments)
        .finalize()?;

    let requests = [
        ("GET", "/"),
        ("POST", "/posts"),
        ("POST", "/posts"),
        ("GET", "/posts"),
        ("GET", "/posts/2"),
        ("GET", "/posts/2/comments"),
        ("DELETE", "/posts/1"),
        ("PUT", "/posts"),
        ("GET", "/users"),
    ];

    for (method, uri) in requests {
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())?;

        let resp = router.serve(req).await?;
        println!(
            "{} {} -> {} {}",
            method,
            uri,
            resp.status(),
            resp.body().to_string_lossy()
        );
    }

    Ok(())
}
