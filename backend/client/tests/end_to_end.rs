use std::sync::Arc;

use bank::NewFood;
use client::{FoodsApi, HttpApi, RecipeBook, Submitted};
use reqwest::StatusCode;
use server::{app, config::Config, memory::MemoryStore, state::AppState};
use tokio::net::TcpListener;

async fn spawn_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    let app = app(AppState::with_store(
        Config::default(),
        Arc::new(MemoryStore::default()),
    ));

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{address}")
}

#[tokio::test]
async fn book_round_trip_against_server() {
    let base_url = spawn_server().await;
    let mut book = RecipeBook::new(HttpApi::new(&base_url).unwrap());

    book.mount().await.unwrap();
    assert!(book.foods().is_empty());

    book.form_name = "Pho".to_string();
    book.form_recipe = "beef, noodles, broth".to_string();
    let Submitted::Created(pho) = book.submit().await.unwrap() else {
        panic!("expected a created record");
    };
    assert!(!pho.id.is_empty());
    assert_eq!(book.api().get(&pho.id).await.unwrap(), pho);

    book.form_name = "Banh Mi".to_string();
    book.form_recipe = "bread, pork".to_string();
    book.submit().await.unwrap();
    assert_eq!(book.foods().len(), 2);

    assert!(book.edit(&pho.id));
    book.form_name = "Pho Ga".to_string();
    book.form_recipe = "chicken, noodles, broth".to_string();
    let Submitted::Updated(updated) = book.submit().await.unwrap() else {
        panic!("expected an updated record");
    };
    assert_eq!(updated.id, pho.id);
    assert_eq!(book.foods()[0], updated);

    book.search_query = "ph".to_string();
    book.search().await.unwrap();
    assert_eq!(book.foods(), &[updated.clone()]);

    book.search_query = "curry".to_string();
    book.search().await.unwrap();
    assert!(book.foods().is_empty());

    book.mount().await.unwrap();
    let deleted = book.delete(&pho.id).await.unwrap();
    assert_eq!(deleted, updated);
    assert_eq!(book.foods().len(), 1);

    let err = book.delete(&pho.id).await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(book.foods().len(), 1);
}

#[tokio::test]
async fn api_reports_server_messages() {
    let base_url = spawn_server().await;
    let api = HttpApi::new(&base_url).unwrap();

    let err = api.get("missing").await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(err.to_string(), "404 Not Found: Food not found");

    let err = api.create(&NewFood::new("Pho", "")).await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    assert!(err.to_string().ends_with("recipe is required"));

    assert!(api.search("anything").await.unwrap().is_empty());
}
