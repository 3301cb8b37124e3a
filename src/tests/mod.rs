use cynic::{MutationBuilder as _, QueryBuilder as _};
use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use serde_json::{Value, json};

use crate::client::{
    AddAuthor, AddAuthorArguments, AddBook, AddBookArguments, AllAuthors, AllBooks, AuthorById,
    AuthorArguments, AuthorSummary, BookArguments, BookById,
};

use testserver::Server;


#[tokio::test]
async fn lists_authors_with_their_books() {
    let server = Server::seeded();
    let client = server.client();

    let res = client.run(AllAuthors::build(())).await.unwrap();
    assert!(res.errors.is_none());

    let authors: Vec<_> = res.data.unwrap().authors.unwrap().into_iter().flatten().collect();
    let names: Vec<_> = authors.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["Marijn Haverbeke", "Addy Osmani", "Axel Rauschmayer"]);

    let titles: Vec<_> = authors[1]
        .books
        .iter()
        .flatten()
        .flatten()
        .map(|b| b.title.as_str())
        .collect();
    assert_eq!(
        titles,
        [
            "Learning JavaScript Design Patterns",
            "Understanding ECMAScript 6",
            "Git Pocket Guide",
        ]
    );
}

#[tokio::test]
async fn lists_books_with_their_authors() {
    let server = Server::seeded();
    let client = server.client();

    let res = client.run(AllBooks::build(())).await.unwrap();
    let books: Vec<_> = res.data.unwrap().books.unwrap().into_iter().flatten().collect();

    assert_eq!(books.len(), 8);
    assert_eq!(books[2].title, "Speaking JavaScript");
    assert_eq!(
        books[2].author,
        AuthorSummary {
            id: 3,
            name: "Axel Rauschmayer".into()
        }
    );
}

#[tokio::test]
async fn looks_up_single_records() {
    let server = Server::seeded();
    let client = server.client();

    let res = client
        .run(BookById::build(BookArguments {
            id: "9781593275846".into(),
        }))
        .await
        .unwrap();
    let book = res.data.unwrap().book.unwrap();
    assert_eq!(book.title, "Eloquent JavaScript, Second Edition");
    assert_eq!(book.author.name, "Marijn Haverbeke");

    let res = client
        .run(BookById::build(BookArguments {
            id: "nonexistent".into(),
        }))
        .await
        .unwrap();
    assert!(res.errors.is_none());
    assert!(res.data.unwrap().book.is_none());

    let res = client
        .run(AuthorById::build(AuthorArguments { id: 42 }))
        .await
        .unwrap();
    assert!(res.errors.is_none());
    assert!(res.data.unwrap().author.is_none());
}

#[tokio::test]
async fn mutations_append_records() {
    let server = Server::seeded();
    let client = server.client();

    let res = client
        .run(AddAuthor::build(AddAuthorArguments {
            name: "Test".into(),
        }))
        .await
        .unwrap();
    let author = res.data.unwrap().add_author.unwrap();
    assert_eq!(
        author,
        AuthorSummary {
            id: 4,
            name: "Test".into()
        }
    );

    let res = client
        .run(AddBook::build(AddBookArguments {
            title: "X".into(),
            author_id: 4,
        }))
        .await
        .unwrap();
    let added = res.data.unwrap().add_book.unwrap();
    assert_eq!(added.id.len(), 13);
    assert!(added.id.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(added.author, author);

    let res = client
        .run(BookById::build(BookArguments {
            id: added.id.clone(),
        }))
        .await
        .unwrap();
    assert_eq!(res.data.unwrap().book, Some(added));
}

#[tokio::test]
async fn invalid_documents_are_bad_requests() {
    let server = Server::seeded();

    let (status, body) = server.post_json(json!({ "query": "{ book { id } }" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["data"], Value::Null);
    assert!(!body["errors"].as_array().unwrap().is_empty());

    let (status, _) = server.post_json(json!({ "query": "{ books { " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn non_graphql_bodies_are_bad_requests() {
    let server = Server::seeded();

    let (status, _) = server.post_raw("application/json", "not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = server.post_raw("text/plain", "{ books { id } }").await;
    assert_eq!(status.as_u16() / 100, 4);
}

#[tokio::test]
async fn missing_author_is_a_field_error() {
    let server = Server::seeded();

    let (status, body) = server
        .post_json(json!({
            "query": "mutation($authorId: Int!) { \
                addBook(title: \"Orphan\", authorId: $authorId) { title author { name } } }",
            "variables": { "authorId": 99 },
        }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!({ "addBook": null }));
    assert_eq!(body["errors"][0]["path"], json!(["addBook", "author"]));
    let id = {
        let (_, body) = server.post_json(json!({ "query": "{ books { id } }" })).await;
        body["data"]["books"][8]["id"].as_str().unwrap().to_owned()
    };

    let (status, body) = server
        .post_json(json!({
            "query": "query($id: String!) { book(id: $id) { title author { name } } }",
            "variables": { "id": id },
        }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!({ "book": null }));
    assert_eq!(body["errors"][0]["path"], json!(["book", "author"]));
}

#[tokio::test]
async fn serves_explorer() {
    let server = Server::seeded();

    let res = reqwest::get(server.endpoint().clone()).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let page = res.text().await.unwrap();
    assert!(page.contains("graphiql"));
}
