//! HTTP tests for the plant catalog preset.

mod support;

use bson::{doc, oid::ObjectId};
use docstore_gateway::DocumentStore;
use reqwest::StatusCode;
use serde_json::{json, Value};
use support::spawn;

#[tokio::test]
async fn partial_update_keeps_other_plant_fields() {
    let srv = spawn("catalog").await;
    let created: Value = srv
        .client
        .post(srv.url("/api/plants"))
        .json(&json!({ "common_name": "Dog rose", "scientific_name": "Rosa canina" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["_id"].as_str().unwrap();

    let resp = srv
        .client
        .put(srv.url(&format!("/api/plants/{}", id)))
        .json(&json!({ "common_name": "Rose" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "status": format!("Plant with id {} has been updated.", id) }));

    let plant: Value = srv
        .client
        .get(srv.url(&format!("/api/plants/{}", id)))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(plant["common_name"], "Rose");
    assert_eq!(plant["scientific_name"], "Rosa canina");
}

#[tokio::test]
async fn families_are_read_and_update_only() {
    let srv = spawn("catalog").await;
    let id = srv
        .store
        .insert("families", doc! { "name": "Rosaceae" })
        .await
        .unwrap()
        .to_hex();

    let resp = srv.client.post(srv.url("/api/families")).json(&json!({ "name": "Poaceae" })).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "create is not supported on families");

    let resp = srv.client.delete(srv.url(&format!("/api/families/{}", id))).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

    let families: Vec<Value> = srv.client.get(srv.url("/api/families")).send().await.unwrap().json().await.unwrap();
    assert_eq!(families, vec![json!({ "_id": id.clone(), "name": "Rosaceae" })]);

    let resp = srv
        .client
        .put(srv.url(&format!("/api/families/{}", id)))
        .json(&json!({ "name": "Rose family" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let family: Value = srv
        .client
        .get(srv.url(&format!("/api/families/{}", id)))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(family["name"], "Rose family");
}

#[tokio::test]
async fn update_missing_family_is_404() {
    let srv = spawn("catalog").await;
    let id = ObjectId::new().to_hex();
    let resp = srv
        .client
        .put(srv.url(&format!("/api/families/{}", id)))
        .json(&json!({ "name": "Ghost" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], format!("No family with id {}", id));
}

#[tokio::test]
async fn catalog_welcome() {
    let srv = spawn("catalog").await;
    let text = srv.client.get(srv.url("/api")).send().await.unwrap().text().await.unwrap();
    assert_eq!(text, "Welcome to the Plant Catalog Database API");
}
