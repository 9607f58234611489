use axum::http::StatusCode;
use prova_api::router;
use serde_json::json;

use crate::common::{self, TestClient, TestStateBuilder, unique};

#[tokio::test]
async fn test_create_usuario_then_get_returns_profile_without_senha() {
    let state = TestStateBuilder::new()
        .build()
        .await
        .expect("Failed to create test state");

    let app = router::router().with_state(state.clone());
    let client = TestClient::new(app);

    let email = unique("ana@example.com");
    let body = json!({
        "nome": "Ana Souza",
        "email": email,
        "senha": "segredo123"
    });

    let response = client.post_json("/usuarios", &body).await;
    response.assert_status(StatusCode::CREATED);

    let json: serde_json::Value = response.json();
    assert_eq!(
        json["mensagem"].as_str().unwrap(),
        "Usuário criado com sucesso!"
    );

    let list = client.get("/usuarios").await;
    list.assert_status(StatusCode::OK);
    let entries = list.json();
    let created = entries
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["email"].as_str() == Some(email.as_str()))
        .expect("created user should appear in the list")
        .clone();

    assert!(
        created.get("senha").is_none(),
        "list response must not carry senha"
    );

    let id = created["id"].as_i64().unwrap();
    let response = client.get(&format!("/usuarios/{id}")).await;
    response.assert_status(StatusCode::OK);

    let json = response.json();
    assert_eq!(json["nome"].as_str().unwrap(), "Ana Souza");
    assert_eq!(json["email"].as_str().unwrap(), email);
    assert!(json.get("criado_em").is_some());
    assert!(
        json.get("senha").is_none(),
        "get response must not carry senha"
    );
}

#[tokio::test]
async fn test_create_usuario_stores_bcrypt_hash_not_plaintext() {
    let state = TestStateBuilder::new()
        .build()
        .await
        .expect("Failed to create test state");

    let app = router::router().with_state(state.clone());
    let client = TestClient::new(app);

    let email = unique("bruno@example.com");
    let body = json!({
        "nome": "Bruno Lima",
        "email": email,
        "senha": "minha-senha"
    });

    client
        .post_json("/usuarios", &body)
        .await
        .assert_status(StatusCode::CREATED);

    let list = client.get("/usuarios").await.json();
    let id = list
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["email"].as_str() == Some(email.as_str()))
        .and_then(|u| u["id"].as_i64())
        .expect("created user should appear in the list") as i32;

    let hash = common::db::senha_hash(&state.pool, id)
        .await
        .expect("Failed to read stored senha");
    assert_ne!(hash, "minha-senha");
    assert!(
        bcrypt::verify("minha-senha", &hash).unwrap(),
        "stored senha should be a bcrypt hash of the submitted password"
    );
}

#[tokio::test]
async fn test_create_usuario_missing_fields() {
    let state = TestStateBuilder::new()
        .build()
        .await
        .expect("Failed to create test state");

    let app = router::router().with_state(state);
    let client = TestClient::new(app);

    let response = client
        .post_json("/usuarios", &json!({ "nome": "Carla" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json();
    assert_eq!(
        json["erro"].as_str().unwrap(),
        "Todos os campos são obrigatórios."
    );
    let campos: Vec<&str> = json["campos"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c.as_str().unwrap())
        .collect();
    assert_eq!(campos, vec!["email", "senha"]);
}

#[tokio::test]
async fn test_update_usuario_partial_body_preserves_omitted_fields() {
    let state = TestStateBuilder::new()
        .build()
        .await
        .expect("Failed to create test state");

    let email = unique("diego@example.com");
    let id = common::db::insert_usuario(&state.pool, "Diego Alves", &email, "senha-antiga")
        .await
        .expect("Failed to seed user");

    let app = router::router().with_state(state.clone());
    let client = TestClient::new(app);

    let response = client
        .put_json(&format!("/usuarios/{id}"), &json!({ "nome": "Diego A. Alves" }))
        .await;
    response.assert_status(StatusCode::OK);

    let json = response.json();
    assert_eq!(
        json["mensagem"].as_str().unwrap(),
        "Usuário atualizado com sucesso!"
    );

    let stored = common::db::get_usuario(&state.pool, id)
        .await
        .expect("Failed to query user")
        .expect("User should still exist");
    assert_eq!(stored.nome, "Diego A. Alves");
    assert_eq!(stored.email, email);

    // The omitted senha keeps its old hash
    let hash = common::db::senha_hash(&state.pool, id)
        .await
        .expect("Failed to read stored senha");
    assert!(bcrypt::verify("senha-antiga", &hash).unwrap());
}

#[tokio::test]
async fn test_update_usuario_senha_is_rehashed() {
    let state = TestStateBuilder::new()
        .build()
        .await
        .expect("Failed to create test state");

    let email = unique("elisa@example.com");
    let id = common::db::insert_usuario(&state.pool, "Elisa Prado", &email, "senha-antiga")
        .await
        .expect("Failed to seed user");

    let app = router::router().with_state(state.clone());
    let client = TestClient::new(app);

    client
        .put_json(&format!("/usuarios/{id}"), &json!({ "senha": "senha-nova" }))
        .await
        .assert_status(StatusCode::OK);

    let hash = common::db::senha_hash(&state.pool, id)
        .await
        .expect("Failed to read stored senha");
    assert!(bcrypt::verify("senha-nova", &hash).unwrap());
    assert!(!bcrypt::verify("senha-antiga", &hash).unwrap());
}

#[tokio::test]
async fn test_update_usuario_not_found() {
    let state = TestStateBuilder::new()
        .build()
        .await
        .expect("Failed to create test state");

    let app = router::router().with_state(state);
    let client = TestClient::new(app);

    let response = client
        .put_json("/usuarios/999999", &json!({ "nome": "Ninguém" }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    let json = response.json();
    assert_eq!(json["mensagem"].as_str().unwrap(), "Usuário não encontrado");
}

#[tokio::test]
async fn test_delete_usuario_then_get_not_found() {
    let state = TestStateBuilder::new()
        .build()
        .await
        .expect("Failed to create test state");

    let email = unique("fabio@example.com");
    let id = common::db::insert_usuario(&state.pool, "Fábio Costa", &email, "senha123")
        .await
        .expect("Failed to seed user");

    let app = router::router().with_state(state.clone());
    let client = TestClient::new(app);

    let response = client.delete(&format!("/usuarios/{id}")).await;
    response.assert_status(StatusCode::OK);

    let json = response.json();
    assert_eq!(
        json["mensagem"].as_str().unwrap(),
        "Usuário excluído com sucesso!"
    );

    let response = client.get(&format!("/usuarios/{id}")).await;
    response.assert_status(StatusCode::NOT_FOUND);

    let json = response.json();
    assert_eq!(json["mensagem"].as_str().unwrap(), "Usuário não encontrado");
}
