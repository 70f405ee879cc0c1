//! Integration tests for notification listing, read-marking, and deletion.

use http::StatusCode;
use uuid::Uuid;

use bakery_entity::user::UserRole;

use crate::helpers;

#[tokio::test]
async fn test_list_requires_auth() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/notifications", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_includes_direct_and_broadcast() {
    let app = helpers::TestApp::new().await;
    let pedro = app
        .create_test_user("Pedro", UserRole::Empleado, None)
        .await;
    let otro = app.create_test_user("Otro", UserRole::Empleado, None).await;

    insert_notification(&app, Some(pedro), None, "Para Pedro").await;
    insert_notification(&app, None, None, "Para todos").await;
    insert_notification(&app, Some(otro), None, "Para Otro").await;

    let token = app.token_for(pedro, "Pedro", UserRole::Empleado);
    let response = app
        .request("GET", "/api/notifications", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let titles: Vec<&str> = response.body["data"]
        .as_array()
        .expect("data array")
        .iter()
        .filter_map(|n| n["titulo"].as_str())
        .collect();
    assert!(titles.contains(&"Para Pedro"));
    assert!(titles.contains(&"Para todos"));
    assert!(!titles.contains(&"Para Otro"));
}

#[tokio::test]
async fn test_mark_read_is_idempotent() {
    let app = helpers::TestApp::new().await;
    let pedro = app
        .create_test_user("Pedro", UserRole::Empleado, None)
        .await;
    let id = insert_notification(&app, Some(pedro), None, "Aviso").await;
    let token = app.token_for(pedro, "Pedro", UserRole::Empleado);

    let path = format!("/api/notifications/{}/read", id);
    let first = app.request("PUT", &path, None, Some(&token)).await;
    assert_eq!(first.status, StatusCode::OK);

    let second = app.request("PUT", &path, None, Some(&token)).await;
    assert_eq!(second.status, StatusCode::OK);

    let estado: String = sqlx::query_scalar("SELECT estado::text FROM notificaciones WHERE id = $1")
        .bind(id)
        .fetch_one(&app.db_pool)
        .await
        .expect("fetch estado");
    assert_eq!(estado, "leida");
}

#[tokio::test]
async fn test_mark_read_other_users_notification_is_not_found() {
    let app = helpers::TestApp::new().await;
    let pedro = app
        .create_test_user("Pedro", UserRole::Empleado, None)
        .await;
    let otro = app.create_test_user("Otro", UserRole::Empleado, None).await;
    let id = insert_notification(&app, Some(otro), None, "Ajeno").await;

    let token = app.token_for(pedro, "Pedro", UserRole::Empleado);
    let response = app
        .request(
            "PUT",
            &format!("/api/notifications/{}/read", id),
            None,
            Some(&token),
        )
        .await;

    // Not-owned and nonexistent are deliberately the same answer.
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_only_own_direct_notification() {
    let app = helpers::TestApp::new().await;
    let pedro = app
        .create_test_user("Pedro", UserRole::Empleado, None)
        .await;
    let direct = insert_notification(&app, Some(pedro), None, "Directa").await;
    let broadcast = insert_notification(&app, None, None, "Para todos").await;
    let token = app.token_for(pedro, "Pedro", UserRole::Empleado);

    let response = app
        .request(
            "DELETE",
            &format!("/api/notifications/{}", direct),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "DELETE",
            &format!("/api/notifications/{}", broadcast),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_stats_pending_count_admin_only() {
    let app = helpers::TestApp::new().await;
    let admin = app
        .create_test_user("Maria", UserRole::Administrador, None)
        .await;
    let pedro = app
        .create_test_user("Pedro", UserRole::Empleado, None)
        .await;
    insert_request(&app, pedro, "Solicitud pendiente").await;

    let admin_token = app.token_for(admin, "Maria", UserRole::Administrador);
    let response = app
        .request("GET", "/api/notifications/stats", None, Some(&admin_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["pendientes_aprobacion"], 1);

    let pedro_token = app.token_for(pedro, "Pedro", UserRole::Empleado);
    let response = app
        .request("GET", "/api/notifications/stats", None, Some(&pedro_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["pendientes_aprobacion"].is_null());
}

#[tokio::test]
async fn test_clean_expired_removes_only_past_expiry() {
    let app = helpers::TestApp::new().await;
    let admin = app
        .create_test_user("Maria", UserRole::Administrador, None)
        .await;

    let expired = insert_notification(&app, None, None, "Vieja").await;
    sqlx::query("UPDATE notificaciones SET expires_at = NOW() - INTERVAL '1 day' WHERE id = $1")
        .bind(expired)
        .execute(&app.db_pool)
        .await
        .expect("set expiry");
    insert_notification(&app, None, None, "Vigente").await;

    let token = app.token_for(admin, "Maria", UserRole::Administrador);
    let response = app
        .request("DELETE", "/api/notifications/expired", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["removed"], 1);

    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM notificaciones")
        .fetch_one(&app.db_pool)
        .await
        .expect("count");
    assert_eq!(remaining, 1);
}

/// Insert a plain informational notification directly into the store.
async fn insert_notification(
    app: &helpers::TestApp,
    destinatario: Option<Uuid>,
    rol: Option<UserRole>,
    titulo: &str,
) -> Uuid {
    sqlx::query_scalar(
        "INSERT INTO notificaciones \
         (titulo, mensaje, tipo, usuario_solicitante_id, usuario_solicitante_nombre, \
          modulo, accion, usuario_destinatario_id, tipo_usuario_destinatario, requiere_aprobacion) \
         VALUES ($1, 'cuerpo', 'info', $2, 'Sistema', 'general', 'personalizada', $3, $4, FALSE) \
         RETURNING id",
    )
    .bind(titulo)
    .bind(Uuid::nil())
    .bind(destinatario)
    .bind(rol)
    .fetch_one(&app.db_pool)
    .await
    .expect("insert notification")
}

/// Insert a pending approval request addressed to administrators.
async fn insert_request(app: &helpers::TestApp, requester: Uuid, titulo: &str) -> Uuid {
    sqlx::query_scalar(
        "INSERT INTO notificaciones \
         (titulo, mensaje, tipo, usuario_solicitante_id, usuario_solicitante_nombre, \
          modulo, accion, tipo_usuario_destinatario, requiere_aprobacion) \
         VALUES ($1, 'cuerpo', 'solicitud', $2, 'Pedro', 'ingredientes', \
                 'solicitar_eliminar', 'administrador', TRUE) \
         RETURNING id",
    )
    .bind(titulo)
    .bind(requester)
    .fetch_one(&app.db_pool)
    .await
    .expect("insert request")
}
