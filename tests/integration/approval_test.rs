//! Integration tests for the approval workflow.

use http::StatusCode;
use uuid::Uuid;

use bakery_entity::user::UserRole;

use crate::helpers;

#[tokio::test]
async fn test_employee_cannot_decide() {
    let app = helpers::TestApp::new().await;
    let pedro = app
        .create_test_user("Pedro", UserRole::Empleado, None)
        .await;
    let id = insert_request(&app, pedro).await;

    let token = app.token_for(pedro, "Pedro", UserRole::Empleado);
    let response = app
        .request(
            "PUT",
            &format!("/api/notifications/{}/approve", id),
            Some(serde_json::json!({ "action": "aprobada" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);

    // The record must be untouched.
    let estado: String = sqlx::query_scalar("SELECT estado::text FROM notificaciones WHERE id = $1")
        .bind(id)
        .fetch_one(&app.db_pool)
        .await
        .expect("fetch estado");
    assert_eq!(estado, "no_leida");
}

#[tokio::test]
async fn test_approve_creates_follow_up_for_requester() {
    let app = helpers::TestApp::new().await;
    let admin = app
        .create_test_user("Maria", UserRole::Administrador, None)
        .await;
    let pedro = app
        .create_test_user("Pedro", UserRole::Empleado, None)
        .await;
    let id = insert_request(&app, pedro).await;

    let token = app.token_for(admin, "Maria", UserRole::Administrador);
    let response = app
        .request(
            "PUT",
            &format!("/api/notifications/{}/approve", id),
            Some(serde_json::json!({ "action": "aprobada", "comment": "adelante" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["estado"], "aprobada");
    assert_eq!(response.body["data"]["aprobada_por_nombre"], "Maria");

    let (titulo, mensaje): (String, String) = sqlx::query_as(
        "SELECT titulo, mensaje FROM notificaciones \
         WHERE usuario_destinatario_id = $1 AND tipo = 'aprobacion'",
    )
    .bind(pedro)
    .fetch_one(&app.db_pool)
    .await
    .expect("follow-up must exist");

    assert_eq!(titulo, "Solicitud aprobada");
    assert!(mensaje.contains("aprobada"));
    assert!(mensaje.contains("Maria"));
    assert!(mensaje.contains("adelante"));
}

#[tokio::test]
async fn test_second_decision_is_not_found() {
    let app = helpers::TestApp::new().await;
    let admin = app
        .create_test_user("Maria", UserRole::Administrador, None)
        .await;
    let pedro = app
        .create_test_user("Pedro", UserRole::Empleado, None)
        .await;
    let id = insert_request(&app, pedro).await;
    let token = app.token_for(admin, "Maria", UserRole::Administrador);

    let path = format!("/api/notifications/{}/approve", id);
    let first = app
        .request(
            "PUT",
            &path,
            Some(serde_json::json!({ "action": "rechazada" })),
            Some(&token),
        )
        .await;
    assert_eq!(first.status, StatusCode::OK);

    let second = app
        .request(
            "PUT",
            &path,
            Some(serde_json::json!({ "action": "aprobada" })),
            Some(&token),
        )
        .await;
    assert_eq!(second.status, StatusCode::NOT_FOUND);

    // The first decision stands.
    let estado: String = sqlx::query_scalar("SELECT estado::text FROM notificaciones WHERE id = $1")
        .bind(id)
        .fetch_one(&app.db_pool)
        .await
        .expect("fetch estado");
    assert_eq!(estado, "rechazada");
}

#[tokio::test]
async fn test_invalid_action_is_bad_request() {
    let app = helpers::TestApp::new().await;
    let admin = app
        .create_test_user("Maria", UserRole::Administrador, None)
        .await;
    let pedro = app
        .create_test_user("Pedro", UserRole::Empleado, None)
        .await;
    let id = insert_request(&app, pedro).await;

    let token = app.token_for(admin, "Maria", UserRole::Administrador);
    let response = app
        .request(
            "PUT",
            &format!("/api/notifications/{}/approve", id),
            Some(serde_json::json!({ "action": "tal vez" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_pending_list_admin_only_and_fifo() {
    let app = helpers::TestApp::new().await;
    let admin = app
        .create_test_user("Maria", UserRole::Administrador, None)
        .await;
    let pedro = app
        .create_test_user("Pedro", UserRole::Empleado, None)
        .await;

    let first = insert_request(&app, pedro).await;
    let second = insert_request(&app, pedro).await;
    sqlx::query("UPDATE notificaciones SET created_at = NOW() - INTERVAL '1 hour' WHERE id = $1")
        .bind(first)
        .execute(&app.db_pool)
        .await
        .expect("age first request");

    let pedro_token = app.token_for(pedro, "Pedro", UserRole::Empleado);
    let response = app
        .request(
            "GET",
            "/api/notifications/pending",
            None,
            Some(&pedro_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let admin_token = app.token_for(admin, "Maria", UserRole::Administrador);
    let response = app
        .request(
            "GET",
            "/api/notifications/pending",
            None,
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let ids: Vec<String> = response.body["data"]
        .as_array()
        .expect("data array")
        .iter()
        .filter_map(|n| n["id"].as_str().map(String::from))
        .collect();
    assert_eq!(ids, vec![first.to_string(), second.to_string()]);
}

#[tokio::test]
async fn test_custom_notification_persists_despite_push_failure() {
    let app = helpers::TestApp::new().await;
    // Admin with a registered token; the test push endpoint is unreachable.
    let _admin = app
        .create_test_user(
            "Maria",
            UserRole::Administrador,
            Some("ExponentPushToken[maria-device]"),
        )
        .await;
    let pedro = app
        .create_test_user("Pedro", UserRole::Empleado, None)
        .await;

    let token = app.token_for(pedro, "Pedro", UserRole::Empleado);
    let response = app
        .request(
            "POST",
            "/api/notifications/custom",
            Some(serde_json::json!({
                "titulo": "Horno fuera de servicio",
                "mensaje": "El horno principal requiere mantenimiento",
                "modulo": "general",
                "datos_extra": { "equipo": "horno-1" },
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["id"].is_string());
    assert_eq!(response.body["delivery"]["sent"], 0);
    assert_eq!(response.body["delivery"]["errors"], 1);

    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM notificaciones WHERE titulo = 'Horno fuera de servicio'",
    )
    .fetch_one(&app.db_pool)
    .await
    .expect("count");
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_custom_notification_missing_fields_rejected() {
    let app = helpers::TestApp::new().await;
    let pedro = app
        .create_test_user("Pedro", UserRole::Empleado, None)
        .await;

    let token = app.token_for(pedro, "Pedro", UserRole::Empleado);
    let response = app
        .request(
            "POST",
            "/api/notifications/custom",
            Some(serde_json::json!({ "titulo": "Solo titulo" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

/// Insert a pending approval request addressed to administrators.
async fn insert_request(app: &helpers::TestApp, requester: Uuid) -> Uuid {
    sqlx::query_scalar(
        "INSERT INTO notificaciones \
         (titulo, mensaje, tipo, usuario_solicitante_id, usuario_solicitante_nombre, \
          modulo, accion, tipo_usuario_destinatario, requiere_aprobacion, objeto_nombre) \
         VALUES ('Solicitud para eliminar ingrediente', 'Pedro solicita eliminar \"Harina\"', \
                 'solicitud', $1, 'Pedro', 'ingredientes', 'solicitar_eliminar', \
                 'administrador', TRUE, 'Harina') \
         RETURNING id",
    )
    .bind(requester)
    .fetch_one(&app.db_pool)
    .await
    .expect("insert request")
}
