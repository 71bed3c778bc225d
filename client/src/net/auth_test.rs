use super::*;
use crate::state::session::{MemoryStorage, SessionStorage};

fn creds(email: &str, password: &str) -> LoginFormData {
    LoginFormData { email: email.to_owned(), password: password.to_owned() }
}

// =============================================================
// Error translation
// =============================================================

#[test]
fn status_codes_map_to_fixed_messages() {
    assert_eq!(error_for_status(401), LoginError::InvalidCredentials);
    assert_eq!(error_for_status(400), LoginError::InvalidPayload);
    assert_eq!(error_for_status(404), LoginError::ServiceNotFound);
    assert_eq!(error_for_status(500), LoginError::Server);
    assert_eq!(error_for_status(503), LoginError::Server);
    assert_eq!(error_for_status(403), LoginError::Unexpected);
    assert_eq!(error_for_status(302), LoginError::Unexpected);
}

#[test]
fn transport_failures_map_to_connectivity_messages() {
    assert_eq!(error_for_transport(&TransportError::Network("refused".into())), LoginError::Network);
    assert_eq!(error_for_transport(&TransportError::Timeout), LoginError::Timeout);
    assert_eq!(error_for_transport(&TransportError::Other("boom".into())), LoginError::Unexpected);
}

#[test]
fn invalid_credentials_message_is_user_facing() {
    assert_eq!(LoginError::InvalidCredentials.to_string(), "Credenciales inválidas");
    assert_eq!(LoginError::Timeout.to_string(), "Tiempo de espera agotado. El servidor no responde");
}

// =============================================================
// SimulatedLogin
// =============================================================

#[tokio::test(start_paused = true)]
async fn simulated_admin_gets_fixed_user_and_token() {
    let response = SimulatedLogin::default().login(&creds("admin@test.com", "123456")).await.unwrap();
    assert!(response.token.starts_with("fake-jwt-token-"));
    assert!(response.token.len() > "fake-jwt-token-".len());
    assert_eq!(response.user_id, "user-123");
    assert_eq!(response.user.name.as_deref(), Some("Usuario Admin"));
}

#[tokio::test(start_paused = true)]
async fn simulated_error_account_is_rejected() {
    let err = SimulatedLogin::default().login(&creds("error@test.com", "whatever")).await.unwrap_err();
    assert_eq!(err.to_string(), "Credenciales inválidas");
}

#[tokio::test(start_paused = true)]
async fn simulated_other_accounts_get_generated_ids() {
    let login = SimulatedLogin::default();
    let a = login.login(&creds("someone@uni.edu", "abcdef")).await.unwrap();
    let b = login.login(&creds("someone@uni.edu", "abcdef")).await.unwrap();
    assert!(a.user_id.starts_with("user-"));
    assert_ne!(a.user_id, b.user_id);
    assert_eq!(a.user.email, "someone@uni.edu");
    assert_eq!(a.user.name.as_deref(), Some("Usuario de Prueba"));
}

#[tokio::test(start_paused = true)]
async fn simulated_admin_with_wrong_password_still_succeeds_as_generic_user() {
    let response = SimulatedLogin::default().login(&creds("admin@test.com", "654321")).await.unwrap();
    assert_ne!(response.user_id, "user-123");
}

#[tokio::test(start_paused = true)]
async fn simulated_login_waits_for_its_delay() {
    let started = tokio::time::Instant::now();
    SimulatedLogin::default().login(&creds("a@b.co", "123456")).await.unwrap();
    assert!(started.elapsed() >= SIMULATED_LOGIN_DELAY);
}

#[tokio::test(start_paused = true)]
async fn simulated_delay_is_configurable() {
    let started = tokio::time::Instant::now();
    SimulatedLogin::with_delay(Duration::from_millis(250)).login(&creds("a@b.co", "123456")).await.unwrap();
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_millis(250));
    assert!(elapsed < SIMULATED_LOGIN_DELAY);
}

// =============================================================
// LoginService
// =============================================================

struct FixedTransport(Result<LoginResponse, LoginError>);

#[async_trait::async_trait(?Send)]
impl LoginTransport for FixedTransport {
    async fn login(&self, _data: &LoginFormData) -> Result<LoginResponse, LoginError> {
        self.0.clone()
    }
}

#[tokio::test]
async fn service_persists_session_on_success() {
    let storage = Arc::new(MemoryStorage::default());
    let transport = FixedTransport(Ok(LoginResponse {
        token: "tok-9".into(),
        user_id: "user-9".into(),
        user: AuthUser { id: "user-9".into(), email: "a@b.co".into(), name: None },
    }));
    let service = LoginService::new(Arc::new(transport), Session::new(storage.clone()));

    service.submit(&creds("a@b.co", "123456")).await.unwrap();

    assert_eq!(storage.get("authToken").as_deref(), Some("tok-9"));
    assert_eq!(storage.get("userId").as_deref(), Some("user-9"));
    assert_eq!(storage.get("userEmail").as_deref(), Some("a@b.co"));
}

#[tokio::test]
async fn service_reraises_failure_without_touching_storage() {
    let storage = Arc::new(MemoryStorage::default());
    let service =
        LoginService::new(Arc::new(FixedTransport(Err(LoginError::Server))), Session::new(storage.clone()));

    assert_eq!(service.submit(&creds("a@b.co", "123456")).await, Err(LoginError::Server));
    assert_eq!(storage.get("authToken"), None);
}

// =============================================================
// HttpLogin against a local server
// =============================================================

#[cfg(not(feature = "hydrate"))]
mod against_server {
    use axum::Json;
    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::{get, post};

    use super::*;

    async fn login(Json(body): Json<LoginFormData>) -> Result<Json<serde_json::Value>, StatusCode> {
        match (body.email.as_str(), body.password.as_str()) {
            ("ok@uni.edu", "123456") => Ok(Json(serde_json::json!({
                "token": "real-token",
                "userId": "42",
                "user": { "id": "42", "email": "ok@uni.edu", "name": "Ok" }
            }))),
            ("garbage@uni.edu", _) => Ok(Json(serde_json::json!({ "unexpected": true }))),
            ("bad@uni.edu", _) => Err(StatusCode::BAD_REQUEST),
            ("down@uni.edu", _) => Err(StatusCode::BAD_GATEWAY),
            ("slow@uni.edu", _) => {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Err(StatusCode::UNAUTHORIZED)
            }
            _ => Err(StatusCode::UNAUTHORIZED),
        }
    }

    async fn spawn_auth_backend() -> String {
        let router = Router::new()
            .route("/", get(|| async { "up" }))
            .route("/api/auth/login", post(login));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/")
    }

    #[tokio::test]
    async fn http_login_returns_backend_response() {
        let transport = HttpLogin::new(spawn_auth_backend().await);
        let response = transport.login(&creds("ok@uni.edu", "123456")).await.unwrap();
        assert_eq!(response.token, "real-token");
        assert_eq!(response.user_id, "42");
    }

    #[tokio::test]
    async fn http_login_translates_statuses() {
        let transport = HttpLogin::new(spawn_auth_backend().await);
        assert_eq!(transport.login(&creds("who@uni.edu", "123456")).await, Err(LoginError::InvalidCredentials));
        assert_eq!(transport.login(&creds("bad@uni.edu", "123456")).await, Err(LoginError::InvalidPayload));
        assert_eq!(transport.login(&creds("down@uni.edu", "123456")).await, Err(LoginError::Server));
    }

    #[tokio::test]
    async fn http_login_with_malformed_success_body_is_unexpected() {
        let transport = HttpLogin::new(spawn_auth_backend().await);
        assert_eq!(transport.login(&creds("garbage@uni.edu", "123456")).await, Err(LoginError::Unexpected));
    }

    #[tokio::test]
    async fn http_login_times_out() {
        let transport = HttpLogin::new(spawn_auth_backend().await).with_timeout(Duration::from_millis(100));
        assert_eq!(transport.login(&creds("slow@uni.edu", "123456")).await, Err(LoginError::Timeout));
    }

    #[tokio::test]
    async fn http_login_to_missing_route_is_service_not_found() {
        let base = spawn_auth_backend().await;
        let transport = HttpLogin::new(format!("{base}nested"));
        assert_eq!(transport.login(&creds("ok@uni.edu", "123456")).await, Err(LoginError::ServiceNotFound));
    }

    #[tokio::test]
    async fn http_login_to_closed_port_is_network_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let transport = HttpLogin::new(format!("http://{addr}"));
        assert_eq!(transport.login(&creds("ok@uni.edu", "123456")).await, Err(LoginError::Network));
    }

    #[tokio::test]
    async fn probe_reports_reachability() {
        assert!(HttpLogin::new(spawn_auth_backend().await).probe().await);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        assert!(!HttpLogin::new(format!("http://{addr}")).probe().await);
    }
}
