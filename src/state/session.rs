use leptos::*;

use crate::api::{ApiClient, ApiError, LoginRequest, Usuario};

type SessionContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

/// Estado da sessão do tab. Há exatamente um escritor (o provider); todo o
/// resto da árvore consome snapshots via sinal.
#[derive(Debug, Clone)]
pub struct AuthState {
    pub user: Option<Usuario>,
    pub loading: bool,
    pub(crate) checking: bool,
    pub(crate) initial_check_done: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
            checking: false,
            initial_check_done: false,
        }
    }
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let (auth, set_auth) = create_signal(AuthState::default());
    provide_context::<SessionContext>((auth, set_auth));

    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    spawn_local(async move {
        check_auth(&api, auth, set_auth).await;
    });

    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

/// Verifica se há sessão ativa. Atalhos, nesta ordem: usuário já carregado
/// (`true`, sem rede); verificação em andamento (`false`); verificação
/// inicial já concluída sem usuário (`false`, não tenta de novo). O flag
/// `checking` é gravado antes do primeiro `await`, então uma segunda chamada
/// durante a verificação em voo observa o flag e desiste.
pub async fn check_auth(
    api: &ApiClient,
    auth: ReadSignal<AuthState>,
    set_auth: WriteSignal<AuthState>,
) -> bool {
    let snapshot = auth.get_untracked();
    if snapshot.user.is_some() {
        return true;
    }
    if snapshot.checking {
        return false;
    }
    if snapshot.initial_check_done {
        return false;
    }

    set_auth.update(|state| state.checking = true);
    let result = api.me().await;
    let authenticated = result.is_ok();
    set_auth.update(|state| {
        state.user = result.ok();
        state.checking = false;
        state.initial_check_done = true;
        state.loading = false;
    });
    authenticated
}

/// O usuário só é populado se o login E a consulta `/auth/me` subsequente
/// tiverem sucesso; o corpo da resposta de login nunca vira sessão sozinho.
pub async fn login(
    api: &ApiClient,
    set_auth: WriteSignal<AuthState>,
    request: LoginRequest,
) -> Result<(), ApiError> {
    set_auth.update(|state| state.loading = true);

    let outcome: Result<Usuario, ApiError> = async {
        api.login(&request).await?;
        api.me().await
    }
    .await;

    match outcome {
        Ok(user) => {
            set_auth.update(|state| {
                state.user = Some(user);
                state.loading = false;
                state.initial_check_done = true;
            });
            Ok(())
        }
        Err(error) => {
            set_auth.update(|state| {
                state.user = None;
                state.loading = false;
                state.initial_check_done = true;
            });
            Err(error)
        }
    }
}

/// Logout é melhor-esforço no backend; a sessão local é limpa
/// incondicionalmente, junto com a seleção de proprietário persistida.
pub async fn logout(api: &ApiClient, set_auth: WriteSignal<AuthState>) {
    if let Err(error) = api.logout().await {
        log::warn!("Logout no backend falhou: {}", error);
    }
    set_auth.update(|state| {
        state.user = None;
        state.loading = false;
        state.initial_check_done = false;
    });
    #[cfg(target_arch = "wasm32")]
    {
        crate::utils::storage::clear_active_proprietario();
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(crate::router::LOGIN_PATH);
        }
    }
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_session();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let api = api.clone();
        async move { login(&api, set_auth, payload).await }
    })
}

pub fn use_logout_action() -> Action<(), ()> {
    let (_auth, set_auth) = use_session();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    create_action(move |_: &()| {
        let api = api.clone();
        async move { logout(&api, set_auth).await }
    })
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::time::Duration;

    fn me_body() -> serde_json::Value {
        json!({
            "user": {"id": 1, "email": "ana@gov.br", "fullName": "Ana Lima", "roleId": 2}
        })
    }

    #[tokio::test]
    async fn check_auth_with_cached_user_makes_no_network_call() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/auth/me");
            then.status(200).json_body(me_body());
        });

        let runtime = create_runtime();
        let (auth, set_auth) = create_signal(AuthState::default());
        set_auth.update(|state| {
            state.user = Some(Usuario {
                id: 1,
                email: "ana@gov.br".into(),
                full_name: None,
                role_id: 2,
            });
            state.loading = false;
        });

        let api = ApiClient::new_with_base_url(server.url("/api"));
        assert!(check_auth(&api, auth, set_auth).await);
        mock.assert_hits(0);
        runtime.dispose();
    }

    #[tokio::test]
    async fn concurrent_checks_share_a_single_request() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/auth/me");
            then.status(200)
                .json_body(me_body())
                .delay(Duration::from_millis(50));
        });

        let runtime = create_runtime();
        let (auth, set_auth) = create_signal(AuthState::default());
        let api = ApiClient::new_with_base_url(server.url("/api"));

        let (first, second) = futures::join!(
            check_auth(&api, auth, set_auth),
            check_auth(&api, auth, set_auth)
        );
        assert!(first);
        assert!(!second);
        mock.assert_hits(1);
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_initial_check_is_not_retried() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/auth/me");
            then.status(401).json_body(json!({"message": "não autenticado"}));
        });

        let runtime = create_runtime();
        let (auth, set_auth) = create_signal(AuthState::default());
        let api = ApiClient::new_with_base_url(server.url("/api"));

        assert!(!check_auth(&api, auth, set_auth).await);
        let snapshot = auth.get_untracked();
        assert!(snapshot.user.is_none());
        assert!(!snapshot.loading);
        assert!(snapshot.initial_check_done);

        assert!(!check_auth(&api, auth, set_auth).await);
        mock.assert_hits(1);
        runtime.dispose();
    }

    #[tokio::test]
    async fn login_requires_both_calls_to_succeed() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(200).json_body(json!({"ok": true}));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/auth/me");
            then.status(500).json_body(json!({}));
        });

        let runtime = create_runtime();
        let (auth, set_auth) = create_signal(AuthState::default());
        let api = ApiClient::new_with_base_url(server.url("/api"));

        let result = login(
            &api,
            set_auth,
            LoginRequest {
                email: "ana@gov.br".into(),
                password: "s3nh4".into(),
            },
        )
        .await;

        assert!(result.is_err());
        let snapshot = auth.get_untracked();
        assert!(snapshot.user.is_none());
        assert!(!snapshot.loading);
        runtime.dispose();
    }

    #[tokio::test]
    async fn successful_login_populates_the_session_from_me() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(200).json_body(json!({"ok": true}));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/auth/me");
            then.status(200).json_body(me_body());
        });

        let runtime = create_runtime();
        let (auth, set_auth) = create_signal(AuthState::default());
        let api = ApiClient::new_with_base_url(server.url("/api"));

        login(
            &api,
            set_auth,
            LoginRequest {
                email: "ana@gov.br".into(),
                password: "s3nh4".into(),
            },
        )
        .await
        .unwrap();

        let snapshot = auth.get_untracked();
        let user = snapshot.user.expect("usuário carregado");
        assert_eq!(user.email, "ana@gov.br");
        assert!(user.is_gestor());
        runtime.dispose();
    }

    #[tokio::test]
    async fn logout_clears_the_session_even_when_the_backend_fails() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/logout");
            then.status(500).json_body(json!({}));
        });

        let runtime = create_runtime();
        let (auth, set_auth) = create_signal(AuthState::default());
        set_auth.update(|state| {
            state.user = Some(Usuario {
                id: 1,
                email: "ana@gov.br".into(),
                full_name: None,
                role_id: 2,
            });
            state.loading = false;
        });

        let api = ApiClient::new_with_base_url(server.url("/api"));
        logout(&api, set_auth).await;

        let snapshot = auth.get_untracked();
        assert!(snapshot.user.is_none());
        assert!(!snapshot.loading);
        runtime.dispose();
    }
}
