use leptos::*;
use leptos_router::*;

use crate::{
    components::guard::{RequireAdmin, RequireAuth},
    pages::{
        categorias::CategoriasPage, dashboard::DashboardPage, home::HomePage, login::LoginPage,
        usuarios::UsuariosPage,
    },
    state::{session::SessionProvider, tenant::ProprietariosProvider},
};

pub const LOGIN_PATH: &str = "/login";
pub const DEFAULT_AUTHENTICATED_PATH: &str = "/dashboard";

/// Cookie opaco de sessão gravado pelo backend. O guard de borda testa
/// apenas a presença; o conteúdo nunca é interpretado no cliente.
pub const AUTH_COOKIE: &str = "catalogo_token";

pub const ROUTE_PATHS: &[&str] = &["/", "/login", "/dashboard", "/categorias", "/usuarios"];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &["/dashboard", "/categorias", "/usuarios"];

/// Caminhos que o guard de borda deixa passar sem avaliar (API e estáticos).
const EDGE_EXCLUDED_PREFIXES: &[&str] = &["/api", "/assets", "/images", "/favicon.ico", "/pkg"];

/// Regras do guard de borda, avaliadas antes de qualquer código de página:
/// `/login` com cookie presente → rota autenticada padrão; qualquer outra
/// rota sem cookie → `/login`; caso contrário segue sem mexer. Checagem de
/// presença apenas; a autorização real é sempre do backend.
pub fn edge_decision(path: &str, has_cookie: bool) -> Option<&'static str> {
    if EDGE_EXCLUDED_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
    {
        return None;
    }
    if path == LOGIN_PATH && has_cookie {
        return Some(DEFAULT_AUTHENTICATED_PATH);
    }
    if path != LOGIN_PATH && !has_cookie {
        return Some(LOGIN_PATH);
    }
    None
}

pub fn cookie_present(cookie_header: &str, name: &str) -> bool {
    cookie_header.split(';').any(|pair| {
        let mut parts = pair.trim().splitn(2, '=');
        let key_matches = parts.next().map(|key| key.trim() == name).unwrap_or(false);
        let has_value = parts
            .next()
            .map(|value| !value.trim().is_empty())
            .unwrap_or(false);
        key_matches && has_value
    })
}

/// Aplica a decisão de borda uma única vez, antes do mount. Retorna `true`
/// quando um redirect foi emitido (o chamador então não monta a aplicação).
#[cfg(target_arch = "wasm32")]
pub fn enforce_edge_guard() -> bool {
    use wasm_bindgen::JsCast;

    let Some(window) = web_sys::window() else {
        return false;
    };
    let location = window.location();
    let Ok(path) = location.pathname() else {
        return false;
    };
    let has_cookie = window
        .document()
        .and_then(|document| document.dyn_into::<web_sys::HtmlDocument>().ok())
        .and_then(|document| document.cookie().ok())
        .map(|cookies| cookie_present(&cookies, AUTH_COOKIE))
        .unwrap_or(false);

    match edge_decision(&path, has_cookie) {
        Some(target) => {
            let _ = location.set_href(target);
            true
        }
        None => false,
    }
}

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    view! {
        <SessionProvider>
            <ProprietariosProvider>
                <Router>
                    <Routes>
                        <Route path="/" view=HomePage/>
                        <Route path="/login" view=LoginPage/>
                        <Route path="/dashboard" view=ProtectedDashboard/>
                        <Route path="/categorias" view=ProtectedCategorias/>
                        <Route path="/usuarios" view=ProtectedUsuarios/>
                    </Routes>
                </Router>
            </ProprietariosProvider>
        </SessionProvider>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><DashboardPage/></RequireAuth> }
}

#[component]
fn ProtectedCategorias() -> impl IntoView {
    view! { <RequireAuth><CategoriasPage/></RequireAuth> }
}

#[component]
fn ProtectedUsuarios() -> impl IntoView {
    view! { <RequireAdmin><UsuariosPage/></RequireAdmin> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn login_with_cookie_bounces_to_the_dashboard() {
        assert_eq!(edge_decision("/login", true), Some("/dashboard"));
    }

    #[test]
    fn protected_paths_without_cookie_bounce_to_login() {
        assert_eq!(edge_decision("/dashboard", false), Some("/login"));
        assert_eq!(edge_decision("/categorias", false), Some("/login"));
        assert_eq!(edge_decision("/", false), Some("/login"));
    }

    #[test]
    fn matching_cookie_and_path_pass_through() {
        assert_eq!(edge_decision("/login", false), None);
        assert_eq!(edge_decision("/dashboard", true), None);
        assert_eq!(edge_decision("/", true), None);
    }

    #[test]
    fn excluded_prefixes_are_never_redirected() {
        assert_eq!(edge_decision("/api/proprietarios", false), None);
        assert_eq!(edge_decision("/assets/app.css", false), None);
        assert_eq!(edge_decision("/images/logo.png", false), None);
        assert_eq!(edge_decision("/favicon.ico", false), None);
        assert_eq!(edge_decision("/pkg/catalogo.js", false), None);
    }

    #[test]
    fn cookie_presence_parses_the_cookie_header() {
        assert!(cookie_present("catalogo_token=abc", AUTH_COOKIE));
        assert!(cookie_present(
            "theme=dark; catalogo_token=abc; lang=pt",
            AUTH_COOKIE
        ));
        assert!(!cookie_present("", AUTH_COOKIE));
        assert!(!cookie_present("theme=dark", AUTH_COOKIE));
        assert!(!cookie_present("catalogo_token=", AUTH_COOKIE));
        assert!(!cookie_present("catalogo_token_old=abc", AUTH_COOKIE));
    }

    #[test]
    fn protected_routes_are_subset_of_all() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        for path in PROTECTED_ROUTE_PATHS {
            assert!(
                all.contains(path),
                "protected path missing from ROUTE_PATHS: {}",
                path
            );
        }
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }
}
