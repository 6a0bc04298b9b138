#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

#[cfg(test)]
pub mod helpers {
    use crate::api::{Usuario, PERFIL_ADMIN, PERFIL_GESTOR};
    use crate::state::session::AuthState;
    use leptos::*;

    pub fn admin_user() -> Usuario {
        Usuario {
            id: 10,
            email: "admin@gov.br".into(),
            full_name: Some("Administrador".into()),
            role_id: PERFIL_ADMIN,
        }
    }

    pub fn regular_user() -> Usuario {
        Usuario {
            id: 20,
            email: "gestor@gov.br".into(),
            full_name: Some("Gestor".into()),
            role_id: PERFIL_GESTOR,
        }
    }

    pub fn provide_session(
        user: Option<Usuario>,
        loading: bool,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let initial_check_done = !loading;
        let (auth, set_auth) = create_signal(AuthState {
            user,
            loading,
            checking: false,
            initial_check_done,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
