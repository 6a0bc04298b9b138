use crate::{
    api::Usuario, components::layout::LoadingSpinner, router, state::session::use_session,
};
use leptos::*;

/// Guard fino, do lado de dentro da árvore: só libera os filhos depois que a
/// verificação de sessão resolve com usuário presente. Enquanto `loading`,
/// mostra o indicador; resolvido sem usuário, não renderiza nada e navega
/// para o login.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_session();
    let is_authenticated = create_memo(move |_| auth.get().user.is_some());
    let is_loading = create_memo(move |_| auth.get().loading);
    create_effect(move |_| {
        let state = auth.get();
        if state.loading || state.user.is_some() {
            return;
        }
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href(router::LOGIN_PATH);
        }
    });
    view! {
        <Show
            when=move || should_render_children(is_authenticated.get(), is_loading.get())
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn should_render_children(is_authenticated: bool, is_loading: bool) -> bool {
    is_authenticated && !is_loading
}

#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_session();
    let is_authenticated = create_memo(move |_| auth.get().user.is_some());
    let is_loading = create_memo(move |_| auth.get().loading);
    let is_admin = create_memo(move |_| is_admin_user(auth.get().user.as_ref()));
    create_effect(move |_| {
        let state = auth.get();
        if state.loading {
            return;
        }
        let target = if state.user.is_none() {
            router::LOGIN_PATH
        } else if !is_admin_user(state.user.as_ref()) {
            router::DEFAULT_AUTHENTICATED_PATH
        } else {
            return;
        };
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href(target);
        }
    });
    view! {
        <Show
            when=move || {
                should_render_admin_children(is_authenticated.get(), is_loading.get(), is_admin.get())
            }
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn is_admin_user(user: Option<&Usuario>) -> bool {
    user.map(|u| u.is_admin()).unwrap_or(false)
}

fn should_render_admin_children(is_authenticated: bool, is_loading: bool, is_admin: bool) -> bool {
    is_authenticated && is_admin && !is_loading
}

#[cfg(test)]
mod tests {
    use super::{is_admin_user, should_render_admin_children, should_render_children};
    use crate::test_support::helpers::{admin_user, regular_user};

    #[test]
    fn guard_blocks_until_authenticated() {
        assert!(!should_render_children(false, true));
        assert!(!should_render_children(false, false));
        assert!(!should_render_children(true, true));
        assert!(should_render_children(true, false));
    }

    #[test]
    fn admin_guard_requires_the_admin_role_id() {
        assert!(!is_admin_user(None));
        assert!(!is_admin_user(Some(&regular_user())));
        assert!(is_admin_user(Some(&admin_user())));
    }

    #[test]
    fn admin_guard_blocks_non_admins() {
        assert!(!should_render_admin_children(false, true, false));
        assert!(!should_render_admin_children(false, false, true));
        assert!(!should_render_admin_children(true, true, true));
        assert!(!should_render_admin_children(true, false, false));
        assert!(should_render_admin_children(true, false, true));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::{RequireAdmin, RequireAuth};
    use crate::test_support::helpers::{admin_user, provide_session, regular_user};
    use crate::test_support::ssr::render_to_string;
    use leptos::*;

    #[test]
    fn require_auth_renders_children_when_authenticated() {
        let html = render_to_string(move || {
            provide_session(Some(regular_user()), false);
            view! {
                <RequireAuth>
                    {|| view! { <div>"conteudo-protegido"</div> }}
                </RequireAuth>
            }
        });
        assert!(html.contains("conteudo-protegido"));
    }

    #[test]
    fn require_auth_hides_children_when_unauthenticated() {
        let html = render_to_string(move || {
            provide_session(None, false);
            view! {
                <RequireAuth>
                    {|| view! { <div>"conteudo-protegido"</div> }}
                </RequireAuth>
            }
        });
        assert!(!html.contains("conteudo-protegido"));
    }

    #[test]
    fn require_auth_shows_the_spinner_while_loading() {
        let html = render_to_string(move || {
            provide_session(None, true);
            view! {
                <RequireAuth>
                    {|| view! { <div>"conteudo-protegido"</div> }}
                </RequireAuth>
            }
        });
        assert!(html.contains("animate-spin"));
    }

    #[test]
    fn require_admin_renders_children_for_admins_only() {
        let html = render_to_string(move || {
            provide_session(Some(admin_user()), false);
            view! {
                <RequireAdmin>
                    {|| view! { <div>"area-administrativa"</div> }}
                </RequireAdmin>
            }
        });
        assert!(html.contains("area-administrativa"));

        let html = render_to_string(move || {
            provide_session(Some(regular_user()), false);
            view! {
                <RequireAdmin>
                    {|| view! { <div>"area-administrativa"</div> }}
                </RequireAdmin>
            }
        });
        assert!(!html.contains("area-administrativa"));
    }
}
