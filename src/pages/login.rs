use leptos::*;

use crate::api::LoginRequest;
use crate::components::error::InlineErrorMessage;
use crate::state::session::use_login_action;

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let login_action = use_login_action();
    let pending = login_action.pending();
    let error = create_memo(move |_| login_action.value().get().and_then(|result| result.err()));

    create_effect(move |_| {
        if matches!(login_action.value().get(), Some(Ok(()))) {
            if let Some(win) = web_sys::window() {
                let _ = win
                    .location()
                    .set_href(crate::router::DEFAULT_AUTHENTICATED_PATH);
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        login_action.dispatch(LoginRequest {
            email: email.get_untracked(),
            password: password.get_untracked(),
        });
    };

    view! {
        <div class="min-h-screen bg-surface flex items-center justify-center py-12 px-4">
            <div class="max-w-md w-full space-y-6">
                <h2 class="text-center text-3xl font-extrabold text-fg">
                    "Catálogo de Soluções"
                </h2>
                <form class="space-y-4" on:submit=on_submit>
                    <InlineErrorMessage error={error.into()} />
                    <div>
                        <label class="block text-sm font-medium text-fg-muted" for="email">
                            "E-mail"
                        </label>
                        <input
                            id="email"
                            type="email"
                            required
                            class="mt-1 block w-full border border-border rounded-md px-3 py-2 bg-surface-elevated text-fg"
                            prop:value=email
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-fg-muted" for="password">
                            "Senha"
                        </label>
                        <input
                            id="password"
                            type="password"
                            required
                            class="mt-1 block w-full border border-border rounded-md px-3 py-2 bg-surface-elevated text-fg"
                            prop:value=password
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>
                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full flex justify-center py-2 px-4 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover disabled:opacity-50"
                    >
                        {move || if pending.get() { "Entrando..." } else { "Entrar" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn login_form_renders_credential_fields() {
        let html = render_to_string(|| view! { <LoginPage/> });
        assert!(html.contains("E-mail"));
        assert!(html.contains("Senha"));
        assert!(html.contains("Entrar"));
    }
}
