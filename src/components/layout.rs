use crate::components::switcher::ProprietarioSwitcher;
use crate::state::session::{use_logout_action, use_session};
use leptos::*;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_session();
    let can_manage_users = move || {
        auth.get()
            .user
            .as_ref()
            .map(|user| user.is_admin())
            .unwrap_or(false)
    };
    let logout_action = use_logout_action();
    let logout_pending = logout_action.pending();
    let on_logout = move |_| {
        if logout_pending.get_untracked() {
            return;
        }
        logout_action.dispatch(());
    };
    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center space-x-4">
                        <h1 class="text-xl font-semibold text-fg">
                            "Catálogo de Soluções"
                        </h1>
                        <ProprietarioSwitcher/>
                    </div>
                    <div class="flex items-center">
                        <nav class="hidden lg:flex space-x-4">
                            <a href="/dashboard" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                                "Painel"
                            </a>
                            <a href="/categorias" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                                "Categorias"
                            </a>
                            <Show when=can_manage_users>
                                <a href="/usuarios" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                                    "Usuários"
                                </a>
                            </Show>
                        </nav>
                        <button
                            class="ml-4 text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                            on:click=on_logout
                        >
                            "Sair"
                        </button>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

/// Cartão de erro de página inteira com ação de tentar de novo; usado pelas
/// listagens que falharam em carregar.
#[component]
pub fn ErrorCard(message: String, #[prop(into)] on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-8 text-center space-y-4">
            <p class="text-status-error-text">{message}</p>
            <button
                class="px-4 py-2 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover"
                on:click=move |_| on_retry.call(())
            >
                "Tentar novamente"
            </button>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn spinner_and_messages_render() {
        let html = render_to_string(|| {
            view! {
                <div>
                    <LoadingSpinner />
                    <ErrorMessage message="falhou".into() />
                </div>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(html.contains("falhou"));
    }

    #[test]
    fn error_card_offers_a_retry_action() {
        let html = render_to_string(|| {
            view! {
                <ErrorCard message="Não foi possível carregar.".into() on_retry=move |_| () />
            }
        });
        assert!(html.contains("Não foi possível carregar."));
        assert!(html.contains("Tentar novamente"));
    }
}
