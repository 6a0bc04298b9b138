use crate::api::ApiError;
use leptos::*;

/// Erro inline exibido junto ao formulário que o originou.
#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded my-2">
                <div class="font-bold">
                    {move || error.get().map(|e| e.to_string()).unwrap_or_default()}
                </div>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn inline_error_renders_the_taxonomy_message() {
        let html = render_to_string(move || {
            let error = create_rw_signal(Some(ApiError::Conflict("E-mail já cadastrado".into())));
            view! { <InlineErrorMessage error={error.into()} /> }
        });
        assert!(html.contains("E-mail já cadastrado"));
    }

    #[test]
    fn nothing_renders_without_an_error() {
        let html = render_to_string(move || {
            let error = create_rw_signal::<Option<ApiError>>(None);
            view! { <InlineErrorMessage error={error.into()} /> }
        });
        assert!(!html.contains("status-error-bg"));
    }
}
