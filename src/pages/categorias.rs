use leptos::*;

use crate::api::{ApiClient, ApiError, Categoria, ItemCatalogoPayload};
use crate::components::error::InlineErrorMessage;
use crate::components::layout::{Layout, LoadingSpinner};
use crate::utils::storage;

/// Cadastro de referência de categorias, escopado ao proprietário ativo.
#[component]
pub fn CategoriasPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let (categorias, set_categorias) = create_signal::<Vec<Categoria>>(Vec::new());
    let (nome, set_nome) = create_signal(String::new());
    let (error, set_error) = create_signal::<Option<ApiError>>(None);
    let (loading, set_loading) = create_signal(true);

    let load = {
        let api = api.clone();
        move || {
            let api = api.clone();
            set_loading.set(true);
            spawn_local(async move {
                let Some(id) = storage::active_proprietario_id() else {
                    set_loading.set(false);
                    return;
                };
                match api.categorias_do_proprietario(id).await {
                    Ok(lista) => {
                        set_categorias.set(lista);
                        set_loading.set(false);
                    }
                    Err(error) => {
                        log::error!("Falha ao carregar categorias: {}", error);
                        set_categorias.set(Vec::new());
                        set_error.set(Some(error));
                        set_loading.set(false);
                    }
                }
            });
        }
    };

    let reload = load.clone();
    create_effect(move |_| load());

    let on_submit = {
        let api = api.clone();
        let reload = reload.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let novo_nome = nome.get_untracked().trim().to_string();
            if novo_nome.is_empty() {
                return;
            }
            let Some(id) = storage::active_proprietario_id() else {
                return;
            };
            let api = api.clone();
            let reload = reload.clone();
            set_error.set(None);
            spawn_local(async move {
                match api
                    .create_categoria(&ItemCatalogoPayload {
                        nome: novo_nome,
                        proprietario_id: id,
                    })
                    .await
                {
                    Ok(_) => {
                        set_nome.set(String::new());
                        reload();
                    }
                    Err(error) => set_error.set(Some(error)),
                }
            });
        }
    };

    let remover = {
        let api = api.clone();
        let reload = reload.clone();
        Callback::new(move |id: i64| {
            let api = api.clone();
            let reload = reload.clone();
            set_error.set(None);
            spawn_local(async move {
                match api.delete_categoria(id).await {
                    Ok(()) => reload(),
                    Err(error) => set_error.set(Some(error)),
                }
            });
        })
    };

    view! {
        <Layout>
            <div class="space-y-6">
                <h1 class="text-2xl font-bold text-fg">"Categorias"</h1>
                <InlineErrorMessage error={error.into()} />

                <form class="flex items-end space-x-2" on:submit=on_submit>
                    <div class="flex-1">
                        <label class="block text-sm font-medium text-fg-muted" for="nome">
                            "Nova categoria"
                        </label>
                        <input
                            id="nome"
                            type="text"
                            class="mt-1 block w-full border border-border rounded-md px-3 py-2 bg-surface-elevated text-fg"
                            prop:value=nome
                            on:input=move |ev| set_nome.set(event_target_value(&ev))
                        />
                    </div>
                    <button
                        type="submit"
                        class="px-4 py-2 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover"
                    >
                        "Adicionar"
                    </button>
                </form>

                <Show when=move || loading.get() fallback=|| ()>
                    <LoadingSpinner/>
                </Show>

                <Show when=move || !loading.get() fallback=|| ()>
                    <ul class="divide-y divide-border bg-surface-elevated shadow rounded-lg">
                        <For
                            each=move || categorias.get()
                            key=|c| c.id
                            children=move |c: Categoria| {
                                let id = c.id;
                                view! {
                                    <li class="flex justify-between items-center px-4 py-2">
                                        <span class="text-sm text-fg">{c.nome.clone()}</span>
                                        <button
                                            class="text-sm text-status-error-text hover:underline"
                                            on:click=move |_| remover.call(id)
                                        >
                                            "Excluir"
                                        </button>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </div>
        </Layout>
    }
}
