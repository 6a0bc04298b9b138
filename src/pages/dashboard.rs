use leptos::*;

use crate::api::{ApiClient, ApiError, Demanda, Proprietario, Solucao};
use crate::components::layout::{ErrorCard, Layout, LoadingSpinner};
use crate::utils::storage;

/// Painel do proprietário ativo: detalhe do proprietário mais as listas de
/// demandas e soluções buscadas pelas rotas aninhadas. O id vem da chave
/// durável gravada pelo seletor; trocar de proprietário navega de novo para
/// cá e refaz as buscas.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let (proprietario, set_proprietario) = create_signal::<Option<Proprietario>>(None);
    let (demandas, set_demandas) = create_signal::<Vec<Demanda>>(Vec::new());
    let (solucoes, set_solucoes) = create_signal::<Vec<Solucao>>(Vec::new());
    let (error, set_error) = create_signal::<Option<String>>(None);
    let (loading, set_loading) = create_signal(true);

    let load = {
        let api = api.clone();
        move || {
            let api = api.clone();
            set_loading.set(true);
            set_error.set(None);
            spawn_local(async move {
                let Some(id) = storage::active_proprietario_id() else {
                    set_loading.set(false);
                    return;
                };
                let resultado: Result<(Proprietario, Vec<Demanda>, Vec<Solucao>), ApiError> =
                    async {
                        let detalhe = api.get_proprietario(id).await?;
                        let demandas = api.demandas_do_proprietario(id).await?;
                        let solucoes = api.solucoes_do_proprietario(id).await?;
                        Ok((detalhe, demandas, solucoes))
                    }
                    .await;
                match resultado {
                    Ok((detalhe, lista_demandas, lista_solucoes)) => {
                        set_proprietario.set(Some(detalhe));
                        set_demandas.set(lista_demandas);
                        set_solucoes.set(lista_solucoes);
                        set_loading.set(false);
                    }
                    Err(error) => {
                        log::error!("Falha ao carregar o painel: {}", error);
                        set_error.set(Some(error.to_string()));
                        set_loading.set(false);
                    }
                }
            });
        }
    };

    let retry = {
        let load = load.clone();
        Callback::new(move |_: ()| load())
    };
    create_effect(move |_| load());

    view! {
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-fg">"Painel"</h1>
                    <p class="mt-1 text-sm text-fg-muted">
                        {move || {
                            proprietario
                                .get()
                                .map(|p| format!("{} ({})", p.nome, p.sigla))
                                .unwrap_or_else(|| "Nenhum proprietário selecionado".into())
                        }}
                    </p>
                </div>

                <Show when=move || error.get().is_some() fallback=|| ()>
                    <ErrorCard
                        message={error.get().unwrap_or_default()}
                        on_retry=retry
                    />
                </Show>

                <Show when=move || loading.get() fallback=|| ()>
                    <LoadingSpinner/>
                </Show>

                <Show when=move || !loading.get() && error.get().is_none() fallback=|| ()>
                    <div class="grid grid-cols-1 gap-6 lg:grid-cols-2">
                        <div class="bg-surface-elevated shadow rounded-lg p-6">
                            <h3 class="text-lg font-medium text-fg mb-4">
                                {move || format!("Demandas ({})", demandas.get().len())}
                            </h3>
                            <ul class="divide-y divide-border">
                                <For
                                    each=move || demandas.get()
                                    key=|d| d.id
                                    children=move |d: Demanda| {
                                        view! {
                                            <li class="py-2 text-sm text-fg">{d.nome.clone()}</li>
                                        }
                                    }
                                />
                            </ul>
                        </div>
                        <div class="bg-surface-elevated shadow rounded-lg p-6">
                            <h3 class="text-lg font-medium text-fg mb-4">
                                {move || format!("Soluções ({})", solucoes.get().len())}
                            </h3>
                            <ul class="divide-y divide-border">
                                <For
                                    each=move || solucoes.get()
                                    key=|s| s.id
                                    children=move |s: Solucao| {
                                        view! {
                                            <li class="py-2 text-sm text-fg">{s.nome.clone()}</li>
                                        }
                                    }
                                />
                            </ul>
                        </div>
                    </div>
                </Show>
            </div>
        </Layout>
    }
}
