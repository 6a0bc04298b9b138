use leptos::*;

use crate::api::{ApiClient, ApiError, NovoUsuario, Usuario, PERFIL_ADMIN, PERFIL_GESTOR};
use crate::components::error::InlineErrorMessage;
use crate::components::layout::{Layout, LoadingSpinner};
use crate::state::session::use_session;

fn nome_perfil(role_id: i64) -> &'static str {
    match role_id {
        PERFIL_ADMIN => "Administrador",
        PERFIL_GESTOR => "Gestor",
        _ => "Desconhecido",
    }
}

/// Gestão de contas. A rota já é protegida por perfil de administrador;
/// aqui só escondemos o botão de exclusão da própria conta.
#[component]
pub fn UsuariosPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let (auth, _) = use_session();
    let (usuarios, set_usuarios) = create_signal::<Vec<Usuario>>(Vec::new());
    let (error, set_error) = create_signal::<Option<ApiError>>(None);
    let (loading, set_loading) = create_signal(true);

    let (email, set_email) = create_signal(String::new());
    let (full_name, set_full_name) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (role_id, set_role_id) = create_signal(PERFIL_GESTOR);

    let load = {
        let api = api.clone();
        move || {
            let api = api.clone();
            set_loading.set(true);
            spawn_local(async move {
                match api.list_users().await {
                    Ok(lista) => {
                        set_usuarios.set(lista);
                        set_loading.set(false);
                    }
                    Err(error) => {
                        log::error!("Falha ao listar usuários: {}", error);
                        set_usuarios.set(Vec::new());
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
            let payload = NovoUsuario {
                email: email.get_untracked().trim().to_string(),
                password: password.get_untracked(),
                full_name: {
                    let nome = full_name.get_untracked().trim().to_string();
                    (!nome.is_empty()).then_some(nome)
                },
                role_id: role_id.get_untracked(),
            };
            if payload.email.is_empty() || payload.password.is_empty() {
                return;
            }
            let api = api.clone();
            let reload = reload.clone();
            set_error.set(None);
            spawn_local(async move {
                match api.register_user(&payload).await {
                    Ok(_) => {
                        set_email.set(String::new());
                        set_full_name.set(String::new());
                        set_password.set(String::new());
                        set_role_id.set(PERFIL_GESTOR);
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
                match api.delete_user(id).await {
                    Ok(()) => reload(),
                    Err(error) => set_error.set(Some(error)),
                }
            });
        })
    };

    let current_user_id = create_memo(move |_| auth.get().user.map(|u| u.id));

    view! {
        <Layout>
            <div class="space-y-6">
                <h1 class="text-2xl font-bold text-fg">"Usuários"</h1>
                <InlineErrorMessage error={error.into()} />

                <form
                    class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-5 items-end bg-surface-elevated shadow rounded-lg p-4"
                    on:submit=on_submit
                >
                    <div>
                        <label class="block text-sm font-medium text-fg-muted" for="novo-email">
                            "E-mail"
                        </label>
                        <input
                            id="novo-email"
                            type="email"
                            required
                            class="mt-1 block w-full border border-border rounded-md px-3 py-2 bg-surface text-fg"
                            prop:value=email
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-fg-muted" for="novo-nome">
                            "Nome completo"
                        </label>
                        <input
                            id="novo-nome"
                            type="text"
                            class="mt-1 block w-full border border-border rounded-md px-3 py-2 bg-surface text-fg"
                            prop:value=full_name
                            on:input=move |ev| set_full_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-fg-muted" for="nova-senha">
                            "Senha"
                        </label>
                        <input
                            id="nova-senha"
                            type="password"
                            required
                            class="mt-1 block w-full border border-border rounded-md px-3 py-2 bg-surface text-fg"
                            prop:value=password
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-fg-muted" for="novo-perfil">
                            "Perfil"
                        </label>
                        <select
                            id="novo-perfil"
                            class="mt-1 block w-full border border-border rounded-md px-3 py-2 bg-surface text-fg"
                            on:change=move |ev| {
                                if let Ok(id) = event_target_value(&ev).parse::<i64>() {
                                    set_role_id.set(id);
                                }
                            }
                        >
                            <option value=PERFIL_GESTOR.to_string() selected=move || role_id.get() == PERFIL_GESTOR>
                                "Gestor"
                            </option>
                            <option value=PERFIL_ADMIN.to_string() selected=move || role_id.get() == PERFIL_ADMIN>
                                "Administrador"
                            </option>
                        </select>
                    </div>
                    <button
                        type="submit"
                        class="px-4 py-2 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover"
                    >
                        "Cadastrar"
                    </button>
                </form>

                <Show when=move || loading.get() fallback=|| ()>
                    <LoadingSpinner/>
                </Show>

                <Show when=move || !loading.get() fallback=|| ()>
                    <div class="bg-surface-elevated shadow rounded-lg overflow-hidden">
                        <table class="min-w-full divide-y divide-border">
                            <thead>
                                <tr>
                                    <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"E-mail"</th>
                                    <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Nome"</th>
                                    <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Perfil"</th>
                                    <th class="px-4 py-2"></th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-border">
                                <For
                                    each=move || usuarios.get()
                                    key=|u| u.id
                                    children=move |u: Usuario| {
                                        let id = u.id;
                                        let proprio = move || current_user_id.get() == Some(id);
                                        view! {
                                            <tr>
                                                <td class="px-4 py-2 text-sm text-fg">{u.email.clone()}</td>
                                                <td class="px-4 py-2 text-sm text-fg">
                                                    {u.full_name.clone().unwrap_or_default()}
                                                </td>
                                                <td class="px-4 py-2 text-sm text-fg-muted">
                                                    {nome_perfil(u.role_id)}
                                                </td>
                                                <td class="px-4 py-2 text-right">
                                                    <Show when=move || !proprio() fallback=|| ()>
                                                        <button
                                                            class="text-sm text-status-error-text hover:underline"
                                                            on:click=move |_| remover.call(id)
                                                        >
                                                            "Excluir"
                                                        </button>
                                                    </Show>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </Show>
            </div>
        </Layout>
    }
}
