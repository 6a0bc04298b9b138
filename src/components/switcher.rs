use leptos::*;
use leptos_router::use_location;

use crate::api::Proprietario;
use crate::state::tenant::{
    lost_stored_selection, resolve_active, resync_selection, use_proprietarios,
};
use crate::utils::storage;

/// Seletor do proprietário ativo. Aplica o algoritmo de seleção quando a
/// lista chega, persiste toda seleção na chave durável e, em seleção
/// explícita, navega (hard) para o painel daquele proprietário, forçando as
/// telas dependentes a rebuscar. A cada mudança de rota relê a chave
/// persistida, mantendo instâncias paralelas (nav desktop/mobile)
/// consistentes.
#[component]
pub fn ProprietarioSwitcher() -> impl IntoView {
    let (state, _set_state) = use_proprietarios();
    let (selected, set_selected) = create_signal::<Option<i64>>(None);
    let (notice, set_notice) = create_signal::<Option<String>>(None);
    let location = use_location();

    create_effect(move |_| {
        let snapshot = state.get();
        if snapshot.is_loading {
            return;
        }
        let stored = storage::active_proprietario_raw();
        match resolve_active(&snapshot.proprietarios, stored.as_deref()) {
            Some((id, source)) => {
                if lost_stored_selection(stored.as_deref(), source) {
                    log::warn!(
                        "Proprietário persistido {:?} não está acessível para esta sessão; selecionando {}",
                        stored,
                        id
                    );
                    set_notice.set(Some(
                        "A seleção anterior de proprietário não está mais disponível.".into(),
                    ));
                }
                storage::set_active_proprietario_id(id);
                set_selected.set(Some(id));
            }
            None => set_selected.set(None),
        }
    });

    create_effect(move |_| {
        let _path = location.pathname.get();
        let snapshot = state.get_untracked();
        if let Some(id) = resync_selection(storage::active_proprietario_id(), &snapshot.proprietarios)
        {
            set_selected.set(Some(id));
        }
    });

    let on_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        if let Some(id) = storage::parse_proprietario_id(&value) {
            storage::set_active_proprietario_id(id);
            set_selected.set(Some(id));
            if let Ok(window) = storage::window() {
                let _ = window
                    .location()
                    .set_href(crate::router::DEFAULT_AUTHENTICATED_PATH);
            }
        }
    };

    view! {
        <div class="flex items-center space-x-2">
            <Show when=move || !state.get().proprietarios.is_empty() fallback=|| ()>
                <select
                    class="border border-border rounded-md text-sm px-2 py-1 bg-surface-elevated text-fg"
                    on:change=on_change
                >
                    <For
                        each=move || state.get().proprietarios.clone()
                        key=|p| p.id
                        children=move |p: Proprietario| {
                            let id = p.id;
                            let label = format!("{} ({})", p.nome, p.sigla);
                            view! {
                                <option value=id.to_string() selected=move || selected.get() == Some(id)>
                                    {label}
                                </option>
                            }
                        }
                    />
                </select>
            </Show>
            <Show when=move || notice.get().is_some() fallback=|| ()>
                <span class="text-xs text-status-error-text">
                    {move || notice.get().unwrap_or_default()}
                </span>
            </Show>
        </div>
    }
}
