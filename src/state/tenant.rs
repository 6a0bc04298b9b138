use leptos::*;

use crate::api::{ApiClient, Proprietario};
use crate::state::session::use_session;
use crate::utils::storage::parse_proprietario_id;

type ProprietariosContext = (
    ReadSignal<ProprietariosState>,
    WriteSignal<ProprietariosState>,
);

#[derive(Debug, Clone)]
pub struct ProprietariosState {
    pub proprietarios: Vec<Proprietario>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Default for ProprietariosState {
    fn default() -> Self {
        Self {
            proprietarios: Vec::new(),
            is_loading: true,
            error: None,
        }
    }
}

/// De onde veio a seleção ativa. `FirstFallback` com chave persistida
/// presente significa que a seleção anterior ficou inacessível; o chamador
/// registra e exibe a transição em vez de trocar silenciosamente.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionSource {
    OnlyOption,
    Restored,
    FirstFallback,
}

/// Algoritmo de seleção do proprietário ativo, na ordem da regra de negócio:
/// lista vazia → nada; chave persistida válida e presente na lista →
/// restaura; chave persistida válida mas ausente → primeiro da lista,
/// reportado como fallback (inclusive com um único proprietário, para que a
/// troca de contexto nunca seja silenciosa); sem chave válida → único
/// automático, ou o primeiro da lista (ordem do backend, sem sort).
pub fn resolve_active(
    proprietarios: &[Proprietario],
    stored: Option<&str>,
) -> Option<(i64, SelectionSource)> {
    let first = proprietarios.first()?;
    if let Some(id) = stored.and_then(parse_proprietario_id) {
        if proprietarios.iter().any(|p| p.id == id) {
            return Some((id, SelectionSource::Restored));
        }
        return Some((first.id, SelectionSource::FirstFallback));
    }
    if proprietarios.len() == 1 {
        return Some((first.id, SelectionSource::OnlyOption));
    }
    Some((first.id, SelectionSource::FirstFallback))
}

/// O aviso de contexto perdido só aparece quando havia uma chave persistida
/// válida e a seleção caiu no fallback; chave ausente ou ilegível não conta
/// como seleção perdida.
pub fn lost_stored_selection(stored: Option<&str>, source: SelectionSource) -> bool {
    source == SelectionSource::FirstFallback && stored.and_then(parse_proprietario_id).is_some()
}

/// Re-sincronização entre instâncias do seletor: a chave persistida só é
/// reaplicada se apontar para um proprietário presente na lista buscada.
pub fn resync_selection(stored: Option<i64>, proprietarios: &[Proprietario]) -> Option<i64> {
    let id = stored?;
    proprietarios.iter().any(|p| p.id == id).then_some(id)
}

/// Busca os proprietários visíveis somente depois que a sessão resolve como
/// autenticada; sessão sem usuário encerra o loading com lista vazia, sem
/// round-trip que o backend rejeitaria com 401.
#[component]
pub fn ProprietariosProvider(children: Children) -> impl IntoView {
    let (state, set_state) = create_signal(ProprietariosState::default());
    provide_context::<ProprietariosContext>((state, set_state));

    let (auth, _set_auth) = use_session();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let started = store_value(false);

    create_effect(move |_| {
        let session = auth.get();
        if session.loading {
            return;
        }
        if session.user.is_none() {
            set_state.update(|s| s.is_loading = false);
            return;
        }
        if started.get_value() {
            return;
        }
        started.set_value(true);
        let api = api.clone();
        spawn_local(async move {
            load_proprietarios(&api, set_state).await;
        });
    });

    view! { <>{children()}</> }
}

pub fn use_proprietarios() -> ProprietariosContext {
    use_context::<ProprietariosContext>()
        .unwrap_or_else(|| create_signal(ProprietariosState::default()))
}

/// Leitura degradável: qualquer falha vira `error` preenchido + lista vazia,
/// para que as telas de listagem continuem renderizáveis.
pub async fn load_proprietarios(api: &ApiClient, set_state: WriteSignal<ProprietariosState>) {
    match api.list_proprietarios().await {
        Ok(lista) => set_state.update(|s| {
            s.proprietarios = lista;
            s.is_loading = false;
            s.error = None;
        }),
        Err(error) => {
            log::error!("Falha ao carregar proprietários: {}", error);
            set_state.update(|s| {
                s.proprietarios = Vec::new();
                s.is_loading = false;
                s.error = Some(error.to_string());
            });
        }
    }
}

pub async fn refetch_proprietarios(api: &ApiClient, set_state: WriteSignal<ProprietariosState>) {
    set_state.update(|s| {
        s.is_loading = true;
        s.error = None;
    });
    load_proprietarios(api, set_state).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proprietario(id: i64, nome: &str) -> Proprietario {
        Proprietario {
            id,
            nome: nome.into(),
            sigla: nome.chars().take(2).collect::<String>().to_uppercase(),
            logo_url: None,
            usuario_id: None,
        }
    }

    #[test]
    fn empty_list_selects_nothing() {
        assert_eq!(resolve_active(&[], None), None);
        assert_eq!(resolve_active(&[], Some("9")), None);
    }

    #[test]
    fn single_entry_is_selected_automatically_without_a_stored_key() {
        let lista = vec![proprietario(5, "Secretaria A")];
        assert_eq!(
            resolve_active(&lista, None),
            Some((5, SelectionSource::OnlyOption))
        );
        assert_eq!(
            resolve_active(&lista, Some("abc")),
            Some((5, SelectionSource::OnlyOption))
        );
    }

    #[test]
    fn single_entry_with_a_stale_stored_key_reports_the_fallback() {
        let lista = vec![proprietario(5, "Secretaria A")];
        assert_eq!(
            resolve_active(&lista, Some("9")),
            Some((5, SelectionSource::FirstFallback))
        );
        assert!(lost_stored_selection(
            Some("9"),
            SelectionSource::FirstFallback
        ));
    }

    #[test]
    fn stored_key_matching_the_list_is_restored_over_the_first_entry() {
        let lista = vec![proprietario(5, "Secretaria A"), proprietario(9, "Secretaria B")];
        assert_eq!(
            resolve_active(&lista, Some("9")),
            Some((9, SelectionSource::Restored))
        );
    }

    #[test]
    fn stale_stored_key_falls_back_to_the_first_entry() {
        let lista = vec![proprietario(5, "Secretaria A"), proprietario(9, "Secretaria B")];
        assert_eq!(
            resolve_active(&lista, Some("42")),
            Some((5, SelectionSource::FirstFallback))
        );
    }

    #[test]
    fn missing_or_malformed_key_also_falls_back_to_the_first_entry() {
        let lista = vec![proprietario(5, "Secretaria A"), proprietario(9, "Secretaria B")];
        assert_eq!(
            resolve_active(&lista, None),
            Some((5, SelectionSource::FirstFallback))
        );
        assert_eq!(
            resolve_active(&lista, Some("abc")),
            Some((5, SelectionSource::FirstFallback))
        );
    }

    #[test]
    fn lost_selection_requires_a_valid_stored_key_and_a_fallback() {
        assert!(lost_stored_selection(
            Some("42"),
            SelectionSource::FirstFallback
        ));
        assert!(!lost_stored_selection(None, SelectionSource::FirstFallback));
        assert!(!lost_stored_selection(
            Some("abc"),
            SelectionSource::FirstFallback
        ));
        assert!(!lost_stored_selection(Some("42"), SelectionSource::Restored));
        assert!(!lost_stored_selection(
            Some("42"),
            SelectionSource::OnlyOption
        ));
    }

    #[test]
    fn resync_reapplies_only_keys_present_in_the_fetched_list() {
        let lista = vec![proprietario(5, "Secretaria A"), proprietario(9, "Secretaria B")];
        assert_eq!(resync_selection(Some(9), &lista), Some(9));
        assert_eq!(resync_selection(Some(42), &lista), None);
        assert_eq!(resync_selection(None, &lista), None);
        assert_eq!(resync_selection(Some(9), &[]), None);
    }
}
