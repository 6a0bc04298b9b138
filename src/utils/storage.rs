use web_sys::{Storage, Window};

/// Durable-storage key holding the id of the proprietário the console is
/// currently scoped to. Written as a decimal string, read on every mount of a
/// tenant-scoped screen.
pub const ACTIVE_PROPRIETARIO_KEY: &str = "selectedProprietarioId";

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

pub fn parse_proprietario_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

pub fn active_proprietario_raw() -> Option<String> {
    let storage = local_storage().ok()?;
    storage.get_item(ACTIVE_PROPRIETARIO_KEY).ok().flatten()
}

pub fn active_proprietario_id() -> Option<i64> {
    active_proprietario_raw().and_then(|raw| parse_proprietario_id(&raw))
}

pub fn set_active_proprietario_id(id: i64) {
    if let Ok(storage) = local_storage() {
        let _ = storage.remove_item(ACTIVE_PROPRIETARIO_KEY);
        let _ = storage.set_item(ACTIVE_PROPRIETARIO_KEY, &id.to_string());
    }
}

pub fn clear_active_proprietario() {
    if let Ok(storage) = local_storage() {
        let _ = storage.remove_item(ACTIVE_PROPRIETARIO_KEY);
    }
}
