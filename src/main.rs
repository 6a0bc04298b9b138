// O bootstrap real vive em `catalogo_console::start`, marcado com
// `wasm_bindgen(start)` e executado na instanciação do módulo.
fn main() {}
