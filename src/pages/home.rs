use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <div class="max-w-7xl mx-auto py-12 px-4 sm:px-6 lg:px-8">
                <div class="text-center">
                    <h1 class="text-4xl font-extrabold text-fg sm:text-5xl">
                        "Catálogo de Soluções"
                    </h1>
                    <p class="mt-3 max-w-md mx-auto text-base text-fg-muted sm:text-lg">
                        "Gestão de demandas e soluções por proprietário"
                    </p>
                    <div class="mt-5 max-w-md mx-auto sm:flex sm:justify-center">
                        <div class="rounded-md shadow">
                            <a href="/dashboard" class="w-full flex items-center justify-center px-8 py-3 border border-transparent text-base font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover">
                                "Acessar o painel"
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
