#![recursion_limit = "256"]

use axum::{routing::post, Router};
use careerkit_app::AppContext;
use careerkit_ui::pages::GenerateContentFn;
use careerkit_ui::App;
use leptos::prelude::*;
use leptos_axum::{generate_route_list, handle_server_fns_with_context, LeptosRoutes};
use tower_http::compression::CompressionLayer;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let conf = get_configuration(Some("Cargo.toml")).expect("Failed to load Leptos config");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let app_context = AppContext::from_env();

    let routes = generate_route_list(App);

    server_fn::axum::register_explicit::<GenerateContentFn>();
    tracing::info!("Registered server function: GenerateContentFn");

    let app = Router::new()
        .route("/api/{*fn_name}", post({
            let ctx = app_context.clone();
            move |req| {
                let ctx = ctx.clone();
                async move {
                    handle_server_fns_with_context(
                        move || provide_context(ctx.clone()),
                        req
                    ).await
                }
            }
        }))
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let ctx = app_context.clone();
                move || provide_context(ctx.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(CompressionLayer::new())
        .with_state(leptos_options);

    tracing::info!("Listening on http://{}", addr);
    tracing::info!(
        "Limits: 5 requests/min and 20/hour per session. {} generations left today",
        app_context.usage_tracker.remaining_requests()
    );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}

fn shell(options: LeptosOptions) -> impl IntoView {
    use leptos::prelude::*;
    use leptos_meta::*;

    let css = r#"
        :root {
            --base: #f8fafc;
            --surface: #ffffff;
            --overlay: #e2e8f0;
            --muted: #94a3b8;
            --text: #1e293b;
            --accent: #2563eb;
            --accent-dark: #1d4ed8;
            --danger: #b4637a;
        }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: 'Inter', -apple-system, sans-serif;
            background: var(--base);
            color: var(--text);
            line-height: 1.6;
        }
        .container { max-width: 1100px; margin: 0 auto; padding: 0 1rem; }
        .hero { text-align: center; padding: 3rem 0 2rem; }
        .hero__title { font-size: 2.2rem; font-weight: 800; }
        .hero__subtitle { color: var(--muted); max-width: 40rem; margin: 0.5rem auto 0; }
        .banner--error { background: #fce8ec; border: 2px solid var(--danger); border-radius: 8px; padding: 0.75rem 1rem; margin: 1rem 0; }
        .assistant-layout { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; align-items: start; }
        @media (max-width: 800px) { .assistant-layout { grid-template-columns: 1fr; } }
        .assistant-layout__locked { color: var(--muted); padding: 2rem; text-align: center; }
        .form, .panel { background: var(--surface); border: 1px solid var(--overlay); border-radius: 12px; padding: 1.5rem; }
        .form__field, .panel__field { display: block; margin-bottom: 1rem; }
        .form__label, .panel__label { display: block; font-weight: 600; margin-bottom: 0.25rem; }
        .form__input, .form__select, .panel__select { width: 100%; padding: 0.5rem 0.75rem; border: 1px solid var(--overlay); border-radius: 6px; font: inherit; }
        .form__input--readonly { background: var(--base); color: var(--muted); }
        .form__error { color: var(--danger); font-size: 0.85rem; }
        .form__actions, .panel__actions, .confirm__actions, .result__actions { display: flex; gap: 0.75rem; margin-top: 1rem; flex-wrap: wrap; }
        .form__unlock, .panel__generate, .confirm__yes { padding: 0.6rem 1.2rem; background: var(--accent); color: #fff; border: none; border-radius: 8px; font-weight: 600; cursor: pointer; }
        .form__unlock:hover, .panel__generate:hover { background: var(--accent-dark); }
        .form__reset, .panel__regenerate, .confirm__no, .result__button { padding: 0.6rem 1.2rem; background: var(--surface); border: 1px solid var(--overlay); border-radius: 8px; cursor: pointer; }
        .panel__generate:disabled, .panel__regenerate:disabled { opacity: 0.5; cursor: not-allowed; }
        .form__hint { color: var(--muted); font-size: 0.9rem; }
        .tag-input { display: flex; gap: 0.5rem; }
        .tag-input__add { padding: 0.5rem 1rem; border: 1px solid var(--overlay); border-radius: 6px; background: var(--surface); cursor: pointer; }
        .tag-input__tags { margin-top: 0.5rem; display: flex; flex-wrap: wrap; gap: 0.4rem; }
        .tag { background: var(--overlay); border-radius: 999px; padding: 0.2rem 0.75rem; font-size: 0.9rem; }
        .tag__remove { border: none; background: none; cursor: pointer; margin-left: 0.3rem; }
        .subtopics { display: flex; flex-wrap: wrap; gap: 0.5rem 1rem; }
        .subtopics__item { display: flex; align-items: center; gap: 0.35rem; font-size: 0.95rem; }
        .confirm { margin-top: 1rem; border: 2px solid var(--danger); border-radius: 8px; padding: 1rem; background: #fce8ec; }
        .loading { text-align: center; padding: 1.5rem; }
        .loading__spinner { width: 2rem; height: 2rem; margin: 0 auto; border: 3px solid var(--overlay); border-top-color: var(--accent); border-radius: 50%; animation: spin 0.8s linear infinite; }
        @keyframes spin { to { transform: rotate(360deg); } }
        .loading__text { color: var(--muted); margin-top: 0.5rem; }
        .error { background: #fce8ec; border: 2px solid var(--danger); border-radius: 8px; padding: 1.25rem; margin: 1rem 0; }
        .error__title { color: var(--danger); font-weight: 700; margin-bottom: 0.5rem; }
        .error__retry { margin-top: 1rem; padding: 0.5rem 1rem; background: var(--danger); color: #fff; border: none; border-radius: 4px; cursor: pointer; }
        .result { margin-top: 1.5rem; }
        .result__preview { background: var(--base); border: 1px solid var(--overlay); border-radius: 8px; padding: 1.25rem; }
        .result__preview p { margin-bottom: 0.75rem; }
        .result__preview ol { padding-left: 1.5rem; }
    "#;

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>"Career Assistant | careerkit"</title>
                <style>{css}</style>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}
