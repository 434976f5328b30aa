#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use axum::Router;
    use clap::Parser;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use repo_search::app::*;
    use repo_search::server::{ServerConfig, init_logging};
    use tower_http::compression::CompressionLayer;

    dotenvy::dotenv().ok();
    let config = ServerConfig::parse();
    init_logging(config.log_filter.as_deref())?;

    let conf = get_configuration(None).context("failed to load leptos configuration")?;
    let mut leptos_options = conf.leptos_options;
    if let Some(bind) = config.bind {
        leptos_options.site_addr = bind;
    }
    let addr = leptos_options.site_addr;
    let shell_options = leptos_options.clone();
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, move || {
            let val = shell_options.clone();
            move || shell(val.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(CompressionLayer::new())
        .with_state(leptos_options);

    tracing::info!("listening on http://{}", &addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("server exited with an error")?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // unless we want this to work with e.g., Trunk for pure client-side testing
    // see lib.rs for hydration function instead
}
