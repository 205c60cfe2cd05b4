//! Frontend application entry point.

use frontend::app::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use axum::{extract::Request, middleware::Next};
        use dioxus::logger::tracing::info;
        use dioxus::server::axum;

        Ok::<_, anyhow::Error>(dioxus::server::router(App)
            .layer(axum::middleware::from_fn(
                |request: Request, next: Next| async move {
                    let method = request.method().clone();
                    let uri = request.uri().clone();
                    let t0 = std::time::Instant::now();
                    let res = next.run(request).await;
                    info!("{} {} -> {} ({}ms)", method, uri, res.status(), t0.elapsed().as_millis());
                    res
                },
            )))
    });
}
