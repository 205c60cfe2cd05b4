//! Error boundaries and the panel shown when a storefront load fails.

use dioxus::prelude::*;

use crate::routes::Route;

/// Text worth showing to a shopper for a failed server call.
///
/// Upstream failures arrive as `ServerError` with the backend's message;
/// anything else is a transport problem and is shown as is.
pub fn load_error_message(err: &ServerFnError) -> String {
    match err {
        ServerFnError::ServerError { message, .. } => message.clone(),
        other => other.to_string(),
    }
}

/// Last resort for render errors; offers a way back to the home page.
#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                let details = err.error().map(|e| format!("{:#?}", e.0)).unwrap_or_default();
                rsx! {
                    div {
                        style: "display:flex; flex-direction: column; gap: 12px; padding: 40px;",
                        h1 { style: "color:#B3261E; font-size: 32px; margin: 0;", "Something went wrong" }
                        Link {
                            to: Route::HomePage {},
                            span { style: "font-size: 18px; text-decoration: underline;", "Back to the store" }
                        }
                        details {
                            summary { style: "color:#5F6368; cursor: pointer;", "Details ({boundary_name})" }
                            pre { style: "text-wrap: auto;", "{details}" }
                        }
                    }
                }
            },
            children
        }
    }
}

/// Catches render errors of one section and lets the shopper retry it.
#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let message = err.error().map(|e| format!("{:#?}", e.0)).unwrap_or("Unknown error".to_string());
                rsx! {
                    LoadErrorDisplay {
                        message,
                        on_retry: move |_| err.clear_errors(),
                    }
                }
            },
            {children}
        }
    }
}

#[component]
pub fn LoadErrorDisplay(message: ReadSignal<String>, on_retry: Option<EventHandler<()>>) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: flex-start;
                gap: 10px;
                padding: 32px 0;
            ",
            h2 { style: "color:#B3261E; font-size: 22px; margin: 0;", "We couldn't load these products" }
            p { style: "color:#5F6368; margin: 0; max-width: 600px;", "{message}" }
            if let Some(on_retry) = on_retry {
                button {
                    style: "cursor: pointer; font-size: 15px; border: 1px solid #1C212D; background: white; padding: 8px 14px; border-radius: 1000px;",
                    onclick: move |_| on_retry.call(()),
                    "Try again"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_show_only_their_message() {
        let err = ServerFnError::ServerError {
            message: "Collection not found: winter".to_string(),
            code: 500,
            details: None,
        };
        assert_eq!(load_error_message(&err), "Collection not found: winter");
    }
}
