//! WebView window using `wry` + `tao`.
//!
//! Architecture:
//! - The page shell (header, search form, empty content region) is served once
//!   from the `pf://` custom protocol.
//! - User actions arrive over IPC as JSON commands (see `commands`).
//! - Lookups run on a background tokio runtime. A task subscribed to the
//!   controller's revisions turns every state change into `UserEvent::Render`.
//! - `Render` evaluates `__pf_apply(frame)` with a freshly rendered frame; the
//!   page swaps its content region wholesale.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder, EventLoopProxy};
use tao::window::WindowBuilder;
use tokio::runtime::Runtime;
use wry::WebViewBuilder;

use crate::app::App;
use crate::commands::{handle_command, parse_command, CommandEffect};

#[derive(Debug)]
enum UserEvent {
    Render,
}

const STYLES_CSS: &str = include_str!("../../resources/ui/styles.css");
const APP_JS: &str = include_str!("../../resources/ui/app.js");

fn shell_html() -> String {
    let mut html = String::with_capacity(STYLES_CSS.len() + APP_JS.len() + 2000);
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><title>GitHub Profile Finder</title><style>");
    html.push_str(STYLES_CSS);
    html.push_str("</style></head><body class=\"theme-light\">");
    html.push_str(
        r#"<header class="app-header"><h1><span class="brand">GitHub</span> Profile Finder</h1><button id="theme-toggle" class="theme-toggle" type="button">🌙 Dark Mode</button></header>
<main class="app-main">
<form id="search-form" class="search-form">
<input id="username" class="search-input" type="text" placeholder="Enter GitHub username" autocomplete="off" autofocus />
<button id="search-button" class="search-button" type="submit">Search</button>
</form>
<div id="content"></div>
</main>"#,
    );
    html.push_str("<script>");
    html.push_str(APP_JS);
    html.push_str("</script></body></html>");
    html
}

fn lock(state: &Mutex<App>) -> MutexGuard<'_, App> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

fn handle_ipc(
    state: &Mutex<App>,
    runtime: &Runtime,
    proxy: &EventLoopProxy<UserEvent>,
    message: &str,
) {
    let preview: String = message.chars().take(200).collect();
    tracing::debug!(message = %preview, "ipc");

    let command = match parse_command(message) {
        Ok(command) => command,
        Err(e) => {
            tracing::warn!(error = %e, "ignoring ipc message");
            return;
        }
    };

    let (effect, controller) = {
        let mut app = lock(state);
        let effect = handle_command(&mut app, command);
        (effect, app.controller.clone())
    };

    match effect {
        Ok(CommandEffect::Render) => {
            let _ = proxy.send_event(UserEvent::Render);
        }
        Ok(CommandEffect::Lookup(username)) => {
            runtime.spawn(async move {
                let _ = controller.perform_lookup(&username).await;
            });
        }
        Err(e) => tracing::warn!(error = %e, "command rejected"),
    }
}

// ─── Main entry point ───

pub fn run(app: App) -> ! {
    let runtime = Arc::new(Runtime::new().expect("Failed to start tokio runtime"));
    let mut revisions = app.controller.subscribe();
    let state = Arc::new(Mutex::new(app));

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let redraw_proxy = proxy.clone();
    runtime.spawn(async move {
        while revisions.changed().await.is_ok() {
            if redraw_proxy.send_event(UserEvent::Render).is_err() {
                break;
            }
        }
    });

    let window = WindowBuilder::new()
        .with_title("GitHub Profile Finder")
        .with_inner_size(tao::dpi::LogicalSize::new(960.0, 800.0))
        .build(&event_loop)
        .expect("Failed to create window");

    let ipc_state = state.clone();
    let ipc_runtime = runtime.clone();
    let ipc_proxy = proxy.clone();

    let builder = WebViewBuilder::new()
        .with_custom_protocol("pf".into(), move |_wv_id, _request| {
            wry::http::Response::builder()
                .header("Content-Type", "text/html; charset=utf-8")
                .body(shell_html().into_bytes().into())
                .unwrap_or_else(|_| wry::http::Response::new(Vec::new().into()))
        })
        .with_url("pf://localhost/")
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            handle_ipc(&ipc_state, &ipc_runtime, &ipc_proxy, msg.body());
        })
        .with_new_window_req_handler(|url, _features| {
            if url.starts_with("http://") || url.starts_with("https://") {
                if let Err(e) = open::that_detached(&url) {
                    tracing::warn!(url = %url, error = %e, "failed to open link");
                }
            }
            wry::NewWindowResponse::Deny
        })
        .with_devtools(cfg!(debug_assertions));

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window.default_vbox().expect("Failed to get GTK vbox");
        builder.build_gtk(vbox).expect("Failed to create WebView")
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(&window).expect("Failed to create WebView");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                tracing::info!("window closed");
                *control_flow = ControlFlow::Exit;
            }

            Event::UserEvent(UserEvent::Render) => {
                let frame = lock(&state).render();
                match serde_json::to_string(&frame) {
                    Ok(json) => {
                        let script = format!("if(window.__pf_apply)__pf_apply({})", json);
                        if let Err(e) = webview.evaluate_script(&script) {
                            tracing::warn!(error = %e, "failed to push frame");
                        }
                    }
                    Err(e) => tracing::warn!(error = %e, "failed to serialize frame"),
                }
            }

            _ => {}
        }
    });
}
