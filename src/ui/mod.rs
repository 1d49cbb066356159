//! Profile Finder presentation layer.
//!
//! `render` and `console` are pure projections of the lookup state. The
//! WebView window (`gui` feature) uses `wry` for rendering:
//! - Windows: WebView2
//! - Linux: WebKitGTK
//! - macOS: WKWebView

pub mod console;
pub mod render;

#[cfg(feature = "gui")]
pub mod webview_app;
