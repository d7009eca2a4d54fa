//! Play reference page configuration

use crate::hidden_clients::HiddenClients;
use crate::options::{Layout, SearchHotKey};
use crate::theme::PLAY_THEME;
use serde_json::{Map, Value};

/// Default CDN URL for the Play viewer script
pub const PLAY_JS_URL: &str = "https://cdn.jsdelivr.net/npm/@play/api-reference";

/// Default favicon shown in the browser tab
pub const PLAY_FAVICON_URL: &str = "https://rustapi.dev/favicon.png";

/// Default integration tag reported to the viewer
pub const PLAY_INTEGRATION: &str = "rustapi";

/// Configuration for the Play API reference page
///
/// Built once per request with [`PlayConfig::new`], which fills every
/// optional field with its documented default; builder setters override
/// individual options.
///
/// # Example
///
/// ```rust,ignore
/// use rustapi_play::{play_reference_html, Layout, PlayConfig};
///
/// async fn reference() -> Response {
///     let config = PlayConfig::new("/openapi.json", "My API - Reference")
///         .layout(Layout::Classic)
///         .hide_models(true);
///     play_reference_html(&config)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct PlayConfig {
    /// URL of the OpenAPI document the viewer loads (normally `/openapi.json`)
    pub openapi_url: String,
    /// HTML `<title>` content, shown in the browser tab.
    ///
    /// Embedded verbatim: the title comes from the host application's own
    /// configuration, never from request input, so it is not HTML-escaped.
    pub title: String,
    /// URL of the Play viewer script, normally a CDN URL
    pub js_url: String,
    /// Request proxy for the viewer's "try it" feature; empty disables it
    pub proxy_url: String,
    /// Favicon URL for the browser tab
    pub favicon_url: String,
    /// CSS theme injected verbatim into a `<style>` block
    pub theme: String,
    /// Viewer layout, `modern` by default
    pub layout: Layout,
    /// Show the sidebar (default `true`)
    pub show_sidebar: bool,
    /// Hide the "Download OpenAPI Document" button (default `false`)
    pub hide_download_button: bool,
    /// Hide every model section (default `false`)
    pub hide_models: bool,
    /// Start in dark mode (default `true`)
    pub dark_mode: bool,
    /// Hotkey that focuses the search box, `k` by default (e.g. CMD+k)
    pub search_hot_key: SearchHotKey,
    /// Code-sample clients to hide; accepts three shapes, see [`HiddenClients`]
    pub hidden_clients: HiddenClients,
    /// Server list forwarded to the viewer, each entry mapping name to URL
    pub servers: Vec<Map<String, Value>>,
    /// Open every tag section by default (default `false`)
    pub default_open_all_tags: bool,
    /// Additional authentication information, forwarded unchanged
    pub authentication: Map<String, Value>,
    /// Integration tag forwarded as `_integration`; `None` serializes to `null`
    pub integration: Option<String>,
}

impl PlayConfig {
    /// Create a configuration with every optional field at its default
    pub fn new(openapi_url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            openapi_url: openapi_url.into(),
            title: title.into(),
            js_url: PLAY_JS_URL.to_string(),
            proxy_url: String::new(),
            favicon_url: PLAY_FAVICON_URL.to_string(),
            theme: PLAY_THEME.to_string(),
            layout: Layout::default(),
            show_sidebar: true,
            hide_download_button: false,
            hide_models: false,
            dark_mode: true,
            search_hot_key: SearchHotKey::default(),
            hidden_clients: HiddenClients::default(),
            servers: Vec::new(),
            default_open_all_tags: false,
            authentication: Map::new(),
            integration: Some(PLAY_INTEGRATION.to_string()),
        }
    }

    /// Set the viewer script URL
    pub fn js_url(mut self, url: impl Into<String>) -> Self {
        self.js_url = url.into();
        self
    }

    /// Set the request proxy URL
    pub fn proxy_url(mut self, url: impl Into<String>) -> Self {
        self.proxy_url = url.into();
        self
    }

    /// Set the favicon URL
    pub fn favicon_url(mut self, url: impl Into<String>) -> Self {
        self.favicon_url = url.into();
        self
    }

    /// Replace the default CSS theme
    pub fn theme(mut self, css: impl Into<String>) -> Self {
        self.theme = css.into();
        self
    }

    /// Set the viewer layout
    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Show or hide the sidebar
    pub fn show_sidebar(mut self, show: bool) -> Self {
        self.show_sidebar = show;
        self
    }

    /// Hide the "Download OpenAPI Document" button
    pub fn hide_download_button(mut self, hide: bool) -> Self {
        self.hide_download_button = hide;
        self
    }

    /// Hide every model section
    pub fn hide_models(mut self, hide: bool) -> Self {
        self.hide_models = hide;
        self
    }

    /// Start in dark mode or light mode
    pub fn dark_mode(mut self, dark: bool) -> Self {
        self.dark_mode = dark;
        self
    }

    /// Set the search hotkey
    pub fn search_hot_key(mut self, key: SearchHotKey) -> Self {
        self.search_hot_key = key;
        self
    }

    /// Set which code-sample clients the viewer hides
    pub fn hidden_clients(mut self, hidden: impl Into<HiddenClients>) -> Self {
        self.hidden_clients = hidden.into();
        self
    }

    /// Append a named server URL
    pub fn server(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
        let mut entry = Map::new();
        entry.insert(name.into(), Value::String(url.into()));
        self.servers.push(entry);
        self
    }

    /// Replace the server list
    pub fn servers(mut self, servers: Vec<Map<String, Value>>) -> Self {
        self.servers = servers;
        self
    }

    /// Open every tag section by default
    pub fn default_open_all_tags(mut self, open: bool) -> Self {
        self.default_open_all_tags = open;
        self
    }

    /// Set additional authentication information, forwarded unchanged
    pub fn authentication(mut self, authentication: Map<String, Value>) -> Self {
        self.authentication = authentication;
        self
    }

    /// Override the integration tag
    pub fn integration(mut self, integration: impl Into<String>) -> Self {
        self.integration = Some(integration.into());
        self
    }

    /// Clear the integration tag (serializes as `null`)
    pub fn without_integration(mut self) -> Self {
        self.integration = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_applies_defaults() {
        let config = PlayConfig::new("/openapi.json", "Test API");

        assert_eq!(config.openapi_url, "/openapi.json");
        assert_eq!(config.title, "Test API");
        assert_eq!(config.js_url, PLAY_JS_URL);
        assert_eq!(config.proxy_url, "");
        assert_eq!(config.favicon_url, PLAY_FAVICON_URL);
        assert_eq!(config.theme, PLAY_THEME);
        assert_eq!(config.layout, Layout::Modern);
        assert!(config.show_sidebar);
        assert!(!config.hide_download_button);
        assert!(!config.hide_models);
        assert!(config.dark_mode);
        assert_eq!(config.search_hot_key, SearchHotKey::K);
        assert_eq!(config.hidden_clients, HiddenClients::List(vec![]));
        assert!(config.servers.is_empty());
        assert!(!config.default_open_all_tags);
        assert!(config.authentication.is_empty());
        assert_eq!(config.integration.as_deref(), Some(PLAY_INTEGRATION));
    }

    #[test]
    fn test_builder_setters() {
        let config = PlayConfig::new("/openapi.json", "Test API")
            .layout(Layout::Classic)
            .search_hot_key(SearchHotKey::S)
            .proxy_url("https://proxy.play.com")
            .hidden_clients(true)
            .server("production", "https://api.example.com")
            .dark_mode(false)
            .without_integration();

        assert_eq!(config.layout, Layout::Classic);
        assert_eq!(config.search_hot_key, SearchHotKey::S);
        assert_eq!(config.proxy_url, "https://proxy.play.com");
        assert_eq!(config.hidden_clients, HiddenClients::All(true));
        assert_eq!(config.servers.len(), 1);
        assert_eq!(
            config.servers[0].get("production"),
            Some(&Value::String("https://api.example.com".to_string()))
        );
        assert!(!config.dark_mode);
        assert_eq!(config.integration, None);
    }
}
