//! Play reference document assembly

use crate::config::PlayConfig;
use crate::error::PlayError;
use crate::hidden_clients::HiddenClients;
use serde::Serialize;
use serde_json::{Map, Value};

/// Machine-readable options embedded for the viewer script.
///
/// Field names and declaration order are the wire contract with the Play
/// viewer; renaming or reordering them breaks it.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ViewerConfiguration<'a> {
    layout: &'a str,
    show_sidebar: bool,
    hide_download_button: bool,
    hide_models: bool,
    dark_mode: bool,
    search_hot_key: &'a str,
    hidden_clients: &'a HiddenClients,
    servers: &'a [Map<String, Value>],
    default_open_all_tags: bool,
    authentication: &'a Map<String, Value>,
    #[serde(rename = "_integration")]
    integration: &'a Option<String>,
}

impl<'a> ViewerConfiguration<'a> {
    fn from_config(config: &'a PlayConfig) -> Self {
        Self {
            layout: config.layout.as_str(),
            show_sidebar: config.show_sidebar,
            hide_download_button: config.hide_download_button,
            hide_models: config.hide_models,
            dark_mode: config.dark_mode,
            search_hot_key: config.search_hot_key.as_str(),
            hidden_clients: &config.hidden_clients,
            servers: &config.servers,
            default_open_all_tags: config.default_open_all_tags,
            authentication: &config.authentication,
            integration: &config.integration,
        }
    }
}

/// Generate the Play reference page for a configuration.
///
/// Pure function of its argument: no I/O, and identical configurations
/// produce byte-identical documents. Fails only if the embedded viewer
/// configuration cannot be serialized to JSON, in which case no document
/// is produced.
pub fn generate_play_html(config: &PlayConfig) -> Result<String, PlayError> {
    let configuration = serde_json::to_string(&ViewerConfiguration::from_config(config))?;

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<title>{title}</title>
<!-- needed for adaptive design -->
<meta charset="utf-8"/>
<meta name="viewport" content="width=device-width, initial-scale=1">
<link rel="shortcut icon" href="{favicon_url}">
<style>
body {{
  margin: 0;
  padding: 0;
}}
</style>
<style>
{theme}
</style>
</head>
<body>
<noscript>
Play requires Javascript to function. Please enable it to browse the documentation.
</noscript>
<script
  id="api-reference"
  data-url="{openapi_url}"
  data-proxy-url="{proxy_url}"></script>
<script>
var configuration = {configuration}

document.getElementById('api-reference').dataset.configuration =
  JSON.stringify(configuration)
</script>
<script src="{js_url}"></script>
</body>
</html>"#,
        title = config.title,
        favicon_url = config.favicon_url,
        theme = config.theme,
        openapi_url = config.openapi_url,
        proxy_url = config.proxy_url,
        configuration = configuration,
        js_url = config.js_url,
    ))
}
