//! Web UI and API description

use std::collections::BTreeMap;

use axum::{Json, response::Html};
use serde::{Deserialize, Serialize};

/// Single-page test client served at `/`
const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Endpoints advertised by `/api`
const ENDPOINTS: [(&str, &str); 8] = [
    ("/", "Interface web de testes"),
    ("/api", "Informações da API"),
    ("/health", "Verificação de estado do servidor"),
    ("/ready", "Disponibilidade da API do IPMA"),
    ("/distritos", "Lista todos os distritos disponíveis"),
    (
        "/localidades",
        "Lista todas as localidades (filtro opcional: ?distrito_id=X)",
    ),
    (
        "/previsao/<localidade_id>",
        "Previsão meteorológica para uma localidade",
    ),
    (
        "/previsao",
        "Previsão com parâmetros de query (?localidade_id=X&dias=Y)",
    ),
];

/// API description response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiInfoResponse {
    pub message: String,
    pub version: String,
    /// Route path to description
    pub endpoints: BTreeMap<String, String>,
}

/// Serve the web UI
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Describe the available endpoints
pub async fn api_info() -> Json<ApiInfoResponse> {
    Json(ApiInfoResponse {
        message: "API de Previsão Meteorológica - IPMA".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: ENDPOINTS
            .iter()
            .map(|(path, description)| ((*path).to_string(), (*description).to_string()))
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn api_info_lists_every_route() {
        let Json(info) = api_info().await;
        assert_eq!(info.endpoints.len(), ENDPOINTS.len());
        assert!(info.endpoints.contains_key("/distritos"));
        assert!(info.endpoints.contains_key("/health"));
        assert!(info.endpoints.contains_key("/ready"));
        assert!(info.endpoints.contains_key("/previsao/<localidade_id>"));
        assert!(!info.version.is_empty());
    }

    #[tokio::test]
    async fn index_serves_html() {
        let Html(body) = index().await;
        assert!(body.contains("<html"));
    }
}
