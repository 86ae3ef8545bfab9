//! Servidor web Axum para consultar a desambiguação de Lesk

mod config;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use lesk_core::{
    demo::{demo_lexicon, DEMO_SENTENCE, DEMO_WORD},
    Candidate, Disambiguator, LexicalDatabase, MemoryLexicon, PartOfSpeech, Sense,
    Strategy,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;

/// Estado compartilhado da aplicação (somente leitura)
struct AppState {
    lexicon: MemoryLexicon,
    default_strategy: Strategy,
}

#[derive(Deserialize)]
struct DisambiguateRequest {
    /// Sentença bruta; é segmentada no servidor
    #[serde(default)]
    sentence: Option<String>,
    /// Tokens já segmentados; têm prioridade sobre `sentence`
    #[serde(default)]
    tokens: Option<Vec<String>>,
    word: String,
    #[serde(default)]
    pos: Option<String>,
    /// Nome da estratégia; sem ele, vale a padrão do servidor
    #[serde(default)]
    strategy: Option<String>,
}

#[derive(Deserialize)]
struct SensesQuery {
    #[serde(default)]
    pos: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct SenseView {
    id: String,
    definition: String,
    example: Option<String>,
}

impl From<&Sense> for SenseView {
    fn from(sense: &Sense) -> Self {
        Self {
            id: sense.id.to_string(),
            definition: sense.definition().to_string(),
            example: sense.example().map(str::to_string),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct CandidateView {
    id: String,
    definition: String,
    score: usize,
}

impl From<&Candidate<'_>> for CandidateView {
    fn from(candidate: &Candidate<'_>) -> Self {
        Self {
            id: candidate.sense.id.to_string(),
            definition: candidate.sense.definition().to_string(),
            score: candidate.score,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct DisambiguateResponse {
    word: String,
    strategy: Strategy,
    sense: Option<SenseView>,
    candidates: Vec<CandidateView>,
}

#[derive(Debug, Serialize, Deserialize)]
struct DemoResult {
    strategy: Strategy,
    sense: Option<SenseView>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env();

    let loaded = match &config.lexicon_path {
        Some(path) => {
            info!("Carregando léxico de {}", path.display());
            MemoryLexicon::from_path(path)
        }
        None => {
            info!("LESK_LEXICON não definido, usando o léxico de demonstração");
            demo_lexicon()
        }
    };
    let lexicon = match loaded {
        Ok(lexicon) => lexicon,
        Err(e) => {
            error!("Falha ao carregar o léxico: {}", e);
            std::process::exit(1);
        }
    };
    info!("Léxico com {} sentidos, estratégia padrão: {}", lexicon.len(), config.default_strategy);

    let state = Arc::new(AppState {
        lexicon,
        default_strategy: config.default_strategy,
    });

    let listener = match tokio::net::TcpListener::bind(&config.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Não foi possível escutar em {}: {}", config.addr, e);
            std::process::exit(1);
        }
    };
    info!("Servidor Lesk iniciado em http://{}", config.addr);

    if let Err(e) = axum::serve(listener, app(state)).await {
        error!("Servidor encerrado com erro: {}", e);
    }
}

fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/disambiguate", post(disambiguate_handler))
        .route("/demo", get(demo_handler))
        .route("/senses/:word", get(senses_handler))
        .layer(cors)
        .with_state(state)
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(serde_json::json!({ "error": message.into() }))).into_response()
}

fn parse_pos(raw: Option<&str>) -> Result<Option<PartOfSpeech>, Response> {
    raw.filter(|p| !p.trim().is_empty())
        .map(|p| p.parse::<PartOfSpeech>())
        .transpose()
        .map_err(|e| error_response(StatusCode::BAD_REQUEST, e.to_string()))
}

fn parse_strategy(raw: Option<&str>, default: Strategy) -> Result<Strategy, Response> {
    match raw.filter(|s| !s.trim().is_empty()) {
        Some(s) => s
            .parse::<Strategy>()
            .map_err(|e| error_response(StatusCode::BAD_REQUEST, e.to_string())),
        None => Ok(default),
    }
}

async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Desambigua uma palavra em uma sentença (ou lista de tokens)
async fn disambiguate_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DisambiguateRequest>,
) -> Response {
    let word = req.word.trim().to_string();
    if word.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Palavra vazia");
    }

    let pos = match parse_pos(req.pos.as_deref()) {
        Ok(pos) => pos,
        Err(resp) => return resp,
    };
    let strategy = match parse_strategy(req.strategy.as_deref(), state.default_strategy) {
        Ok(strategy) => strategy,
        Err(resp) => return resp,
    };

    let tokens = match (req.tokens, req.sentence) {
        (Some(tokens), _) => tokens,
        (None, Some(sentence)) => {
            use lesk_core::tokenizer::{UnicodeWordTokenizer, WordTokenizer};
            UnicodeWordTokenizer.word_tokenize(&sentence)
        }
        (None, None) => {
            return error_response(StatusCode::BAD_REQUEST, "Informe 'sentence' ou 'tokens'");
        }
    };

    info!("Desambiguando '{}' [{} | {:?}]: {} tokens", word, strategy, pos, tokens.len());

    // O cálculo é síncrono e pode ser pesado; roda fora do runtime
    let result = tokio::task::spawn_blocking(move || {
        let wsd = Disambiguator::new(&state.lexicon);
        let candidates = wsd.score_candidates(tokens.as_slice(), &word, pos, strategy);
        let sense = strategy.select(&candidates).map(|best| SenseView::from(best.sense));
        DisambiguateResponse {
            word,
            strategy,
            sense,
            candidates: candidates.iter().map(CandidateView::from).collect(),
        }
    })
    .await;

    match result {
        Ok(response) => {
            info!(
                "Resultado: {}",
                response.sense.as_ref().map(|s| s.id.as_str()).unwrap_or("nenhum sentido")
            );
            Json(response).into_response()
        }
        Err(e) => {
            error!("Tarefa de desambiguação falhou: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Falha interna")
        }
    }
}

/// Roda as três estratégias na sentença de demonstração
async fn demo_handler(State(state): State<Arc<AppState>>) -> Response {
    let result = tokio::task::spawn_blocking(move || {
        let wsd = Disambiguator::new(&state.lexicon);
        Strategy::ALL
            .iter()
            .map(|&strategy| DemoResult {
                strategy,
                sense: wsd
                    .disambiguate_sentence(DEMO_SENTENCE, DEMO_WORD, Some(PartOfSpeech::Noun), strategy)
                    .map(SenseView::from),
            })
            .collect::<Vec<_>>()
    })
    .await;

    match result {
        Ok(results) => Json(serde_json::json!({
            "sentence": DEMO_SENTENCE,
            "word": DEMO_WORD,
            "results": results,
        }))
        .into_response(),
        Err(e) => {
            error!("Tarefa de demonstração falhou: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Falha interna")
        }
    }
}

/// Lista os sentidos candidatos de uma palavra
async fn senses_handler(
    State(state): State<Arc<AppState>>,
    Path(word): Path<String>,
    Query(query): Query<SensesQuery>,
) -> Response {
    let pos = match parse_pos(query.pos.as_deref()) {
        Ok(pos) => pos,
        Err(resp) => return resp,
    };
    let senses: Vec<SenseView> = state
        .lexicon
        .senses_for(&word, pos)
        .into_iter()
        .map(SenseView::from)
        .collect();
    Json(senses).into_response()
}
