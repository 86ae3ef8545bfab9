//! Configuração do servidor lida de variáveis de ambiente

use std::path::PathBuf;

use lesk_core::Strategy;
use tracing::warn;

const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// `LESK_ADDR`: endereço de escuta
    pub addr: String,
    /// `LESK_LEXICON`: arquivo JSON do léxico; sem ele, usa o léxico de demonstração
    pub lexicon_path: Option<PathBuf>,
    /// `LESK_STRATEGY`: estratégia quando a requisição não informa nenhuma
    pub default_strategy: Strategy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            lexicon_path: None,
            default_strategy: Strategy::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Monta a configuração a partir de uma função de consulta (facilita testes).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = lookup("LESK_ADDR").filter(|a| !a.trim().is_empty()) {
            config.addr = addr.trim().to_string();
        }

        config.lexicon_path = lookup("LESK_LEXICON")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        if let Some(raw) = lookup("LESK_STRATEGY") {
            match raw.parse::<Strategy>() {
                Ok(strategy) => config.default_strategy = strategy,
                Err(e) => warn!("LESK_STRATEGY ignorado ({}), usando {}", e, config.default_strategy),
            }
        }

        config
    }
}
