//! # Erros do lesk-core
//!
//! O caminho de pontuação é infalível: palavras desconhecidas ou relações vazias
//! simplesmente contribuem com sobreposição zero. Os erros abaixo só surgem ao
//! carregar um léxico ou ao interpretar argumentos vindos de fora (ex: `"noun"`).

use thiserror::Error;

/// Erro principal da biblioteca.
#[derive(Error, Debug)]
pub enum LeskError {
    /// Falha de leitura do arquivo de léxico
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON de léxico malformado
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Dois sentidos com o mesmo identificador
    #[error("duplicate sense id: {0}")]
    DuplicateSense(String),

    /// Uma relação aponta para um sentido que não existe no léxico
    #[error("sense {from} has a {kind} relation to unknown sense {target}")]
    UnknownSense {
        from: String,
        kind: String,
        target: String,
    },

    /// Violação de contrato por parte do chamador
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl LeskError {
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LeskError::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, LeskError>;
