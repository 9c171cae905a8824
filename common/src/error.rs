//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// Displayはそのまま画面に表示できるメッセージになる
#[derive(Error, Debug)]
pub enum Error {
    /// 入力チェックエラー（リクエスト前に検出）
    #[error("{0}")]
    Validation(String),

    /// 2xx以外のHTTPレスポンス
    #[error("Error HTTP {status}{}", detail_suffix(.detail))]
    Http { status: u16, detail: Option<String> },

    /// 通信自体の失敗
    #[error("Error de red: {0}")]
    Network(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// 正規化の結果が0件
    #[error("No se encontraron vehículos en la respuesta de la API")]
    EmptyCollection,

    #[error("Parse error: {0}")]
    Parse(String),
}

impl Error {
    /// HTTPエラーを作成（空の本文は詳細なしとして扱う）
    pub fn http(status: u16, body: &str) -> Self {
        let body = body.trim();
        Error::Http {
            status,
            detail: (!body.is_empty()).then(|| body.to_string()),
        }
    }

    /// HTTPステータス（HTTPエラーのみ）
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 画面表示用メッセージ
    ///
    /// HTTPエラーは "{action} (HTTP 500) - 本文"、それ以外はDisplayのまま
    pub fn describe(&self, action: &str) -> String {
        match self {
            Error::Http { status, detail } => {
                format!("{} (HTTP {}){}", action, status, detail_suffix(detail))
            }
            other => other.to_string(),
        }
    }
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(" - {}", d)).unwrap_or_default()
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_validation() {
        let error = Error::Validation("El precio debe ser un número.".to_string());
        assert_eq!(format!("{}", error), "El precio debe ser un número.");
    }

    #[test]
    fn test_error_display_http_with_detail() {
        let error = Error::http(500, "  boom ");
        assert_eq!(format!("{}", error), "Error HTTP 500 - boom");
    }

    #[test]
    fn test_error_display_http_without_detail() {
        let error = Error::http(404, "");
        assert_eq!(format!("{}", error), "Error HTTP 404");
        assert_eq!(error.status(), Some(404));
    }

    #[test]
    fn test_describe_http() {
        let error = Error::http(409, "duplicado");
        assert_eq!(
            error.describe("No se pudo crear el vehículo"),
            "No se pudo crear el vehículo (HTTP 409) - duplicado"
        );
        assert_eq!(Error::http(500, "").describe("Fallo al eliminar"), "Fallo al eliminar (HTTP 500)");
    }

    #[test]
    fn test_describe_other_uses_display() {
        let error = Error::Network("timeout".to_string());
        assert_eq!(error.describe("Fallo al eliminar"), "Error de red: timeout");
    }

    #[test]
    fn test_error_display_empty_collection() {
        let display = format!("{}", Error::EmptyCollection);
        assert!(display.contains("No se encontraron vehículos"));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
        assert_eq!(error.status(), None);
    }
}
