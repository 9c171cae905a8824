use thiserror::Error;

#[derive(Error, Debug)]
pub enum CarOnlineError {
    #[error("設定エラー: {0}")]
    Config(String),

    /// API・入力チェック・パースのエラー（common）
    #[error("{0}")]
    Api(#[from] caronline_common::Error),

    #[error("HTTPクライアントエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("CLI実行エラー: {0}")]
    CliExecution(String),
}

pub type Result<T> = std::result::Result<T, CarOnlineError>;
