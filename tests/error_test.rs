//! エラーケーステスト
//!
//! 設定ファイル・入力チェック・HTTPエラー表示を検証

use caronline::config::{Config, BASE_URL_ENV};
use caronline::error::CarOnlineError;
use caronline_common::{EditDraft, Error, VehicleForm};
use tempfile::tempdir;

/// 設定ファイルがない場合はデフォルト
#[test]
fn test_load_missing_config_uses_default() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("none.json")).unwrap();
    assert_eq!(config, Config::default());
}

/// 保存して読み直す
#[test]
fn test_config_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let mut config = Config::default();
    config.set_base_url("http://localhost:5000".into()).unwrap();
    config.accept_invalid_certs = true;
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

/// 壊れた設定ファイル
#[test]
fn test_load_broken_config() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    let result = Config::load_from(&path);
    assert!(matches!(result, Err(CarOnlineError::JsonParse(_))));
}

/// 環境変数がファイル設定より優先される
#[test]
fn test_env_overrides_base_url() {
    let config = Config::default();

    std::env::set_var(BASE_URL_ENV, "http://api.test/");
    assert_eq!(config.effective_base_url(), "http://api.test/");
    assert_eq!(config.endpoints().list(), "http://api.test/api/vehiculo/");

    // 空白のみは無視
    std::env::set_var(BASE_URL_ENV, "  ");
    assert_eq!(config.effective_base_url(), config.base_url);

    std::env::remove_var(BASE_URL_ENV);
    assert_eq!(config.effective_base_url(), "https://localhost:44370");
}

/// 入力チェックのエラーはメッセージのみ表示
#[test]
fn test_validation_error_display() {
    let form = VehicleForm {
        brand: "  ".into(),
        mileage: "10".into(),
        price: "10".into(),
    };
    let err: CarOnlineError = form.validate().unwrap_err().into();
    assert_eq!(
        err.to_string(),
        "El nombre del vehículo (marca) es obligatorio."
    );

    let draft = EditDraft {
        brand: "Kia".into(),
        mileage: String::new(),
        price: "abc".into(),
    };
    let err: CarOnlineError = draft.to_payload(1).unwrap_err().into();
    assert_eq!(err.to_string(), "El precio debe ser numérico.");
}

/// HTTPエラーは操作名・ステータス・本文をまとめて表示
#[test]
fn test_http_error_describe() {
    let err = Error::http(400, "precio invalido");
    assert_eq!(err.status(), Some(400));
    assert_eq!(
        err.describe("No se pudo crear el vehículo"),
        "No se pudo crear el vehículo (HTTP 400) - precio invalido"
    );

    let wrapped: CarOnlineError = err.into();
    assert!(wrapped.to_string().contains("400"));
}
