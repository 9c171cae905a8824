//! 画像解析レスポンスのパーサー
//!
//! upload-imageのレスポンスは `{ "resultado": ... }` 形式。
//! resultadoはJSONそのもの、またはJSONを含む文字列で、
//! 文字列の場合は ```json ... ``` のフェンスで囲まれていることがある

use serde_json::Value;

use crate::error::{Error, Result};
use crate::types::{AnalysisResult, VehicleAnalysis};

/// ```json と ``` のマーカーをすべて取り除いてtrim
///
/// # Examples
/// ```
/// use caronline_common::strip_code_fences;
///
/// let cleaned = strip_code_fences("```json\n{\"marca\":\"Toyota\"}\n```");
/// assert_eq!(cleaned, "{\"marca\":\"Toyota\"}");
/// ```
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

/// resultadoフィールドを解析結果に変換
///
/// * 文字列: フェンスを除去してパース、失敗したら元の文字列をRawで返す
/// * オブジェクト: そのまま構造化
/// * null / 欠落: None
pub fn parse_analysis(resultado: &Value) -> Option<AnalysisResult> {
    match resultado {
        Value::Null => None,
        Value::String(text) => Some(parse_analysis_text(text)),
        Value::Object(_) => Some(structured_or_raw(resultado, || resultado.to_string())),
        other => Some(AnalysisResult::Raw(other.to_string())),
    }
}

/// 文字列のresultadoをパース（失敗時は生文字列）
pub fn parse_analysis_text(text: &str) -> AnalysisResult {
    let cleaned = strip_code_fences(text);
    match serde_json::from_str::<Value>(&cleaned) {
        Ok(value) if value.is_object() => structured_or_raw(&value, || text.to_string()),
        _ => AnalysisResult::Raw(text.to_string()),
    }
}

/// upload-imageのレスポンスを解釈
///
/// 失敗時は本文がJSONでなくてもHTTPエラーにする（`detalle` があれば詳細に使う）。
/// 成功時の本文はJSONとして読む
pub fn interpret_upload_response(ok: bool, status: u16, body: &str) -> Result<Option<AnalysisResult>> {
    if !ok {
        return Err(Error::Http {
            status,
            detail: error_detail(body),
        });
    }

    let data: Value = serde_json::from_str(body)?;
    Ok(data.get("resultado").and_then(parse_analysis))
}

/// エラーレスポンス本文から `detalle` を取り出す
pub fn error_detail(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()
        .as_ref()
        .and_then(detail_from_value)
}

fn detail_from_value(data: &Value) -> Option<String> {
    data.get("detalle")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn structured_or_raw(value: &Value, raw: impl FnOnce() -> String) -> AnalysisResult {
    match serde_json::from_value::<VehicleAnalysis>(value.clone()) {
        Ok(analysis) => AnalysisResult::Structured(analysis),
        Err(_) => AnalysisResult::Raw(raw()),
    }
}
