//! 車両REST API呼び出し（fetch）
//!
//! 2xx以外はエラーとして返す。メッセージへの変換は各コンポーネントで行う

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};
use caronline_common::{
    interpret_upload_response, parse_collection, parse_created, parse_vehicle,
    AnalysisResult, CreatedRecord, Endpoints, Error, Result, Vehicle, VehiclePayload,
    DEFAULT_BASE_URL, UPLOAD_FIELD,
};

/// APIのエンドポイント（ビルド時の CARONLINE_API_URL で上書き可）
pub fn endpoints() -> Endpoints {
    Endpoints::new(option_env!("CARONLINE_API_URL").unwrap_or(DEFAULT_BASE_URL))
}

enum Body {
    Json(String),
    Form(FormData),
}

/// レスポンス（本文はテキストで読む）
struct RawResponse {
    ok: bool,
    status: u16,
    body: String,
}

impl RawResponse {
    fn error_for_status(self) -> Result<String> {
        if self.ok {
            Ok(self.body)
        } else {
            Err(Error::http(self.status, &self.body))
        }
    }
}

fn js_error(value: JsValue) -> Error {
    Error::Network(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

/// fetch呼び出し（共通処理）
async fn send(method: &str, url: &str, body: Option<Body>) -> Result<RawResponse> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    match &body {
        Some(Body::Json(text)) => opts.set_body(&JsValue::from_str(text)),
        Some(Body::Form(form)) => opts.set_body(form),
        None => {}
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    if let Some(Body::Json(_)) = body {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_error)?;
    }

    let window = web_sys::window().ok_or_else(|| Error::Network("window no disponible".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;

    Ok(RawResponse {
        ok: resp.ok(),
        status: resp.status(),
        body: text.as_string().unwrap_or_default(),
    })
}

fn json_body(payload: &VehiclePayload) -> Result<Option<Body>> {
    Ok(Some(Body::Json(serde_json::to_string(payload)?)))
}

/// 一覧取得（3形式のレスポンスを正規化、0件はエラー）
pub async fn list_vehicles() -> Result<Vec<Vehicle>> {
    let body = send("GET", &endpoints().list(), None)
        .await?
        .error_for_status()?;
    parse_collection(&body)
}

/// ID検索
pub async fn find_vehicle(id: &str) -> Result<Vehicle> {
    let body = send("GET", &endpoints().find(id), None)
        .await?
        .error_for_status()?;
    parse_vehicle(&body)
}

/// 作成（本文がJSONでなければNone）
pub async fn create_vehicle(payload: &VehiclePayload) -> Result<Option<CreatedRecord>> {
    let body = send("POST", &endpoints().create(), json_body(payload)?)
        .await?
        .error_for_status()?;
    Ok(parse_created(&body))
}

/// 更新（成功時の本文は使わない）
pub async fn update_vehicle(payload: &VehiclePayload) -> Result<()> {
    let id = payload
        .id
        .ok_or_else(|| Error::Validation("Falta el id del vehículo.".into()))?;
    send("PUT", &endpoints().item(id), json_body(payload)?)
        .await?
        .error_for_status()?;
    Ok(())
}

/// 削除
pub async fn delete_vehicle(id: i64) -> Result<()> {
    send("DELETE", &endpoints().item(id), None)
        .await?
        .error_for_status()?;
    Ok(())
}

/// アップロード用のFormData（フィールド名 file）
pub fn build_upload_form(file: &File) -> Result<FormData> {
    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
        .map_err(js_error)?;
    Ok(form)
}

/// 画像解析
pub async fn upload_image(file: &File) -> Result<Option<AnalysisResult>> {
    let form = build_upload_form(file)?;
    let resp = send("POST", &endpoints().upload_image(), Some(Body::Form(form))).await?;
    interpret_upload_response(resp.ok, resp.status, &resp.body)
}
