//! 車両REST APIクライアント（reqwest）
//!
//! URL組み立て・レスポンス解釈はWeb版と同じくcommonを使う

use crate::config::Config;
use crate::error::{CarOnlineError, Result};
use caronline_common::{
    interpret_upload_response, parse_collection, parse_created, parse_vehicle,
    AnalysisResult, CreatedRecord, Endpoints, Error, Vehicle, VehiclePayload, UPLOAD_FIELD,
};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use std::path::Path;
use std::time::Duration;

pub struct VehicleClient {
    http: Client,
    endpoints: Endpoints,
    verbose: bool,
}

impl VehicleClient {
    pub fn new(config: &Config, verbose: bool) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;

        Ok(Self {
            http,
            endpoints: config.endpoints(),
            verbose,
        })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// 送信して本文を返す（2xx以外はHTTPエラー）
    async fn send(&self, label: &str, request: RequestBuilder) -> Result<String> {
        let (ok, status, body) = self.send_raw(label, request).await?;
        if !ok {
            return Err(Error::http(status, &body).into());
        }
        Ok(body)
    }

    async fn send_raw(&self, label: &str, request: RequestBuilder) -> Result<(bool, u16, String)> {
        if self.verbose {
            eprintln!("[http] {}", label);
        }
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        if self.verbose {
            eprintln!("[http] {} -> {}", label, status.as_u16());
        }
        Ok((status.is_success(), status.as_u16(), body))
    }

    /// 一覧取得（0件はエラー）
    pub async fn list(&self) -> Result<Vec<Vehicle>> {
        let url = self.endpoints.list();
        let body = self.send(&format!("GET {}", url), self.http.get(&url)).await?;
        Ok(parse_collection(&body)?)
    }

    pub async fn get(&self, id: &str) -> Result<Vehicle> {
        let url = self.endpoints.find(id);
        let body = self.send(&format!("GET {}", url), self.http.get(&url)).await?;
        Ok(parse_vehicle(&body)?)
    }

    /// 作成（本文がJSONでなければNone）
    pub async fn create(&self, payload: &VehiclePayload) -> Result<Option<CreatedRecord>> {
        let url = self.endpoints.create();
        let body = self
            .send(&format!("POST {}", url), self.http.post(&url).json(payload))
            .await?;
        Ok(parse_created(&body))
    }

    pub async fn update(&self, payload: &VehiclePayload) -> Result<()> {
        let id = payload
            .id
            .ok_or_else(|| CarOnlineError::CliExecution("更新にはIDが必要です".into()))?;
        let url = self.endpoints.item(id);
        self.send(&format!("PUT {}", url), self.http.put(&url).json(payload))
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let url = self.endpoints.item(id);
        self.send(&format!("DELETE {}", url), self.http.delete(&url))
            .await?;
        Ok(())
    }

    /// 画像解析（multipart、フィールド名 file）
    pub async fn analyze_image(&self, path: &Path) -> Result<Option<AnalysisResult>> {
        if !path.is_file() {
            return Err(CarOnlineError::FileNotFound(path.display().to_string()));
        }

        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "image".to_string());
        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(mime_type_for(path))?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        let url = self.endpoints.upload_image();
        let (ok, status, body) = self
            .send_raw(&format!("POST {}", url), self.http.post(&url).multipart(form))
            .await?;
        Ok(interpret_upload_response(ok, status, &body)?)
    }
}

/// 拡張子からMIMEタイプを推定
pub fn mime_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}
