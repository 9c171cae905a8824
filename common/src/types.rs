//! 車両データの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Vehicle: APIから取得した車両（正規化済み）
//! - VehiclePayload: 作成・更新リクエストの本文
//! - VehicleAnalysis / AnalysisResult: 画像解析の結果

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// 車両
///
/// APIのフィールド名はスペイン語（idvehiculo, marca, kilometraje, precio）。
/// kilometrajeは文字列と数値が混在し、precioも文字列で返ることがあるため
/// 寛容にデシリアライズする
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// 数値、または数値として読める文字列
    #[serde(rename = "idvehiculo", deserialize_with = "lenient_id")]
    pub id: i64,

    #[serde(rename = "marca", default)]
    pub brand: String,

    #[serde(rename = "kilometraje", default, deserialize_with = "lenient_string")]
    pub mileage: Option<String>,

    /// 数値に変換できない場合はNaN
    #[serde(rename = "precio", default = "nan", deserialize_with = "lenient_number")]
    pub price: f64,

    #[serde(rename = "modelo", default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(rename = "año", default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,

    #[serde(rename = "estado", default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,

    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(rename = "image", default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Vehicle {
    /// カード見出し（marca + modelo）
    pub fn title(&self) -> String {
        match self.model.as_deref() {
            Some(model) if !model.is_empty() => format!("{} {}", self.brand, model),
            _ => self.brand.clone(),
        }
    }

    /// 状態バッジのCSSクラス（"Como nuevo" → "estado-como-nuevo"）
    pub fn condition_class(&self) -> Option<String> {
        let condition = self.condition.as_deref()?;
        let slug = condition
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-");
        Some(format!("estado-{}", slug))
    }
}

/// 作成・更新リクエストの本文
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehiclePayload {
    /// 更新時のみ送る
    #[serde(rename = "idvehiculo", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub marca: String,
    pub kilometraje: String,
    pub precio: f64,
}

impl VehiclePayload {
    /// 更新成功後、一覧の行に反映する
    pub fn apply_to(&self, vehicle: &mut Vehicle) {
        vehicle.brand = self.marca.clone();
        vehicle.mileage = Some(self.kilometraje.clone());
        vehicle.price = self.precio;
    }
}

/// 作成APIが返したJSON本文
///
/// 形はサーバー次第なので値のまま持ち、車両として読めるときだけ `vehicle()` で取り出す
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedRecord(pub Value);

impl CreatedRecord {
    pub fn vehicle(&self) -> Option<Vehicle> {
        serde_json::from_value(self.0.clone()).ok()
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

/// 画像解析で認識された車両情報
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleAnalysis {
    #[serde(default, deserialize_with = "lenient_string")]
    pub marca: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub modelo: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub color: Option<String>,

    #[serde(default, deserialize_with = "lenient_string_list")]
    pub caracteristicas: Option<Vec<String>>,
}

/// 画像解析結果
///
/// 埋め込みJSONがパースできれば構造化、できなければ生の文字列
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisResult {
    Structured(VehicleAnalysis),
    Raw(String),
}

impl AnalysisResult {
    pub fn as_structured(&self) -> Option<&VehicleAnalysis> {
        match self {
            AnalysisResult::Structured(a) => Some(a),
            AnalysisResult::Raw(_) => None,
        }
    }

    pub fn as_raw(&self) -> Option<&str> {
        match self {
            AnalysisResult::Structured(_) => None,
            AnalysisResult::Raw(s) => Some(s),
        }
    }
}

fn lenient_id<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let id = match &value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    id.ok_or_else(|| serde::de::Error::custom(format!("idvehiculo inválido: {}", value)))
}

fn nan() -> f64 {
    f64::NAN
}

/// 文字列・数値・真偽値を文字列として受け付ける（nullはNone）
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| value_to_string(&v)))
}

fn lenient_string_list<'de, D>(deserializer: D) -> std::result::Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => Some(items.iter().filter_map(value_to_string).collect()),
        _ => None,
    })
}

/// 数値、または数値として読める文字列を受け付ける
fn lenient_number<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => crate::validation::parse_number(&s).unwrap_or(f64::NAN),
        _ => f64::NAN,
    })
}

fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
