//! 車両一覧レスポンスの正規化
//!
//! APIは次の3形式のどれかで一覧を返す:
//! 1. 素の配列 `[...]`
//! 2. `{ "vehicles": [...] }`
//! 3. `{ "data": [...] }`

use serde_json::Value;

use crate::error::{Error, Result};
use crate::types::{CreatedRecord, Vehicle};

/// レスポンスから車両配列を取り出して正規化
///
/// 認識できない形式は空のVecを返す。
/// 車両として読めない要素（idvehiculoなし等）は読み飛ばす
pub fn normalize_response(data: &Value) -> Vec<Vehicle> {
    let Some(items) = find_vehicle_array(data) else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| serde_json::from_value::<Vehicle>(item.clone()).ok())
        .collect()
}

/// 正規化して、0件ならエラー
pub fn normalize_collection(data: &Value) -> Result<Vec<Vehicle>> {
    let vehicles = normalize_response(data);
    if vehicles.is_empty() {
        return Err(Error::EmptyCollection);
    }
    Ok(vehicles)
}

/// 一覧APIのレスポンス本文をパース
pub fn parse_collection(body: &str) -> Result<Vec<Vehicle>> {
    let data: Value = serde_json::from_str(body)?;
    normalize_collection(&data)
}

/// 単一車両APIのレスポンス本文をパース
pub fn parse_vehicle(body: &str) -> Result<Vehicle> {
    Ok(serde_json::from_str(body)?)
}

/// 作成APIのレスポンス本文をパース（JSONでなければNone）
pub fn parse_created(body: &str) -> Option<CreatedRecord> {
    serde_json::from_str::<Value>(body).ok().map(CreatedRecord)
}

fn find_vehicle_array(data: &Value) -> Option<&Vec<Value>> {
    match data {
        Value::Array(items) => Some(items),
        Value::Object(map) => ["vehicles", "data"]
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_array)),
        _ => None,
    }
}
