//! フォーム入力のチェック
//!
//! 作成フォームと一覧の編集ドラフトを、送信前にVehiclePayloadへ変換する

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{Vehicle, VehiclePayload};

pub const MSG_BRAND_REQUIRED: &str = "El nombre del vehículo (marca) es obligatorio.";
pub const MSG_PRICE_NOT_NUMBER: &str = "El precio debe ser un número.";
pub const MSG_MILEAGE_NOT_NUMBER: &str = "El kilometraje debe ser un número.";
pub const MSG_EDIT_PRICE_NOT_NUMBER: &str = "El precio debe ser numérico.";
pub const MSG_CREATED: &str = "Vehículo creado correctamente.";
pub const CREATE_FAILED: &str = "No se pudo crear el vehículo";

/// 数値として読めるか（前後の空白は無視、空文字・NaN・無限大は不可）
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// 車両作成フォーム
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleForm {
    pub brand: String,
    pub mileage: String,
    pub price: String,
}

impl VehicleForm {
    /// 送信前チェック（marca → precio → kilometraje の順）
    pub fn validate(&self) -> Result<VehiclePayload> {
        let brand = self.brand.trim();
        if brand.is_empty() {
            return Err(Error::Validation(MSG_BRAND_REQUIRED.into()));
        }

        let price = parse_number(&self.price)
            .ok_or_else(|| Error::Validation(MSG_PRICE_NOT_NUMBER.into()))?;

        if parse_number(&self.mileage).is_none() {
            return Err(Error::Validation(MSG_MILEAGE_NOT_NUMBER.into()));
        }

        Ok(VehiclePayload {
            id: None,
            marca: brand.to_string(),
            kilometraje: self.mileage.trim().to_string(),
            precio: price,
        })
    }

    /// 作成成功後にフォームを空にする
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// 一覧の編集ドラフト（編集中の行のみ保持）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditDraft {
    pub brand: String,
    pub mileage: String,
    pub price: String,
}

impl EditDraft {
    pub fn from_vehicle(vehicle: &Vehicle) -> Self {
        Self {
            brand: vehicle.brand.clone(),
            mileage: vehicle.mileage.clone().unwrap_or_default(),
            price: vehicle.price.to_string(),
        }
    }

    /// 更新リクエストに変換（precioのみチェック）
    pub fn to_payload(&self, id: i64) -> Result<VehiclePayload> {
        let price = parse_number(&self.price)
            .ok_or_else(|| Error::Validation(MSG_EDIT_PRICE_NOT_NUMBER.into()))?;

        Ok(VehiclePayload {
            id: Some(id),
            marca: self.brand.trim().to_string(),
            kilometraje: self.mileage.trim().to_string(),
            precio: price,
        })
    }
}
