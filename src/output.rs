//! 端末向けの表示整形

use caronline_common::{format_price, AnalysisResult, Vehicle};

/// 一覧の1行
pub fn vehicle_line(vehicle: &Vehicle) -> String {
    let mileage = vehicle
        .mileage
        .as_deref()
        .filter(|m| !m.is_empty())
        .map(|m| format!("  Kilometraje: {}", m))
        .unwrap_or_default();
    format!(
        "#{:<5} {:<24} {:>16}{}",
        vehicle.id,
        vehicle.title(),
        format_price(vehicle.price),
        mileage
    )
}

/// 1台分の詳細
pub fn vehicle_detail(vehicle: &Vehicle) -> String {
    let mut lines = vec![
        format!("ID: {}", vehicle.id),
        format!("Marca: {}", vehicle.brand),
        format!("Kilometraje: {}", vehicle.mileage.as_deref().unwrap_or("")),
        format!("Precio: {}", format_price(vehicle.price)),
    ];
    let optional = [
        ("Modelo", &vehicle.model),
        ("Año", &vehicle.year),
        ("Estado", &vehicle.condition),
        ("Color", &vehicle.color),
    ];
    for (label, value) in optional {
        if let Some(value) = value {
            lines.push(format!("{}: {}", label, value));
        }
    }
    lines.join("\n")
}

/// 画像解析結果
pub fn analysis_text(result: &AnalysisResult) -> String {
    match result {
        AnalysisResult::Structured(a) => {
            let mut lines = vec![
                "Detalles del Vehículo".to_string(),
                format!("Marca: {}", a.marca.as_deref().unwrap_or("")),
                format!("Modelo: {}", a.modelo.as_deref().unwrap_or("")),
                format!("Color: {}", a.color.as_deref().unwrap_or("")),
            ];
            if let Some(features) = &a.caracteristicas {
                lines.push("Características:".to_string());
                lines.extend(features.iter().map(|f| format!("  - {}", f)));
            }
            lines.join("\n")
        }
        AnalysisResult::Raw(text) => format!("Resultado (JSON crudo)\n{}", text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use caronline_common::VehicleAnalysis;

    fn mazda() -> Vehicle {
        serde_json::from_str(
            r#"{"idvehiculo": 1, "marca": "Mazda", "kilometraje": "140000", "precio": 25000, "color": "Rojo"}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_vehicle_line() {
        let line = vehicle_line(&mazda());
        assert!(line.starts_with("#1"));
        assert!(line.contains("Mazda"));
        assert!(line.contains("Q25,000.00"));
        assert!(line.contains("Kilometraje: 140000"));
    }

    #[test]
    fn test_vehicle_detail_optional_fields() {
        let detail = vehicle_detail(&mazda());
        assert!(detail.contains("Color: Rojo"));
        assert!(!detail.contains("Modelo"));
    }

    #[test]
    fn test_analysis_text_structured() {
        let result = AnalysisResult::Structured(VehicleAnalysis {
            marca: Some("Toyota".into()),
            modelo: None,
            color: Some("Blanco".into()),
            caracteristicas: Some(vec!["4x4".into()]),
        });
        let text = analysis_text(&result);
        assert!(text.contains("Marca: Toyota"));
        assert!(text.contains("  - 4x4"));
    }

    #[test]
    fn test_analysis_text_raw() {
        let text = analysis_text(&AnalysisResult::Raw("no es json".into()));
        assert!(text.ends_with("no es json"));
    }
}
