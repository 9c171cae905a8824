//! REST APIのURL組み立て
//!
//! 取得系は `/api/vehiculo`、更新系は `/api/Vehiculo`（Vが大文字）。
//! サーバー側のルーティングに合わせてそのまま使い分ける

/// 既定のAPIオリジン
pub const DEFAULT_BASE_URL: &str = "https://localhost:44370";

/// multipartのファイルフィールド名
pub const UPLOAD_FIELD: &str = "file";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl Endpoints {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET 一覧
    pub fn list(&self) -> String {
        format!("{}/api/vehiculo/", self.base_url)
    }

    /// GET 1件（検索欄の入力をそのままIDとして使う）
    pub fn find(&self, id: &str) -> String {
        format!("{}/api/vehiculo/{}", self.base_url, urlencoding::encode(id.trim()))
    }

    /// POST 作成
    pub fn create(&self) -> String {
        format!("{}/api/Vehiculo", self.base_url)
    }

    /// PUT 更新 / DELETE 削除
    pub fn item(&self, id: i64) -> String {
        format!("{}/api/Vehiculo/{}", self.base_url, id)
    }

    /// POST 画像解析（multipart）
    pub fn upload_image(&self) -> String {
        format!("{}/api/Vehiculo/upload-image", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls() {
        let endpoints = Endpoints::default();
        assert_eq!(endpoints.list(), "https://localhost:44370/api/vehiculo/");
        assert_eq!(endpoints.find("12"), "https://localhost:44370/api/vehiculo/12");
        assert_eq!(endpoints.create(), "https://localhost:44370/api/Vehiculo");
        assert_eq!(endpoints.item(12), "https://localhost:44370/api/Vehiculo/12");
        assert_eq!(
            endpoints.upload_image(),
            "https://localhost:44370/api/Vehiculo/upload-image"
        );
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let endpoints = Endpoints::new("http://api.local:8080/ ");
        assert_eq!(endpoints.base_url(), "http://api.local:8080");
        assert_eq!(endpoints.create(), "http://api.local:8080/api/Vehiculo");
    }

    #[test]
    fn test_find_encodes_input() {
        let endpoints = Endpoints::default();
        assert_eq!(
            endpoints.find(" 1/2 a "),
            "https://localhost:44370/api/vehiculo/1%2F2%20a"
        );
    }

    #[test]
    fn test_find_encodes_non_ascii() {
        let endpoints = Endpoints::new("http://api.local");
        assert_eq!(endpoints.find("ñ?x=1"), "http://api.local/api/vehiculo/%C3%B1%3Fx%3D1");
    }
}
