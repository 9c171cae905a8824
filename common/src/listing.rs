//! 車両一覧の画面状態
//!
//! 展開中の行、編集中の行（最大1件）、削除中の行（最大1件）、
//! 全件表示フラグと、保存・削除のメッセージを持つ。
//! ネットワーク処理はWeb側で行い、結果をここに反映する

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::types::{Vehicle, VehiclePayload};
use crate::validation::EditDraft;

/// 「全件表示」前に表示する件数
pub const FEATURED_LIMIT: usize = 6;

pub const MSG_SAVED: &str = "Vehículo actualizado correctamente.";
pub const MSG_DELETED: &str = "Vehículo eliminado correctamente.";
pub const UPDATE_FAILED: &str = "Fallo al actualizar";
pub const DELETE_FAILED: &str = "Fallo al eliminar";

/// 成功/失敗メッセージ
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Success(t) | Notice::Error(t) => t,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Notice::Success(_) => "success-msg",
            Notice::Error(_) => "error-msg",
        }
    }
}

/// 一覧コンテナの状態
#[derive(Debug, Clone, Default)]
pub struct ListState {
    vehicles: Vec<Vehicle>,
    expanded: HashSet<i64>,
    editing: Option<i64>,
    draft: EditDraft,
    saving: bool,
    deleting: Option<i64>,
    show_all: bool,
    save_notice: Option<Notice>,
    delete_notice: Option<Notice>,
}

impl ListState {
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        Self {
            vehicles,
            ..Default::default()
        }
    }

    /// 再取得した一覧に差し替え（行ごとの状態はリセット）
    pub fn replace_vehicles(&mut self, vehicles: Vec<Vehicle>) {
        *self = Self {
            show_all: self.show_all,
            ..Self::new(vehicles)
        };
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn vehicle(&self, id: i64) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    /// 表示対象（全件表示でなければ先頭6件）
    pub fn visible(&self) -> &[Vehicle] {
        if self.show_all {
            &self.vehicles
        } else {
            &self.vehicles[..self.vehicles.len().min(FEATURED_LIMIT)]
        }
    }

    /// 「全件表示」ボタンを出すか
    pub fn has_more(&self) -> bool {
        self.vehicles.len() > FEATURED_LIMIT
    }

    pub fn show_all(&self) -> bool {
        self.show_all
    }

    pub fn set_show_all(&mut self, show_all: bool) {
        self.show_all = show_all;
    }

    // ===== 展開/折りたたみ =====

    pub fn toggle_expanded(&mut self, id: i64) {
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
    }

    pub fn is_expanded(&self, id: i64) -> bool {
        self.expanded.contains(&id)
    }

    // ===== 編集 =====

    /// 編集開始（他の行の編集は破棄される）
    ///
    /// 保存中、または該当行がなければ false
    pub fn start_edit(&mut self, id: i64) -> bool {
        if !self.can_edit() {
            return false;
        }
        let Some(vehicle) = self.vehicle(id) else {
            return false;
        };
        self.draft = EditDraft::from_vehicle(vehicle);
        self.editing = Some(id);
        self.save_notice = None;
        true
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.save_notice = None;
    }

    pub fn editing(&self) -> Option<i64> {
        self.editing
    }

    pub fn is_editing(&self, id: i64) -> bool {
        self.editing == Some(id)
    }

    pub fn draft(&self) -> &EditDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut EditDraft {
        &mut self.draft
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// 保存完了で編集状態が閉じるため、保存中は別の行を編集させない
    pub fn can_edit(&self) -> bool {
        !self.saving
    }

    /// 保存開始。ドラフトをチェックして更新リクエストを返す
    ///
    /// チェックに失敗した場合はメッセージを設定し、編集モードのまま
    pub fn begin_save(&mut self) -> Result<VehiclePayload> {
        let id = self
            .editing
            .ok_or_else(|| Error::Validation("No hay un vehículo en edición.".into()))?;

        self.save_notice = None;
        match self.draft.to_payload(id) {
            Ok(payload) => {
                self.saving = true;
                Ok(payload)
            }
            Err(e) => {
                self.save_notice = Some(Notice::Error(e.to_string()));
                Err(e)
            }
        }
    }

    /// 更新成功: 行を置き換えて編集終了
    pub fn complete_save(&mut self, payload: &VehiclePayload) {
        if let Some(id) = payload.id {
            if let Some(vehicle) = self.vehicles.iter_mut().find(|v| v.id == id) {
                payload.apply_to(vehicle);
            }
        }
        self.saving = false;
        self.editing = None;
        self.save_notice = Some(Notice::Success(MSG_SAVED.into()));
    }

    /// 更新失敗: 編集モードのまま
    pub fn fail_save(&mut self, error: &Error) {
        self.saving = false;
        self.save_notice = Some(Notice::Error(error.describe(UPDATE_FAILED)));
    }

    // ===== 削除 =====

    /// 削除開始（既に削除中なら false）
    pub fn begin_delete(&mut self, id: i64) -> bool {
        if self.deleting.is_some() {
            return false;
        }
        self.delete_notice = None;
        self.deleting = Some(id);
        true
    }

    /// 削除成功: 行・展開状態・編集状態を取り除く
    pub fn complete_delete(&mut self, id: i64) {
        self.vehicles.retain(|v| v.id != id);
        self.expanded.remove(&id);
        if self.editing == Some(id) {
            self.editing = None;
        }
        self.deleting = None;
        self.delete_notice = Some(Notice::Success(MSG_DELETED.into()));
    }

    pub fn fail_delete(&mut self, error: &Error) {
        self.deleting = None;
        self.delete_notice = Some(Notice::Error(error.describe(DELETE_FAILED)));
    }

    /// 削除ボタンを押せるか（削除中・保存中は不可）
    pub fn can_delete(&self) -> bool {
        self.deleting.is_none() && !self.saving
    }

    pub fn deleting(&self) -> Option<i64> {
        self.deleting
    }

    pub fn is_deleting(&self, id: i64) -> bool {
        self.deleting == Some(id)
    }

    /// 表示するメッセージ（保存 → 削除の順）
    pub fn notices(&self) -> Vec<Notice> {
        self.save_notice
            .iter()
            .chain(self.delete_notice.iter())
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle(id: i64, brand: &str, price: f64) -> Vehicle {
        Vehicle {
            id,
            brand: brand.to_string(),
            mileage: Some("1000".to_string()),
            price,
            model: None,
            year: None,
            condition: None,
            color: None,
            image_url: None,
        }
    }

    fn state(n: i64) -> ListState {
        ListState::new((1..=n).map(|i| vehicle(i, "Marca", i as f64 * 100.0)).collect())
    }

    // =============================================
    // 表示件数
    // =============================================

    #[test]
    fn test_visible_limited_to_six() {
        let mut s = state(8);
        assert_eq!(s.visible().len(), FEATURED_LIMIT);
        assert!(s.has_more());
        s.set_show_all(true);
        assert_eq!(s.visible().len(), 8);
    }

    #[test]
    fn test_visible_small_collection() {
        let s = state(3);
        assert_eq!(s.visible().len(), 3);
        assert!(!s.has_more());
    }

    // =============================================
    // 展開/折りたたみ
    // =============================================

    #[test]
    fn test_toggle_expanded_is_per_row() {
        let mut s = state(3);
        s.toggle_expanded(1);
        s.toggle_expanded(2);
        s.toggle_expanded(1);
        assert!(!s.is_expanded(1));
        assert!(s.is_expanded(2));
        assert!(!s.is_expanded(3));
    }

    // =============================================
    // 編集
    // =============================================

    #[test]
    fn test_start_edit_copies_draft() {
        let mut s = state(2);
        assert!(s.start_edit(2));
        assert!(s.is_editing(2));
        assert_eq!(s.draft().price, "200");
        assert!(!s.start_edit(99));
        assert!(s.is_editing(2));
    }

    #[test]
    fn test_only_one_row_in_edit_mode() {
        let mut s = state(3);
        s.start_edit(1);
        s.start_edit(3);
        assert!(!s.is_editing(1));
        assert_eq!(s.editing(), Some(3));
    }

    #[test]
    fn test_save_replaces_row_in_place() {
        let mut s = state(3);
        s.start_edit(2);
        s.draft_mut().brand = " Toyota ".to_string();
        s.draft_mut().price = "999".to_string();
        let payload = s.begin_save().unwrap();
        assert!(s.is_saving());

        s.complete_save(&payload);
        assert!(!s.is_saving());
        assert_eq!(s.editing(), None);
        assert_eq!(s.vehicles()[1].id, 2);
        assert_eq!(s.vehicles()[1].brand, "Toyota");
        assert_eq!(s.vehicles()[1].price, 999.0);
        assert_eq!(s.notices(), vec![Notice::Success(MSG_SAVED.into())]);
    }

    #[test]
    fn test_save_with_bad_price_stays_in_edit() {
        let mut s = state(2);
        s.start_edit(1);
        s.draft_mut().price = "abc".to_string();
        assert!(s.begin_save().is_err());
        assert!(s.is_editing(1));
        assert!(!s.is_saving());
        assert!(matches!(s.notices()[0], Notice::Error(_)));
    }

    #[test]
    fn test_fail_save_keeps_edit_mode() {
        let mut s = state(2);
        s.start_edit(1);
        s.begin_save().unwrap();
        s.fail_save(&Error::http(500, "db down"));
        assert!(s.is_editing(1));
        assert_eq!(
            s.notices()[0].text(),
            "Fallo al actualizar (HTTP 500) - db down"
        );
    }

    #[test]
    fn test_no_edit_while_saving() {
        let mut s = state(3);
        s.start_edit(1);
        let payload = s.begin_save().unwrap();
        assert!(!s.can_edit());
        assert!(!s.start_edit(2));
        assert!(s.is_editing(1));

        s.complete_save(&payload);
        assert!(s.can_edit());
        assert!(s.start_edit(2));
    }

    #[test]
    fn test_cancel_edit() {
        let mut s = state(2);
        s.start_edit(1);
        s.cancel_edit();
        assert_eq!(s.editing(), None);
        assert!(s.notices().is_empty());
    }

    // =============================================
    // 削除
    // =============================================

    #[test]
    fn test_delete_removes_only_that_row_and_edit_state() {
        let mut s = state(4);
        s.toggle_expanded(3);
        s.start_edit(3);
        assert!(s.begin_delete(3));
        assert!(s.is_deleting(3));

        s.complete_delete(3);
        let ids: Vec<i64> = s.vehicles().iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 2, 4]);
        assert_eq!(s.editing(), None);
        assert!(!s.is_expanded(3));
        assert_eq!(s.deleting(), None);
    }

    #[test]
    fn test_delete_keeps_other_rows_edit_state() {
        let mut s = state(3);
        s.start_edit(1);
        s.begin_delete(2);
        s.complete_delete(2);
        assert!(s.is_editing(1));
    }

    #[test]
    fn test_only_one_delete_in_flight() {
        let mut s = state(3);
        assert!(s.begin_delete(1));
        assert!(!s.begin_delete(2));
        s.fail_delete(&Error::Network("offline".into()));
        assert_eq!(s.deleting(), None);
        assert_eq!(s.len(), 3);
        assert!(s.begin_delete(2));
    }

    #[test]
    fn test_can_delete_blocks_every_row_while_deleting() {
        let mut s = state(3);
        assert!(s.can_delete());
        s.begin_delete(1);
        assert!(!s.can_delete());
        s.complete_delete(1);
        assert!(s.can_delete());

        s.start_edit(2);
        s.begin_save().unwrap();
        assert!(!s.can_delete());
    }

    #[test]
    fn test_replace_vehicles_resets_rows_keeps_show_all() {
        let mut s = state(8);
        s.set_show_all(true);
        s.toggle_expanded(1);
        s.start_edit(1);
        s.replace_vehicles(vec![vehicle(10, "Ford", 1.0)]);
        assert!(s.show_all());
        assert!(!s.is_expanded(1));
        assert_eq!(s.editing(), None);
        assert_eq!(s.len(), 1);
    }
}
