use serde::{Deserialize, Serialize};

// ============================================================================
// Request DTOs
// ============================================================================
//
// Каждая мутация уходит как form-url-encoded тело POST-запроса; имена полей
// совпадают с ключами, которые ожидает backend.

/// Тело запроса `POST /add_tab`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTabRequest {
    pub tab_name: String,
}

/// Тело запроса `POST /rename_tab`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameTabRequest {
    /// Идентификатор вкладки — непрозрачная строка, снятая с атрибута
    /// `data-tab-id` элемента управления.
    pub tab_id: String,
    pub new_tab_name: String,
}

/// Тело запроса `POST /delete_tab`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteTabRequest {
    pub tab_id: String,
}
