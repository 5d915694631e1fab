//! Initialization of the DataTables widget on server-rendered tables.
//!
//! Sorting, filtering and pagination all belong to the widget; the only
//! contract here is to hand it the localization dictionary once, after the
//! DOM for the matching tables exists.

use js_sys::{Function, Reflect};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::{JsCast, JsValue};

/// Selector the widget is applied to.
const TABLE_SELECTOR: &str = ".datatable";

/// Localized strings for the widget's `language` option.
#[derive(Debug, Clone, Serialize)]
pub struct TableLanguage {
    pub processing: &'static str,
    pub search: &'static str,
    #[serde(rename = "lengthMenu")]
    pub length_menu: &'static str,
    pub info: &'static str,
    #[serde(rename = "infoEmpty")]
    pub info_empty: &'static str,
    #[serde(rename = "infoFiltered")]
    pub info_filtered: &'static str,
    #[serde(rename = "infoPostFix")]
    pub info_post_fix: &'static str,
    #[serde(rename = "loadingRecords")]
    pub loading_records: &'static str,
    #[serde(rename = "zeroRecords")]
    pub zero_records: &'static str,
    #[serde(rename = "emptyTable")]
    pub empty_table: &'static str,
    pub paginate: PaginateLanguage,
    pub aria: AriaLanguage,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaginateLanguage {
    pub first: &'static str,
    pub previous: &'static str,
    pub next: &'static str,
    pub last: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AriaLanguage {
    #[serde(rename = "sortAscending")]
    pub sort_ascending: &'static str,
    #[serde(rename = "sortDescending")]
    pub sort_descending: &'static str,
}

impl TableLanguage {
    /// The Russian dictionary used on the admin pages.
    pub fn russian() -> Self {
        Self {
            processing: "Подождите...",
            search: "Поиск:",
            length_menu: "Показать _MENU_ записей",
            info: "Записи с _START_ до _END_ из _TOTAL_ записей",
            info_empty: "Записи с 0 до 0 из 0 записей",
            info_filtered: "(отфильтровано из _MAX_ записей)",
            info_post_fix: "",
            loading_records: "Загрузка записей...",
            zero_records: "Записи отсутствуют.",
            empty_table: "В таблице отсутствуют данные",
            paginate: PaginateLanguage {
                first: "Первая",
                previous: "Предыдущая",
                next: "Следующая",
                last: "Последняя",
            },
            aria: AriaLanguage {
                sort_ascending: ": активировать для сортировки столбца по возрастанию",
                sort_descending: ": активировать для сортировки столбца по убыванию",
            },
        }
    }
}

/// Apply the widget to every `.datatable` table on the page.
///
/// Resolves the page-global jQuery entry point reflectively and performs
/// `$('.datatable').DataTable({ language: ... })`, so the widget stays an
/// external collaborator. The language dictionary is passed in explicitly
/// instead of through a shared global.
pub fn init_tables(language: &TableLanguage) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;

    let jquery_value =
        Reflect::get(&window, &JsValue::from_str("jQuery")).map_err(|e| format!("{e:?}"))?;
    if !jquery_value.is_function() {
        return Err("jQuery is not loaded".to_string());
    }
    let jquery: Function = jquery_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    let selection = jquery
        .call1(&JsValue::NULL, &JsValue::from_str(TABLE_SELECTOR))
        .map_err(|e| format!("{e:?}"))?;

    let data_table_value = Reflect::get(&selection, &JsValue::from_str("DataTable"))
        .map_err(|e| format!("{e:?}"))?;
    if !data_table_value.is_function() {
        return Err("DataTable plugin is not loaded".to_string());
    }
    let data_table: Function = data_table_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    let language_value = language
        .serialize(&Serializer::json_compatible())
        .map_err(|e| e.to_string())?;
    let options = js_sys::Object::new();
    Reflect::set(&options, &JsValue::from_str("language"), &language_value)
        .map_err(|e| format!("{e:?}"))?;

    data_table
        .call1(&selection, &JsValue::from(options))
        .map_err(|e| format!("{e:?}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn russian_dictionary_is_complete() {
        let value = serde_json::to_value(TableLanguage::russian()).unwrap();
        let object = value.as_object().unwrap();

        for key in [
            "processing",
            "search",
            "lengthMenu",
            "info",
            "infoEmpty",
            "infoFiltered",
            "infoPostFix",
            "loadingRecords",
            "zeroRecords",
            "emptyTable",
            "paginate",
            "aria",
        ] {
            assert!(object.contains_key(key), "missing key: {}", key);
        }
        assert_eq!(object.len(), 12);
        assert_eq!(object["search"], "Поиск:");
        assert_eq!(object["infoPostFix"], "");
        assert_eq!(object["paginate"]["next"], "Следующая");
        assert_eq!(
            object["aria"]["sortAscending"],
            ": активировать для сортировки столбца по возрастанию"
        );
    }
}
