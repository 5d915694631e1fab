use serde_json::Value;

/// Исход мутации, как его сообщает backend.
///
/// Backend отвечает текстом. JSON-объект с полем `error` означает отказ;
/// любой другой ответ (в том числе не-JSON, например HTML-страница
/// редиректа) считается успехом. Точная схема успешного ответа контрактом
/// не фиксируется.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    Success,
    Failed(String),
}

impl MutationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, MutationOutcome::Success)
    }
}

/// Интерпретировать текст ответа backend'а на мутацию.
pub fn interpret_response(text: &str) -> MutationOutcome {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(fields)) => match fields.get("error") {
            Some(Value::String(message)) => MutationOutcome::Failed(message.clone()),
            // само присутствие поля error — отказ, каким бы ни было значение
            Some(other) => MutationOutcome::Failed(other.to_string()),
            None => MutationOutcome::Success,
        },
        _ => MutationOutcome::Success,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_field_means_failure() {
        assert_eq!(
            interpret_response(r#"{"error": "tab not found"}"#),
            MutationOutcome::Failed("tab not found".to_string())
        );
    }

    #[test]
    fn non_string_error_is_stringified() {
        assert_eq!(
            interpret_response(r#"{"error": {"code": 42}}"#),
            MutationOutcome::Failed(r#"{"code":42}"#.to_string())
        );
        assert_eq!(
            interpret_response(r#"{"error": null}"#),
            MutationOutcome::Failed("null".to_string())
        );
    }

    #[test]
    fn json_without_error_is_success() {
        assert!(interpret_response(r#"{"id": 7, "tab_name": "Цех 1"}"#).is_success());
        assert!(interpret_response("[]").is_success());
    }

    #[test]
    fn non_json_text_is_success() {
        // Flask отвечает на успешную мутацию HTML-редиректом
        assert!(interpret_response("<!doctype html><title>Redirecting...</title>").is_success());
        assert!(interpret_response("").is_success());
    }
}
