use validator::ValidationErrors;

/// `validator` keys its error map by the Rust field name, but the DTOs
/// rename several fields on the wire. Callers only ever see the wire name,
/// so error messages use it too.
fn wire_field(field: &str) -> &str {
    match field {
        "card_name" => "name",
        "card_type" => "type",
        "card_from" => "from",
        "card_to" => "to",
        "amount" => "sum",
        other => other,
    }
}

/// Flattens validator output into "field: message" entries, one per failed
/// rule, so a request with several bad fields reports all of them at once.
pub fn validation_error_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            let field = wire_field(field);
            errs.iter().map(move |e| {
                let msg = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                format!("{field}: {msg}")
            })
        })
        .collect();

    messages.sort();
    messages
}

pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    validation_error_messages(errors).join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 1, message = "name must not be empty"))]
        name: String,
        #[validate(range(min = 1, message = "sum must be positive"))]
        sum: i64,
    }

    #[test]
    fn collects_all_field_errors() {
        let probe = Probe {
            name: String::new(),
            sum: 0,
        };

        let errors = probe.validate().unwrap_err();
        let messages = validation_error_messages(&errors);

        assert_eq!(messages.len(), 2);
        assert!(messages.iter().any(|m| m.starts_with("name:")));
        assert!(messages.iter().any(|m| m.starts_with("sum:")));
    }
}
