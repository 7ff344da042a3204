use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum JsonExtractError {
    #[error("json.empty_response")]
    EmptyResponse,
    #[error("json.block_not_found")]
    BlockNotFound,
    #[error("json.unparseable")]
    Unparseable,
}

/// Extracts a JSON object from a model reply.
///
/// Models asked for "JSON only" still wrap objects in code fences or prose
/// and occasionally leave quotes unescaped inside string values. Recovery
/// order: strip fences, cut the outermost `{ ... }` block, parse, and on
/// failure re-parse after escaping stray inner quotes.
pub fn extract_json(text: &str) -> Result<Value, JsonExtractError> {
    if text.trim().is_empty() {
        return Err(JsonExtractError::EmptyResponse);
    }

    let cleaned = text.replace("```json", "").replace("```", "");

    let raw = regex::Regex::new(r"\{[\s\S]*\}")
        .ok()
        .and_then(|re| re.find(cleaned.trim()))
        .map(|block| block.as_str())
        .ok_or(JsonExtractError::BlockNotFound)?;

    if let Ok(value) = serde_json::from_str(raw) {
        return Ok(value);
    }

    let repaired = escape_inner_quotes(raw);
    serde_json::from_str(&repaired).map_err(|_| JsonExtractError::Unparseable)
}

/// Escapes quotes that sit inside string values without terminating them.
///
/// String state is tracked character by character; a quote inside a string
/// counts as closing only when the next non-space character is one of
/// `,` `}` `]` `:` (or the input ends). Anything else is treated as
/// content and escaped.
pub fn escape_inner_quotes(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    let mut out = String::with_capacity(raw.len());
    let mut in_str = false;
    let mut esc = false;

    for (i, &ch) in chars.iter().enumerate() {
        if esc {
            out.push(ch);
            esc = false;
            continue;
        }

        if ch == '\\' {
            out.push(ch);
            esc = true;
            continue;
        }

        if ch == '"' {
            if !in_str {
                in_str = true;
                out.push(ch);
            } else {
                let next = chars[i + 1..].iter().find(|c| !c.is_whitespace());
                match next {
                    Some(',') | Some('}') | Some(']') | Some(':') | None => {
                        in_str = false;
                        out.push(ch);
                    }
                    _ => out.push_str("\\\""),
                }
            }
            continue;
        }

        out.push(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_clean_json() {
        let value = extract_json(r#"{"name": "Acme"}"#).unwrap();

        assert_eq!(value["name"], "Acme");
    }

    #[test]
    fn should_strip_code_fences() {
        let text = "```json\n{\"name\": \"Acme\"}\n```";

        let value = extract_json(text).unwrap();

        assert_eq!(value["name"], "Acme");
    }

    #[test]
    fn should_cut_object_out_of_surrounding_prose() {
        let text = "Here is the analysis you asked for:\n{\"name\": \"Acme\"}\nLet me know!";

        let value = extract_json(text).unwrap();

        assert_eq!(value["name"], "Acme");
    }

    #[test]
    fn should_keep_nested_objects_intact() {
        let text = r#"{"outer": {"inner": [1, 2]}, "tail": true}"#;

        let value = extract_json(text).unwrap();

        assert_eq!(value["outer"]["inner"][1], 2);
        assert_eq!(value["tail"], true);
    }

    #[test]
    fn should_repair_unescaped_quotes_inside_values() {
        let text = r#"{"quote": "the CEO said "we will grow" in March", "other": "plain"}"#;

        let value = extract_json(text).unwrap();

        assert_eq!(value["quote"], "the CEO said \"we will grow\" in March");
        assert_eq!(value["other"], "plain");
    }

    #[test]
    fn should_leave_already_escaped_quotes_alone() {
        let text = r#"{"quote": "she said \"hi\""}"#;

        let value = extract_json(text).unwrap();

        assert_eq!(value["quote"], "she said \"hi\"");
    }

    #[test]
    fn should_fail_on_empty_input() {
        assert!(matches!(
            extract_json("  \n"),
            Err(JsonExtractError::EmptyResponse)
        ));
    }

    #[test]
    fn should_fail_when_no_object_present() {
        assert!(matches!(
            extract_json("no structured data here"),
            Err(JsonExtractError::BlockNotFound)
        ));
    }

    #[test]
    fn should_fail_on_unrecoverable_garbage() {
        assert!(matches!(
            extract_json("{this is not json at all}"),
            Err(JsonExtractError::Unparseable)
        ));
    }

    #[test]
    fn should_escape_only_non_terminating_quotes() {
        let repaired = escape_inner_quotes(r#""a "b" c""#);

        assert_eq!(repaired, r#""a \"b\" c""#);
    }
}
