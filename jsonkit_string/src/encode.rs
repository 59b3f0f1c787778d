use jsonkit_core::internal::sys::*;

fn escape_text(input: &str) -> String {
    let mut output = String::new();

    for c in input.chars() {
        match c {
            '\x22' => output.push_str("\\\""), // Double quotation mark    \"
            '\x5C' => output.push_str("\\\\"), // Backslash                \\
            '\x08' => output.push_str("\\b"),  // Backspace                \b
            '\x0C' => output.push_str("\\f"),  // Formfeed Page Break      \f
            '\x0A' => output.push_str("\\n"),  // Newline (Line Feed)      \n
            '\x0D' => output.push_str("\\r"),  // Carriage Return          \r
            '\x09' => output.push_str("\\t"),  // Horizontal Tab           \t

            // Remaining control characters
            c if (c as u32) < 0x20 => {
                output.push_str(&format!("\\u{:04x}", c as u32));
            }

            // Everything else passes through
            c => output.push(c),
        }
    }

    output
}

/// Compact encoding (single-line, no whitespace)
mod mini {
    use crate::encode::escape_text;
    use jsonkit_core::internal::sys::*;
    use jsonkit_core::internal::{Result, Value};

    pub struct Encoder {
        input: Value,
    }

    impl Encoder {
        pub fn new(input: Value) -> Self {
            Self { input }
        }

        pub fn encode(self) -> Result<String> {
            self.encode_value(&self.input)
        }

        fn encode_null(&self) -> Result<String> {
            Ok("null".to_string())
        }

        fn encode_boolean(&self, value: &bool) -> Result<String> {
            Ok(value.to_string())
        }

        fn encode_number(&self, value: &str) -> Result<String> {
            Ok(value.to_string())
        }

        fn encode_text(&self, value: &str) -> Result<String> {
            Ok(format!("\"{}\"", escape_text(value)))
        }

        fn encode_array(&self, value: &[Value]) -> Result<String> {
            let items: Result<Vec<String>> = value.iter().map(|v| self.encode_value(v)).collect();
            let items = items?;

            Ok(format!("[{}]", items.join(",")))
        }

        fn encode_object(&self, value: &[(String, Value)]) -> Result<String> {
            let members: Result<Vec<String>> = value
                .iter()
                .map(|member| {
                    Ok(format!(
                        "\"{}\":{}",
                        escape_text(&member.0), // Member key
                        self.encode_value(&member.1)? // Member value
                    ))
                })
                .collect();
            let members = members?;

            Ok(format!("{{{}}}", members.join(",")))
        }

        fn encode_value(&self, value: &Value) -> Result<String> {
            match value {
                Value::Null => self.encode_null(),
                Value::Boolean(b) => self.encode_boolean(b),
                Value::Number(n) => self.encode_number(n),
                Value::Text(t) => self.encode_text(t),
                Value::Array(a) => self.encode_array(a),
                Value::Object(o) => self.encode_object(o),
            }
        }
    }
}

/// Indented encoding (two spaces per level, CRLF line breaks)
mod pretty {
    use crate::encode::escape_text;
    use jsonkit_core::internal::sys::*;
    use jsonkit_core::internal::{Result, Value};

    pub struct Encoder {
        input: Value,
    }

    impl Encoder {
        pub fn new(input: Value) -> Self {
            Self { input }
        }

        pub fn encode(self) -> Result<String> {
            let depth = 0;

            self.encode_value(&self.input, depth)
        }

        fn indent(&self, level: usize) -> String {
            "  ".repeat(level)
        }

        fn encode_null(&self) -> Result<String> {
            Ok("null".to_string())
        }

        fn encode_boolean(&self, value: &bool) -> Result<String> {
            Ok(value.to_string())
        }

        fn encode_number(&self, value: &str) -> Result<String> {
            Ok(value.to_string())
        }

        fn encode_text(&self, value: &str) -> Result<String> {
            Ok(format!("\"{}\"", escape_text(value)))
        }

        fn encode_array(&self, value: &[Value], depth: usize) -> Result<String> {
            if value.is_empty() {
                return Ok("[]".to_string());
            }

            let item_indent = self.indent(depth + 1);

            let items: Result<Vec<String>> = value
                .iter()
                .map(|item| self.encode_value(item, depth + 1))
                .collect();
            let items = items?;

            let mut output = String::new();

            output.push_str("[\r\n");
            output.push_str(&item_indent);
            output.push_str(&items.join(&format!(",\r\n{}", item_indent)));
            output.push_str("\r\n");
            output.push_str(&self.indent(depth));
            output.push(']');

            Ok(output)
        }

        fn encode_object(&self, value: &[(String, Value)], depth: usize) -> Result<String> {
            if value.is_empty() {
                return Ok("{}".to_string());
            }

            let member_indent = self.indent(depth + 1);

            let members: Result<Vec<String>> = value
                .iter()
                .map(|member| {
                    Ok(format!(
                        "\"{}\": {}",
                        escape_text(&member.0), // Member key
                        self.encode_value(&member.1, depth + 1)? // Member value
                    ))
                })
                .collect();
            let members = members?;

            let mut output = String::new();

            output.push_str("{\r\n");
            output.push_str(&member_indent);
            output.push_str(&members.join(&format!(",\r\n{}", member_indent)));
            output.push_str("\r\n");
            output.push_str(&self.indent(depth));
            output.push('}');

            Ok(output)
        }

        fn encode_value(&self, value: &Value, depth: usize) -> Result<String> {
            match value {
                Value::Null => self.encode_null(),
                Value::Boolean(b) => self.encode_boolean(b),
                Value::Number(n) => self.encode_number(n),
                Value::Text(t) => self.encode_text(t),
                Value::Array(a) => self.encode_array(a, depth),
                Value::Object(o) => self.encode_object(o, depth),
            }
        }
    }
}

pub fn to_string<T: ?Sized + jsonkit_core::Serialize>(
    value: &T,
) -> jsonkit_core::internal::Result<String> {
    let serialized = value.serialize()?;

    mini::Encoder::new(serialized).encode()
}

pub fn to_string_pretty<T: ?Sized + jsonkit_core::Serialize>(
    value: &T,
) -> jsonkit_core::internal::Result<String> {
    let serialized = value.serialize()?;

    pretty::Encoder::new(serialized).encode()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonkit_core::internal::Value;

    fn number(text: &str) -> Value {
        Value::Number(text.to_string())
    }

    #[test]
    fn scalars_encode_bare() {
        assert_eq!(to_string(&Value::Null).unwrap(), "null");
        assert_eq!(to_string(&Value::Boolean(true)).unwrap(), "true");
        assert_eq!(to_string(&number("-128")).unwrap(), "-128");
        assert_eq!(to_string(&Value::Text("hi".to_string())).unwrap(), "\"hi\"");
    }

    #[test]
    fn special_characters_escape() {
        assert_eq!(
            to_string(&Value::Text("a\"b\\c\x08d\x0Ce\nf\rg\th".to_string())).unwrap(),
            "\"a\\\"b\\\\c\\bd\\fe\\nf\\rg\\th\""
        );
        assert_eq!(
            to_string(&Value::Text("\x01\x1f".to_string())).unwrap(),
            "\"\\u0001\\u001f\""
        );
    }

    #[test]
    fn compact_output_has_no_whitespace() {
        let value = Value::Object(Vec::from([
            ("One".to_string(), number("1")),
            (
                "Two".to_string(),
                Value::Array(Vec::from([number("2"), Value::Null])),
            ),
        ]));

        assert_eq!(to_string(&value).unwrap(), "{\"One\":1,\"Two\":[2,null]}");
    }

    #[test]
    fn member_order_is_never_reordered() {
        let value = Value::Object(Vec::from([
            ("Zebra".to_string(), number("1")),
            ("Apple".to_string(), number("2")),
        ]));

        assert_eq!(to_string(&value).unwrap(), "{\"Zebra\":1,\"Apple\":2}");
    }

    #[test]
    fn indented_output_uses_crlf_and_two_spaces() {
        let value = Value::Object(Vec::from([
            ("a".to_string(), number("1")),
            (
                "b".to_string(),
                Value::Array(Vec::from([number("2"), number("3")])),
            ),
        ]));

        assert_eq!(
            to_string_pretty(&value).unwrap(),
            "{\r\n  \"a\": 1,\r\n  \"b\": [\r\n    2,\r\n    3\r\n  ]\r\n}"
        );
    }

    #[test]
    fn empty_containers_stay_on_one_line() {
        assert_eq!(to_string_pretty(&Value::Array(Vec::new())).unwrap(), "[]");
        assert_eq!(to_string_pretty(&Value::Object(Vec::new())).unwrap(), "{}");
    }
}
