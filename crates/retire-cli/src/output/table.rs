use serde_json::Value;
use tabled::{builder::Builder, Table};

/// Format output as tables using the tabled crate.
///
/// Scalar result fields render as a Field/Value table; sequence fields (the
/// amortization schedule, projection series) each render as their own column
/// table below it, with snake_case keys humanized into column headers.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                print_result_table(result, map);
            } else {
                print_scalar_table(value);
            }
        }
        Value::Array(arr) => print_sequence(arr),
        _ => println!("{}", value),
    }
}

fn print_result_table(result: &Value, envelope: &serde_json::Map<String, Value>) {
    if let Value::Object(res_map) = result {
        // Scalars first
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in res_map {
            if !val.is_array() {
                builder.push_record([humanize(key), format_value(val)]);
            }
        }
        println!("{}", Table::from(builder));

        // Then each sequence as its own table
        for (key, val) in res_map {
            if let Value::Array(arr) = val {
                if arr.is_empty() {
                    continue;
                }
                println!("\n{}:", humanize(key));
                print_sequence(arr);
            }
        }
    } else {
        print_scalar_table(result);
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_scalar_table(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([humanize(key).as_str(), &format_value(val)]);
        }
        println!("{}", Table::from(builder));
    }
}

/// Render an array: objects become a column table keyed off the first row's
/// fields (e.g. Month | Beginning Balance | Payment | Interest | Principal |
/// End Balance); plain values become an indexed two-column table.
fn print_sequence(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let keys: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(keys.iter().map(|k| humanize(k)));

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = keys
                    .iter()
                    .map(|k| map.get(k.as_str()).map(format_value).unwrap_or_default())
                    .collect();
                builder.push_record(row);
            }
        }
        println!("{}", Table::from(builder));
    } else {
        let mut builder = Builder::default();
        builder.push_record(["Month", "Value"]);
        for (idx, item) in arr.iter().enumerate() {
            builder.push_record([idx.to_string(), format_value(item)]);
        }
        println!("{}", Table::from(builder));
    }
}

/// Turn a snake_case field name into a table header ("end_balance" -> "End Balance").
fn humanize(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            items.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_schedule_headers() {
        assert_eq!(humanize("month"), "Month");
        assert_eq!(humanize("beginning_balance"), "Beginning Balance");
        assert_eq!(humanize("payment"), "Payment");
        assert_eq!(humanize("interest"), "Interest");
        assert_eq!(humanize("principal"), "Principal");
        assert_eq!(humanize("end_balance"), "End Balance");
    }

    #[test]
    fn test_format_value_scalars() {
        assert_eq!(format_value(&serde_json::json!("500")), "500");
        assert_eq!(format_value(&serde_json::json!(12)), "12");
    }
}
