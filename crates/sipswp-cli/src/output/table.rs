use serde_json::Value;
use tabled::{builder::Builder, Table};

/// Format an output envelope as tables using the tabled crate.
///
/// Scalar fields of `result` print as a Field/Value table; embedded row
/// arrays (schedules, summary entries) each print as their own table below
/// it, followed by any warnings and the methodology line.
pub fn print_table(value: &Value) {
    let Some(map) = value.as_object() else {
        println!("{}", value);
        return;
    };

    match map.get("result") {
        Some(result) => print_result(result),
        None => print_fields(value),
    }

    if let Some(Value::Array(warnings)) = map.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(methodology)) = map.get("methodology") {
        println!("\nMethodology: {}", methodology);
    }
}

fn print_result(result: &Value) {
    let Some(map) = result.as_object() else {
        println!("{}", result);
        return;
    };

    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    let mut has_scalars = false;
    let mut row_arrays: Vec<(&str, &Vec<Value>)> = Vec::new();

    for (key, val) in map {
        match val {
            Value::Array(items) if !items.is_empty() && items.iter().all(Value::is_object) => {
                row_arrays.push((key.as_str(), items));
            }
            _ => {
                builder.push_record([key.as_str(), &format_value(val)]);
                has_scalars = true;
            }
        }
    }

    if has_scalars {
        println!("{}", Table::from(builder));
    }

    for (name, rows) in row_arrays {
        println!("\n{}:", name);
        print_rows(rows);
    }
}

fn print_fields(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.as_str(), &format_value(val)]);
        }
        println!("{}", Table::from(builder));
    }
}

fn print_rows(rows: &[Value]) {
    let Some(Value::Object(first)) = rows.first() else {
        return;
    };

    let headers: Vec<String> = first.keys().cloned().collect();
    let mut builder = Builder::default();
    builder.push_record(&headers);

    for row in rows {
        if let Value::Object(map) = row {
            let record: Vec<String> = headers
                .iter()
                .map(|h| map.get(h.as_str()).map(format_value).unwrap_or_default())
                .collect();
            builder.push_record(record);
        }
    }

    println!("{}", Table::from(builder));
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}
