//! Envelope rendering: JSON for machines, aligned text for terminals.

use chaintick_core::Envelope;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::error::CliError;

pub fn render(
    envelope: &Envelope<Value>,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let rendered = if pretty {
                serde_json::to_string_pretty(envelope)?
            } else {
                serde_json::to_string(envelope)?
            };
            println!("{rendered}");
        }
        OutputFormat::Table => render_table(envelope),
    }

    Ok(())
}

fn render_table(envelope: &Envelope<Value>) {
    if let Some(records) = envelope.data.get("records").and_then(Value::as_array) {
        render_records(records);
    } else {
        render_fields(&envelope.data);
    }

    for warning in &envelope.meta.warnings {
        eprintln!("warning: {warning}");
    }
    for error in &envelope.errors {
        eprintln!("error [{}]: {}", error.code, error.message);
    }
}

fn render_records(records: &[Value]) {
    if records.is_empty() {
        println!("no records");
        return;
    }

    println!(
        "{:<12} {:>12} {:>12} {:>12} {:>9} {:>10}",
        "DATE", "PRICE", "OPEN", "HIGH", "CHANGE%", "VOLUME"
    );
    for record in records {
        println!(
            "{:<12} {:>12.2} {:>12.2} {:>12.2} {:>+9.2} {:>10}",
            field_str(record, "Date"),
            field_f64(record, "Price"),
            field_f64(record, "Open"),
            field_f64(record, "High"),
            field_f64(record, "ChangePercentFromLastMonth"),
            field_str(record, "Volume"),
        );
    }
}

fn render_fields(data: &Value) {
    match data {
        Value::Object(map) => {
            for (key, value) in map {
                println!("{key} = {value}");
            }
        }
        other => println!("{other}"),
    }
}

fn field_str<'a>(record: &'a Value, key: &str) -> &'a str {
    record.get(key).and_then(Value::as_str).unwrap_or("-")
}

fn field_f64(record: &Value, key: &str) -> f64 {
    record.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}
