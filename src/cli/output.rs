//! Output formatting utilities

use crate::domain::Record;

/// Format one record for display
pub fn format_record(record: &Record) -> String {
    format!("ID: {}  First Name: {}", record.id, record.first)
}

/// Format the whole list for display
pub fn format_record_list(records: &[Record]) -> String {
    if records.is_empty() {
        return "No entries".to_string();
    }

    let mut output = String::new();
    for record in records {
        output.push_str(&format_record(record));
        output.push('\n');
    }
    output
}
