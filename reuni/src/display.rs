//! Column rendering for configuration output.
//!
//! Cells are trimmed of surrounding whitespace. Every column except the last
//! is padded to its widest cell and followed by two spaces; the last cell is
//! written without padding.

use reuni_client::ConfigurationMap;

const GLUE: &str = "  ";

/// Align rows of cells into columns.
pub fn align_columns(rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = Vec::new();
    for row in rows {
        for (index, cell) in row.iter().enumerate() {
            let width = cell.trim().chars().count();
            match widths.get_mut(index) {
                Some(current) => *current = (*current).max(width),
                None => widths.push(width),
            }
        }
    }

    rows.iter()
        .map(|row| {
            let mut line = String::new();
            for (index, cell) in row.iter().enumerate() {
                let cell = cell.trim();
                if index + 1 == row.len() {
                    line.push_str(cell);
                } else {
                    line.push_str(&format!("{cell:<width$}", width = widths[index]));
                    line.push_str(GLUE);
                }
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Service, namespace and version of the configuration on screen.
pub fn header(service: &str, namespace: &str, version: i64) -> String {
    align_columns(&[
        vec!["Service".to_string(), service.to_string()],
        vec!["Namespace".to_string(), namespace.to_string()],
        vec!["Version".to_string(), version.to_string()],
    ])
}

/// Numbered key/value table. Values are placed in cells directly, so a `|`
/// inside a key or value never splits a column.
pub fn key_value_table(configuration: &ConfigurationMap) -> String {
    let mut rows = vec![vec!["#".to_string(), "Key".to_string(), "Value".to_string()]];
    rows.extend(
        configuration
            .iter()
            .enumerate()
            .map(|(index, (key, value))| vec![(index + 1).to_string(), key.clone(), value.clone()]),
    );
    align_columns(&rows)
}

/// `1,2,3`: no brackets, no spaces.
pub fn join_versions(versions: &[i64]) -> String {
    versions
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

pub fn version_list(service: &str, namespace: &str, versions: &[i64]) -> String {
    align_columns(&[
        vec!["Service".to_string(), service.to_string()],
        vec!["Namespace".to_string(), namespace.to_string()],
        vec!["Versions".to_string(), join_versions(versions)],
    ])
}
