//! Config validation: unknown-key detection with Levenshtein suggestions
//! and range checks.
//!
//! Two-pass parse approach: first deserialize raw TOML into `toml::Value`,
//! walk the key tree, compare against known field names, and emit warnings
//! with "did you mean?" suggestions. Then proceed with normal serde
//! deserialization. Warnings never break existing configs.

use std::collections::HashSet;

use crate::types::Pollutant;

/// A non-fatal config warning (typo, suspicious value).
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref s) = self.suggestion {
            write!(f, " — did you mean '{s}'?")?;
        }
        Ok(())
    }
}

// ============================================================================
// Known Config Keys
// ============================================================================

/// Returns the complete set of valid dotted key paths for DashboardConfig.
///
/// Maintained by hand to match the struct hierarchy in dashboard_config.rs.
/// Array-of-table entries (`[[models.entries]]`) are walked with the same
/// dotted path as a plain table.
pub fn known_config_keys() -> HashSet<&'static str> {
    let keys: &[&str] = &[
        // [server]
        "server",
        "server.addr",
        // [models]
        "models",
        "models.dir",
        "models.entries",
        "models.entries.name",
        "models.entries.file",
        // [inputs.*]
        "inputs",
        "inputs.co",
        "inputs.co.max",
        "inputs.co.default",
        "inputs.no2",
        "inputs.no2.max",
        "inputs.no2.default",
        "inputs.ozone",
        "inputs.ozone.max",
        "inputs.ozone.default",
        "inputs.pm25",
        "inputs.pm25.max",
        "inputs.pm25.default",
        // [report]
        "report",
        "report.file_name",
    ];
    keys.iter().copied().collect()
}

/// Recursively collect dotted key paths from a TOML value.
pub fn walk_toml_keys(value: &toml::Value, prefix: &str) -> Vec<String> {
    let mut keys = Vec::new();
    match value {
        toml::Value::Table(table) => {
            for (k, v) in table {
                let path = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{prefix}.{k}")
                };
                keys.push(path.clone());
                keys.extend(walk_toml_keys(v, &path));
            }
        }
        toml::Value::Array(items) => {
            for item in items {
                if item.is_table() {
                    keys.extend(walk_toml_keys(item, prefix));
                }
            }
        }
        _ => {}
    }
    keys.sort();
    keys.dedup();
    keys
}

// ============================================================================
// Levenshtein Distance
// ============================================================================

fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Suggest the closest known key for an unknown key, if within edit distance 3.
pub fn suggest_correction(unknown: &str, known: &HashSet<&str>) -> Option<String> {
    let mut best: Option<(&str, usize)> = None;
    for &k in known {
        let dist = levenshtein(unknown, k);
        if dist > 3 {
            continue;
        }
        // Tie-break on the key itself so the answer does not depend on hash order.
        let better = match best {
            Some((best_key, best_dist)) => dist < best_dist || (dist == best_dist && k < best_key),
            None => true,
        };
        if better {
            best = Some((k, dist));
        }
    }
    best.map(|(k, _)| k.to_string())
}

// ============================================================================
// Unknown Key Validation (entry point)
// ============================================================================

/// Parse a raw TOML string and return warnings for any unknown config keys.
///
/// This does NOT fail on unknown keys; it only warns.
pub fn validate_unknown_keys(raw_toml: &str) -> Vec<ValidationWarning> {
    let value: toml::Value = match raw_toml.parse() {
        Ok(v) => v,
        Err(_) => return Vec::new(), // parse errors are handled by serde later
    };

    let known = known_config_keys();
    walk_toml_keys(&value, "")
        .into_iter()
        .filter(|key| !known.contains(key.as_str()))
        .map(|key| ValidationWarning {
            suggestion: suggest_correction(&key, &known),
            message: format!("Unknown config key '{key}'"),
            field: key,
        })
        .collect()
}

// ============================================================================
// Range Validation
// ============================================================================

/// Validate value ranges and model entries on a parsed config.
///
/// Returns (errors, warnings): errors are impossible values that must
/// prevent startup; warnings are suspicious but not fatal.
pub fn validate_ranges(
    config: &super::DashboardConfig,
) -> (Vec<String>, Vec<ValidationWarning>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for pollutant in Pollutant::ALL {
        let key = pollutant.key();
        let range = config.inputs.range_for(pollutant);
        if !range.max.is_finite() || range.max <= 0.0 {
            errors.push(format!("inputs.{key}.max = {} must be > 0", range.max));
        }
        if !range.default.is_finite() || range.default < 0.0 || range.default > range.max {
            errors.push(format!(
                "inputs.{key}.default = {} must lie within 0-{}",
                range.default, range.max
            ));
        }
        // Twice the top of the 0-500 AQI scale
        if range.max > 1_000.0 {
            warnings.push(ValidationWarning {
                field: format!("inputs.{key}.max"),
                message: format!(
                    "inputs.{key}.max = {} is far outside the AQI scale (0-500)",
                    range.max
                ),
                suggestion: None,
            });
        }
    }

    if config.models.entries.is_empty() {
        errors.push("models.entries must list at least one model".to_string());
    }
    let mut seen = HashSet::new();
    for entry in &config.models.entries {
        if entry.name.trim().is_empty() {
            errors.push("models.entries: name must not be empty".to_string());
        }
        if entry.file.trim().is_empty() {
            errors.push(format!("models.entries '{}': file must not be empty", entry.name));
        }
        if !seen.insert(entry.name.as_str()) {
            errors.push(format!("models.entries: duplicate model name '{}'", entry.name));
        }
    }

    // Sent inside a Content-Disposition header: visible ASCII and spaces only
    let file_name = &config.report.file_name;
    if file_name.trim().is_empty() {
        errors.push("report.file_name must not be empty".to_string());
    } else if file_name.contains(['/', '\\', '"']) {
        errors.push(format!("report.file_name = '{file_name}' must be a bare file name"));
    } else if !file_name.chars().all(|c| c == ' ' || c.is_ascii_graphic()) {
        errors.push(format!("report.file_name = {file_name:?} must be printable ASCII"));
    }

    if config.server.addr.parse::<std::net::SocketAddr>().is_err() {
        warnings.push(ValidationWarning {
            field: "server.addr".to_string(),
            message: format!(
                "server.addr = '{}' is not a literal socket address; it will be resolved at bind time",
                config.server.addr
            ),
            suggestion: None,
        });
    }

    (errors, warnings)
}

// ============================================================================
// Tests
// ============================================================================
