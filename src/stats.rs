use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use colored::Colorize;
use serde_json::Value;

use crate::constants::keys;
use crate::error::PlotError;
use crate::types::LossSeries;

// Bare non-finite tokens are rewritten to these strings before a second decode
const NAN_SENTINEL: &str = "\u{0}NaN";
const INFINITY_SENTINEL: &str = "\u{0}Infinity";
const NEG_INFINITY_SENTINEL: &str = "\u{0}-Infinity";

/// Collects the loss, adjusted loss and kimg means from a JSON Lines stats file.
///
/// Presence of a loss record is decided by [`keys::LOSS`], but the value is read
/// from `loss_key`. Lines that are not valid JSON are reported and skipped;
/// any other fault ends the scan.
pub fn read_loss_series(path: &Path, loss_key: &str) -> Result<LossSeries, PlotError> {
    let file = File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => PlotError::FileNotFound(path.to_path_buf()),
        _ => PlotError::Read {
            path: path.to_path_buf(),
            source: err,
        },
    })?;
    let reader = BufReader::new(file);

    let mut series = LossSeries::default();

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|source| PlotError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        if line.trim().is_empty() {
            continue;
        }

        let Some(record) = decode_line(&line) else {
            println!(
                "{}",
                format!(
                    "Error: Could not decode JSON on line {line_number} in {}. Skipping line.",
                    path.display()
                )
                .yellow()
            );
            series.skipped_lines.push(line_number);
            continue;
        };

        collect_record(&record, loss_key, line_number, &mut series)?;
    }

    Ok(series)
}

/// Strict JSON first, then a retry that accepts `NaN`, `Infinity` and `-Infinity`.
fn decode_line(line: &str) -> Option<Value> {
    if let Ok(record) = serde_json::from_str::<Value>(line) {
        return Some(record);
    }

    let rewritten = rewrite_non_finite(line)?;
    serde_json::from_str::<Value>(&rewritten).ok()
}

/// Replaces bare non-finite tokens outside string literals with sentinel strings.
/// Returns `None` when the line has no such token, so the retry is skipped.
fn rewrite_non_finite(line: &str) -> Option<String> {
    let mut out = String::with_capacity(line.len() + 16);
    let mut rest = line;
    let mut in_string = false;
    let mut replaced = false;

    while let Some(ch) = rest.chars().next() {
        if in_string {
            match ch {
                '\\' => {
                    let escaped: String = rest.chars().take(2).collect();
                    out.push_str(&escaped);
                    rest = &rest[escaped.len()..];
                    continue;
                }
                '"' => in_string = false,
                _ => {}
            }
        } else {
            let token = [
                ("-Infinity", NEG_INFINITY_SENTINEL),
                ("Infinity", INFINITY_SENTINEL),
                ("NaN", NAN_SENTINEL),
            ]
            .into_iter()
            .find(|(token, _)| rest.starts_with(token));

            if let Some((token, sentinel)) = token {
                // serde_json escapes the NUL, so the sentinel stays a plain string value
                out.push_str(&serde_json::to_string(sentinel).ok()?);
                rest = &rest[token.len()..];
                replaced = true;
                continue;
            }

            if ch == '"' {
                in_string = true;
            }
        }

        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    replaced.then_some(out)
}

/// Membership the way the stats file's producer tests it: keys of an object,
/// elements of an array, substrings of a string. Other scalars can't be searched.
fn has_key(record: &Value, key: &str, line: usize) -> Result<bool, PlotError> {
    match record {
        Value::Object(map) => Ok(map.contains_key(key)),
        Value::Array(items) => Ok(items.iter().any(|item| item.as_str() == Some(key))),
        Value::String(text) if non_finite(text).is_some() => Err(PlotError::Record {
            line,
            kind: "number",
            reason: "cannot be searched for metric keys",
        }),
        Value::String(text) => Ok(text.contains(key)),
        other => Err(PlotError::Record {
            line,
            kind: json_kind(other),
            reason: "cannot be searched for metric keys",
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn collect_record(
    record: &Value,
    loss_key: &str,
    line: usize,
    series: &mut LossSeries,
) -> Result<(), PlotError> {
    if has_key(record, keys::LOSS, line)? {
        series.loss.push(mean_of(record, loss_key, line)?);
    }

    if has_key(record, keys::ADJUSTED, line)? {
        series.adjusted.push(mean_of(record, keys::ADJUSTED, line)?);
    }

    if has_key(record, keys::KIMG, line)? {
        series.kimg.push(mean_of(record, keys::KIMG, line)?);
    }

    Ok(())
}

fn mean_of(record: &Value, key: &str, line: usize) -> Result<f64, PlotError> {
    let Value::Object(record) = record else {
        return Err(PlotError::Record {
            line,
            kind: json_kind(record),
            reason: "cannot be indexed by metric keys",
        });
    };

    let field_error = |reason| PlotError::Field {
        line,
        key: key.to_string(),
        reason,
    };

    let mean = record
        .get(key)
        .ok_or_else(|| field_error("is missing"))?
        .as_object()
        .ok_or_else(|| field_error("is not an object"))?
        .get(keys::MEAN)
        .ok_or_else(|| field_error("has no mean"))?;

    let value = match mean {
        Value::String(text) => non_finite(text),
        other => other.as_f64(),
    };
    value.ok_or_else(|| field_error("has a non-numeric mean"))
}

fn non_finite(text: &str) -> Option<f64> {
    match text {
        NAN_SENTINEL => Some(f64::NAN),
        INFINITY_SENTINEL => Some(f64::INFINITY),
        NEG_INFINITY_SENTINEL => Some(f64::NEG_INFINITY),
        _ => None,
    }
}
