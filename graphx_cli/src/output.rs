use std::io::Write;

use graphx_isomorphism::MappingSet;
use serde_json::{Map, Value, json};

use crate::args::FormatArg;
use crate::error::Result;

pub fn write_count<W: Write>(out: &mut W, count: usize, format: FormatArg) -> Result<()> {
    match format {
        FormatArg::Text => writeln!(out, "{count}")?,
        FormatArg::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            writer.write_record(["count"])?;
            writer.write_record([count.to_string()])?;
            writer.flush()?;
        }
        FormatArg::Json => {
            serde_json::to_writer(&mut *out, &json!({ "count": count }))?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Writes every mapping as target node -> pattern node pairs.
pub fn write_mappings<W: Write>(
    out: &mut W,
    mappings: &MappingSet<String, String>,
    format: FormatArg,
) -> Result<()> {
    match format {
        FormatArg::Text => {
            for (i, mapping) in mappings.iter().enumerate() {
                let pairs: Vec<String> = mapping.iter().map(|(t, p)| format!("{t} -> {p}")).collect();
                writeln!(out, "Mapping #{i}: {}", pairs.join(", "))?;
            }
            writeln!(out, "{} mapping(s) ({} mode)", mappings.len(), mappings.mode)?;
        }
        FormatArg::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            writer.write_record(["mapping", "target", "pattern"])?;
            for (i, mapping) in mappings.iter().enumerate() {
                let index = i.to_string();
                for (t, p) in mapping {
                    writer.write_record([index.as_str(), t.as_str(), p.as_str()])?;
                }
            }
            writer.flush()?;
        }
        FormatArg::Json => {
            let items: Vec<Value> = mappings
                .iter()
                .map(|mapping| {
                    let object: Map<String, Value> = mapping
                        .iter()
                        .map(|(t, p)| (t.clone(), Value::from(p.as_str())))
                        .collect();
                    Value::Object(object)
                })
                .collect();
            serde_json::to_writer_pretty(&mut *out, &items)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
