//! Legacy text serialization: indented property assignments and class
//! scripts with their defaultproperties block.

use std::io::{self, Write};

use relic_assets::{ClassAsset, ObjectProperties, PropertyEntry};

/// Writes the exported properties of an object as indented `Name=Value`
/// lines, one per array element.
///
/// Rules, in order:
/// - entries not flagged as exported are skipped entirely;
/// - a property named `Tag` whose string value equals the owning object's
///   name is suppressed (it restates the object's identity);
/// - static-array entries emit `Name(i)=Value` per element, scalars plain
///   `Name=Value`;
/// - elements with no value on the object resolve through `fallback` and are
///   skipped when absent there too.
///
/// Lines are indented with `depth` tabs and terminated with CRLF.
pub fn write_properties<W: Write>(
    out: &mut W,
    object_name: &str,
    entries: &[PropertyEntry],
    depth: usize,
    fallback: Option<&ObjectProperties>,
) -> io::Result<()> {
    let tabs = "\t".repeat(depth);
    for entry in entries {
        if !entry.exported {
            continue;
        }
        for i in 0..entry.array_dim as usize {
            let value = match entry.value(i).or_else(|| {
                fallback
                    .and_then(|p| p.entry(&entry.name))
                    .and_then(|e| e.value(i))
            }) {
                Some(value) => value,
                None => continue,
            };

            if entry.name == "Tag" && value.as_str() == Some(object_name) {
                continue;
            }

            if entry.array_dim > 1 {
                write!(out, "{}{}({})={}\r\n", tabs, entry.name, i, value)?;
            } else {
                write!(out, "{}{}={}\r\n", tabs, entry.name, value)?;
            }
        }
    }
    Ok(())
}

/// Renders a class as its script text followed by a defaultproperties block.
///
/// A class without script text has nothing to export and yields an empty
/// buffer. Default values come from the class's default object, falling back
/// to the base structure's defaults when the class is the metaclass root.
pub fn export_class(cls: &ClassAsset) -> Vec<u8> {
    let Some(script) = cls.script_text.as_deref() else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(script.len() + 64);
    out.extend_from_slice(script.as_bytes());
    out.extend_from_slice(b"\r\ndefaultproperties\r\n{\r\n");
    write_properties(
        &mut out,
        &cls.defaults.name,
        &cls.defaults.entries,
        1,
        cls.parent_defaults.as_ref(),
    )
    .expect("writing to Vec should not fail");
    out.push(b'}');
    out
}
