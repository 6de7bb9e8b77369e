//! Inspect command - lists every leaf path of a document with its value kind.
//!
//! The document is converted into the in-memory representation first, so the kind
//! shown for each number is the narrowest one that holds it.

use dataops::{
    DataHolder, MapOps, NestedKeyMap, Object,
    json::{JsonOps, io},
    ops::convert,
};

use crate::cli::FileArgs;
use crate::output::{OutputFormat, print_table};

/// A leaf of the document
#[derive(Debug, Clone, PartialEq)]
struct Leaf {
    path: String,
    kind: String,
    value: String,
}

/// Collects the leaves below `map`, in path order. Empty maps count as leaves.
fn collect_leaves(map: &NestedKeyMap) -> dataops::Result<Vec<Leaf>> {
    let mut leaves = Vec::new();
    walk(map, "", &mut leaves)?;
    leaves.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(leaves)
}

fn walk(map: &NestedKeyMap, prefix: &str, leaves: &mut Vec<Leaf>) -> dataops::Result<()> {
    for key in map.keys() {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        let Some(value) = map.raw().get(&key) else {
            continue;
        };
        match NestedKeyMap::from_node(&value) {
            Some(section) if section.size() > 0 => walk(&section, &path, leaves)?,
            _ => leaves.push(Leaf {
                kind: kind_of(&value),
                value: convert(MapOps::INSTANCE, JsonOps::INSTANCE, &value)?.to_string(),
                path,
            }),
        }
    }
    Ok(())
}

/// Kind name; lists also name their element kind when all elements share it.
fn kind_of(value: &Object) -> String {
    match value.as_list() {
        Some([first, rest @ ..]) if rest.iter().all(|v| v.type_name() == first.type_name()) => {
            format!("list<{}>", first.type_name())
        }
        _ => value.type_name().to_string(),
    }
}

/// Run the inspect command
pub fn run(args: &FileArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let data = io::read(&args.file)?;
    let map = data.convert_to(NestedKeyMap::new())?;
    let leaves = collect_leaves(&map)?;

    match format {
        OutputFormat::Human => {
            if leaves.is_empty() {
                println!("Document is empty.");
                return Ok(());
            }
            let rows: Vec<Vec<String>> = leaves
                .into_iter()
                .map(|leaf| vec![leaf.path, leaf.kind, leaf.value])
                .collect();
            print_table(&["PATH", "KIND", "VALUE"], &rows);
        }
        OutputFormat::Json => {
            let entries: Vec<_> = leaves
                .iter()
                .map(|leaf| {
                    serde_json::json!({
                        "path": leaf.path,
                        "kind": leaf.kind,
                        "value": leaf.value,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string(&entries)?);
        }
    }

    Ok(())
}
