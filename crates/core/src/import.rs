use std::io::Read;
use std::path::Path;

use tracing::info;

use crate::error::Error;
use crate::model::{Flamegraph, Tree};

/// Decodes a flamegraph document and flattens it into a [`Tree`].
pub fn load_json(reader: impl Read) -> Result<Tree, Error> {
    let graph: Flamegraph = serde_json::from_reader(reader)?;
    Tree::from_graph(&graph)
}

pub fn load_json_file(path: &Path) -> Result<Tree, Error> {
    let file = std::fs::File::open(path)?;
    let tree = load_json(std::io::BufReader::new(file))?;
    info!(path = %path.display(), nodes = tree.nodes.len(), "profile decoded");
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Unit;

    #[test]
    fn decodes_camel_case_document() {
        let doc = r#"{
            "total": 300,
            "unit": "bytes",
            "root": {
                "cumulative": 300,
                "childrenList": [
                    { "fullName": "main.main cmd/x", "name": "main.main", "cumulative": 200, "diff": 50 },
                    { "fullName": "runtime.gc", "cumulative": 100 }
                ]
            }
        }"#;
        let tree = load_json(doc.as_bytes()).unwrap();
        assert_eq!(tree.unit, Unit::Bytes);
        assert_eq!(tree.nodes.len(), 3);
        let main = tree.children(tree.root).next().unwrap();
        assert_eq!(main.short_name(), "main.main");
        assert_eq!(main.diff, Some(50));
        assert_eq!(tree.nodes[2].display_name(), "runtime.gc");
    }

    #[test]
    fn malformed_input_is_an_error() {
        assert!(matches!(load_json(&b"{"[..]), Err(Error::Json(_))));
        let missing = Path::new("/definitely/not/here.json");
        assert!(matches!(load_json_file(missing), Err(Error::Io(_))));
    }
}
