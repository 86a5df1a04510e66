//! Record readers
//!
//! Decode TensorFlow records from files or bytes.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use prost::Message;

use crate::error::{ViewError, ViewResult};
use crate::proto::{GraphDef, SavedModel};

/// Decode a `SavedModel` container
pub fn decode_saved_model(bytes: &[u8]) -> ViewResult<SavedModel> {
    SavedModel::decode(bytes).map_err(|e| ViewError::decode("SavedModel", e))
}

/// Decode a bare `GraphDef`
pub fn decode_graph_def(bytes: &[u8]) -> ViewResult<GraphDef> {
    GraphDef::decode(bytes).map_err(|e| ViewError::decode("GraphDef", e))
}

/// Read a whole model file into memory
pub fn read_model_bytes<P: AsRef<Path>>(path: P) -> ViewResult<Vec<u8>> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|e| {
        ViewError::InvalidModel(format!("Failed to open file '{}': {}", path.display(), e))
    })?;

    let mut reader = BufReader::new(file);
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;

    log::debug!("Read {} bytes from '{}'", buffer.len(), path.display());
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::proto::extensions::{make_graph, make_node};
    use crate::proto::MetaGraphDef;

    #[test]
    fn test_decode_graph_def() {
        let graph = make_graph(vec![make_node("Relu", &["x"], "relu")]);
        let decoded = decode_graph_def(&graph.encode_to_vec()).unwrap();
        assert_eq!(decoded.node[0].op, "Relu");
        assert_eq!(decoded.node[0].input, vec!["x"]);
    }

    #[test]
    fn test_decode_saved_model() {
        let saved = SavedModel {
            saved_model_schema_version: 1,
            meta_graphs: vec![MetaGraphDef::default(), MetaGraphDef::default()],
        };
        let decoded = decode_saved_model(&saved.encode_to_vec()).unwrap();
        assert_eq!(decoded.saved_model_schema_version, 1);
        assert_eq!(decoded.meta_graphs.len(), 2);
    }

    #[test]
    fn test_decode_invalid_bytes() {
        let err = decode_graph_def(&[0x0a, 0xff]).unwrap_err();
        assert!(matches!(err, ViewError::Decode { record: "GraphDef", .. }));
    }

    #[test]
    fn test_read_model_bytes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[1, 2, 3]).unwrap();

        assert_eq!(read_model_bytes(file.path()).unwrap(), vec![1, 2, 3]);
        assert!(read_model_bytes("/nonexistent/model.pb").is_err());
    }
}
