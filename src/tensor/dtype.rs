//! TensorFlow data type names
//!
//! Maps numeric `DataType` codes to the lowercase names shown in the viewer
//! (`DT_FLOAT` → `float`, `DT_INT32_REF` → `int32_ref`).

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::proto::DataType;

/// Rendered for codes that are not a declared `DataType`
pub const UNKNOWN_TYPE: &str = "?";

static DATA_TYPE_NAMES: OnceLock<FxHashMap<i32, String>> = OnceLock::new();

fn data_type_names() -> &'static FxHashMap<i32, String> {
    DATA_TYPE_NAMES.get_or_init(|| {
        DataType::ALL
            .iter()
            .map(|dtype| {
                let name = dtype.as_str_name();
                let name = name.strip_prefix("DT_").unwrap_or(name);
                (*dtype as i32, name.to_lowercase())
            })
            .collect()
    })
}

/// Format a data type code as its canonical lowercase name
///
/// Unknown codes render as `?`.
pub fn format_data_type(code: i32) -> &'static str {
    data_type_names()
        .get(&code)
        .map(String::as_str)
        .unwrap_or(UNKNOWN_TYPE)
}

/// Convert i32 to DataType enum
pub fn i32_to_dtype(value: i32) -> Option<DataType> {
    DataType::try_from(value).ok()
}

/// Check if data type is a reference type (`*_REF`)
pub fn is_ref_type(code: i32) -> bool {
    code > 100 && i32_to_dtype(code).is_some()
}
