pub mod cursor;
pub mod error;
pub mod extract;
pub mod field;
pub mod formatter;
pub mod parser;
pub mod presets;
pub mod separators;
pub mod types;

// 导出主要 API
pub use cursor::{EditKey, Selection, remap_cursor, skip_decoration};
pub use error::{ConfigError, FormatError};
pub use extract::{NumberPattern, build_number_test_pattern};
pub use field::{MemoryTextField, NumberField, TextFieldHandle};
pub use formatter::{NumberFormatter, format_input};
pub use presets::{get_preset, list_available_presets, try_get_preset};
pub use separators::resolve_separators;
pub use types::*;
