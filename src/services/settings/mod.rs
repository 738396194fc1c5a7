mod store;

pub use store::{
    load_or_default, toggle_compact_mode, MemoryPreferenceStore, PreferenceStore,
    TomlPreferenceStore,
};
