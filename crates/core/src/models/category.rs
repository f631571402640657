use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Display category for a merchant category code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub name: String,
    pub emoji: String,
}

impl CategoryInfo {
    /// Composite label used to merge MCCs that map to the same display
    /// category, e.g. `"🛒 Продукти"`.
    pub fn label(&self) -> String {
        format!("{} {}", self.emoji, self.name)
    }
}

fn mcc_map() -> &'static HashMap<String, CategoryInfo> {
    static MAP: OnceLock<HashMap<String, CategoryInfo>> = OnceLock::new();
    MAP.get_or_init(|| {
        serde_json::from_str(include_str!("../../assets/mcc_map.json"))
            .expect("embedded mcc_map.json is valid JSON")
    })
}

/// Fallback bucket for codes the table does not know.
pub fn unknown_category() -> &'static CategoryInfo {
    static UNKNOWN: OnceLock<CategoryInfo> = OnceLock::new();
    UNKNOWN.get_or_init(|| CategoryInfo {
        name: "Інше".to_string(),
        emoji: "❓".to_string(),
    })
}

/// Resolve an MCC to its display category. Pure lookup, keyed by the
/// decimal string form of the code; unknown codes land in [`unknown_category`].
pub fn category_for_mcc(mcc: i32) -> &'static CategoryInfo {
    mcc_map()
        .get(mcc.to_string().as_str())
        .unwrap_or_else(|| unknown_category())
}
