use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Language used for chart labels. Polish is the clinic's working language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Locale {
    #[default]
    Pl,
    En,
}
