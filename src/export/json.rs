use crate::core::TimelineView;
use crate::errors::AppResult;

pub fn to_json(view: &TimelineView) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(view)?)
}

