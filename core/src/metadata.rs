use crate::guard::GuardKind;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StepMetadata {
    pub id: Uuid,
    pub label: String,
    pub description: Option<String>,
    /// The view-model guard this step consults, if any.
    pub guard: Option<String>,
}

impl StepMetadata {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn with_guard(mut self, guard: GuardKind) -> Self {
        self.guard = Some(guard.name().to_string());
        self
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
