use serde::{Deserialize, Serialize};

/// One model as listed by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Model {
    pub id: i64,
    pub uu_id: String,
    #[serde(rename = "type")]
    pub model_type: i64,
    pub state: i64,
    pub created: String,
    pub modified: String,
    pub name: String,
    pub short_description: String,
    pub long_description: String,
    pub default_model_tag_id: i64,
    pub amount_of_pulls: String,
    pub amount_of_tags: i64,
    pub required_memory: String,
    pub size: i64,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            id: 0,
            uu_id: String::new(),
            model_type: 0,
            state: 0,
            created: String::new(),
            modified: String::new(),
            name: String::new(),
            short_description: String::new(),
            long_description: String::new(),
            default_model_tag_id: 0,
            amount_of_pulls: String::new(),
            amount_of_tags: 0,
            required_memory: String::new(),
            size: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_service_fields() {
        let model: Model = serde_json::from_value(serde_json::json!({
            "id": 1,
            "uuId": "f00",
            "type": 2,
            "state": 1,
            "name": "llama2",
            "shortDescription": "short",
            "defaultModelTagId": 7,
            "amountOfPulls": "12k",
            "amountOfTags": 3,
            "requiredMemory": "8GB",
        }))
        .unwrap();
        assert_eq!(model.id, 1);
        assert_eq!(model.uu_id, "f00");
        assert_eq!(model.model_type, 2);
        assert_eq!(model.default_model_tag_id, 7);
        assert_eq!(model.amount_of_pulls, "12k");
        // absent fields take defaults
        assert_eq!(model.size, 0);
        assert_eq!(model.long_description, "");
    }
}
