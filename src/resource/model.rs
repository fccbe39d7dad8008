//! Wire types for the resource listing endpoint

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single asset record as returned by the listing API.
///
/// Only `public_id` is interpreted. The full record, including its field
/// order, is kept so it can be written back out unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Resource {
    public_id: String,
    record: Map<String, Value>,
}

impl Resource {
    pub fn new(public_id: &str) -> Self {
        let mut record = Map::new();
        record.insert("public_id".to_string(), Value::String(public_id.to_string()));
        Self {
            public_id: public_id.to_string(),
            record,
        }
    }

    pub fn public_id(&self) -> &str {
        &self.public_id
    }

    /// Any field of the provider record
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.record.get(field)
    }
}

impl TryFrom<Map<String, Value>> for Resource {
    type Error = String;

    fn try_from(record: Map<String, Value>) -> Result<Self, Self::Error> {
        let public_id = match record.get("public_id") {
            Some(Value::String(id)) => id.clone(),
            Some(other) => return Err(format!("public_id is not a string: {}", other)),
            None => return Err("missing field `public_id`".to_string()),
        };
        Ok(Self { public_id, record })
    }
}

impl From<Resource> for Map<String, Value> {
    fn from(resource: Resource) -> Self {
        resource.record
    }
}

/// One page of the listing response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourcePage {
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

impl ResourcePage {
    /// Split the page into its resources and the cursor for the next page.
    /// An empty cursor string means there is no next page.
    pub fn into_parts(self) -> (Vec<Resource>, Option<String>) {
        let cursor = self.next_cursor.filter(|c| !c.is_empty());
        (self.resources, cursor)
    }
}
