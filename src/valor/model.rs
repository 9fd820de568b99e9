use serde::{Deserialize, Deserializer, Serialize};

/// One biographical entry in the collection.
///
/// Records are never mutated after load. Fields the data file omits come back
/// empty; optional fields that are empty or whitespace come back as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    #[serde(default, deserialize_with = "text")]
    pub id: String,
    #[serde(default, deserialize_with = "text")]
    pub name: String,
    #[serde(default, deserialize_with = "text")]
    pub rank: String,
    #[serde(default, deserialize_with = "text")]
    pub regiment: String,
    #[serde(default, deserialize_with = "text")]
    pub award: String,
    #[serde(default, deserialize_with = "text")]
    pub state: String,
    #[serde(default, deserialize_with = "text")]
    pub war: String,
    #[serde(default, deserialize_with = "text")]
    pub year: String,
    #[serde(default, deserialize_with = "text")]
    pub short_story: String,
    #[serde(default, deserialize_with = "text")]
    pub full_story: String,

    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub date_of_death: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub hometown: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub battle_location: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub family_background: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub motto: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Record {
    /// Minimal record with the listing fields set; everything optional is absent.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rank: String::new(),
            regiment: String::new(),
            award: String::new(),
            state: String::new(),
            war: String::new(),
            year: String::new(),
            short_story: String::new(),
            full_story: String::new(),
            date_of_birth: None,
            date_of_death: None,
            age: None,
            hometown: None,
            battle_location: None,
            family_background: None,
            education: None,
            motto: None,
            image: None,
        }
    }

    /// Identity check against an id taken from user input.
    ///
    /// Ids are text; a numeric id in the data file was already turned into
    /// text at load, so this is plain equality on the trimmed input.
    pub fn has_id(&self, id: &str) -> bool {
        self.id == id.trim()
    }
}

/// JSON values we accept where the record expects text.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Scalar::Text(s) => s,
            Scalar::Int(n) => n.to_string(),
            Scalar::UInt(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?
        .map(Scalar::into_text)
        .unwrap_or_default())
}

fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?
        .map(Scalar::into_text)
        .filter(|s| !s.trim().is_empty()))
}
