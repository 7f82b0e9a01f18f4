use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// One archived image as returned by `/api/record/{guild}/{id}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecordDetail {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub caption: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    pub guild: String,
    pub channel: String,
    pub message: String,
    #[serde(rename = "img_id", alias = "image", default)]
    pub image_id: String,
    /// Posting time, when the server includes it
    #[serde(default)]
    pub time: Option<DateTime<Utc>>,
}

/// Record id list as returned by `/api/query/{guild}`.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordIds(pub Vec<String>);

impl<'de> Deserialize<'de> for RecordIds {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        ids_from_strings_or_numbers(deserializer).map(RecordIds)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => s,
            RawId::Number(n) => n.to_string(),
        }
    }
}

// The archive server stores ids as integers; newer endpoints send strings.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(String::from)
}

fn ids_from_strings_or_numbers<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<RawId>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(String::from)
        .collect())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
