/*
 * Responsibility
 * - Lists request/response DTOs
 * - expose only the encoded public id (never the store id)
 * - owner is not a request field: it always comes from AuthCtx
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, de, de::DeserializeOwned};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::repos::list_repo::{ListChanges, NewList};

/// Request bodies arrive either bare (`{ "title": .. }`) or wrapped (`{ "list": { .. } }`).
///
/// A `list` key selects the wrapped form; its content then has to fit `T`.
/// There is no fallback to the bare form, so a malformed wrapped body is an error.
#[derive(Debug)]
pub enum ListBody<T> {
    Wrapped { list: T },
    Bare(T),
}

impl<'de, T> Deserialize<'de> for ListBody<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut object = Map::<String, Value>::deserialize(deserializer)?;

        match object.remove("list") {
            Some(list) => serde_json::from_value(list)
                .map(|list| Self::Wrapped { list })
                .map_err(|e| de::Error::custom(format!("list: {e}"))),
            None => serde_json::from_value(Value::Object(object))
                .map(Self::Bare)
                .map_err(de::Error::custom),
        }
    }
}

impl<T> ListBody<T> {
    pub fn into_inner(self) -> T {
        match self {
            Self::Wrapped { list } => list,
            Self::Bare(inner) => inner,
        }
    }
}

// Fields are optional at the type level so a missing field is a 422 from
// validate(), not a deserializer error.
#[derive(Debug, Default, Deserialize)]
pub struct CreateListRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl CreateListRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.as_deref().unwrap_or_default().trim().is_empty() {
            return Err("title is required");
        }
        if self.text.as_deref().unwrap_or_default().trim().is_empty() {
            return Err("text is required");
        }

        Ok(())
    }

    pub fn into_new_list(self, owner_id: Uuid) -> NewList {
        NewList {
            title: self.title.unwrap_or_default(),
            text: self.text.unwrap_or_default(),
            owner_id,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateListRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl UpdateListRequest {
    pub fn into_changes(self) -> ListChanges {
        ListChanges {
            title: self.title,
            text: self.text,
        }
    }
}

/// Run after blank suppression: anything still present must carry content.
pub fn validate_changes(changes: &ListChanges) -> Result<(), &'static str> {
    if let Some(title) = &changes.title
        && title.trim().is_empty()
    {
        return Err("title cannot be blank");
    }
    if let Some(text) = &changes.text
        && text.trim().is_empty()
    {
        return Err("text cannot be blank");
    }

    Ok(())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    pub id: String, // encoded
    pub title: String,
    pub text: String,
    pub owner: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct SingleListResponse {
    pub list: ListResponse,
}

#[derive(Debug, Serialize)]
pub struct ListCollectionResponse {
    pub lists: Vec<ListResponse>,
}
