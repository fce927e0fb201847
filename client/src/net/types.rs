//! Shared REST DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON bodies. Identity fields are parsed
//! leniently: a name that is missing, `null`, or not a JSON string becomes
//! `None` instead of failing the whole user payload.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// The signed-in user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub last_name: Option<String>,
    #[serde(default, alias = "email")]
    pub email_address: String,
    #[serde(default)]
    pub is_staff: bool,
}

/// An audited page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// An audited user-journey script.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    pub uuid: String,
    pub name: String,
}

/// A named audit configuration (location, browser, network).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditParameters {
    pub uuid: String,
    pub name: String,
}

/// A project with its audited pages and scripts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub pages: Vec<Page>,
    #[serde(default)]
    pub scripts: Vec<Script>,
    #[serde(default)]
    pub audit_parameters_list: Vec<AuditParameters>,
}

/// Whether an audit target id names a page or a script.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuditTargetKind {
    Page,
    Script,
}

impl AuditTargetKind {
    /// Query-string key used by the audit results endpoint.
    pub fn query_key(self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Script => "script",
        }
    }
}

impl Project {
    /// Resolve an id to the page or script it names. Pages win on collision.
    pub fn target_kind(&self, id: &str) -> Option<AuditTargetKind> {
        if self.pages.iter().any(|page| page.uuid == id) {
            Some(AuditTargetKind::Page)
        } else if self.scripts.iter().any(|script| script.uuid == id) {
            Some(AuditTargetKind::Script)
        } else {
            None
        }
    }

    /// First audit parameters of the project, used when the route names none.
    pub fn default_audit_parameters_id(&self) -> Option<&str> {
        self.audit_parameters_list.first().map(|ap| ap.uuid.as_str())
    }
}

/// A single timestamped audit measurement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuditResult {
    pub uuid: String,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
    #[serde(default)]
    pub metrics: BTreeMap<String, f64>,
}

fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    })
}
