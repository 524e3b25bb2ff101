//! Shared wire types for the build-a-bot parts and cart API.
//!
//! These mirror the JSON served by `/api/parts`, accepted by `/api/cart` and
//! returned by `/api/sign-in`. Both the browser app and the terminal client
//! depend on this crate so the two never disagree about field names.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Part ──

/// The catalog list a part belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartType {
    #[serde(alias = "head")]
    Heads,
    #[serde(alias = "arm")]
    Arms,
    #[serde(alias = "torso")]
    Torsos,
    #[serde(alias = "base")]
    Bases,
}

impl PartType {
    pub const ALL: [PartType; 4] = [
        PartType::Heads,
        PartType::Arms,
        PartType::Torsos,
        PartType::Bases,
    ];

    /// Path segment used in routes and in the catalog JSON keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            PartType::Heads => "heads",
            PartType::Arms => "arms",
            PartType::Torsos => "torsos",
            PartType::Bases => "bases",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PartType::Heads => "Heads",
            PartType::Arms => "Arms",
            PartType::Torsos => "Torsos",
            PartType::Bases => "Bases",
        }
    }
}

impl fmt::Display for PartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPartType(pub String);

impl fmt::Display for UnknownPartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown part type '{}'", self.0)
    }
}

impl std::error::Error for UnknownPartType {}

impl FromStr for PartType {
    type Err = UnknownPartType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "heads" | "head" => Ok(PartType::Heads),
            "arms" | "arm" => Ok(PartType::Arms),
            "torsos" | "torso" => Ok(PartType::Torsos),
            "bases" | "base" => Ok(PartType::Bases),
            other => Err(UnknownPartType(other.to_string())),
        }
    }
}

/// A catalog entry. Created server-side and never modified by clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    pub id: i64,
    #[serde(rename = "type")]
    pub part_type: PartType,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub src: String,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub on_sale: bool,
}

/// The full catalog as returned by `GET /api/parts`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartsCatalog {
    #[serde(default)]
    pub heads: Vec<Part>,
    #[serde(default)]
    pub arms: Vec<Part>,
    #[serde(default)]
    pub torsos: Vec<Part>,
    #[serde(default)]
    pub bases: Vec<Part>,
}

impl PartsCatalog {
    pub fn by_type(&self, part_type: PartType) -> &[Part] {
        match part_type {
            PartType::Heads => &self.heads,
            PartType::Arms => &self.arms,
            PartType::Torsos => &self.torsos,
            PartType::Bases => &self.bases,
        }
    }

    pub fn find(&self, part_type: PartType, id: i64) -> Option<&Part> {
        self.by_type(part_type).iter().find(|p| p.id == id)
    }

    pub fn is_empty(&self) -> bool {
        PartType::ALL.iter().all(|t| self.by_type(*t).is_empty())
    }
}

// ── Robot ──

/// An assembled robot: one part per slot plus the cost at assembly time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Robot {
    pub head: Part,
    pub left_arm: Part,
    pub torso: Part,
    pub right_arm: Part,
    pub base: Part,
    #[serde(default)]
    pub cost: f64,
}

impl Robot {
    pub fn new(head: Part, left_arm: Part, torso: Part, right_arm: Part, base: Part) -> Self {
        let cost = head.cost + left_arm.cost + torso.cost + right_arm.cost + base.cost;
        Self {
            head,
            left_arm,
            torso,
            right_arm,
            base,
            cost,
        }
    }

    /// The five slots in display order.
    pub fn parts(&self) -> [&Part; 5] {
        [
            &self.head,
            &self.left_arm,
            &self.torso,
            &self.right_arm,
            &self.base,
        ]
    }

    /// True when any of the five parts is on sale.
    pub fn has_sale_part(&self) -> bool {
        self.parts().iter().any(|p| p.on_sale)
    }
}

// ── User ──

/// The signed-in user. Fields beyond `id` and `userName` are kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl User {
    /// Name to show in the header, falling back to the id.
    pub fn display_name(&self) -> String {
        match (&self.user_name, &self.id) {
            (Some(name), _) => name.clone(),
            (None, serde_json::Value::String(id)) => id.clone(),
            (None, other) => other.to_string(),
        }
    }
}
