//! Static route table for the client.
//!
//! Paths resolve to a [`Route`]; the part-info route carries a guard that
//! only lets integer ids through. A blocked resolution means navigation must
//! not happen at all, which is different from a path that matches nothing.

use crate::types::PartType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Build,
    /// `/parts/browse`, optionally with one of the four child lists open.
    BrowseParts(Option<PartType>),
    /// `/parts/:partType/:id`
    PartInfo { part_type: PartType, id: i64 },
    Cart,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Matched(Route),
    /// A route matched but its guard refused the parameters.
    Blocked { path: String },
    NotFound { path: String },
}

/// Guard for the `:id` segment: an optional sign followed by digits.
///
/// This is a syntax check only. An integer too large for an id still passes
/// and resolves to not found.
pub fn is_valid_part_id(segment: &str) -> bool {
    let digits = segment.strip_prefix(['+', '-']).unwrap_or(segment);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

impl Route {
    /// Route name as shown in links and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Build => "Build",
            Route::BrowseParts(None) => "BrowseParts",
            Route::BrowseParts(Some(PartType::Heads)) => "BrowseHeads",
            Route::BrowseParts(Some(PartType::Arms)) => "BrowseArms",
            Route::BrowseParts(Some(PartType::Torsos)) => "BrowseTorsos",
            Route::BrowseParts(Some(PartType::Bases)) => "BrowseBases",
            Route::PartInfo { .. } => "Parts",
            Route::Cart => "Cart",
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Build => "/build".to_string(),
            Route::BrowseParts(None) => "/parts/browse".to_string(),
            Route::BrowseParts(Some(t)) => format!("/parts/browse/{t}"),
            Route::PartInfo { part_type, id } => format!("/parts/{part_type}/{id}"),
            Route::Cart => "/cart".to_string(),
        }
    }

    /// True when `self` is `other` or one of its children.
    pub fn is_within(&self, other: &Route) -> bool {
        match (self, other) {
            (Route::BrowseParts(_), Route::BrowseParts(None)) => true,
            _ => self == other,
        }
    }

    pub fn resolve(path: &str) -> Resolution {
        let clean = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');
        let segments: Vec<&str> = clean.split('/').filter(|s| !s.is_empty()).collect();

        let not_found = || Resolution::NotFound {
            path: path.to_string(),
        };

        let route = match segments.as_slice() {
            [] => Route::Home,
            ["build"] => Route::Build,
            ["cart"] => Route::Cart,
            ["parts", "browse"] => Route::BrowseParts(None),
            ["parts", "browse", child] => match child.parse::<PartType>() {
                Ok(t) if *child == t.as_str() => Route::BrowseParts(Some(t)),
                _ => return not_found(),
            },
            ["parts", part_type, id] => {
                let Ok(part_type) = part_type.parse::<PartType>() else {
                    return not_found();
                };
                if !is_valid_part_id(id) {
                    return Resolution::Blocked {
                        path: path.to_string(),
                    };
                }
                // No catalog id lies outside i64.
                let Ok(id) = id.parse::<i64>() else {
                    return not_found();
                };
                Route::PartInfo { part_type, id }
            }
            _ => return not_found(),
        };
        Resolution::Matched(route)
    }
}
