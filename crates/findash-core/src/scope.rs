//! Company scoping for metric queries.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::CompanyId;

/// Narrows a metric query to one company, or leaves it across all companies.
///
/// The scope is the sole parameter of every metric query; when a company is
/// selected it is bound as the single positional placeholder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompanyScope {
    /// All companies known to the fact store.
    #[default]
    All,
    /// A single company by identifier.
    Company(CompanyId),
}

impl CompanyScope {
    /// Returns the company identifier when scoped to one company.
    #[must_use]
    pub const fn company_id(self) -> Option<CompanyId> {
        match self {
            Self::All => None,
            Self::Company(id) => Some(id),
        }
    }
}

impl From<Option<CompanyId>> for CompanyScope {
    fn from(id: Option<CompanyId>) -> Self {
        id.map_or(Self::All, Self::Company)
    }
}

impl From<CompanyId> for CompanyScope {
    fn from(id: CompanyId) -> Self {
        Self::Company(id)
    }
}

impl fmt::Display for CompanyScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Company(id) => write!(f, "company {id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_from_optional_id() {
        assert_eq!(CompanyScope::from(None), CompanyScope::All);
        assert_eq!(
            CompanyScope::from(Some(CompanyId(7))),
            CompanyScope::Company(CompanyId(7))
        );
        assert_eq!(CompanyScope::All.company_id(), None);
        assert_eq!(
            CompanyScope::Company(CompanyId(7)).company_id(),
            Some(CompanyId(7))
        );
    }
}
