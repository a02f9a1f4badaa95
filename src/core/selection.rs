//! Two-slot origin/destination selection.

use crate::core::registry::CountryRegistry;
use crate::core::resolver::NameResolver;
use crate::domain::model::{Country, Role};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// `role` was about to receive the country already held by the other role.
    #[error("{}", collision_message(.role))]
    Collision { role: Role, country: String },
}

fn collision_message(role: &Role) -> &'static str {
    match role {
        Role::Origin => "Origin cannot be the same as destination",
        Role::Destination => "Destination cannot be the same as origin",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub active_role: Role,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            origin: None,
            destination: None,
            active_role: Role::Origin,
        }
    }
}

impl SelectionState {
    pub fn get(&self, role: Role) -> Option<&str> {
        match role {
            Role::Origin => self.origin.as_deref(),
            Role::Destination => self.destination.as_deref(),
        }
    }

    fn slot_mut(&mut self, role: Role) -> &mut Option<String> {
        match role {
            Role::Origin => &mut self.origin,
            Role::Destination => &mut self.destination,
        }
    }
}

/// Result of a click on a map feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The feature resolved and was written to this role.
    Selected { role: Role, country: String },
    /// The feature name matched no registry entry.
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct SelectionMachine {
    state: SelectionState,
    notice: Option<SelectionError>,
}

impl SelectionMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn active_role(&self) -> Role {
        self.state.active_role
    }

    /// Last rejected selection, cleared by the next successful one.
    pub fn notice(&self) -> Option<&SelectionError> {
        self.notice.as_ref()
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    pub fn is_complete(&self) -> bool {
        self.pair().is_some()
    }

    /// `(origin, destination)` once both are set.
    pub fn pair(&self) -> Option<(&str, &str)> {
        Some((self.state.get(Role::Origin)?, self.state.get(Role::Destination)?))
    }

    pub fn set_active_role(&mut self, role: Role) {
        tracing::debug!(%role, "active role set");
        self.state.active_role = role;
    }

    /// Dropdown change for `role`. The edited role becomes the active one.
    pub fn select_via_dropdown(&mut self, role: Role, country: &str) -> Result<(), SelectionError> {
        self.check_free(role, country)?;
        *self.state.slot_mut(role) = Some(country.to_string());
        self.state.active_role = role;
        self.notice = None;
        tracing::debug!(%role, country, "dropdown selection");
        Ok(())
    }

    /// Map click on an already resolved country. Writes the active role;
    /// a successful origin pick moves input on to the destination.
    pub fn select_via_map(&mut self, country: &str) -> Result<Role, SelectionError> {
        let role = self.state.active_role;
        self.check_free(role, country)?;

        *self.state.slot_mut(role) = Some(country.to_string());
        if role == Role::Origin {
            self.state.active_role = Role::Destination;
        }
        self.notice = None;
        tracing::debug!(%role, country, "map selection");
        Ok(role)
    }

    /// Resolves a raw map-feature name and selects it. Unresolvable features
    /// are ignored without touching state or the notice.
    pub fn click_feature(
        &mut self,
        resolver: &NameResolver<'_>,
        feature_name: &str,
    ) -> Result<ClickOutcome, SelectionError> {
        let Some(country) = resolver.resolve(feature_name) else {
            return Ok(ClickOutcome::Ignored);
        };
        let role = self.select_via_map(&country.name)?;
        Ok(ClickOutcome::Selected {
            role,
            country: country.name.clone(),
        })
    }

    /// Sets both slots at once.
    pub fn apply_preset(&mut self, origin: &str, destination: &str) -> Result<(), SelectionError> {
        if origin == destination {
            return self.reject(Role::Destination, destination);
        }
        self.state.origin = Some(origin.to_string());
        self.state.destination = Some(destination.to_string());
        self.notice = None;
        Ok(())
    }

    /// Registry entries offered to `role`: everything except the other
    /// role's current value.
    pub fn dropdown_options<'r>(&self, registry: &'r CountryRegistry, role: Role) -> Vec<&'r Country> {
        let excluded = self.state.get(role.other());
        registry
            .all()
            .iter()
            .filter(|c| Some(c.name.as_str()) != excluded)
            .collect()
    }

    fn check_free(&mut self, role: Role, country: &str) -> Result<(), SelectionError> {
        if self.state.get(role.other()) == Some(country) {
            return self.reject(role, country);
        }
        Ok(())
    }

    fn reject<T>(&mut self, role: Role, country: &str) -> Result<T, SelectionError> {
        let err = SelectionError::Collision {
            role,
            country: country.to_string(),
        };
        tracing::debug!(%role, country, "selection rejected: {}", err);
        self.notice = Some(err.clone());
        Err(err)
    }
}
