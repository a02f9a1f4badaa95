use crate::core::presets::Preset;
use crate::core::resolver::NameResolver;
use crate::core::selection::{ClickOutcome, SelectionError, SelectionMachine};
use crate::domain::model::{RegulationQuery, RegulationReport, Role, SearchType};
use crate::domain::ports::{PreferenceStore, RegulationService};
use crate::utils::error::{GlobalDriveError, Result};

/// Preference key holding the disclaimer acceptance.
pub const TERMS_ACCEPTED_KEY: &str = "globaldrive_terms_accepted";

pub const DISCLAIMER: &str = "\
GlobalDrive uses artificial intelligence to analyze driving regulations. \
International laws change frequently, so results may be incomplete or out of date.

This tool is for informational purposes only and does NOT constitute legal advice.
  - Always verify with the local embassy or consulate.
  - We are not responsible for fines, impounded vehicles, or legal issues arising from the use of this data.
  - Official government sources take precedence over this AI.";

/// Reads and records acceptance of [`DISCLAIMER`].
pub struct TermsGate<S: PreferenceStore> {
    store: S,
}

impl<S: PreferenceStore> TermsGate<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn is_accepted(&self) -> Result<bool> {
        let value = self.store.get(TERMS_ACCEPTED_KEY).await?;
        Ok(value.as_deref() == Some("true"))
    }

    pub async fn accept(&self) -> Result<()> {
        self.store.set(TERMS_ACCEPTED_KEY, "true").await?;
        tracing::info!("Disclaimer accepted");
        Ok(())
    }
}

/// One user's interaction: selection, category, legal gate, last outcome.
///
/// A single message slot holds whatever went wrong last, a rejected
/// selection or a failed fetch. Any later successful selection or a new
/// submission clears it.
pub struct Session<R: RegulationService> {
    service: R,
    selection: SelectionMachine,
    category: SearchType,
    terms_accepted: bool,
    report: Option<RegulationReport>,
    error: Option<String>,
}

impl<R: RegulationService> Session<R> {
    pub fn new(service: R, terms_accepted: bool) -> Self {
        Self {
            service,
            selection: SelectionMachine::new(),
            category: SearchType::default(),
            terms_accepted,
            report: None,
            error: None,
        }
    }

    pub fn selection(&self) -> &SelectionMachine {
        &self.selection
    }

    pub fn set_active_role(&mut self, role: Role) {
        self.selection.set_active_role(role);
    }

    pub fn select_via_map(&mut self, country: &str) -> std::result::Result<Role, SelectionError> {
        let result = self.selection.select_via_map(country);
        self.record(result)
    }

    pub fn select_via_dropdown(
        &mut self,
        role: Role,
        country: &str,
    ) -> std::result::Result<(), SelectionError> {
        let result = self.selection.select_via_dropdown(role, country);
        self.record(result)
    }

    /// Unresolvable features leave the current message in place.
    pub fn click_feature(
        &mut self,
        resolver: &NameResolver<'_>,
        feature_name: &str,
    ) -> std::result::Result<ClickOutcome, SelectionError> {
        match self.selection.click_feature(resolver, feature_name) {
            Ok(ClickOutcome::Ignored) => Ok(ClickOutcome::Ignored),
            result => self.record(result),
        }
    }

    pub fn apply_preset(
        &mut self,
        origin: &str,
        destination: &str,
    ) -> std::result::Result<(), SelectionError> {
        let result = self.selection.apply_preset(origin, destination);
        self.record(result)
    }

    fn record<T>(
        &mut self,
        result: std::result::Result<T, SelectionError>,
    ) -> std::result::Result<T, SelectionError> {
        self.error = result.as_ref().err().map(ToString::to_string);
        result
    }

    pub fn category(&self) -> SearchType {
        self.category
    }

    /// Switching category drops the report obtained for the previous one.
    pub fn set_category(&mut self, category: SearchType) {
        if self.category != category {
            self.report = None;
        }
        self.category = category;
    }

    pub fn terms_accepted(&self) -> bool {
        self.terms_accepted
    }

    pub fn mark_terms_accepted(&mut self) {
        self.terms_accepted = true;
    }

    pub fn report(&self) -> Option<&RegulationReport> {
        self.report.as_ref()
    }

    /// Message to show the user for the most recent failure, if still current.
    pub fn message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub async fn submit(&mut self) -> Result<&RegulationReport> {
        if !self.terms_accepted {
            return Err(GlobalDriveError::TermsNotAccepted);
        }

        let (origin, destination) = self
            .selection
            .pair()
            .ok_or(GlobalDriveError::IncompleteSelection)?;

        if origin == destination {
            let message = "Origin and destination cannot be the same.".to_string();
            self.error = Some(message.clone());
            return Err(GlobalDriveError::ValidationError { message });
        }

        let query = RegulationQuery {
            origin: origin.to_string(),
            destination: destination.to_string(),
            category: self.category,
        };
        self.fetch(query).await
    }

    /// Applies a preset's countries and category, then submits.
    pub async fn run_preset(&mut self, preset: &Preset) -> Result<&RegulationReport> {
        self.apply_preset(preset.origin, preset.destination)?;
        self.set_category(preset.category);
        self.submit().await
    }

    async fn fetch(&mut self, query: RegulationQuery) -> Result<&RegulationReport> {
        self.error = None;
        self.selection.clear_notice();
        self.report = None;

        tracing::info!(
            origin = %query.origin,
            destination = %query.destination,
            category = %query.category,
            "Requesting driving regulations"
        );

        match self.service.fetch_regulations(&query).await {
            Ok(report) => {
                tracing::info!(sources = report.sources.len(), "Regulations received");
                Ok(&*self.report.insert(report))
            }
            Err(e) => {
                self.error = Some(e.user_friendly_message());
                Err(e)
            }
        }
    }
}
