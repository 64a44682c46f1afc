//! GovernanceEngine: one explicit value holding the role catalog, the
//! running analysis logs, and the layout tables.
//!
//! Mutating calls take `&mut self`; a host sharing the engine across threads
//! wraps it in a single lock so every read sees a consistent snapshot.

use std::path::Path;
use std::sync::Arc;

use dualmount_core::config::GovernanceConfig;
use dualmount_core::errors::{CatalogError, ConfigError, EngineResult, InputError};
use dualmount_core::events::{
    AnalysisCompleteEvent, BatchItemFailedEvent, ConflictDetectedEvent, EventDispatcher,
    GovernanceEventHandler, LayoutRegisteredEvent, LayoutTable, LayoutUnregisteredEvent,
    LayoutValidatedEvent,
};
use dualmount_core::Layer;

use crate::layout::{
    LayerBanding, LayoutCheck, LayoutContractStore, LayoutProtection, LayoutSummary,
    LayoutValidationResult, LayoutValidator, Registration, SafeFrameShell, ValidatedLayout,
    ZIndexContract,
};
use crate::report::{
    create_reporter_with_threshold, AnalysisOutcome, BatchReport, LayoutOutcome, Reporter,
};
use crate::roles::{
    validate_role_assignments, AnalysisRequest, CompletenessChecker, ConflictDetector,
    DetectionRule, RoleAnalysis, RoleAnalysisReporter, RoleAssigner, RoleAssignment, RoleCatalog,
    RoleConflict, RoleDefinition, RoleDetector, RoleValidationResult, ScoringEngine,
};

#[derive(Debug)]
pub struct GovernanceEngine {
    config: GovernanceConfig,
    catalog: RoleCatalog,
    detector: RoleDetector,
    scoring: ScoringEngine,
    reporter: RoleAnalysisReporter,
    banding: LayerBanding,
    layouts: LayoutContractStore,
    assignment_log: Vec<RoleAssignment>,
    conflict_log: Vec<RoleConflict>,
    analysis_log: Vec<RoleAnalysis>,
    events: EventDispatcher,
}

impl GovernanceEngine {
    /// Engine with the built-in catalog, compiled defaults, and empty logs.
    pub fn new() -> Self {
        Self::build(GovernanceConfig::default(), LayerBanding::default())
    }

    pub fn with_config(config: GovernanceConfig) -> Result<Self, ConfigError> {
        GovernanceConfig::validate(&config)?;
        let banding = LayerBanding::from_config(&config.layers)?;
        Ok(Self::build(config, banding))
    }

    /// Resolve configuration for the project at `root`, then build.
    pub fn load(root: &Path) -> EngineResult<Self> {
        let config = GovernanceConfig::load(root)?;
        Ok(Self::with_config(config)?)
    }

    fn build(config: GovernanceConfig, banding: LayerBanding) -> Self {
        let layouts = if config.layout.effective_seed_default_contracts() {
            LayoutContractStore::with_default_contracts(&banding)
        } else {
            LayoutContractStore::new()
        };
        Self {
            scoring: ScoringEngine::new(config.scoring.clone()),
            reporter: RoleAnalysisReporter::new(
                config.scoring.effective_recommendation_role_limit(),
            ),
            catalog: RoleCatalog::new(),
            detector: RoleDetector::new(),
            banding,
            layouts,
            assignment_log: Vec::new(),
            conflict_log: Vec::new(),
            analysis_log: Vec::new(),
            events: EventDispatcher::new(),
            config,
        }
    }

    pub fn config(&self) -> &GovernanceConfig {
        &self.config
    }

    pub fn catalog(&self) -> &RoleCatalog {
        &self.catalog
    }

    pub fn banding(&self) -> &LayerBanding {
        &self.banding
    }

    pub fn layouts(&self) -> &LayoutContractStore {
        &self.layouts
    }

    pub fn register_role(&mut self, definition: RoleDefinition) -> Result<(), CatalogError> {
        self.catalog.register(definition)
    }

    /// Built-in roles cannot be removed.
    pub fn remove_role(&mut self, name: &str) -> Result<RoleDefinition, CatalogError> {
        self.catalog.remove(name)
    }

    pub fn add_detection_rule(&mut self, rule: DetectionRule) {
        self.detector.add_rule(rule);
    }

    pub fn register_event_handler(&mut self, handler: Arc<dyn GovernanceEventHandler>) {
        self.events.register(handler);
    }

    // ---- Role analysis ----

    /// Analyze one component and append the results to the running logs.
    ///
    /// Input is checked in full before anything is logged, so a rejected
    /// request leaves the logs untouched.
    pub fn analyze_component(
        &mut self,
        request: &AnalysisRequest,
    ) -> Result<RoleAnalysis, InputError> {
        request.validate()?;
        let component = request.component_name.as_str();
        let environment = request.environment;

        let candidates = self.detector.detect(&request.surface);
        let assigner = RoleAssigner::new(&self.catalog);
        let mut assignments =
            assigner.assign_detected(component, environment, &candidates, &request.provenance);
        for role in &request.manual_roles {
            assignments.push(assigner.assign_manual(
                component,
                environment,
                role,
                &request.provenance,
            )?);
        }
        for parent in &request.inherited {
            assignments.push(assigner.assign_inherited(
                component,
                environment,
                parent,
                &request.provenance,
            )?);
        }

        let symmetric = self.config.conflicts.effective_symmetric();
        let conflicts = ConflictDetector::new(&self.catalog, symmetric)
            .detect(component, environment, &assignments);
        let completeness = CompletenessChecker::new(&self.catalog);
        let missing = completeness.missing_roles(&assignments);
        let unmet = completeness.unmet_dependencies(&assignments);
        let score = self.scoring.score(assignments.len(), &conflicts, &missing);

        let analysis = self.reporter.bundle(
            component,
            environment,
            assignments,
            conflicts,
            &missing,
            unmet,
            score,
        );

        self.assignment_log.extend(analysis.assignments.iter().cloned());
        self.conflict_log.extend(analysis.conflicts.iter().cloned());
        self.analysis_log.push(analysis.clone());

        for conflict in &analysis.conflicts {
            self.events.emit_conflict_detected(&ConflictDetectedEvent {
                component_name: conflict.component_name.clone(),
                environment,
                roles: conflict.roles.clone(),
                severity: conflict.severity,
            });
        }
        self.events.emit_analysis_complete(&AnalysisCompleteEvent {
            component_name: analysis.component_name.clone(),
            environment,
            score: analysis.score,
            assignment_count: analysis.assignments.len(),
            conflict_count: analysis.conflicts.len(),
            missing_role_count: analysis.missing_roles.len(),
        });

        tracing::info!(
            component = component,
            environment = %environment,
            score = analysis.score,
            assignments = analysis.assignments.len(),
            conflicts = analysis.conflicts.len(),
            missing = analysis.missing_roles.len(),
            "role analysis complete"
        );
        Ok(analysis)
    }

    /// Analyze every request. Always returns one outcome per request, in
    /// order; a rejected request becomes a `Failed` outcome.
    pub fn analyze_batch(&mut self, requests: &[AnalysisRequest]) -> Vec<AnalysisOutcome> {
        let mut outcomes = Vec::with_capacity(requests.len());
        for (index, request) in requests.iter().enumerate() {
            match self.analyze_component(request) {
                Ok(analysis) => outcomes.push(AnalysisOutcome::Completed { analysis }),
                Err(e) => {
                    self.record_batch_failure(index, &request.component_name, &e);
                    outcomes.push(AnalysisOutcome::Failed {
                        component_name: request.component_name.clone(),
                        environment: request.environment,
                        error: e.to_string(),
                    });
                }
            }
        }
        outcomes
    }

    pub fn generate_report(&self, outcomes: &[AnalysisOutcome]) -> BatchReport {
        self.reporter.aggregate(outcomes)
    }

    /// Reporter for `format` using the configured `[validation] min_score`.
    pub fn reporter(&self, format: &str) -> Option<Box<dyn Reporter>> {
        create_reporter_with_threshold(format, self.config.validation.effective_min_score())
    }

    pub fn validate_role_assignments(&self, analysis: &RoleAnalysis) -> RoleValidationResult {
        validate_role_assignments(
            analysis,
            &self.catalog,
            self.config.validation.effective_min_score(),
        )
    }

    /// Every assignment made since the last reset, in analysis order.
    pub fn assignments(&self) -> &[RoleAssignment] {
        &self.assignment_log
    }

    pub fn conflicts(&self) -> &[RoleConflict] {
        &self.conflict_log
    }

    pub fn analyses(&self) -> &[RoleAnalysis] {
        &self.analysis_log
    }

    /// Clear the running logs. Catalog and layout tables are kept.
    pub fn reset(&mut self) {
        self.assignment_log.clear();
        self.conflict_log.clear();
        self.analysis_log.clear();
        tracing::debug!("analysis logs cleared");
    }

    // ---- Layout governance ----

    pub fn register_layout(
        &mut self,
        contract: ZIndexContract,
    ) -> Result<Registration, InputError> {
        let layout_id = contract.layout_id.clone();
        let registration = self.layouts.register_contract(contract)?;
        self.emit_registered(layout_id, LayoutTable::Contracts, registration);
        Ok(registration)
    }

    pub fn register_safe_frame(
        &mut self,
        shell: SafeFrameShell,
    ) -> Result<Registration, InputError> {
        let layout_id = shell.layout_id.clone();
        let registration = self.layouts.register_safe_frame(shell)?;
        self.emit_registered(layout_id, LayoutTable::SafeFrames, registration);
        Ok(registration)
    }

    pub fn register_protection(
        &mut self,
        protection: LayoutProtection,
    ) -> Result<Registration, InputError> {
        let layout_id = protection.layout_id.clone();
        let registration = self.layouts.register_protection(protection)?;
        self.emit_registered(layout_id, LayoutTable::Protections, registration);
        Ok(registration)
    }

    /// Remove `layout_id` from every table. Returns whether anything was removed.
    pub fn unregister_layout(&mut self, layout_id: &str) -> bool {
        let tables = self.layouts.unregister(layout_id);
        if tables.is_empty() {
            return false;
        }
        tracing::info!(layout_id, tables = ?tables, "layout unregistered");
        self.events.emit_layout_unregistered(&LayoutUnregisteredEvent {
            layout_id: layout_id.to_string(),
            tables,
        });
        true
    }

    pub fn layer_for(&self, z_index: i64) -> Layer {
        self.banding.layer_for(z_index)
    }

    pub fn validate_layout(
        &self,
        layout_id: &str,
        role: &str,
        z_index: i64,
    ) -> Result<LayoutValidationResult, InputError> {
        let result = self.validator().validate(layout_id, role, z_index)?;
        self.events.emit_layout_validated(&LayoutValidatedEvent {
            layout_id: layout_id.to_string(),
            z_index,
            is_valid: result.is_valid,
            error_count: result.errors.len(),
            warning_count: result.warnings.len(),
        });
        Ok(result)
    }

    /// Validate every check. Always returns one outcome per check, in order.
    pub fn validate_layout_batch(&self, checks: &[LayoutCheck]) -> Vec<LayoutOutcome> {
        checks
            .iter()
            .enumerate()
            .map(|(index, check)| {
                match self.validate_layout(&check.layout_id, &check.role, check.z_index) {
                    Ok(result) => LayoutOutcome::Validated(ValidatedLayout {
                        layout_id: check.layout_id.clone(),
                        z_index: check.z_index,
                        result,
                    }),
                    Err(e) => {
                        self.record_batch_failure(index, &check.layout_id, &e);
                        LayoutOutcome::Failed {
                            layout_id: check.layout_id.clone(),
                            error: e.to_string(),
                        }
                    }
                }
            })
            .collect()
    }

    /// Validate each registered contract at its own declared z-index.
    pub fn validate_all_layouts(&self) -> Vec<ValidatedLayout> {
        self.validator().validate_all()
    }

    /// `None` when no safe frame is registered under `layout_id`.
    pub fn validate_safe_frame(&self, layout_id: &str) -> Option<LayoutValidationResult> {
        self.validator().validate_safe_frame(layout_id)
    }

    pub fn layout_summary(&self) -> LayoutSummary {
        self.validator().summary()
    }

    fn validator(&self) -> LayoutValidator<'_> {
        LayoutValidator::new(
            &self.layouts,
            &self.banding,
            self.config.layout.effective_warn_unregistered(),
        )
    }

    fn emit_registered(&self, layout_id: String, table: LayoutTable, registration: Registration) {
        self.events.emit_layout_registered(&LayoutRegisteredEvent {
            layout_id,
            table,
            replaced: registration.is_replaced(),
        });
    }

    fn record_batch_failure(&self, index: usize, item: &str, error: &InputError) {
        tracing::warn!(index, item, error = %error, "batch item failed");
        self.events.emit_batch_item_failed(&BatchItemFailedEvent {
            index,
            item: item.to_string(),
            error: error.to_string(),
        });
    }
}

impl Default for GovernanceEngine {
    fn default() -> Self {
        Self::new()
    }
}
