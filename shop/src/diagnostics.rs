//! Diagnostic wizard: scooter/symptom catalogs and the four-step flow.
//!
//! DESIGN
//! ======
//! The flow is strictly linear:
//!
//! ```text
//! SelectModel -> DescribeSymptoms -> Analyzing -> Results
//!      ^               |                              |
//!      +---- back -----+                              |
//!      +------------------- reset (from anywhere) ----+
//! ```
//!
//! The analysis step is simulated: the page waits [`ANALYSIS_DELAY_MS`] and
//! then completes the run, which always yields [`fixed_result`]. Each run is
//! identified by an [`AnalysisTicket`]; `reset` retires outstanding tickets so
//! a timer that fires late cannot resurrect a cleared session.

use serde::Serialize;

/// Simulated analysis time before results appear.
pub const ANALYSIS_DELAY_MS: u64 = 3_000;

// =============================================================================
// CATALOGS
// =============================================================================

/// A scooter model offered on the first wizard step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ScooterModel {
    pub name: &'static str,
    pub brand: &'static str,
    pub popular: bool,
}

pub const SCOOTER_MODELS: [ScooterModel; 6] = [
    ScooterModel { name: "Xiaomi Mi Pro 2", brand: "Xiaomi", popular: true },
    ScooterModel { name: "Segway Ninebot ES4", brand: "Segway", popular: true },
    ScooterModel { name: "Razor E300", brand: "Razor", popular: false },
    ScooterModel { name: "Gotrax GXL V2", brand: "Gotrax", popular: true },
    ScooterModel { name: "Hiboy S2", brand: "Hiboy", popular: false },
    ScooterModel { name: "Swagtron Swagger 5", brand: "Swagtron", popular: false },
];

/// Grouping for the symptom checklist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SymptomCategory {
    Electrical,
    Battery,
    Performance,
    Mechanical,
}

impl SymptomCategory {
    /// Display order on the symptoms step.
    pub const ALL: [Self; 4] = [Self::Electrical, Self::Battery, Self::Performance, Self::Mechanical];

    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Self::Electrical => "Electrical Issues",
            Self::Battery => "Battery Issues",
            Self::Performance => "Performance Issues",
            Self::Mechanical => "Mechanical Issues",
        }
    }
}

/// An observable fault the technician can tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Symptom {
    pub id: &'static str,
    pub label: &'static str,
    pub category: SymptomCategory,
}

pub const SYMPTOMS: [Symptom; 10] = [
    Symptom { id: "no-power", label: "No power/won't turn on", category: SymptomCategory::Electrical },
    Symptom { id: "battery-drain", label: "Battery drains quickly", category: SymptomCategory::Battery },
    Symptom { id: "slow-charging", label: "Slow or no charging", category: SymptomCategory::Battery },
    Symptom { id: "reduced-speed", label: "Reduced top speed", category: SymptomCategory::Performance },
    Symptom { id: "brake-issues", label: "Brake problems", category: SymptomCategory::Mechanical },
    Symptom { id: "tire-wear", label: "Tire wear/damage", category: SymptomCategory::Mechanical },
    Symptom { id: "strange-noise", label: "Strange noises", category: SymptomCategory::Mechanical },
    Symptom { id: "display-error", label: "Display errors", category: SymptomCategory::Electrical },
    Symptom { id: "throttle-unresponsive", label: "Throttle unresponsive", category: SymptomCategory::Electrical },
    Symptom { id: "folding-mechanism", label: "Folding mechanism stuck", category: SymptomCategory::Mechanical },
];

/// Symptoms in `category`, in catalog order.
pub fn symptoms_in(category: SymptomCategory) -> impl Iterator<Item = &'static Symptom> {
    SYMPTOMS.iter().filter(move |symptom| symptom.category == category)
}

#[must_use]
pub fn find_symptom(id: &str) -> Option<&'static Symptom> {
    SYMPTOMS.iter().find(|symptom| symptom.id == id)
}

// =============================================================================
// RESULT
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Availability {
    InStock,
    Backordered,
}

impl Availability {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InStock => "in-stock",
            Self::Backordered => "backordered",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RequiredPart {
    pub name: &'static str,
    pub cost: &'static str,
    pub availability: Availability,
}

/// Output of a completed analysis run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DiagnosticResult {
    pub primary_issue: &'static str,
    pub confidence: u8,
    pub estimated_time: &'static str,
    pub estimated_cost: &'static str,
    pub severity: Severity,
    pub parts: Vec<RequiredPart>,
    pub steps: Vec<&'static str>,
}

/// The canned diagnosis every run produces, whatever the input.
#[must_use]
pub fn fixed_result() -> DiagnosticResult {
    DiagnosticResult {
        primary_issue: "Battery Management System Failure",
        confidence: 92,
        estimated_time: "2-3 hours",
        estimated_cost: "$180-250",
        severity: Severity::Medium,
        parts: vec![
            RequiredPart { name: "BMS Board", cost: "$45", availability: Availability::InStock },
            RequiredPart { name: "Battery Connector", cost: "$12", availability: Availability::InStock },
        ],
        steps: vec![
            "Disconnect battery and inspect BMS board",
            "Test voltage output from each cell",
            "Replace faulty BMS board",
            "Reconnect and test charging cycle",
            "Perform full system test",
        ],
    }
}

// =============================================================================
// WIZARD
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    SelectModel,
    DescribeSymptoms,
    Analyzing,
    Results,
}

impl WizardStep {
    pub const ALL: [Self; 4] = [Self::SelectModel, Self::DescribeSymptoms, Self::Analyzing, Self::Results];

    /// Zero-based position in the progress strip.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::SelectModel => 0,
            Self::DescribeSymptoms => 1,
            Self::Analyzing => 2,
            Self::Results => 3,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::SelectModel => "Select Scooter Model",
            Self::DescribeSymptoms => "Describe Symptoms",
            Self::Analyzing => "AI Analysis",
            Self::Results => "Diagnostic Results",
        }
    }

    /// Line under the progress strip, e.g. `Step 2: Describe Symptoms`.
    #[must_use]
    pub fn caption(self) -> String {
        format!("Step {}: {}", self.index() + 1, self.title())
    }
}

/// How a step is drawn relative to the current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepMarker {
    Complete,
    Current,
    Upcoming,
}

/// Handle for one analysis run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnalysisTicket {
    generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("cannot {action} while on step '{}'", .from.title())]
    InvalidTransition { from: WizardStep, action: &'static str },
    #[error("select at least one symptom before running the analysis")]
    NoSymptomsSelected,
    #[error("unknown symptom: {0}")]
    UnknownSymptom(String),
}

/// Page-local diagnostic session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiagnosticWizard {
    step: WizardStep,
    model: Option<String>,
    symptoms: Vec<String>,
    result: Option<DiagnosticResult>,
    generation: u64,
}

impl DiagnosticWizard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn step(&self) -> WizardStep {
        self.step
    }

    #[must_use]
    pub fn selected_model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    /// Selected symptom ids, in the order they were ticked.
    #[must_use]
    pub fn selected_symptoms(&self) -> &[String] {
        &self.symptoms
    }

    #[must_use]
    pub fn is_symptom_selected(&self, id: &str) -> bool {
        self.symptoms.iter().any(|selected| selected == id)
    }

    #[must_use]
    pub fn result(&self) -> Option<&DiagnosticResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn marker(&self, step: WizardStep) -> StepMarker {
        match step.index().cmp(&self.step.index()) {
            std::cmp::Ordering::Less => StepMarker::Complete,
            std::cmp::Ordering::Equal => StepMarker::Current,
            std::cmp::Ordering::Greater => StepMarker::Upcoming,
        }
    }

    /// Remember which model is being diagnosed.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::InvalidTransition`] outside the model step.
    pub fn select_model(&mut self, name: &str) -> Result<(), WizardError> {
        self.require(WizardStep::SelectModel, "select a model")?;
        self.model = Some(name.to_owned());
        Ok(())
    }

    /// Move from model selection to the symptom checklist.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::InvalidTransition`] outside the model step.
    pub fn continue_to_symptoms(&mut self) -> Result<(), WizardError> {
        self.require(WizardStep::SelectModel, "continue")?;
        self.step = WizardStep::DescribeSymptoms;
        Ok(())
    }

    /// Return to model selection, keeping every selection made so far.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::InvalidTransition`] outside the symptom step.
    pub fn back(&mut self) -> Result<(), WizardError> {
        self.require(WizardStep::DescribeSymptoms, "go back")?;
        self.step = WizardStep::SelectModel;
        Ok(())
    }

    /// Tick or untick a catalog symptom. Returns whether it is now selected.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::InvalidTransition`] outside the symptom step and
    /// [`WizardError::UnknownSymptom`] for ids missing from [`SYMPTOMS`].
    pub fn toggle_symptom(&mut self, id: &str) -> Result<bool, WizardError> {
        self.require(WizardStep::DescribeSymptoms, "change symptoms")?;
        if find_symptom(id).is_none() {
            return Err(WizardError::UnknownSymptom(id.to_owned()));
        }
        if let Some(pos) = self.symptoms.iter().position(|selected| selected == id) {
            self.symptoms.remove(pos);
            Ok(false)
        } else {
            self.symptoms.push(id.to_owned());
            Ok(true)
        }
    }

    #[must_use]
    pub fn can_run_analysis(&self) -> bool {
        self.step == WizardStep::DescribeSymptoms && !self.symptoms.is_empty()
    }

    /// Enter the analysis step and hand out the ticket for this run.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::InvalidTransition`] outside the symptom step and
    /// [`WizardError::NoSymptomsSelected`] when nothing is ticked.
    pub fn start_analysis(&mut self) -> Result<AnalysisTicket, WizardError> {
        self.require(WizardStep::DescribeSymptoms, "run the analysis")?;
        if self.symptoms.is_empty() {
            return Err(WizardError::NoSymptomsSelected);
        }
        self.generation += 1;
        self.step = WizardStep::Analyzing;
        Ok(AnalysisTicket { generation: self.generation })
    }

    /// Finish the run identified by `ticket` with the fixed result.
    ///
    /// Returns `Ok(false)` without changing anything when the ticket belongs to
    /// a run that has since been reset.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::InvalidTransition`] when the ticket is current
    /// but the wizard is not analyzing.
    pub fn complete_analysis(&mut self, ticket: AnalysisTicket) -> Result<bool, WizardError> {
        if ticket.generation != self.generation {
            return Ok(false);
        }
        self.require(WizardStep::Analyzing, "complete the analysis")?;
        self.result = Some(fixed_result());
        self.step = WizardStep::Results;
        Ok(true)
    }

    /// Back to the first step with every selection cleared.
    pub fn reset(&mut self) {
        self.step = WizardStep::SelectModel;
        self.model = None;
        self.symptoms.clear();
        self.result = None;
        self.generation += 1;
    }

    fn require(&self, expected: WizardStep, action: &'static str) -> Result<(), WizardError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(WizardError::InvalidTransition { from: self.step, action })
        }
    }
}

#[cfg(test)]
#[path = "diagnostics_test.rs"]
mod tests;
