//! Income source input binding
//!
//! Holds the local draft of one income source while it is being edited.
//! Every change revalidates the draft and emits a sanitized partial update
//! to the owner. The binding performs no I/O and owns no persistence.

use serde::{Deserialize, Serialize};

use crate::message::ValidationMessage;
use crate::models::{Frequency, IncomeSource, IncomeSourceId};
use crate::validation::{
    format_amount, parse_number, validate_income_amount, validate_income_name, ValidationResult,
};

/// Fields of an income source that are currently safe to hand upward
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeSourceUpdate {
    /// Trimmed name
    pub name: String,
    pub frequency: Frequency,
    /// Present only when the amount buffer parses to a number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

impl IncomeSourceUpdate {
    /// Merge the update into a record. A withheld amount leaves the
    /// record's amount untouched.
    pub fn apply_to(&self, source: &mut IncomeSource) {
        source.name = self.name.clone();
        source.frequency = self.frequency;
        if let Some(amount) = self.amount {
            source.amount = Some(amount);
        }
    }
}

type ChangeHandler = Box<dyn FnMut(&IncomeSourceUpdate)>;
type RemoveHandler = Box<dyn FnMut()>;

/// Editable draft of one income source
pub struct IncomeSourceInput {
    id: Option<IncomeSourceId>,
    name: String,
    amount: String,
    frequency: Frequency,
    show_validation: bool,
    is_only: bool,
    name_result: ValidationResult,
    amount_result: ValidationResult,
    on_change: Option<ChangeHandler>,
    on_remove: Option<RemoveHandler>,
}

impl IncomeSourceInput {
    /// Create a binding, seeded from an existing record if given.
    ///
    /// Validation state is computed immediately; nothing is emitted until
    /// the first change.
    pub fn new(initial: Option<&IncomeSource>) -> Self {
        let (id, name, amount, frequency) = match initial {
            Some(source) => (
                source.id,
                source.name.clone(),
                source.amount.map(format_amount).unwrap_or_default(),
                source.frequency,
            ),
            None => (None, String::new(), String::new(), Frequency::default()),
        };

        let mut input = Self {
            id,
            name,
            amount,
            frequency,
            show_validation: false,
            is_only: false,
            name_result: ValidationResult::valid(),
            amount_result: ValidationResult::valid(),
            on_change: None,
            on_remove: None,
        };
        input.revalidate();
        input
    }

    /// Surface error messages (emission is unaffected)
    pub fn show_validation(mut self, show: bool) -> Self {
        self.show_validation = show;
        self
    }

    /// Mark this as the only source, hiding the remove affordance
    pub fn is_only(mut self, is_only: bool) -> Self {
        self.is_only = is_only;
        self
    }

    /// Register the partial-update callback
    pub fn on_change(mut self, handler: impl FnMut(&IncomeSourceUpdate) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    /// Register the removal callback
    pub fn on_remove(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_remove = Some(Box::new(handler));
        self
    }

    pub fn set_show_validation(&mut self, show: bool) {
        self.show_validation = show;
    }

    pub fn set_is_only(&mut self, is_only: bool) {
        self.is_only = is_only;
    }

    /// Replace the name draft
    pub fn set_name(&mut self, name: impl Into<String>) -> IncomeSourceUpdate {
        self.name = name.into();
        self.changed()
    }

    /// Replace the raw amount buffer
    pub fn set_amount(&mut self, amount: impl Into<String>) -> IncomeSourceUpdate {
        self.amount = amount.into();
        self.changed()
    }

    pub fn set_frequency(&mut self, frequency: Frequency) -> IncomeSourceUpdate {
        self.frequency = frequency;
        self.changed()
    }

    /// Signal that the owner should remove this source.
    ///
    /// Whether removal is allowed is the owner's call.
    pub fn remove(&mut self) {
        if let Some(handler) = self.on_remove.as_mut() {
            handler();
        }
    }

    /// Whether the remove affordance should be offered
    pub fn can_remove(&self) -> bool {
        !self.is_only
    }

    pub fn id(&self) -> Option<IncomeSourceId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Both fields currently pass validation
    pub fn is_valid(&self) -> bool {
        self.name_result.is_valid && self.amount_result.is_valid
    }

    pub fn name_result(&self) -> ValidationResult {
        self.name_result
    }

    pub fn amount_result(&self) -> ValidationResult {
        self.amount_result
    }

    /// Name error, if any and if validation is shown
    pub fn name_error(&self) -> Option<&'static str> {
        self.visible_error(self.name_result)
    }

    /// Amount error, if any and if validation is shown
    pub fn amount_error(&self) -> Option<&'static str> {
        self.visible_error(self.amount_result)
    }

    /// The update the current draft would emit
    pub fn current_update(&self) -> IncomeSourceUpdate {
        let parsed = parse_number(&self.amount);
        IncomeSourceUpdate {
            name: self.name.trim().to_string(),
            frequency: self.frequency,
            amount: (!parsed.is_nan()).then_some(parsed),
        }
    }

    /// Message slots for the name and amount fields
    pub fn messages(&self) -> [ValidationMessage; 2] {
        let prefix = self.field_prefix();
        [
            ValidationMessage::new(format!("{}-name-error", prefix))
                .maybe_message(self.name_result.message())
                .visible(self.show_validation),
            ValidationMessage::new(format!("{}-amount-error", prefix))
                .maybe_message(self.amount_result.message())
                .visible(self.show_validation),
        ]
    }

    fn field_prefix(&self) -> String {
        match self.id {
            Some(id) => format!("income-{}", id.as_uuid()),
            None => "income-new".to_string(),
        }
    }

    fn visible_error(&self, result: ValidationResult) -> Option<&'static str> {
        if self.show_validation {
            result.message()
        } else {
            None
        }
    }

    fn revalidate(&mut self) {
        self.name_result = validate_income_name(&self.name);
        self.amount_result = validate_income_amount(parse_number(&self.amount));
    }

    fn changed(&mut self) -> IncomeSourceUpdate {
        self.revalidate();
        let update = self.current_update();
        if let Some(handler) = self.on_change.as_mut() {
            handler(&update);
        }
        update
    }
}

impl std::fmt::Debug for IncomeSourceInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IncomeSourceInput")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("amount", &self.amount)
            .field("frequency", &self.frequency)
            .field("show_validation", &self.show_validation)
            .field("is_only", &self.is_only)
            .finish_non_exhaustive()
    }
}
