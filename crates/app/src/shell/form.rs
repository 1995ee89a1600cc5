use std::marker::PhantomData;

use bizhub_domain::{BizHubError, FieldKind, FieldSpec, FormFields, FormRecord, Result};

/// Controlled form backed by a flat key-value record
///
/// Required fields gate submission here and nowhere else: a form with an
/// empty required field never produces a request body.
#[derive(Debug, Clone)]
pub struct FormState<F: FormRecord> {
    fields: FormFields,
    _form: PhantomData<fn() -> F>,
}

impl<F: FormRecord> Default for FormState<F> {
    fn default() -> Self {
        Self { fields: FormFields::for_specs(F::FIELDS), _form: PhantomData }
    }
}

impl<F: FormRecord> FormState<F> {
    /// Empty form for an add view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Form for an edit view, pre-filled from an existing record.
    pub fn prefilled(existing: &FormFields) -> Self {
        let mut form = Self::new();
        for (name, value) in existing.iter() {
            if Self::spec(name).is_some() {
                form.fields.set(name, value);
            }
        }
        form
    }

    /// Set one field. Unknown names and out-of-range select values are rejected.
    pub fn set(&mut self, name: &str, value: &str) -> Result<()> {
        let spec = Self::spec(name).ok_or_else(|| {
            BizHubError::InvalidInput(format!("{} has no field named '{}'", F::TITLE, name))
        })?;

        if let FieldKind::Select(options) = spec.kind {
            let value = value.trim();
            if !value.is_empty() && !options.iter().any(|o| o.eq_ignore_ascii_case(value)) {
                return Err(BizHubError::InvalidInput(format!(
                    "{} must be one of: {}",
                    spec.label,
                    options.join(", ")
                )));
            }
        }

        self.fields.set(name, value);
        Ok(())
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn specs(&self) -> &'static [FieldSpec] {
        F::FIELDS
    }

    pub fn missing_required(&self) -> Vec<&'static str> {
        self.fields.missing_required(F::FIELDS)
    }

    pub fn can_submit(&self) -> bool {
        self.missing_required().is_empty()
    }

    /// Gate on required fields, then build the typed request.
    pub fn submit(&self) -> Result<F> {
        let missing = self.missing_required();
        if !missing.is_empty() {
            return Err(BizHubError::InvalidInput(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }
        F::from_fields(&self.fields)
    }

    fn spec(name: &str) -> Option<&'static FieldSpec> {
        F::FIELDS.iter().find(|spec| spec.name == name)
    }
}
