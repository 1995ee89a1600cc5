use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::errors::{BizHubError, Result};

/// Input widget for a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextArea,
    Email,
    Phone,
    /// Decimal input; the value must parse as a number.
    Number,
    /// Calendar date input, `YYYY-MM-DD`.
    Date,
    /// Fixed set of wire values.
    Select(&'static [&'static str]),
    /// Identifier of another record, chosen from a loaded collection.
    Reference(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { name, label, kind, required: true }
    }

    pub const fn optional(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { name, label, kind, required: false }
    }
}

/// Flat string record backing a controlled form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    values: BTreeMap<String, String>,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the field table; select fields begin at their first option.
    pub fn for_specs(specs: &[FieldSpec]) -> Self {
        let mut fields = Self::new();
        for spec in specs {
            let initial = match spec.kind {
                FieldKind::Select(options) => options.first().copied().unwrap_or_default(),
                _ => "",
            };
            fields.set(spec.name, initial);
        }
        fields
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_string(), value.into());
    }

    /// Builder form of [`FormFields::set`], skipping `None`.
    pub fn with(mut self, name: &str, value: Option<impl ToString>) -> Self {
        if let Some(value) = value {
            self.set(name, value.to_string());
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Names of required fields that are blank.
    pub fn missing_required(&self, specs: &[FieldSpec]) -> Vec<&'static str> {
        specs
            .iter()
            .filter(|spec| spec.required && self.text(spec.name).is_none())
            .map(|spec| spec.name)
            .collect()
    }

    /// Trimmed value, `None` when blank.
    pub fn text(&self, name: &str) -> Option<String> {
        self.get(name).map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
    }

    pub fn required(&self, name: &str) -> Result<String> {
        self.text(name).ok_or_else(|| BizHubError::InvalidInput(format!("{name} is required")))
    }

    pub fn decimal(&self, name: &str) -> Result<Option<f64>> {
        self.parsed(name, |raw| raw.parse::<f64>().ok().filter(|v| v.is_finite()))
    }

    pub fn date(&self, name: &str) -> Result<Option<NaiveDate>> {
        self.parsed(name, |raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
    }

    pub fn choice<T>(&self, name: &str) -> Result<Option<T>>
    where
        T: FromStr<Err = String>,
    {
        match self.text(name) {
            Some(raw) => raw.parse().map(Some).map_err(BizHubError::InvalidInput),
            None => Ok(None),
        }
    }

    fn parsed<T>(&self, name: &str, parse: impl FnOnce(&str) -> Option<T>) -> Result<Option<T>> {
        match self.text(name) {
            Some(raw) => parse(&raw)
                .map(Some)
                .ok_or_else(|| BizHubError::InvalidInput(format!("{name}: invalid value '{raw}'"))),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPECS: &[FieldSpec] = &[
        FieldSpec::required("name", "Name", FieldKind::Text),
        FieldSpec::optional("budget", "Budget", FieldKind::Number),
        FieldSpec::optional("kind", "Kind", FieldKind::Select(&["internal", "freelancer"])),
    ];

    #[test]
    fn select_fields_start_at_first_option() {
        let fields = FormFields::for_specs(SPECS);
        assert_eq!(fields.get("kind"), Some("internal"));
        assert_eq!(fields.get("name"), Some(""));
    }

    #[test]
    fn whitespace_does_not_satisfy_required() {
        let mut fields = FormFields::for_specs(SPECS);
        fields.set("name", "   ");
        assert_eq!(fields.missing_required(SPECS), vec!["name"]);

        fields.set("name", "Acme");
        assert!(fields.missing_required(SPECS).is_empty());
    }

    #[test]
    fn malformed_number_is_rejected() {
        let mut fields = FormFields::new();
        fields.set("budget", "12,5");
        assert!(matches!(fields.decimal("budget"), Err(BizHubError::InvalidInput(_))));

        fields.set("budget", "12.5");
        assert_eq!(fields.decimal("budget").unwrap(), Some(12.5));
    }

    #[test]
    fn blank_optional_values_are_absent() {
        let fields = FormFields::new().with("date", Some(""));
        assert_eq!(fields.date("date").unwrap(), None);
        assert_eq!(fields.decimal("missing").unwrap(), None);
    }
}
