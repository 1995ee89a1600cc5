//! Controlled form records
//!
//! A form is a flat key-value record of strings, described by a static field
//! table. The shell fills the record one field at a time (or pre-fills it
//! from an existing record when editing), gates submission on the required
//! fields, and only then converts it into the typed request body.

mod fields;
mod records;

pub use fields::{FieldKind, FieldSpec, FormFields};
pub use records::{ClientForm, ProjectForm, TeamMemberForm};

use serde::Serialize;

use crate::errors::Result;
use crate::types::Resource;

/// A typed request body that can be built from a filled form
pub trait FormRecord: Serialize + Clone + Send + Sync + 'static {
    /// Heading shown above the form.
    const TITLE: &'static str;
    const FIELDS: &'static [FieldSpec];

    /// Convert a filled key-value record into the request body.
    ///
    /// Does not check required fields; callers gate on
    /// [`FormFields::missing_required`] first.
    fn from_fields(fields: &FormFields) -> Result<Self>;
}

/// A record that is created and edited through a form
pub trait EditableResource: Resource {
    type Form: FormRecord;

    /// Key-value record pre-filled with this record's editable values.
    fn form_fields(&self) -> FormFields;
}
