//! Request bodies for the entity and payment forms

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{EditableResource, FieldKind, FieldSpec, FormFields, FormRecord};
use crate::errors::{BizHubError, Result};
use crate::types::{CheckoutRequest, Client, MemberType, Project, TeamMember};
use crate::utils::timestamps::serialize_date_as_midnight;

/* -------------------------------------------------------------------------- */
/* Clients                                                                    */
/* -------------------------------------------------------------------------- */

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientForm {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl FormRecord for ClientForm {
    const TITLE: &'static str = "Client";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("name", "Name", FieldKind::Text),
        FieldSpec::required("email", "Email", FieldKind::Email),
        FieldSpec::optional("phone", "Phone", FieldKind::Phone),
        FieldSpec::optional("company", "Company", FieldKind::Text),
        FieldSpec::optional("address", "Address", FieldKind::TextArea),
    ];

    fn from_fields(fields: &FormFields) -> Result<Self> {
        Ok(Self {
            name: fields.required("name")?,
            email: fields.required("email")?,
            phone: fields.text("phone"),
            company: fields.text("company"),
            address: fields.text("address"),
        })
    }
}

impl EditableResource for Client {
    type Form = ClientForm;

    fn form_fields(&self) -> FormFields {
        FormFields::for_specs(ClientForm::FIELDS)
            .with("name", Some(&self.name))
            .with("email", Some(&self.email))
            .with("phone", self.phone.as_ref())
            .with("company", self.company.as_ref())
            .with("address", self.address.as_ref())
    }
}

/* -------------------------------------------------------------------------- */
/* Projects                                                                   */
/* -------------------------------------------------------------------------- */

/// Status is not part of the form; new projects start active server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectForm {
    pub name: String,
    pub client_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_date_as_midnight"
    )]
    pub start_date: Option<NaiveDate>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_date_as_midnight"
    )]
    pub end_date: Option<NaiveDate>,
}

impl FormRecord for ProjectForm {
    const TITLE: &'static str = "Project";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("name", "Project Name", FieldKind::Text),
        FieldSpec::optional("description", "Description", FieldKind::TextArea),
        FieldSpec::required("client_id", "Client", FieldKind::Reference("client")),
        FieldSpec::optional("budget", "Budget", FieldKind::Number),
        FieldSpec::optional("start_date", "Start Date", FieldKind::Date),
        FieldSpec::optional("end_date", "End Date", FieldKind::Date),
    ];

    fn from_fields(fields: &FormFields) -> Result<Self> {
        Ok(Self {
            name: fields.required("name")?,
            client_id: fields.required("client_id")?,
            description: fields.text("description"),
            budget: fields.decimal("budget")?,
            start_date: fields.date("start_date")?,
            end_date: fields.date("end_date")?,
        })
    }
}

impl EditableResource for Project {
    type Form = ProjectForm;

    fn form_fields(&self) -> FormFields {
        let day = |value: &Option<chrono::NaiveDateTime>| {
            value.map(|at| at.date().format("%Y-%m-%d").to_string())
        };
        FormFields::for_specs(ProjectForm::FIELDS)
            .with("name", Some(&self.name))
            .with("description", self.description.as_ref())
            .with("client_id", Some(&self.client_id))
            .with("budget", self.budget)
            .with("start_date", day(&self.start_date))
            .with("end_date", day(&self.end_date))
    }
}

/* -------------------------------------------------------------------------- */
/* Team members                                                               */
/* -------------------------------------------------------------------------- */

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMemberForm {
    pub name: String,
    pub email: String,
    pub role: String,
    pub member_type: MemberType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
}

impl FormRecord for TeamMemberForm {
    const TITLE: &'static str = "Team Member";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("name", "Name", FieldKind::Text),
        FieldSpec::required("email", "Email", FieldKind::Email),
        FieldSpec::optional("phone", "Phone", FieldKind::Phone),
        FieldSpec::required("role", "Role", FieldKind::Text),
        FieldSpec::optional(
            "member_type",
            "Member Type",
            FieldKind::Select(&["internal", "freelancer"]),
        ),
        FieldSpec::optional("hourly_rate", "Hourly Rate", FieldKind::Number),
    ];

    fn from_fields(fields: &FormFields) -> Result<Self> {
        Ok(Self {
            name: fields.required("name")?,
            email: fields.required("email")?,
            role: fields.required("role")?,
            member_type: fields.choice("member_type")?.unwrap_or_default(),
            phone: fields.text("phone"),
            hourly_rate: fields.decimal("hourly_rate")?,
        })
    }
}

impl EditableResource for TeamMember {
    type Form = TeamMemberForm;

    fn form_fields(&self) -> FormFields {
        FormFields::for_specs(TeamMemberForm::FIELDS)
            .with("name", Some(&self.name))
            .with("email", Some(&self.email))
            .with("phone", self.phone.as_ref())
            .with("role", Some(&self.role))
            .with("member_type", Some(self.member_type))
            .with("hourly_rate", self.hourly_rate)
    }
}

/* -------------------------------------------------------------------------- */
/* Payment requests                                                           */
/* -------------------------------------------------------------------------- */

impl FormRecord for CheckoutRequest {
    const TITLE: &'static str = "Request Payment";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("amount", "Amount", FieldKind::Number),
        FieldSpec::optional("currency", "Currency", FieldKind::Select(&["usd", "eur", "gbp"])),
        FieldSpec::optional("description", "Description", FieldKind::TextArea),
        FieldSpec::optional("client_id", "Client", FieldKind::Reference("client")),
        FieldSpec::optional("project_id", "Project", FieldKind::Reference("project")),
    ];

    fn from_fields(fields: &FormFields) -> Result<Self> {
        let amount = fields
            .decimal("amount")?
            .ok_or_else(|| BizHubError::InvalidInput("amount is required".into()))?;
        if amount <= 0.0 {
            return Err(BizHubError::InvalidInput("amount must be positive".into()));
        }
        Ok(Self {
            amount,
            currency: fields.choice("currency")?.unwrap_or_default(),
            description: fields.text("description"),
            client_id: fields.text("client_id"),
            project_id: fields.text("project_id"),
        })
    }
}
