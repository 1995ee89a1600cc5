//! Plain-text rendering of views for the terminal

use std::fmt::Write as _;

use bizhub_domain::{
    Client, DashboardStats, EditableResource, FormRecord, PaymentRecord, Project, TeamMember, User,
};
use chrono::NaiveDateTime;

use crate::commands::{DashboardView, IntegrationStatus};

/// Left-aligned text table
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&'static str]) -> Self {
        Self { headers: headers.to_vec(), rows: Vec::new() }
    }

    pub fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(width) = widths.get_mut(i) {
                    *width = (*width).max(cell.chars().count());
                }
            }
        }

        let mut out = String::new();
        let headers: Vec<String> = self.headers.iter().map(|h| (*h).to_string()).collect();
        push_line(&mut out, &headers, &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        push_line(&mut out, &rule, &widths);
        for row in &self.rows {
            push_line(&mut out, row, &widths);
        }
        out
    }
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

fn or_dash(value: Option<&str>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or("-").to_string()
}

fn money(amount: f64) -> String {
    format!("{amount:.2}")
}

fn date(value: Option<NaiveDateTime>) -> String {
    value.map_or_else(|| "-".to_string(), |d| d.format("%Y-%m-%d").to_string())
}

pub fn clients(items: &[Client]) -> String {
    if items.is_empty() {
        return "No clients yet.\n".to_string();
    }
    let mut table = Table::new(&["ID", "NAME", "EMAIL", "COMPANY", "PHONE"]);
    for c in items {
        table.row(vec![
            c.id.clone(),
            c.name.clone(),
            c.email.clone(),
            or_dash(c.company.as_deref()),
            or_dash(c.phone.as_deref()),
        ]);
    }
    table.render()
}

pub fn projects(items: &[Project]) -> String {
    if items.is_empty() {
        return "No projects yet.\n".to_string();
    }
    let mut table = Table::new(&["ID", "NAME", "CLIENT", "STATUS", "BUDGET", "START", "END"]);
    for p in items {
        table.row(vec![
            p.id.clone(),
            p.name.clone(),
            p.client_name.clone().unwrap_or_else(|| p.client_id.clone()),
            p.status.to_string(),
            p.budget.map_or_else(|| "-".to_string(), money),
            date(p.start_date),
            date(p.end_date),
        ]);
    }
    table.render()
}

pub fn team(items: &[TeamMember]) -> String {
    if items.is_empty() {
        return "No team members yet.\n".to_string();
    }
    let mut table = Table::new(&["ID", "NAME", "EMAIL", "ROLE", "TYPE", "RATE"]);
    for m in items {
        table.row(vec![
            m.id.clone(),
            m.name.clone(),
            m.email.clone(),
            m.role.clone(),
            m.member_type.to_string(),
            m.hourly_rate.map_or_else(|| "-".to_string(), |r| format!("{}/h", money(r))),
        ]);
    }
    table.render()
}

pub fn payments(items: &[PaymentRecord]) -> String {
    if items.is_empty() {
        return "No payments yet.\n".to_string();
    }
    let mut table = Table::new(&["ID", "TYPE", "AMOUNT", "STATUS", "WITH", "DATE"]);
    for p in items {
        table.row(vec![
            p.id.clone(),
            p.payment_type.to_string(),
            format!("{} {}", money(p.amount), p.currency.as_str().to_uppercase()),
            p.payment_status.to_string(),
            or_dash(p.counterparty()),
            date(p.created_at),
        ]);
    }
    table.render()
}

pub fn payment(record: &PaymentRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Payment {}", record.id);
    let _ = writeln!(
        out,
        "  Amount:  {} {}",
        money(record.amount),
        record.currency.as_str().to_uppercase()
    );
    let _ = writeln!(out, "  Type:    {}", record.payment_type);
    let _ = writeln!(out, "  Status:  {}", record.payment_status);
    let _ = writeln!(out, "  With:    {}", or_dash(record.counterparty()));
    let _ = writeln!(out, "  Project: {}", or_dash(record.project_name.as_deref()));
    let _ = writeln!(out, "  Note:    {}", or_dash(record.description.as_deref()));
    out
}

/// Editable fields of a record, labelled the way its form labels them.
pub fn record<R: EditableResource>(item: &R) -> String {
    let fields = item.form_fields();
    let width = R::Form::FIELDS.iter().map(|spec| spec.label.len()).max().unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(out, "{} {}", R::Form::TITLE, item.id());
    for spec in R::Form::FIELDS {
        let value = or_dash(fields.get(spec.name));
        let label = format!("{}:", spec.label);
        let _ = writeln!(out, "  {label:<pad$}  {value}", pad = width + 1);
    }
    out
}

pub fn integrations(statuses: &[IntegrationStatus]) -> String {
    let mut table = Table::new(&["TYPE", "SERVICE", "STATUS", "DESCRIPTION"]);
    for status in statuses {
        let kind = status.integration_type;
        table.row(vec![
            kind.as_str().to_string(),
            kind.display_name().to_string(),
            if status.connected { "connected" } else { "not connected" }.to_string(),
            kind.description().to_string(),
        ]);
    }
    table.render()
}

fn stats_block(out: &mut String, stats: &DashboardStats) {
    let _ = writeln!(out, "Clients:          {}", stats.clients_count);
    let _ = writeln!(
        out,
        "Projects:         {} ({} active)",
        stats.projects_count, stats.active_projects
    );
    let _ = writeln!(out, "Team members:     {}", stats.team_members_count);
    let _ = writeln!(out, "Total received:   {}", money(stats.total_received));
    let _ = writeln!(out, "Total sent:       {}", money(stats.total_sent));
    let _ = writeln!(out, "Net balance:      {}", money(stats.net_balance()));
}

pub fn dashboard(view: &DashboardView) -> String {
    let mut out = String::new();
    stats_block(&mut out, &view.stats);

    out.push_str("\nRecent payments\n");
    out.push_str(&payments(&view.stats.recent_payments));

    out.push_str("\nUpcoming meetings\n");
    if view.upcoming.is_empty() {
        out.push_str("No upcoming meetings.\n");
    } else {
        let mut table = Table::new(&["WHEN", "TITLE", "ATTENDEES"]);
        for meeting in &view.upcoming {
            table.row(vec![
                meeting
                    .start_time
                    .map_or_else(|| "-".to_string(), |t| t.format("%Y-%m-%d %H:%M").to_string()),
                meeting.title.clone(),
                meeting.attendees_count.to_string(),
            ]);
        }
        out.push_str(&table.render());
    }
    out
}

pub fn user(user: &User) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", user.display_name());
    let _ = writeln!(out, "  Email:   {}", user.email);
    let _ = writeln!(out, "  Picture: {}", or_dash(user.profile_picture.as_deref()));
    let _ = writeln!(
        out,
        "  Theme:   {}",
        user.theme.map_or_else(|| "-".to_string(), |t| t.to_string())
    );
    out
}
