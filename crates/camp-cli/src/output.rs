//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use camp_domain::{Camp, CampInstructor, Curriculum, FieldErrors, Instructor, Location, RecordId};
use colored::*;
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// A camp paired with its display name (the curriculum's name).
#[derive(Debug, Clone, Serialize)]
pub struct NamedCamp {
    /// Camp record
    #[serde(flatten)]
    pub camp: Camp,

    /// Curriculum name
    pub name: String,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format curricula.
    pub fn format_curriculums(&self, curriculums: &[Curriculum]) -> Result<String> {
        self.render(
            curriculums,
            "No curricula found.",
            &["ID", "Name", "Ratings", "Active", "Description"],
            |c| {
                vec![
                    id_cell(c.id),
                    c.name.clone(),
                    format!("{}-{}", opt_cell(c.min_rating), opt_cell(c.max_rating)),
                    yes_no(c.active),
                    c.description.clone().unwrap_or_default(),
                ]
            },
            |c| c.id,
        )
    }

    /// Format locations.
    pub fn format_locations(&self, locations: &[Location]) -> Result<String> {
        self.render(
            locations,
            "No locations found.",
            &["ID", "Name", "Capacity", "Active"],
            |l| {
                vec![
                    id_cell(l.id),
                    l.name.clone(),
                    l.max_capacity.to_string(),
                    yes_no(l.active),
                ]
            },
            |l| l.id,
        )
    }

    /// Format camps.
    pub fn format_camps(&self, camps: &[NamedCamp]) -> Result<String> {
        self.render(
            camps,
            "No camps found.",
            &["ID", "Name", "Start", "End", "Slot", "Cost", "Max", "Active"],
            |c| {
                let camp = &c.camp;
                vec![
                    id_cell(camp.id),
                    c.name.clone(),
                    opt_cell(camp.start_date),
                    opt_cell(camp.end_date),
                    camp.time_slot.clone().unwrap_or_default(),
                    format!("{:.2}", camp.cost),
                    opt_cell(camp.max_students),
                    yes_no(camp.active),
                ]
            },
            |c| c.camp.id,
        )
    }

    /// Format instructors.
    pub fn format_instructors(&self, instructors: &[Instructor]) -> Result<String> {
        self.render(
            instructors,
            "No instructors found.",
            &["ID", "Name", "Email", "Phone", "Active", "Bio"],
            |i| {
                vec![
                    id_cell(i.id),
                    i.name(),
                    i.email.clone(),
                    i.phone.as_deref().map(format_phone).unwrap_or_default(),
                    yes_no(i.active),
                    if i.bio.is_some() { "yes" } else { "-" }.to_string(),
                ]
            },
            |i| i.id,
        )
    }

    /// Format assignment rows.
    pub fn format_assignments(&self, assignments: &[CampInstructor]) -> Result<String> {
        self.render(
            assignments,
            "No assignments found.",
            &["ID", "Camp", "Instructor"],
            |a| {
                vec![
                    id_cell(a.id),
                    a.camp_id.to_string(),
                    a.instructor_id.to_string(),
                ]
            },
            |a| a.id,
        )
    }

    /// Format rejected fields, one message per line.
    pub fn field_errors(&self, errors: &FieldErrors) -> String {
        errors
            .full_messages()
            .iter()
            .map(|msg| self.colorize(&format!("  - {}", msg), "red"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render<T: Serialize>(
        &self,
        items: &[T],
        empty: &str,
        header: &[&str],
        row: impl Fn(&T) -> Vec<String>,
        id: impl Fn(&T) -> Option<RecordId>,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(items)?),
            OutputFormat::Quiet => Ok(items
                .iter()
                .map(|item| id_cell(id(item)))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if items.is_empty() {
                    return Ok(self.colorize(empty, "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(header.iter().copied());
                for item in items {
                    builder.push_record(row(item));
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));

                Ok(table.to_string())
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Render stored phone digits as `412-555-1234`.
pub fn format_phone(digits: &str) -> String {
    if digits.len() == 10 && digits.chars().all(|c| c.is_ascii_digit()) {
        format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..])
    } else {
        digits.to_string()
    }
}

fn id_cell(id: Option<RecordId>) -> String {
    opt_cell(id)
}

fn opt_cell<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn yes_no(flag: bool) -> String {
    if flag { "yes" } else { "no" }.to_string()
}
