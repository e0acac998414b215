//! Line commands and plain-text rendering for the console host.

use std::fmt::Write as _;

use recipe_core::{
    FormError, Section,
    form::RecipeForm,
    models::catalog::{FieldKind, descriptor},
};
use thiserror::Error;

use crate::{
    home::{Home, Page},
    navigation::{MenuItem, UnknownMenuItem},
};

pub const HELP: &str = "\
commands:
  login <user> <password>
  set <field> [value]          e.g. set lotNo LOT-1, set percentage1 25.5
  submit | cancel | wait
  section <all|basic|colors>
  menu <item>                  Lab Recipe, Inventory, Reports, Settings, Users, Help
  toggle | show | logout | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login { username: String, password: String },
    /// An absent value clears the field.
    Set { field: String, value: String },
    Submit,
    Cancel,
    Section(Section),
    Menu(MenuItem),
    Toggle,
    Show,
    Wait,
    Logout,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error(transparent)]
    Section(#[from] FormError),

    #[error(transparent)]
    Menu(#[from] UnknownMenuItem),
}

impl Command {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        let command = match verb.to_ascii_lowercase().as_str() {
            "login" => {
                let mut parts = rest.split_whitespace();
                match (parts.next(), parts.next()) {
                    (Some(user), Some(pass)) => Self::Login {
                        username: user.to_string(),
                        password: pass.to_string(),
                    },
                    _ => return Err(CommandError::Usage("login <user> <password>")),
                }
            }
            "set" => {
                if rest.is_empty() {
                    return Err(CommandError::Usage("set <field> [value]"));
                }
                let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                Self::Set {
                    field: field.to_string(),
                    value: value.trim_start().to_string(),
                }
            }
            "section" => Self::Section(rest.parse()?),
            "menu" => Self::Menu(rest.parse()?),
            "submit" => Self::Submit,
            "cancel" => Self::Cancel,
            "toggle" => Self::Toggle,
            "show" => Self::Show,
            "wait" => Self::Wait,
            "logout" => Self::Logout,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

/// The recipe form as text: tabs, progress, visible inputs with their
/// errors, and a note for errors on hidden sections.
pub fn render_form(form: &RecipeForm) -> String {
    let mut out = String::new();

    let tabs: Vec<String> = Section::ALL
        .into_iter()
        .map(|section| {
            if section == form.section() {
                format!("[{}]", section.title())
            } else {
                section.title().to_string()
            }
        })
        .collect();
    let _ = writeln!(out, "Lab Recipe  {}", tabs.join("  "));
    let _ = writeln!(out, "Progress: {}%", form.progress());

    for field in form.visible_fields() {
        let desc = descriptor(field);
        let value = form.value(field);
        let shown = if !value.is_empty() {
            value.to_string()
        } else {
            match desc.kind {
                FieldKind::Select { prompt, options } => format!("<{prompt}: {}>", options.join(", ")),
                _ => desc.placeholder.map(|p| format!("<{p}>")).unwrap_or_default(),
            }
        };
        let _ = writeln!(out, "  {:<16} {:<14} {shown}", desc.label, field.name());
        if let Some(violation) = form.errors().get(field) {
            let _ = writeln!(out, "    ! {}", violation.message);
        }
    }

    let hidden = form.hidden_errors();
    if !hidden.is_empty() {
        let labels: Vec<&str> = hidden.iter().map(|field| field.label()).collect();
        let _ = writeln!(out, "  {} invalid field(s) in other sections: {}", hidden.len(), labels.join(", "));
    }

    if form.is_submitting() {
        let _ = writeln!(out, "Saving...");
    }
    out
}

/// Sidebar state and the active page.
pub fn render_home(home: &Home) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Signed in as {}", home.user().username);

    if home.sidebar().is_open() {
        let menu: Vec<String> = MenuItem::ALL
            .into_iter()
            .map(|item| {
                if item == home.sidebar().active() {
                    format!("> {item}")
                } else {
                    format!("  {item}")
                }
            })
            .collect();
        let _ = writeln!(out, "{}", menu.join("\n"));
    } else {
        let _ = writeln!(out, "(menu hidden)");
    }
    let _ = writeln!(out);

    match home.page() {
        Page::Recipe(session) => out.push_str(&render_form(session.form())),
        Page::Placeholder(item) => {
            let _ = writeln!(out, "{}", item.placeholder());
        }
    }
    out
}
