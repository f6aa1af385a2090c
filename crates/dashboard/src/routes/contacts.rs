//! Contacts page and table rendering.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use contacts_dashboard_core::{ChipColor, ContactType};
use tracing::instrument;

use crate::{
    components::{DataTableConfig, contacts_table_config},
    filters,
    models::DisplayContact,
    state::AppState,
};

/// Placeholder shown for absent values.
const EMPTY_CELL: &str = "—";

/// One row of the contacts table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRow {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
    pub type_label: String,
    pub chip_color: ChipColor,
    pub trade_name: String,
    pub code: String,
    pub mobile: String,
}

impl ContactRow {
    /// CSS classes of the type chip.
    #[must_use]
    pub const fn chip_class(&self) -> &'static str {
        self.chip_color.badge_class()
    }

    /// Rendered hue of the type chip.
    #[must_use]
    pub const fn chip_hue(&self) -> &'static str {
        self.chip_color.hue()
    }
}

fn cell(value: Option<&String>) -> String {
    value.map_or_else(|| EMPTY_CELL.to_string(), Clone::clone)
}

impl From<&DisplayContact> for ContactRow {
    fn from(contact: &DisplayContact) -> Self {
        let type_label = contact
            .contact_type
            .as_ref()
            .map_or_else(|| EMPTY_CELL.to_string(), ToString::to_string);

        Self {
            id: contact.id.to_string(),
            name: cell(contact.name.as_ref()),
            email: contact.email.clone(),
            phone: cell(contact.phone.as_ref()),
            type_label,
            chip_color: ContactType::chip_color_for(contact.contact_type.as_ref()),
            trade_name: cell(contact.trade_name.as_ref()),
            code: cell(contact.code.as_ref()),
            mobile: cell(contact.mobile.as_ref()),
        }
    }
}

/// Build table rows, one per contact, in input order.
#[must_use]
pub fn contact_rows(contacts: &[DisplayContact]) -> Vec<ContactRow> {
    contacts.iter().map(ContactRow::from).collect()
}

/// Contacts table fragment.
#[derive(Template)]
#[template(path = "contacts/table.html")]
pub struct ContactsTableTemplate {
    pub table: DataTableConfig,
    pub rows: Vec<ContactRow>,
}

/// Contacts page template.
#[derive(Template, WebTemplate)]
#[template(path = "contacts/index.html")]
pub struct ContactsIndexTemplate {
    pub table: DataTableConfig,
    pub rows: Vec<ContactRow>,
}

/// Render the contacts table for the given contacts.
///
/// # Errors
///
/// Returns error if the template fails to render.
pub fn render_contacts_table(contacts: &[DisplayContact]) -> Result<String, askama::Error> {
    ContactsTableTemplate {
        table: contacts_table_config(),
        rows: contact_rows(contacts),
    }
    .render()
}

/// Contacts page handler.
///
/// Fetch failures render as an empty table; see `/api/contacts` for the
/// failure-aware variant.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let contacts = state.contacts().fetch().await;

    ContactsIndexTemplate {
        table: contacts_table_config(),
        rows: contact_rows(&contacts),
    }
}
