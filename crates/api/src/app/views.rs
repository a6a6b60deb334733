//! The render step: session + catalog in, page view out.
//!
//! Rendering is always an explicit call made by a handler after it has
//! finished mutating state; nothing re-renders implicitly.

use serde::Serialize;

use stockdeck_catalog::{Catalog, CatalogSummary, Product};
use stockdeck_chat::ChatTurn;
use stockdeck_query::{apply, category_options, supplier_options, Criteria};
use stockdeck_session::{Page, SessionState};

/// A rendered page, as delivered to the navigation chrome.
#[derive(Debug, Serialize)]
pub struct PageView {
    pub page: &'static str,
    #[serde(flatten)]
    pub body: PageBody,
}

#[derive(Debug, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum PageBody {
    Dashboard { summary: CatalogSummary },
    Inventory(InventoryView),
    Chat { transcript: Vec<ChatTurn> },
    UnderConstruction { message: String },
}

/// The filterable table plus the facet option lists that drive it.
#[derive(Debug, Serialize)]
pub struct InventoryView {
    pub categories: Vec<String>,
    pub suppliers: Vec<String>,
    pub criteria: Criteria,
    pub rows: Vec<Product>,
}

/// Render whatever page the session is on.
///
/// Criteria only matter on the inventory page; the other pages ignore
/// them. The three unbuilt destinations render the explicit placeholder —
/// an observable contract, not a gap.
pub fn render(catalog: &Catalog, session: &SessionState, criteria: &Criteria) -> PageView {
    let page = session.page();
    let body = match page {
        Page::Dashboard => PageBody::Dashboard {
            summary: catalog.summary(),
        },
        Page::Inventory => PageBody::Inventory(inventory_view(catalog, criteria)),
        Page::Chat => PageBody::Chat {
            transcript: session.transcript().to_vec(),
        },
        Page::Suppliers | Page::Orders | Page::Settings => PageBody::UnderConstruction {
            message: under_construction_message(page),
        },
    };

    PageView {
        page: page.as_str(),
        body,
    }
}

pub fn inventory_view(catalog: &Catalog, criteria: &Criteria) -> InventoryView {
    InventoryView {
        categories: category_options(catalog),
        suppliers: supplier_options(catalog),
        criteria: criteria.clone(),
        rows: apply(catalog, criteria),
    }
}

pub fn chat_view(session: &SessionState) -> PageView {
    PageView {
        page: Page::Chat.as_str(),
        body: PageBody::Chat {
            transcript: session.transcript().to_vec(),
        },
    }
}

pub fn under_construction_message(page: Page) -> String {
    format!("{} is under construction.", page)
}
