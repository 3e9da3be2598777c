//! Result view shown once the organization has been created.

use ironhtml::typed::Element;
use ironhtml_elements::{Button, Code, Div, A, H1, P};

use crate::controller::CreatedClient;

/// Hands control back to the host after onboarding, e.g. by refreshing the
/// surrounding page.
pub trait Navigator {
    /// Continues into the application.
    fn proceed(&self);
}

impl<F: Fn()> Navigator for F {
    fn proceed(&self) {
        self()
    }
}

/// Follow-up action offered on the result view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextStep {
    /// External documentation link.
    ReadDocs { url: String },
    /// Continue into the application through the [`Navigator`].
    Continue,
}

/// Credentials of the created client plus the next steps.
#[derive(Debug, Clone, Copy)]
pub struct ResultView<'a> {
    client: &'a CreatedClient,
    docs_url: &'a str,
}

impl<'a> ResultView<'a> {
    /// Creates a view over `client`.
    pub fn new(client: &'a CreatedClient, docs_url: &'a str) -> Self {
        Self { client, docs_url }
    }

    /// Returns the client exactly as received.
    pub fn client(&self) -> &'a CreatedClient {
        self.client
    }

    /// Returns the follow-up actions in display order.
    pub fn next_steps(&self) -> [NextStep; 2] {
        [
            NextStep::ReadDocs {
                url: self.docs_url.to_string(),
            },
            NextStep::Continue,
        ]
    }

    /// Renders the view as Bootstrap 5 HTML.
    pub fn render(&self) -> String {
        let client = self.client;
        let docs_url = self.docs_url;

        Element::<Div>::new()
            .class("card p-4 p-md-5")
            .child::<H1, _>(|h| h.class("fw-medium fs-2").text("Nice job!"))
            .child::<P, _>(|p| {
                p.class("mb-4").text(
                    "You're ready to start using our SDK. \
                     Save the client ID and secret (if you have any)",
                )
            })
            .child::<Div, _>(|d| credential(d, "Client ID", &client.id))
            .when(client.secret.is_some(), |d| {
                d.child::<Div, _>(|s| {
                    credential(s, "Client secret", client.secret.as_deref().unwrap_or(""))
                })
            })
            .when(client.cors.is_some(), |d| {
                d.child::<Div, _>(|c| credential(c, "Cors", client.cors.as_deref().unwrap_or("")))
            })
            .child::<Div, _>(|d| {
                d.class("d-flex gap-3 mt-4")
                    .child::<A, _>(|a| {
                        a.attr("href", docs_url)
                            .attr("target", "_blank")
                            .class("btn btn-secondary flex-fill")
                            .text("Read docs")
                    })
                    .child::<Button, _>(|b| {
                        b.attr("type", "button")
                            .attr("name", "continue")
                            .class("btn btn-primary flex-fill")
                            .text("Dashboard")
                    })
            })
            .render()
    }
}

fn credential(row: Element<Div>, label: &str, value: &str) -> Element<Div> {
    row.class("mb-2")
        .child::<Div, _>(|l| l.class("small text-muted").text(label))
        .child::<Code, _>(|c| c.class("user-select-all").text(value))
}
