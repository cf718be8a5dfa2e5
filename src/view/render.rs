use crate::models::reservation::{Reservation, ReservationId};

pub const HEADING: &str = "Reservas Generales";

#[derive(Clone, Debug, PartialEq)]
pub struct ListItem {
    pub key: ReservationId,
    pub text: String,
}

/// Snapshot of what the reservation list view shows.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedList {
    pub heading: &'static str,
    pub items: Vec<ListItem>,
}

impl RenderedList {
    pub fn from_reservations(reservations: &[Reservation]) -> Self {
        let items = reservations
            .iter()
            .map(|r| ListItem {
                key: r.id_reservas_gen.clone(),
                text: format!("Reserva {}", r.id_reservas_gen),
            })
            .collect();

        Self {
            heading: HEADING,
            items,
        }
    }

    pub fn empty() -> Self {
        Self::from_reservations(&[])
    }

    pub fn to_text(&self) -> String {
        let mut out = format!("{}\n", self.heading);
        for item in &self.items {
            out.push_str("  - ");
            out.push_str(&item.text);
            out.push('\n');
        }
        out
    }

    pub fn to_html(&self) -> String {
        let mut out = format!("<div><h1>{}</h1><ul>", escape_html(self.heading));
        for item in &self.items {
            out.push_str(&format!(
                "<li data-key=\"{}\">{}</li>",
                escape_html(&item.key.to_string()),
                escape_html(&item.text),
            ));
        }
        out.push_str("</ul></div>");
        out
    }
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
