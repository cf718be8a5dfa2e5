use anyhow::Context;
use tokio::sync::watch;
use tracing::debug;
use crate::models::reservation::Reservation;
use crate::view::render::RenderedList;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Unloaded,
    Loaded,
}

/// Lists the general reservations published by the reservas API.
///
/// Mounting starts exactly one fetch. A successful response replaces the
/// (empty) collection once; any failure leaves the list empty for the
/// lifetime of the view. Dropping the view does not cancel the request,
/// a late response is simply thrown away.
pub struct ReservationListView {
    reservations: watch::Receiver<Option<Vec<Reservation>>>,
}

impl ReservationListView {
    /// Must be called from within a tokio runtime.
    pub fn mount(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        let (loaded_tx, loaded_rx) = watch::channel(None);

        tokio::spawn(async move {
            match fetch_reservations(&client, &endpoint).await {
                Ok(reservations) => {
                    debug!("Loaded {} reservas from {}", reservations.len(), endpoint);
                    if loaded_tx.send(Some(reservations)).is_err() {
                        debug!("Reservation list was unmounted, discarding response from {}", endpoint);
                    }
                }
                Err(e) => {
                    debug!("Leaving reservation list empty: {:#}", e);
                }
            }
        });

        Self {
            reservations: loaded_rx,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.reservations.borrow().is_some() {
            Phase::Loaded
        } else {
            Phase::Unloaded
        }
    }

    pub fn render(&self) -> RenderedList {
        match self.reservations.borrow().as_deref() {
            Some(reservations) => RenderedList::from_reservations(reservations),
            None => RenderedList::empty(),
        }
    }

    /// Waits for the fetch to finish one way or the other. Returns
    /// `Phase::Unloaded` when it failed. Never returns if the endpoint
    /// never answers.
    pub async fn settled(&mut self) -> Phase {
        while self.reservations.borrow().is_none() {
            if self.reservations.changed().await.is_err() {
                break;
            }
        }
        self.phase()
    }
}

pub async fn fetch_reservations(
    client: &reqwest::Client,
    endpoint: &str,
) -> anyhow::Result<Vec<Reservation>> {
    client
        .get(endpoint)
        .send()
        .await
        .with_context(|| format!("Request to {} failed", endpoint))?
        .error_for_status()
        .with_context(|| format!("{} answered with an error status", endpoint))?
        .json::<Vec<Reservation>>()
        .await
        .with_context(|| format!("{} did not return a list of reservas", endpoint))
}
