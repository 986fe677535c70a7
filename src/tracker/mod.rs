//! Best-effort side channel for tracking events.
//!
//! The primary user action (opening the mail composer) never depends on
//! tracking. Events go through [`Tracker::dispatch`], which returns at once;
//! failures only show up in the operator log.

use crate::db::email_logs::EmailLogStore;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

#[derive(Clone, Debug)]
pub struct Tracker {
  store: Option<EmailLogStore>,
}

impl Tracker {
  /// `None` makes tracking console-only.
  pub fn new(store: Option<EmailLogStore>) -> Self {
    Self { store }
  }

  pub fn store(&self) -> Option<&EmailLogStore> {
    self.store.as_ref()
  }

  /// Record an event without waiting for it. The returned handle may be
  /// dropped; the insert still runs to completion.
  pub fn dispatch(&self, subject: &str, source_page: &str) -> JoinHandle<()> {
    info!(subject, source_page, "email tracking");
    let store = self.store.clone();
    let subject = subject.to_string();
    let source_page = source_page.to_string();
    tokio::spawn(async move {
      let Some(store) = store else {
        return;
      };
      match store.insert(&subject, &source_page).await {
        Ok(id) => debug!(id, "tracking event stored"),
        Err(e) => warn!(%source_page, "tracking event dropped: {e}"),
      }
    })
  }
}
