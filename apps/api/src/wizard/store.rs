//! In-memory session registry. Nothing is persisted; a session lives until it is
//! deleted or sits idle past the configured TTL.
//!
//! Each session sits behind its own async mutex so a slow text-generation call
//! blocks only the session that issued it.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::info;
use uuid::Uuid;

use crate::wizard::WizardSession;

pub type SharedSession = Arc<Mutex<WizardSession>>;

#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, SharedSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a fresh session and returns its id.
    pub async fn create(&self) -> Uuid {
        let session = WizardSession::new();
        let id = session.id;
        self.sessions
            .write()
            .await
            .insert(id, Arc::new(Mutex::new(session)));
        id
    }

    pub async fn get(&self, id: Uuid) -> Option<SharedSession> {
        self.sessions.read().await.get(&id).cloned()
    }

    pub async fn remove(&self, id: Uuid) -> bool {
        self.sessions.write().await.remove(&id).is_some()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Drops every session idle for at least `ttl` and returns how many went.
    /// A session locked by an in-flight request is busy, not idle, and stays.
    pub async fn prune_idle(&self, ttl: Duration) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| match session.try_lock() {
            Ok(session) => session.last_active.elapsed() < ttl,
            Err(_) => true,
        });
        before - sessions.len()
    }

    /// Runs `prune_idle` every `every` until the returned task is aborted.
    pub fn spawn_expiry(&self, ttl: Duration, every: Duration) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let removed = store.prune_idle(ttl).await;
                if removed > 0 {
                    info!(
                        "Expired {removed} idle sessions ({} active)",
                        store.len().await
                    );
                }
            }
        })
    }
}
