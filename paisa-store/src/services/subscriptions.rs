//! Subscription tracking.

use anyhow::Result;
use paisa_core::{Subscription, subscriptions_monthly_total};
use uuid::Uuid;

use crate::kv::{KvStore, keys, read_list, write_list};

pub struct SubscriptionService<'a> {
    store: &'a dyn KvStore,
}

impl<'a> SubscriptionService<'a> {
    pub fn new(store: &'a dyn KvStore) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<Subscription> {
        read_list(self.store, keys::SUBSCRIPTIONS)
    }

    pub fn add(&self, name: &str, amount: f64, billing_day: u32) -> Result<Subscription> {
        let sub = Subscription {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            amount,
            billing_day,
            active: true,
        };
        let mut all = self.list();
        all.push(sub.clone());
        write_list(self.store, keys::SUBSCRIPTIONS, &all)?;
        Ok(sub)
    }

    pub fn set_active(&self, id: &str, active: bool) -> Result<bool> {
        let mut all = self.list();
        let Some(sub) = all.iter_mut().find(|s| s.id == id) else {
            return Ok(false);
        };
        sub.active = active;
        write_list(self.store, keys::SUBSCRIPTIONS, &all)?;
        Ok(true)
    }

    pub fn delete(&self, id: &str) -> Result<bool> {
        let mut all = self.list();
        let before = all.len();
        all.retain(|s| s.id != id);
        if all.len() == before {
            return Ok(false);
        }
        write_list(self.store, keys::SUBSCRIPTIONS, &all)?;
        Ok(true)
    }

    pub fn monthly_total(&self) -> f64 {
        subscriptions_monthly_total(&self.list())
    }
}
