//! Call metrics for adapters.
//!
//! [`InstrumentedAdapter`] wraps any [`Adapter`] and reports every call to a
//! [`MetricsSink`] and to `tracing`.

use std::{
    future::Future,
    sync::Arc,
    time::{Duration, Instant},
};

use async_trait::async_trait;
use dashmap::DashMap;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::{
    adapter::Adapter,
    data::{
        Contact, ContactListTypes, Group, PhoneNumbers, PhoneNumbersPatch, Profile, ProfilePatch,
        Settings, SettingsPatch, User,
    },
    result::AdapterResult,
    token::Token,
};

/// Counter incremented once per adapter call.
pub const CALLS_TOTAL: &str = "adapter_calls_total";
/// Duration of adapter calls.
pub const CALL_DURATION_MS: &str = "adapter_call_duration_ms";

pub type Labels<'a> = &'a [(&'a str, &'a str)];

pub trait MetricsSink: Send + Sync + 'static {
    fn incr_counter(&self, name: &str, value: u64, labels: Labels<'_>);
    fn observe_duration_ms(&self, name: &str, duration_ms: u64, labels: Labels<'_>);
}

#[derive(Default)]
pub struct NoopMetrics;

impl MetricsSink for NoopMetrics {
    fn incr_counter(&self, _name: &str, _value: u64, _labels: Labels<'_>) {}

    fn observe_duration_ms(&self, _name: &str, _duration_ms: u64, _labels: Labels<'_>) {}
}

#[derive(Default)]
pub struct InMemoryMetrics {
    counters: DashMap<String, u64>,
    /// `(sum_ms, count)`, updated together under one entry lock.
    durations: DashMap<String, (u64, u64)>,
}

impl InMemoryMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of one counter, `0` if it was never incremented.
    pub fn counter(&self, name: &str, labels: Labels<'_>) -> u64 {
        let key = format_metric_key(name, labels);
        self.counters.get(&key).map_or(0, |v| *v.value())
    }

    pub fn snapshot_counters(&self) -> Vec<(String, u64)> {
        let mut items: Vec<_> = self
            .counters
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect();
        items.sort_by(|a, b| a.0.cmp(&b.0));
        items
    }

    /// `(key, sum_ms, count)` per duration series.
    pub fn snapshot_durations(&self) -> Vec<(String, u64, u64)> {
        let mut items: Vec<_> = self
            .durations
            .iter()
            .map(|entry| {
                let (sum, count) = *entry.value();
                (entry.key().clone(), sum, count)
            })
            .collect();
        items.sort_by(|a, b| a.0.cmp(&b.0));
        items
    }
}

impl MetricsSink for InMemoryMetrics {
    fn incr_counter(&self, name: &str, value: u64, labels: Labels<'_>) {
        let key = format_metric_key(name, labels);
        self.counters
            .entry(key)
            .and_modify(|v| *v = v.saturating_add(value))
            .or_insert(value);
    }

    fn observe_duration_ms(&self, name: &str, duration_ms: u64, labels: Labels<'_>) {
        let key = format_metric_key(name, labels);
        let mut series = self.durations.entry(key).or_insert((0, 0));
        let (sum, count) = series.value_mut();
        *sum = sum.saturating_add(duration_ms);
        *count = count.saturating_add(1);
    }
}

pub fn spawn_metrics_log_reporter(
    metrics: Arc<InMemoryMetrics>,
    interval: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;

            let counters = metrics.snapshot_counters();
            let durations = metrics.snapshot_durations();

            if !counters.is_empty() {
                info!("metrics.counters: {:?}", counters);
            }
            if !durations.is_empty() {
                info!("metrics.durations(sum_ms,count): {:?}", durations);
            }
        }
    })
}

pub fn format_metric_key(name: &str, labels: Labels<'_>) -> String {
    if labels.is_empty() {
        return name.to_string();
    }

    let mut labels_vec: Vec<_> = labels.iter().map(|(k, v)| (*k, *v)).collect();
    labels_vec.sort_by(|a, b| a.0.cmp(b.0));

    let mut out = String::with_capacity(name.len() + labels_vec.len() * 12);
    out.push_str(name);
    out.push('{');

    for (idx, (k, v)) in labels_vec.iter().enumerate() {
        if idx > 0 {
            out.push(',');
        }
        out.push_str(k);
        out.push('=');
        out.push_str(v);
    }

    out.push('}');
    out
}

pub fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

// ============================================================================
// InstrumentedAdapter
// ============================================================================

/// Adapter decorator that records one counter and one duration per call.
///
/// Counters are labelled `adapter`, `op` and `outcome` (`ok` or `error`);
/// durations are labelled `adapter` and `op`.
pub struct InstrumentedAdapter<A, M = NoopMetrics> {
    inner: A,
    metrics: Arc<M>,
}

impl<A: Adapter, M: MetricsSink> InstrumentedAdapter<A, M> {
    pub fn new(inner: A, metrics: Arc<M>) -> Self {
        Self { inner, metrics }
    }

    pub fn metrics(&self) -> &Arc<M> {
        &self.metrics
    }

    pub fn into_inner(self) -> A {
        self.inner
    }

    async fn observe<T, F>(&self, op: &'static str, call: F) -> AdapterResult<T>
    where
        T: Send,
        F: Future<Output = AdapterResult<T>> + Send,
    {
        let start = Instant::now();
        let result = call.await;
        let duration_ms = elapsed_ms(start);

        let adapter = self.inner.name();
        let outcome = if result.is_ok() { "ok" } else { "error" };

        self.metrics.incr_counter(
            CALLS_TOTAL,
            1,
            &[("adapter", adapter), ("op", op), ("outcome", outcome)],
        );
        self.metrics.observe_duration_ms(
            CALL_DURATION_MS,
            duration_ms,
            &[("adapter", adapter), ("op", op)],
        );

        debug!(adapter, op, outcome, duration_ms, "Adapter call finished");
        result
    }
}

#[async_trait]
impl<A: Adapter, M: MetricsSink> Adapter for InstrumentedAdapter<A, M> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    async fn add_contact_to_group(
        &self,
        user: &User,
        contact_id: &str,
        group_id: &str,
    ) -> AdapterResult<Contact> {
        self.observe(
            "addContactToGroup",
            self.inner.add_contact_to_group(user, contact_id, group_id),
        )
        .await
    }

    async fn add_contact_to_lists(
        &self,
        user: &User,
        contact_id: &str,
        lists: ContactListTypes,
    ) -> AdapterResult<Contact> {
        self.observe(
            "addContactToLists",
            self.inner.add_contact_to_lists(user, contact_id, lists),
        )
        .await
    }

    async fn authenticate(&self, token: &Token) -> AdapterResult<User> {
        self.observe("authenticate", self.inner.authenticate(token)).await
    }

    async fn get_contacts(&self, user: &User) -> AdapterResult<Vec<Contact>> {
        self.observe("getContacts", self.inner.get_contacts(user)).await
    }

    async fn get_groups(&self, user: &User) -> AdapterResult<Vec<Group>> {
        self.observe("getGroups", self.inner.get_groups(user)).await
    }

    async fn remove_contact_from_group(
        &self,
        user: &User,
        contact_id: &str,
        group_id: &str,
    ) -> AdapterResult<Contact> {
        self.observe(
            "removeContactFromGroup",
            self.inner.remove_contact_from_group(user, contact_id, group_id),
        )
        .await
    }

    async fn remove_contact_from_lists(
        &self,
        user: &User,
        contact_id: &str,
        lists: ContactListTypes,
    ) -> AdapterResult<Contact> {
        self.observe(
            "removeContactFromLists",
            self.inner.remove_contact_from_lists(user, contact_id, lists),
        )
        .await
    }

    async fn update_contact_friendly_name(
        &self,
        user: &User,
        contact_id: &str,
        friendly_name: &str,
    ) -> AdapterResult<Contact> {
        self.observe(
            "updateContactFriendlyName",
            self.inner
                .update_contact_friendly_name(user, contact_id, friendly_name),
        )
        .await
    }

    async fn update_phone_numbers(
        &self,
        user: &User,
        phone: PhoneNumbersPatch,
    ) -> AdapterResult<PhoneNumbers> {
        self.observe("updatePhoneNumbers", self.inner.update_phone_numbers(user, phone))
            .await
    }

    async fn update_profile(&self, user: &User, profile: ProfilePatch) -> AdapterResult<Profile> {
        self.observe("updateProfile", self.inner.update_profile(user, profile)).await
    }

    async fn update_settings(
        &self,
        user: &User,
        settings: SettingsPatch,
    ) -> AdapterResult<Settings> {
        self.observe("updateSettings", self.inner.update_settings(user, settings)).await
    }
}
