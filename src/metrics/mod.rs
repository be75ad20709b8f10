use prometheus::{
    Encoder, GaugeVec, IntCounterVec, Opts, Registry, TextEncoder,
    register_gauge_vec_with_registry, register_int_counter_vec_with_registry,
};
use lazy_static::lazy_static;
use std::sync::Arc;

use crate::registry::ActivityRegistry;

/// 未知活动名统一记为该标签，避免标签基数失控
pub const UNKNOWN_ACTIVITY: &str = "unknown";

pub struct MetricsRegistry {
    registry: Registry,

    // Gauge metrics
    pub activity_participants: GaugeVec,
    pub activity_max_participants: GaugeVec,

    // Counter metrics
    pub signups_total: IntCounterVec,
    pub unregistrations_total: IntCounterVec,
}

impl MetricsRegistry {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();

        let activity_participants = register_gauge_vec_with_registry!(
            Opts::new("activity_participants", "Current number of participants"),
            &["activity"],
            registry
        )?;

        let activity_max_participants = register_gauge_vec_with_registry!(
            Opts::new("activity_max_participants", "Configured participant capacity"),
            &["activity"],
            registry
        )?;

        let signups_total = register_int_counter_vec_with_registry!(
            Opts::new("activity_signups_total", "Signup requests by outcome"),
            &["activity", "outcome"],
            registry
        )?;

        let unregistrations_total = register_int_counter_vec_with_registry!(
            Opts::new("activity_unregistrations_total", "Unregister requests by outcome"),
            &["activity", "outcome"],
            registry
        )?;

        Ok(Self {
            registry,
            activity_participants,
            activity_max_participants,
            signups_total,
            unregistrations_total,
        })
    }

    pub fn render(&self) -> Result<String, Box<dyn std::error::Error>> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// 抓取前从注册表刷新 gauge
    pub fn observe_registry(&self, registry: &ActivityRegistry) {
        for activity in registry.list() {
            let labels = &[activity.name.as_str()];
            self.activity_participants
                .with_label_values(labels)
                .set(activity.participants.len() as f64);
            self.activity_max_participants
                .with_label_values(labels)
                .set(f64::from(activity.max_participants));
        }
    }

    pub fn record_signup(&self, activity: &str, outcome: &str) {
        self.signups_total.with_label_values(&[activity, outcome]).inc();
    }

    pub fn record_unregister(&self, activity: &str, outcome: &str) {
        self.unregistrations_total.with_label_values(&[activity, outcome]).inc();
    }
}

lazy_static! {
    pub static ref METRICS: Arc<MetricsRegistry> = Arc::new(
        MetricsRegistry::new().unwrap_or_else(|e| panic!("invalid metric definitions: {}", e))
    );
}
