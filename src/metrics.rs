use actix_web::{HttpResponse, Responder};
use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounterVec, Opts, TextEncoder};

/// Handler that serialises Prometheus metrics in text format.
pub async fn metrics_handler() -> impl Responder {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    match encoder.encode(&metric_families, &mut buffer) {
        Ok(_) => HttpResponse::Ok()
            .content_type(encoder.format_type())
            .body(buffer),
        Err(err) => HttpResponse::InternalServerError().body(err.to_string()),
    }
}

/// Login/register outcomes, labelled by operation and result.
pub static AUTH_ATTEMPTS: Lazy<IntCounterVec> = Lazy::new(|| {
    register_counter_vec(
        "gatherly_auth_attempts_total",
        "Authentication attempts by operation and outcome",
        &["operation", "outcome"],
    )
});

/// Events created through the API.
pub static EVENTS_CREATED: Lazy<IntCounterVec> = Lazy::new(|| {
    register_counter_vec(
        "gatherly_events_created_total",
        "Events created, labelled by outcome",
        &["outcome"],
    )
});

fn register_counter_vec(name: &str, help: &str, labels: &[&str]) -> IntCounterVec {
    let counter = IntCounterVec::new(Opts::new(name, help), labels)
        .expect("metric options are hardcoded and valid");
    // Registration only fails on duplicate names; the Lazy wrapper makes
    // each counter register exactly once.
    if let Err(err) = prometheus::default_registry().register(Box::new(counter.clone())) {
        tracing::warn!(error = %err, metric = name, "metric registration failed");
    }
    counter
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_increment() {
        let before = AUTH_ATTEMPTS.with_label_values(&["login", "success"]).get();
        AUTH_ATTEMPTS.with_label_values(&["login", "success"]).inc();
        let after = AUTH_ATTEMPTS.with_label_values(&["login", "success"]).get();
        assert_eq!(after, before + 1);
    }
}
