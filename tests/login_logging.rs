// Un login rechazado deja una sola línea warn/error en el log.
// Archivo propio: el logger es global al binario de test.

use std::sync::Mutex;

use futures::executor::block_on;
use job_listings_pwa::errors::AuthError;
use job_listings_pwa::models::UserProfile;
use job_listings_pwa::services::{IdentityProvider, ListingCache, MemoryStorage};
use job_listings_pwa::viewmodels::SessionViewModel;
use log::{Level, LevelFilter, Log, Metadata, Record};

static RECORDS: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());

struct CapturingLogger;

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger;

struct RejectingProvider;

impl IdentityProvider for RejectingProvider {
    async fn sign_in(&self) -> Result<UserProfile, AuthError> {
        Err(AuthError::ProviderFailed {
            reason: "user closed the popup".to_string(),
        })
    }
}

fn problems() -> Vec<String> {
    RECORDS
        .lock()
        .unwrap()
        .drain(..)
        .filter(|(level, _)| *level <= Level::Warn)
        .map(|(_, message)| message)
        .collect()
}

#[test]
fn rejected_logins_log_a_single_line_each() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let vm = SessionViewModel::new(ListingCache::new(MemoryStorage::new(), "jobs"), RejectingProvider);

    assert!(block_on(vm.federated_login()).is_err());
    let lines = problems();
    assert_eq!(lines.len(), 1, "{:?}", lines);
    assert!(lines[0].contains("Google login failed"));
    assert!(lines[0].contains("user closed the popup"));

    assert!(block_on(vm.submit_credentials(String::new(), String::new())).is_err());
    let lines = problems();
    assert_eq!(lines.len(), 1, "{:?}", lines);
    assert!(lines[0].contains("Please enter both username and password"));
}
