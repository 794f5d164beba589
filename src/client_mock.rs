use std::sync::{Arc, Mutex};

use crate::classifier::MockTextClassifier;
use crate::client::{CreatedEvent, InsertEventRequest, MockCalendarApi};
use crate::config::{AppConfig, BusinessHours};
use crate::error::ServiceError;
use crate::models::guardrail::{AbuseVerdict, ThreatLevel};
use crate::models::schedule::BusyInterval;

// Configuration fixture used across the test suites
pub fn test_config() -> AppConfig {
    AppConfig {
        business_hours: BusinessHours::new(9, 17).unwrap(),
        timezone: "Asia/Manila".to_string(),
        days_to_check: 7,
        calendar_endpoint: "https://calendar.invalid".to_string(),
        calendar_id: "primary".to_string(),
        calendar_token_path: "token.json".to_string(),
        classifier_endpoint: "https://classifier.invalid".to_string(),
    }
}

// A simple in-memory store for the mock calendar client
pub struct MockCalendarStore {
    busy: Mutex<Vec<BusyInterval>>,
    created: Mutex<Vec<InsertEventRequest>>,
}

impl MockCalendarStore {
    pub fn new(busy: Vec<BusyInterval>) -> Self {
        Self {
            busy: Mutex::new(busy),
            created: Mutex::new(Vec::new()),
        }
    }

    pub fn busy_between(
        &self,
        time_min: chrono::NaiveDateTime,
        time_max: chrono::NaiveDateTime,
    ) -> Vec<BusyInterval> {
        let busy = self.busy.lock().unwrap();
        busy.iter()
            .filter(|interval| interval.end > time_min && interval.start < time_max)
            .cloned()
            .collect()
    }

    pub fn record_event(&self, request: InsertEventRequest) -> usize {
        let mut created = self.created.lock().unwrap();
        created.push(request);
        created.len()
    }

    pub fn created_events(&self) -> Vec<InsertEventRequest> {
        self.created.lock().unwrap().clone()
    }
}

// Helper function to set up a mock calendar with predefined busy intervals
pub fn setup_mock_calendar(busy: Vec<BusyInterval>) -> (MockCalendarApi, Arc<MockCalendarStore>) {
    let data_store = Arc::new(MockCalendarStore::new(busy));
    let data_store_clone = Arc::clone(&data_store);

    let mut mock_calendar = MockCalendarApi::new();

    // Mock list_busy
    let store_ref1 = Arc::clone(&data_store);
    mock_calendar
        .expect_list_busy()
        .returning(move |time_min, time_max| Ok(store_ref1.busy_between(time_min, time_max)));

    // Mock insert_event
    let store_ref2 = Arc::clone(&data_store);
    mock_calendar.expect_insert_event().returning(move |request| {
        let event_number = store_ref2.record_event(request.clone());

        Ok(CreatedEvent {
            id: format!("event_{}", event_number),
            html_link: Some(format!(
                "https://calendar.example.com/event/{}",
                event_number
            )),
            status: Some("confirmed".to_string()),
        })
    });

    (mock_calendar, data_store_clone)
}

// Classifier mock that always returns the given verdict
pub fn verdict_classifier(verdict: AbuseVerdict) -> MockTextClassifier {
    let mut mock_classifier = MockTextClassifier::new();
    mock_classifier
        .expect_classify()
        .returning(move |_| Ok(verdict.clone()));
    mock_classifier
}

// Classifier mock that always fails, for degraded-path tests
pub fn failing_classifier(message: &str) -> MockTextClassifier {
    let message = message.to_string();
    let mut mock_classifier = MockTextClassifier::new();
    mock_classifier
        .expect_classify()
        .returning(move |_| Err(ServiceError::Classification(message.clone())));
    mock_classifier
}

pub fn clean_verdict() -> AbuseVerdict {
    AbuseVerdict {
        is_abuse: false,
        reasoning: "Normal single appointment request".to_string(),
        threat_level: ThreatLevel::None,
        abuse_type: None,
    }
}

pub fn abusive_verdict(threat_level: ThreatLevel) -> AbuseVerdict {
    AbuseVerdict {
        is_abuse: true,
        reasoning: "Requests every available slot for the week".to_string(),
        threat_level,
        abuse_type: Some("slot_hoarding".to_string()),
    }
}
