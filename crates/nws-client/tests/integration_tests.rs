//! Integration tests for nws-client.
//!
//! Most tests run against captured response fixtures and need nothing
//! external. Tests hitting the live weather.gov API are ignored by
//! default.
//!
//! Run all integration tests:
//!   cargo test --test integration_tests
//!
//! Run ignored tests (require network access):
//!   cargo test --test integration_tests -- --ignored

use alert_core::{Aggregator, AlertError, Severity, StatusFilter, StatusType, ZoneList};
use nws_client::{AlertCount, AlertsResponse, NwsClient, NwsConfig};

/// A trimmed capture of a real `/alerts/active?zone=...` response.
const ALERTS_FIXTURE: &str = r#"{
    "@context": ["https://geojson.org/geojson-ld/geojson-context.jsonld"],
    "type": "FeatureCollection",
    "features": [
        {
            "id": "https://api.weather.gov/alerts/urn:oid:2.49.0.1.840.0.1",
            "type": "Feature",
            "geometry": null,
            "properties": {
                "@id": "https://api.weather.gov/alerts/urn:oid:2.49.0.1.840.0.1",
                "@type": "wx:Alert",
                "areaDesc": "San Francisco",
                "sent": "2024-03-01T10:00:00-08:00",
                "status": "Actual",
                "messageType": "Alert",
                "category": "Met",
                "severity": "Severe",
                "certainty": "Likely",
                "urgency": "Expected",
                "event": "Flood Warning",
                "senderName": "NWS San Francisco CA",
                "headline": "Flood Warning issued March 1 at 10:00AM PST",
                "description": "The river will crest this afternoon.",
                "instruction": "Move to higher ground.",
                "response": "Avoid",
                "parameters": {
                    "NWSheadline": ["FLOOD WARNING IN EFFECT UNTIL 4 PM PST"],
                    "VTEC": ["/O.NEW.KMTR.FL.W.0001.000000T0000Z-000000T0000Z/"]
                }
            }
        },
        {
            "id": "https://api.weather.gov/alerts/urn:oid:2.49.0.1.840.0.2",
            "type": "Feature",
            "geometry": null,
            "properties": {
                "status": "Actual",
                "severity": "Minor",
                "event": "Wind Advisory",
                "description": "Gusts to 45 mph expected.",
                "instruction": null,
                "parameters": {}
            }
        },
        {
            "id": "https://api.weather.gov/alerts/urn:oid:2.49.0.1.840.0.3",
            "type": "Feature",
            "geometry": null,
            "properties": {
                "status": "Test",
                "severity": "Extreme",
                "event": "Tornado Warning",
                "description": "THIS IS ONLY A TEST.",
                "parameters": {"NWSheadline": ["TEST TORNADO WARNING"]}
            }
        }
    ],
    "title": "Current watches, warnings, and advisories",
    "updated": "2024-03-01T18:00:00+00:00"
}"#;

/// A trimmed capture of a real `/alerts/active/count` response.
const COUNT_FIXTURE: &str = r#"{
    "@context": {"@version": "1.1"},
    "total": 312,
    "land": 290,
    "marine": 22,
    "regions": {"PR": 4, "WR": 61},
    "areas": {"CA": 14, "WA": 9},
    "zones": {"CAZ006": 2, "CAZ007": 1, "WAZ558": 3}
}"#;

mod fixture_tests {
    use super::*;

    #[test]
    fn test_parse_alerts_capture() {
        let response: AlertsResponse = serde_json::from_str(ALERTS_FIXTURE).unwrap();
        let records = response.into_records();
        assert_eq!(records.len(), 3);

        assert_eq!(records[0].event, "Flood Warning");
        assert_eq!(records[0].severity, Severity::Severe);
        assert_eq!(
            records[0].headline.as_deref(),
            Some("FLOOD WARNING IN EFFECT UNTIL 4 PM PST")
        );
        assert_eq!(records[0].instruction, "Move to higher ground.");

        // Null instruction and empty parameters get defaults.
        assert_eq!(records[1].instruction, "");
        assert!(records[1].headline.is_none());
    }

    #[test]
    fn test_parse_count_capture() {
        let count: AlertCount = serde_json::from_str(COUNT_FIXTURE).unwrap();
        assert_eq!(count.total, 312);
        let ids = count.zone_ids();
        assert_eq!(ids.len(), 3);
        assert!(ids.contains("CAZ006"));
        assert!(ids.contains("WAZ558"));
    }

    #[test]
    fn test_capture_drives_activity_check() {
        let count: AlertCount = serde_json::from_str(COUNT_FIXTURE).unwrap();
        let active = count.zone_ids();

        let watched = ZoneList::parse("CAZ006,ORZ002").unwrap();
        assert!(watched.any_active(&active));

        let unwatched = ZoneList::parse("ILZ014").unwrap();
        assert!(!unwatched.any_active(&active));
    }

    #[test]
    fn test_capture_through_aggregator() {
        let response: AlertsResponse = serde_json::from_str(ALERTS_FIXTURE).unwrap();
        let records = response.into_records();

        let summary = Aggregator::new(StatusFilter::all()).aggregate(&records);
        assert_eq!(summary.severity_level, 4);
        assert_eq!(
            summary.events,
            vec!["Flood Warning", "Wind Advisory", "Tornado Warning"]
        );
        assert_eq!(
            summary.spoken_desc.as_deref(),
            Some("FLOOD WARNING IN EFFECT UNTIL 4 PM PST, a Wind Advisory and a TEST TORNADO WARNING")
        );
        assert_eq!(
            summary.title().as_deref(),
            Some("Flood Warning - Wind Advisory - Tornado Warning")
        );
    }

    #[test]
    fn test_capture_aggregated_actual_only() {
        let response: AlertsResponse = serde_json::from_str(ALERTS_FIXTURE).unwrap();
        let records = response.into_records();

        let summary =
            Aggregator::new(StatusFilter::only([StatusType::Actual])).aggregate(&records);
        // The Test-status tornado warning is filtered out.
        assert_eq!(summary.severity_level, 3);
        assert_eq!(summary.events, vec!["Flood Warning", "Wind Advisory"]);
    }
}

mod client_tests {
    use super::*;

    /// Requests against an unroutable port fail as network errors.
    #[tokio::test]
    async fn test_connect_failure() {
        let config = NwsConfig::new("http://127.0.0.1:59999")
            .with_timeout(std::time::Duration::from_secs(2));
        let client = NwsClient::new(config).unwrap();

        let result = client.alert_count().await;
        assert!(result.is_err());
        match result.unwrap_err() {
            AlertError::Network(_) => {} // Expected
            e => panic!("Unexpected error type: {:?}", e),
        }
    }

    /// Fetch the live nationwide count.
    #[tokio::test]
    #[ignore = "requires network access"]
    async fn test_live_alert_count() {
        let client = NwsClient::new(NwsConfig::default()).unwrap();
        let count = client.alert_count().await.unwrap();
        println!("{} active alerts nationwide", count.total);
    }

    /// Fetch live alerts for a real forecast zone.
    #[tokio::test]
    #[ignore = "requires network access"]
    async fn test_live_active_alerts() {
        let client = NwsClient::new(NwsConfig::default()).unwrap();
        let zones = ZoneList::parse("CAZ006").unwrap();
        let records = client.active_alerts(&zones).await.unwrap();
        println!("{} active alerts for CAZ006", records.len());
        for record in &records {
            println!("  {} ({})", record.event, record.severity);
        }
    }
}
