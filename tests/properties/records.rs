//! Property tests for record handling across the service and stores.

use proptest::prelude::*;
use serde_json::Value;
use std::collections::BTreeMap;

use enroll::{LogNotifier, LogStore, MemoryStore, Record, RecordReader, RegistrationService};

fn field_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_]{0,11}").unwrap()
}

fn field_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        proptest::string::string_regex("[A-Za-z0-9 .@-]{0,24}")
            .unwrap()
            .prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
    ]
}

fn field_map() -> impl Strategy<Value = BTreeMap<String, Value>> {
    proptest::collection::btree_map(field_name(), field_value(), 0..8)
}

fn record_from(fields: &BTreeMap<String, Value>) -> Record {
    fields.iter().fold(Record::new(), |record, (name, value)| {
        record.with_field(name.clone(), value.clone())
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Whatever the caller passes is exactly what the store holds.
    #[test]
    fn property_saved_record_is_identical_to_input(fields in field_map()) {
        let record = record_from(&fields);
        let service = RegistrationService::new(MemoryStore::new(), LogNotifier::new());

        service.save_user(&record).unwrap();

        let saved = service.store().saved().unwrap();
        prop_assert_eq!(saved, vec![record]);
    }

    /// PROPERTY: The service never mutates its argument.
    #[test]
    fn property_save_user_leaves_the_argument_untouched(fields in field_map()) {
        let record = record_from(&fields);
        let before = record.clone();
        let service = RegistrationService::new(MemoryStore::new(), LogNotifier::new());

        service.save_user(&record).unwrap();

        prop_assert_eq!(record, before);
    }

    /// PROPERTY: The log-backed store accepts any record without error.
    #[test]
    fn property_log_store_never_fails(fields in field_map()) {
        let record = record_from(&fields);
        let service = RegistrationService::new(LogStore::new(), LogNotifier::new());

        prop_assert!(service.save_user(&record).is_ok());
    }

    /// PROPERTY: Repeated saves accumulate in order, one entry per call.
    #[test]
    fn property_each_save_delegates_exactly_once(
        maps in proptest::collection::vec(field_map(), 1..6)
    ) {
        let service = RegistrationService::new(MemoryStore::new(), LogNotifier::new());
        let records: Vec<Record> = maps.iter().map(record_from).collect();

        for record in &records {
            service.save_user(record).unwrap();
        }

        let saved = service.store().saved().unwrap();
        prop_assert_eq!(saved, records);
    }
}
