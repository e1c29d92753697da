//! Fuzz target: arbitrary enroll/withdraw sequences against a seeded registry.
//!
//! Each input byte pair selects an operation, an activity name, and an email.
//! After every operation no roster may list the same email twice.

#![no_main]

use activities_core::Registry;
use libfuzzer_sys::fuzz_target;

const NAMES: [&str; 4] = ["Chess Club", "Basketball", "chess club", ""];
const EMAILS: [&str; 4] = ["michael@mergington.edu", "a@x", "A@x", ""];

fuzz_target!(|data: &[u8]| {
    let Ok(registry) = Registry::seeded() else {
        return;
    };
    for pair in data.chunks_exact(2) {
        let name = NAMES[usize::from(pair[0] & 0b11)];
        let email = EMAILS[usize::from(pair[1] & 0b11)];
        let _ = if pair[0] & 0x80 == 0 {
            registry.enroll(name, email)
        } else {
            registry.withdraw(name, email)
        };
        for activity in registry.list_activities().values() {
            for (i, p) in activity.participants.iter().enumerate() {
                assert!(!activity.participants[..i].contains(p), "duplicate {p}");
            }
        }
    }
});
